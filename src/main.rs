//! Orbit Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use orbit_dodge::platform::event_from_code;
    use orbit_dodge::renderer::CanvasSurface;
    use orbit_dodge::sim::InputOutcome;
    use orbit_dodge::{FrameOutcome, Game, Tuning, play_area_extent};

    /// Everything the browser callbacks share
    struct App {
        game: Game,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Orbit Dodge starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        body.append_child(&canvas)?;

        let width = play_area_extent(window.inner_width()?.as_f64().unwrap_or(0.0) as f32);
        let height = play_area_extent(window.inner_height()?.as_f64().unwrap_or(0.0) as f32);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(width, height, Tuning::default(), seed),
            surface: CanvasSurface::new(ctx),
        }));

        setup_input_handlers(&window, app.clone())?;
        setup_spawners(&window, app.clone())?;

        // Start game loop
        let claimed = app.borrow_mut().game.claim_frame();
        if claimed {
            run_frame(app);
        }

        log::info!("Orbit Dodge running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        for (kind, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(input) = event_from_code(&event.code(), pressed) else {
                    return;
                };
                event.prevent_default();

                let resume = {
                    let mut a = app.borrow_mut();
                    a.game.input(input) == InputOutcome::ResumeLoop && a.game.claim_frame()
                };
                // Resuming re-enters the loop right away
                if resume {
                    run_frame(app.clone());
                }
            });
            window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_spawners(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let (traffic_ms, bonus_ms) = {
            let a = app.borrow();
            let tuning = a.game.tuning();
            (
                tuning.traffic_spawn_period_ms as i32,
                tuning.bonus_refresh_period_ms as i32,
            )
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                app.borrow_mut().game.spawn_traffic();
            });
            window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                traffic_ms,
            )?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut()>::new(move || {
                app.borrow_mut().game.refresh_bonus(js_sys::Date::now());
            });
            window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                bonus_ms,
            )?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            run_frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Update + draw one frame; reschedule only while playing
    fn run_frame(app: Rc<RefCell<App>>) {
        let reschedule = {
            let mut a = app.borrow_mut();
            let App { game, surface } = &mut *a;
            game.frame(surface, js_sys::Date::now()) == FrameOutcome::Continue
                && game.claim_frame()
        };
        if reschedule {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use orbit_dodge::Tuning;
    use orbit_dodge::headless::HeadlessRun;

    /// Ten simulated minutes at 60 Hz
    const MAX_REFRESHES: u64 = 60 * 60 * 10;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Orbit Dodge (native) starting...");
    log::info!("Native mode runs a headless session - build for wasm32 to play in the browser");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::from_file(&path)
            .with_context(|| format!("loading tuning from {path}"))?,
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("system clock before 1970")?
        .as_millis() as u64;

    let mut run = HeadlessRun::new(tuning, seed);
    let summary = run.run(MAX_REFRESHES);

    log::info!(
        "Headless run finished after {:.1}s simulated: score {}, game over: {}",
        summary.elapsed_ms / 1000.0,
        summary.score,
        summary.game_over
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
