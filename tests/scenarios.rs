//! End-to-end gameplay scenarios
//!
//! Drives the public API the way the browser does: frames, key events and
//! spawner timers interleaved on one thread.

use orbit_dodge::headless::{FRAME_MS, HeadlessRun};
use orbit_dodge::renderer::{RecordingSurface, colors, draw_frame};
use orbit_dodge::sim::{GamePhase, InputEvent, InputOutcome, Key};
use orbit_dodge::{Game, Tuning};

fn new_game() -> Game {
    Game::new(800.0, 800.0, Tuning::default(), 7)
}

#[test]
fn six_traffic_ticks_leave_five_units() {
    let mut game = new_game();
    for _ in 0..6 {
        game.spawn_traffic();
    }
    assert_eq!(game.state().traffic.len(), 5);
}

#[test]
fn expired_bonus_is_not_drawn() {
    let mut game = new_game();
    assert!(game.refresh_bonus(1_000.0));
    let mut surface = RecordingSurface::new();

    // 2.5 s later, never collected
    draw_frame(&mut surface, game.state(), 3_500.0);

    assert!(game.state().bonus.is_some());
    assert!(
        surface
            .filled_circles()
            .iter()
            .all(|c| c.color != colors::BONUS)
    );
}

#[test]
fn live_bonus_is_drawn() {
    let mut game = new_game();
    game.refresh_bonus(1_000.0);
    let mut surface = RecordingSurface::new();

    draw_frame(&mut surface, game.state(), 2_000.0);

    let bonus = surface
        .filled_circles()
        .into_iter()
        .find(|c| c.color == colors::BONUS)
        .expect("bonus drawn");
    assert_eq!(bonus.radius, 20.0);
}

#[test]
fn player_on_top_of_traffic_ends_the_game() {
    let mut game = new_game();
    game.spawn_traffic();
    {
        let state = game.state_mut();
        state.traffic_track = state.player_track;
        state.traffic_speed = 0.0;
        state.traffic[0].angle = state.player.angle;
    }
    let mut surface = RecordingSurface::new();

    let outcome = game.frame(&mut surface, 0.0);

    assert_eq!(game.state().phase, GamePhase::GameOver);
    assert_eq!(outcome, orbit_dodge::FrameOutcome::Halt);
    assert_eq!(surface.texts()[0], "Game Over");
}

#[test]
fn use_bonus_clears_three_units() {
    let mut game = new_game();
    for _ in 0..3 {
        game.spawn_traffic();
    }
    game.state_mut().bonus_held = true;

    let outcome = game.input(InputEvent::Down(Key::UseBonus));

    assert_eq!(outcome, InputOutcome::Handled);
    assert!(game.state().traffic.is_empty());
    assert!(!game.state().bonus_held);
    assert_eq!(game.state().phase, GamePhase::Playing);
}

#[test]
fn pause_stops_scoring_until_resumed() {
    let mut run = HeadlessRun::new(Tuning::default(), 3);
    for _ in 0..10 {
        run.step();
    }
    let score = run.game().state().score;
    assert_eq!(score, 10);

    assert_eq!(
        run.send(InputEvent::Down(Key::Pause)),
        InputOutcome::Handled
    );
    for _ in 0..120 {
        run.step();
    }
    assert_eq!(run.game().state().score, score);
    assert_eq!(run.surface().texts().last().map(String::as_str), Some("Press P to Resume"));

    // Resuming runs a frame immediately and restarts the loop
    assert_eq!(
        run.send(InputEvent::Down(Key::Pause)),
        InputOutcome::ResumeLoop
    );
    assert_eq!(run.game().state().score, score + 1);
    run.step();
    assert_eq!(run.game().state().score, score + 2);
}

#[test]
fn spawners_keep_running_while_paused() {
    let mut run = HeadlessRun::new(Tuning::default(), 3);
    run.step();
    let _ = run.send(InputEvent::Down(Key::Pause));

    // 10 s of paused time covers three traffic ticks and one bonus refresh
    let steps = (10_000.0 / FRAME_MS).ceil() as usize;
    for _ in 0..steps {
        run.step();
    }

    assert_eq!(run.game().state().phase, GamePhase::Paused);
    assert_eq!(run.game().state().traffic.len(), 3);
    assert!(run.game().state().bonus.is_some());
    assert_eq!(run.game().state().score, 1);
}

#[test]
fn restart_after_game_over_resets_everything() {
    let mut run = HeadlessRun::new(Tuning::default(), 11);
    let summary = run.run(60 * 60 * 30);
    assert!(summary.game_over, "traffic should eventually hit the player");
    assert!(summary.score > 0);

    let outcome = run.send(InputEvent::Down(Key::Restart));
    assert_eq!(outcome, InputOutcome::ResumeLoop);

    let state = run.game().state();
    assert_eq!(state.phase, GamePhase::Playing);
    // The restarted loop has already run one frame
    assert_eq!(state.score, 1);
    assert!(state.traffic.is_empty());
    assert!(!state.bonus_held);
    assert!(state.bonus.is_none());
    assert!((state.player.angle - state.player.speed).abs() < 1e-7);
    assert!(
        (state.traffic_speed - (state.tuning.traffic_base_speed + state.tuning.traffic_speed_ramp))
            .abs()
            < 1e-9
    );
}

#[test]
fn boost_is_harmless_outside_play() {
    let mut game = new_game();
    game.state_mut().phase = GamePhase::GameOver;
    let _ = game.input(InputEvent::Down(Key::Boost));
    assert!(game.state().player.boosting);
    let mut surface = RecordingSurface::new();
    let _ = game.frame(&mut surface, 0.0);
    assert_eq!(game.state().player.angle, 0.0);
    assert_eq!(game.state().phase, GamePhase::GameOver);
}
