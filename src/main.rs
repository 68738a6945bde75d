//! Headless demo: kick the ball, step the simulation until everything
//! settles, then dump a JSON snapshot of the final body states.

use glam::Vec2;
use pitch_physics::sim::{SimState, aim_velocity, tick};
use pitch_physics::tuning::Tuning;

fn main() {
    env_logger::init();
    log::info!("pitch-physics headless demo starting");

    let tuning = Tuning::default();
    let mut state = SimState::new(&tuning).expect("default tuning is valid");

    // Simulate a drag gesture on the ball: press on it, release down-left
    let ball = state.ball_position().expect("fresh round has a ball");
    let shot = aim_velocity(ball, ball + Vec2::new(-80.0, -30.0), &tuning);
    state
        .set_velocity(0, shot, &tuning)
        .expect("ball index valid after reset");
    log::info!("shot applied: ({:.2}, {:.2}) px/tick", shot.x, shot.y);

    let mut ticks = 0u64;
    while !state.all_stopped(&tuning) && ticks < 10_000 {
        tick(&mut state, &tuning);
        ticks += 1;
        if let Some(team) = state.goal_scored() {
            log::info!("{team:?} scored at tick {ticks}");
            break;
        }
    }

    let ball = state.ball_position().expect("ball persists across ticks");
    log::info!(
        "settled after {} ticks, ball at ({:.1}, {:.1})",
        ticks,
        ball.x,
        ball.y
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}
