//! One animation frame
//!
//! Order within a frame:
//! 1. fade the canvas
//! 2. top up the ball collection
//! 3. draw then update every existing ball
//! 4. create the evil circle if missing
//! 5. evil circle eats, then draws
//!
//! Scheduling the next frame is the host's job.

use super::ball::Ball;
use super::shape::Shape;
use super::state::{SimEvent, SimState};
use crate::renderer::{Surface, fade};

/// Advance the simulation by one frame, drawing as it goes
pub fn tick(state: &mut SimState, surface: &mut dyn Surface) -> Vec<SimEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    fade(surface, state.arena.width, state.arena.height);

    state.top_up_balls(&mut events);

    for i in 0..state.balls.len() {
        if !state.balls[i].exists() {
            continue;
        }
        state.balls[i].draw(surface);
        Ball::update(&mut state.balls, i, state.arena, &mut state.rng);
    }

    if state.ensure_evil_circle() {
        events.push(SimEvent::EvilCircleSpawned);
    }

    if let Some(evil) = &state.evil_circle {
        for index in evil.collision_detect(&mut state.balls) {
            log::info!("Evil circle ate ball {} on frame {}", index, state.frame);
            events.push(SimEvent::BallEaten { index });
        }
        evil.draw(surface);
    }

    events
}
