//! Simulation state owned by the frame driver

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::evil_circle::EvilCircle;
use super::shape::Arena;
use crate::consts::NUMBER_OF_BALLS;
use crate::input::KeyDirection;

/// Something the host should react to (counter display, control binding)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    BallSpawned,
    BallEaten { index: usize },
    /// Emitted once, on the frame that creates the evil circle
    EvilCircleSpawned,
}

/// Everything one running simulation owns
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the RNG was created from (logged for reproducibility)
    pub seed: u64,
    pub rng: Pcg32,
    pub arena: Arena,
    /// Append-only; eaten balls stay in place with `exists == false`
    pub balls: Vec<Ball>,
    /// Created lazily on the first frame, then kept forever
    pub evil_circle: Option<EvilCircle>,
    /// Frames simulated so far
    pub frame: u64,
}

impl SimState {
    pub fn new(seed: u64, arena: Arena) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            balls: Vec::with_capacity(NUMBER_OF_BALLS),
            evil_circle: None,
            frame: 0,
        }
    }

    /// Balls still in play
    pub fn active_count(&self) -> usize {
        self.balls.iter().filter(|b| b.body.exists).count()
    }

    /// Append random balls until the collection holds `NUMBER_OF_BALLS`
    pub fn top_up_balls(&mut self, events: &mut Vec<SimEvent>) {
        while self.balls.len() < NUMBER_OF_BALLS {
            let ball = Ball::random(&mut self.rng, self.arena);
            log::debug!(
                "Spawned ball {} at ({}, {}) size {}",
                self.balls.len(),
                ball.body.pos.x,
                ball.body.pos.y,
                ball.size
            );
            events.push(SimEvent::BallSpawned);
            self.balls.push(ball);
        }
    }

    /// Create the evil circle if there is none yet. Returns true when it was created.
    pub fn ensure_evil_circle(&mut self) -> bool {
        if self.evil_circle.is_some() {
            return false;
        }
        let evil = EvilCircle::random(&mut self.rng, self.arena);
        log::info!(
            "Evil circle appeared at ({}, {})",
            evil.body.pos.x,
            evil.body.pos.y
        );
        self.evil_circle = Some(evil);
        true
    }

    /// Apply one arrow-key press. Ignored until the evil circle exists.
    pub fn handle_key(&mut self, direction: KeyDirection) -> bool {
        let arena = self.arena;
        match self.evil_circle.as_mut() {
            Some(evil) => {
                evil.steer(direction, arena);
                true
            }
            None => false,
        }
    }
}
