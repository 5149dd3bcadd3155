//! The player-controlled evil circle

use glam::Vec2;
use rand::Rng;

use super::ball::Ball;
use super::collision::within_reach;
use super::shape::{Arena, Body, Shape};
use crate::consts::*;
use crate::input::KeyDirection;
use crate::random_int;
use crate::renderer::{Surface, stroked_ring};

/// Outlined ring that eats balls. Moves only in discrete keyboard steps.
#[derive(Debug, Clone, PartialEq)]
pub struct EvilCircle {
    /// `vel` holds the per-keypress step, not a continuous velocity
    pub body: Body,
    pub size: f32,
    pub color: &'static str,
}

impl EvilCircle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(
                pos,
                Vec2::new(EVIL_CIRCLE_HORIZONTAL_SPEED, EVIL_CIRCLE_VERTICAL_SPEED),
            ),
            size: EVIL_CIRCLE_SIZE,
            color: EVIL_CIRCLE_COLOR,
        }
    }

    /// Place a new evil circle anywhere in the arena
    pub fn random<R: Rng + ?Sized>(rng: &mut R, arena: Arena) -> Self {
        let x = random_int(rng, 0, arena.width as i32);
        let y = random_int(rng, 0, arena.height as i32);
        Self::new(Vec2::new(x as f32, y as f32))
    }

    /// Clamp back inside the arena; the circle never bounces
    pub fn update(&mut self, arena: Arena) {
        let contact = self.check_bounds(arena);
        if contact.hits_left_wall {
            log::debug!("Evil circle hit left wall");
            self.body.pos.x = self.size;
        }
        if contact.hits_right_wall {
            log::debug!("Evil circle hit right wall");
            self.body.pos.x = arena.width - self.size;
        }
        if contact.hits_top_wall {
            log::debug!("Evil circle hit top wall");
            self.body.pos.y = self.size;
        }
        if contact.hits_bottom_wall {
            log::debug!("Evil circle hit bottom wall");
            self.body.pos.y = arena.height - self.size;
        }
    }

    /// Step one keypress in `direction`, then clamp
    pub fn steer(&mut self, direction: KeyDirection, arena: Arena) {
        let step = self.body.vel;
        match direction {
            KeyDirection::Left => self.body.pos.x -= step.x,
            KeyDirection::Up => self.body.pos.y -= step.y,
            KeyDirection::Right => self.body.pos.x += step.x,
            KeyDirection::Down => self.body.pos.y += step.y,
        }
        self.update(arena);
    }

    /// Remove every existing ball within reach. Returns the indices eaten.
    pub fn collision_detect(&self, balls: &mut [Ball]) -> Vec<usize> {
        let mut eaten = Vec::new();
        for (i, ball) in balls.iter_mut().enumerate() {
            if !ball.exists() {
                continue;
            }
            if within_reach(
                self.pos(),
                self.size,
                EVIL_CIRCLE_LINE_WIDTH,
                ball.pos(),
                ball.size,
            ) {
                ball.body.exists = false;
                eaten.push(i);
            }
        }
        eaten
    }
}

impl Shape for EvilCircle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn draw(&self, surface: &mut dyn Surface) {
        stroked_ring(
            surface,
            self.body.pos,
            self.size,
            self.color,
            EVIL_CIRCLE_LINE_WIDTH,
        );
    }
}
