//! Bouncing balls

use glam::Vec2;
use rand::Rng;

use super::collision::circles_touch;
use super::shape::{Arena, Body, Shape};
use crate::consts::*;
use crate::renderer::{Surface, filled_disc};
use crate::{Rgb, random_color, random_int};

/// A colored ball that bounces off walls and other balls
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub body: Body,
    pub color: Rgb,
    /// Radius
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, color: Rgb, size: f32) -> Self {
        Self {
            body: Body::new(pos, vel),
            color,
            size,
        }
    }

    /// Spawn a ball with random position, velocity, color and size
    pub fn random<R: Rng + ?Sized>(rng: &mut R, arena: Arena) -> Self {
        let x = random_int(rng, BALL_SPAWN_MIN, arena.width as i32);
        let y = random_int(rng, BALL_SPAWN_MIN, arena.height as i32);
        let vel_x = random_int(rng, BALL_VEL_MIN, BALL_VEL_MAX);
        let vel_y = random_int(rng, BALL_VEL_MIN, BALL_VEL_MAX);
        let color = random_color(rng);
        let size = random_int(rng, BALL_SIZE_MIN, BALL_SIZE_MAX);

        Self::new(
            Vec2::new(x as f32, y as f32),
            Vec2::new(vel_x as f32, vel_y as f32),
            color,
            size as f32,
        )
    }

    /// Negate both velocity components
    #[inline]
    pub fn reverse(&mut self) {
        self.body.vel = -self.body.vel;
    }

    /// Collide the ball at `index` against every other existing ball.
    ///
    /// Each hit reverses both balls and recolors the other one. Hits compose by
    /// repeated negation, so touching two balls in the same frame cancels out.
    pub fn collision_detect<R: Rng + ?Sized>(balls: &mut [Ball], index: usize, rng: &mut R) {
        for other in 0..balls.len() {
            if other == index {
                continue;
            }
            if !balls[index].body.exists || !balls[other].body.exists {
                continue;
            }

            let (a, b) = (&balls[index], &balls[other]);
            if circles_touch(a.body.pos, a.size, b.body.pos, b.size) {
                balls[index].reverse();
                balls[other].reverse();
                balls[other].color = random_color(rng);
            }
        }
    }

    /// Flip velocity on wall contact, then integrate position
    pub fn bounce_and_move(&mut self, arena: Arena) {
        let contact = self.check_bounds(arena);
        if contact.hits_left_wall || contact.hits_right_wall {
            self.body.vel.x = -self.body.vel.x;
        }
        if contact.hits_top_wall || contact.hits_bottom_wall {
            self.body.vel.y = -self.body.vel.y;
        }
        self.body.pos += self.body.vel;
    }

    /// Full per-frame update: ball collisions, then walls, then movement
    pub fn update<R: Rng + ?Sized>(balls: &mut [Ball], index: usize, arena: Arena, rng: &mut R) {
        Self::collision_detect(balls, index, rng);
        balls[index].bounce_and_move(arena);
    }
}

impl Shape for Ball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn draw(&self, surface: &mut dyn Surface) {
        filled_disc(surface, self.body.pos, self.size, &self.color.css());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const ARENA: Arena = Arena::new(400.0, 300.0);

    fn ball(x: f32, y: f32, vx: f32, vy: f32, size: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), Rgb::new(1, 2, 3), size)
    }

    #[test]
    fn test_random_ball_ranges() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..500 {
            let b = Ball::random(&mut rng, ARENA);
            assert!(b.body.exists);
            assert!((20.0..400.0).contains(&b.body.pos.x));
            assert!((20.0..300.0).contains(&b.body.pos.y));
            assert!((-7.0..7.0).contains(&b.body.vel.x));
            assert!((-7.0..7.0).contains(&b.body.vel.y));
            assert!((10.0..20.0).contains(&b.size));
            assert_eq!(b.size.fract(), 0.0);
        }
    }

    #[test]
    fn test_touching_pair_reverses_and_recolors_other() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut balls = vec![
            ball(100.0, 50.0, 2.0, -3.0, 10.0),
            ball(125.0, 50.0, -4.0, 5.0, 15.0),
        ];
        let before = balls[1].color;

        Ball::collision_detect(&mut balls, 0, &mut rng);

        assert_eq!(balls[0].body.vel, Vec2::new(-2.0, 3.0));
        assert_eq!(balls[1].body.vel, Vec2::new(4.0, -5.0));
        assert_eq!(balls[0].color, Rgb::new(1, 2, 3));
        assert_ne!(balls[1].color, before);
    }

    #[test]
    fn test_near_miss_has_no_effect() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut balls = vec![
            ball(100.0, 50.0, 2.0, -3.0, 10.0),
            ball(125.01, 50.0, -4.0, 5.0, 15.0),
        ];
        let before = balls.clone();

        Ball::collision_detect(&mut balls, 0, &mut rng);

        assert_eq!(balls, before);
    }

    #[test]
    fn test_two_contacts_cancel_out() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut balls = vec![
            ball(100.0, 100.0, 1.0, 1.0, 10.0),
            ball(115.0, 100.0, 0.0, 0.0, 10.0),
            ball(85.0, 100.0, 0.0, 0.0, 10.0),
        ];

        Ball::collision_detect(&mut balls, 0, &mut rng);

        assert_eq!(balls[0].body.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_removed_balls_are_ignored() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut balls = vec![
            ball(100.0, 50.0, 2.0, -3.0, 10.0),
            ball(110.0, 50.0, -4.0, 5.0, 15.0),
        ];
        balls[1].body.exists = false;

        Ball::collision_detect(&mut balls, 0, &mut rng);

        assert_eq!(balls[0].body.vel, Vec2::new(2.0, -3.0));
        assert_eq!(balls[1].body.vel, Vec2::new(-4.0, 5.0));
    }

    #[test]
    fn test_bounce_off_right_wall_timing() {
        // Right edge starts 2 units from the wall, moving right at 3/frame
        let size = 10.0;
        let start_x = ARENA.width - size - 2.0;
        let mut balls = vec![ball(start_x, 150.0, 3.0, 0.0, size)];
        let mut rng = Pcg32::seed_from_u64(0);

        // Frame 1: no contact yet, moves into the wall
        Ball::update(&mut balls, 0, ARENA, &mut rng);
        assert_eq!(balls[0].body.vel.x, 3.0);
        assert_eq!(balls[0].body.pos.x, start_x + 3.0);

        // Frame 2: contact detected, sign flips before moving
        Ball::update(&mut balls, 0, ARENA, &mut rng);
        assert_eq!(balls[0].body.vel.x, -3.0);
        assert_eq!(balls[0].body.pos.x, start_x);

        // Afterwards it keeps heading left
        for n in 1..=5 {
            Ball::update(&mut balls, 0, ARENA, &mut rng);
            assert_eq!(balls[0].body.pos.x, start_x - 3.0 * n as f32);
            assert_eq!(balls[0].body.vel.x, -3.0);
        }
    }

    #[test]
    fn test_free_flight_is_linear() {
        let mut balls = vec![ball(100.0, 100.0, 2.0, -1.0, 10.0)];
        let mut rng = Pcg32::seed_from_u64(0);
        for _ in 0..20 {
            Ball::update(&mut balls, 0, ARENA, &mut rng);
        }
        assert_eq!(balls[0].body.pos, Vec2::new(140.0, 80.0));
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let mut b = ball(5.0, 5.0, -2.0, -2.0, 10.0);
        b.bounce_and_move(ARENA);
        assert_eq!(b.body.vel, Vec2::new(2.0, 2.0));
        assert_eq!(b.body.pos, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_shape_accessors() {
        let mut b = ball(12.0, 34.0, 0.0, 0.0, 10.0);
        assert_eq!(b.pos(), Vec2::new(12.0, 34.0));
        assert!(b.exists());
        b.body.exists = false;
        assert!(!b.exists());
    }

    #[test]
    fn test_draw_uses_ball_color() {
        let mut surface = crate::renderer::RecordingSurface::default();
        ball(10.0, 20.0, 0.0, 0.0, 12.0).draw(&mut surface);
        assert!(
            surface
                .commands
                .contains(&crate::renderer::DrawCommand::FillStyle("rgb(1,2,3)".to_string()))
        );
    }
}
