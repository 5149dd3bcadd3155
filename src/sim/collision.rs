//! Circle overlap tests
//!
//! Both tests are inclusive: circles that exactly touch count as colliding.

use glam::Vec2;

use crate::distance;

/// Two balls collide when their centers are no further apart than the sum of their radii
#[inline]
pub fn circles_touch(a_pos: Vec2, a_size: f32, b_pos: Vec2, b_size: f32) -> bool {
    distance(a_pos, b_pos) <= a_size + b_size
}

/// The evil circle reaches a ball when it touches it, counting its outline width as extra reach
#[inline]
pub fn within_reach(
    eater_pos: Vec2,
    eater_size: f32,
    line_width: f32,
    target_pos: Vec2,
    target_size: f32,
) -> bool {
    distance(eater_pos, target_pos) <= eater_size + target_size + line_width
}
