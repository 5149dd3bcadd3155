//! Shared entity contract: position, velocity, existence and wall classification

use glam::Vec2;

use crate::renderer::Surface;

/// Fixed arena dimensions (canvas logical size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Which walls a circle currently touches or crosses.
///
/// Flags are independent; a circle in a corner reports two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub hits_left_wall: bool,
    pub hits_right_wall: bool,
    pub hits_top_wall: bool,
    pub hits_bottom_wall: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.hits_left_wall || self.hits_right_wall || self.hits_top_wall || self.hits_bottom_wall
    }
}

/// Classify wall contact for a circle of radius `size` at `pos` (edges inclusive)
#[inline]
pub fn check_bounds(pos: Vec2, size: f32, arena: Arena) -> WallContact {
    WallContact {
        hits_left_wall: pos.x - size <= 0.0,
        hits_right_wall: pos.x + size >= arena.width,
        hits_top_wall: pos.y - size <= 0.0,
        hits_bottom_wall: pos.y + size >= arena.height,
    }
}

/// Kinematic state common to every entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Soft-delete flag; a ball never comes back once cleared
    pub exists: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            exists: true,
        }
    }
}

/// Behavior shared by balls and the evil circle
pub trait Shape {
    fn body(&self) -> &Body;
    fn size(&self) -> f32;
    fn draw(&self, surface: &mut dyn Surface);

    fn pos(&self) -> Vec2 {
        self.body().pos
    }

    fn exists(&self) -> bool {
        self.body().exists
    }

    fn check_bounds(&self, arena: Arena) -> WallContact {
        check_bounds(self.body().pos, self.size(), arena)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ARENA: Arena = Arena::new(200.0, 100.0);

    #[test]
    fn test_left_wall_edge_inclusive() {
        let r = 10.0;
        assert!(check_bounds(Vec2::new(r, 50.0), r, ARENA).hits_left_wall);
        assert!(check_bounds(Vec2::new(r - 1.0, 50.0), r, ARENA).hits_left_wall);
        assert!(!check_bounds(Vec2::new(r + 1.0, 50.0), r, ARENA).hits_left_wall);
    }

    #[test]
    fn test_right_wall_edge_inclusive() {
        let r = 10.0;
        assert!(check_bounds(Vec2::new(200.0 - r, 50.0), r, ARENA).hits_right_wall);
        assert!(!check_bounds(Vec2::new(200.0 - r - 1.0, 50.0), r, ARENA).hits_right_wall);
    }

    #[test]
    fn test_top_wall_edge_inclusive() {
        let r = 10.0;
        assert!(check_bounds(Vec2::new(100.0, r), r, ARENA).hits_top_wall);
        assert!(!check_bounds(Vec2::new(100.0, r + 1.0), r, ARENA).hits_top_wall);
    }

    #[test]
    fn test_bottom_wall_edge_inclusive() {
        let r = 10.0;
        assert!(check_bounds(Vec2::new(100.0, 100.0 - r), r, ARENA).hits_bottom_wall);
        assert!(!check_bounds(Vec2::new(100.0, 100.0 - r - 1.0), r, ARENA).hits_bottom_wall);
    }

    #[test]
    fn test_corner_reports_two_walls() {
        let contact = check_bounds(Vec2::new(5.0, 95.0), 10.0, ARENA);
        assert!(contact.hits_left_wall && contact.hits_bottom_wall);
        assert!(!contact.hits_right_wall && !contact.hits_top_wall);
    }

    proptest! {
        #[test]
        fn prop_interior_touches_nothing(
            x in 11.0f32..189.0,
            y in 11.0f32..89.0,
        ) {
            prop_assert!(!check_bounds(Vec2::new(x, y), 10.0, ARENA).any());
        }

        #[test]
        fn prop_flags_match_definition(
            x in -50.0f32..250.0,
            y in -50.0f32..150.0,
            size in 0.0f32..40.0,
        ) {
            let c = check_bounds(Vec2::new(x, y), size, ARENA);
            prop_assert_eq!(c.hits_left_wall, x - size <= 0.0);
            prop_assert_eq!(c.hits_right_wall, x + size >= ARENA.width);
            prop_assert_eq!(c.hits_top_wall, y - size <= 0.0);
            prop_assert_eq!(c.hits_bottom_wall, y + size >= ARENA.height);
        }
    }
}
