//! Frame simulation module
//!
//! Entities, collisions and the per-frame loop. Deterministic for a given seed
//! and key sequence; drawing goes through the `Surface` trait only.

pub mod ball;
pub mod collision;
pub mod evil_circle;
pub mod shape;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{circles_touch, within_reach};
pub use evil_circle::EvilCircle;
pub use shape::{Arena, Body, Shape, WallContact, check_bounds};
pub use state::{SimEvent, SimState};
pub use tick::tick;
