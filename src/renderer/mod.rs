//! Drawing surface abstraction
//!
//! The simulation draws through [`Surface`], a minimal slice of the 2D canvas API.
//! On the web it is backed by `CanvasRenderingContext2d`; tests and the native
//! runner use [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::{fade, filled_disc, stroked_ring};

/// 2D drawing primitives required by the simulation.
///
/// Fill and stroke styles are shared state on the surface, so callers set them
/// before every shape they draw.
pub trait Surface {
    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    /// Add an arc centered at `(x, y)` to the current path
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}
