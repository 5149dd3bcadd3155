//! Shape helpers composed from [`Surface`] primitives

use std::f64::consts::TAU;

use glam::Vec2;

use super::Surface;
use crate::consts::FADE_STYLE;

/// Filled disc of `radius` at `center`
pub fn filled_disc(surface: &mut dyn Surface, center: Vec2, radius: f32, color: &str) {
    surface.begin_path();
    surface.set_fill_style(color);
    surface.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
    surface.fill();
}

/// Outline-only circle of `radius` at `center`
pub fn stroked_ring(
    surface: &mut dyn Surface,
    center: Vec2,
    radius: f32,
    color: &str,
    line_width: f32,
) {
    surface.begin_path();
    surface.set_stroke_style(color);
    surface.set_line_width(line_width as f64);
    surface.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
    surface.stroke();
}

/// Paint the translucent trail rectangle over the whole arena
pub fn fade(surface: &mut dyn Surface, width: f32, height: f32) {
    surface.set_fill_style(FADE_STYLE);
    surface.fill_rect(0.0, 0.0, width as f64, height as f64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};

    #[test]
    fn test_disc_sets_style_before_fill() {
        let mut surface = RecordingSurface::default();
        filled_disc(&mut surface, Vec2::new(5.0, 6.0), 4.0, "rgb(1,2,3)");

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::BeginPath,
                DrawCommand::FillStyle("rgb(1,2,3)".to_string()),
                DrawCommand::Arc {
                    x: 5.0,
                    y: 6.0,
                    radius: 4.0
                },
                DrawCommand::Fill,
            ]
        );
    }

    #[test]
    fn test_ring_is_stroked() {
        let mut surface = RecordingSurface::default();
        stroked_ring(&mut surface, Vec2::new(1.0, 1.0), 10.0, "white", 3.0);

        assert!(surface.commands.contains(&DrawCommand::LineWidth(3.0)));
        assert_eq!(surface.commands.last(), Some(&DrawCommand::Stroke));
        assert!(!surface.commands.contains(&DrawCommand::Fill));
    }

    #[test]
    fn test_fade_covers_arena() {
        let mut surface = RecordingSurface::default();
        fade(&mut surface, 640.0, 480.0);

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::FillStyle(FADE_STYLE.to_string()),
                DrawCommand::FillRect {
                    width: 640.0,
                    height: 480.0
                },
            ]
        );
    }
}
