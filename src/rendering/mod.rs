use macroquad::prelude::*;

use crate::application::Viewport;
use crate::domain::{Coordinate, HexGrid};

mod sprite;

pub use sprite::SpriteSheet;

const LINE_THICKNESS: f32 = 1.0;
const HUD_TEXT_SIZE: f32 = 16.0;

/// The six corners of a hexagon around a center point, at 60-degree
/// increments starting from angle 0 (straight right of the center).
pub fn hex_vertices(center: Coordinate, radius: f32) -> [Coordinate; 6] {
    let mut vertices = [Coordinate::ZERO; 6];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let angle = i as f32 * std::f32::consts::FRAC_PI_3;
        *vertex = Coordinate::new(
            center.left + radius * angle.cos(),
            center.top + radius * angle.sin(),
        );
    }
    vertices
}

/// Draw every cell of the board through the viewport transform.
///
/// Cells are stroked in generation order; the layout guarantees no
/// overlap, so no z-sorting happens. Cells whose bounding circle falls
/// outside the surface are skipped.
pub fn draw_board(grid: &HexGrid, viewport: &Viewport, sprites: Option<&SpriteSheet>) {
    let radius = grid.hex_radius() * viewport.zoom_level;
    let (surface_width, surface_height) = (screen_width(), screen_height());

    let line_color = Color::from_rgba(200, 200, 200, 255);

    for cell in grid.cells() {
        let screen = viewport.world_to_screen(cell.center);

        if screen.left + radius < 0.0
            || screen.left - radius > surface_width
            || screen.top + radius < 0.0
            || screen.top - radius > surface_height
        {
            continue;
        }

        let vertices = hex_vertices(screen, radius);
        for (i, a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            draw_line(a.left, a.top, b.left, b.top, LINE_THICKNESS, line_color);
        }

        if let Some(sheet) = sprites {
            sheet.draw_tile((0, 0), screen, viewport.zoom_level);
        }
    }
}

/// Draw the corner overlay: zoom factor, cell count, FPS, control hints
pub fn draw_hud(grid: &HexGrid, viewport: &Viewport) {
    let hud_color = Color::from_rgba(180, 180, 180, 255);

    let labels = [
        (format!("Zoom: {:.2}x", viewport.zoom_level), 20.0),
        (format!("Cells: {}", grid.len()), 38.0),
        (format!("FPS: {}", get_fps()), 56.0),
        ("Drag: Pan | Wheel: Zoom | H: Home".to_owned(), 74.0),
    ];

    for (text, y) in &labels {
        draw_text(text, 12.0, *y, HUD_TEXT_SIZE, hud_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_vertices_sit_on_the_radius() {
        let center = Coordinate::new(100.0, 50.0);
        let radius = 64.0;

        for vertex in hex_vertices(center, radius) {
            let delta = vertex - center;
            let distance = (delta.left * delta.left + delta.top * delta.top).sqrt();
            assert!((distance - radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_first_vertex_is_straight_right() {
        let center = Coordinate::new(10.0, 20.0);
        let vertices = hex_vertices(center, 8.0);

        assert!((vertices[0].left - 18.0).abs() < 1e-4);
        assert!((vertices[0].top - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_vertices_scale_with_radius() {
        // Radius already includes the zoom factor when called per frame
        let center = Coordinate::ZERO;
        let small = hex_vertices(center, 32.0);
        let large = hex_vertices(center, 64.0);

        for (s, l) in small.iter().zip(large.iter()) {
            assert!((l.left - s.left * 2.0).abs() < 1e-3);
            assert!((l.top - s.top * 2.0).abs() < 1e-3);
        }
    }
}
