use macroquad::prelude::*;

use crate::application::Viewport;
use crate::domain::Coordinate;

/// Current pointer position in surface coordinates
fn cursor_position() -> Coordinate {
    Coordinate::from(mouse_position())
}

/// Handle wheel zoom, anchored at the cursor.
/// Independent of any drag in progress.
pub fn handle_zoom(viewport: &mut Viewport) {
    let (_, wheel_y) = mouse_wheel();
    if wheel_y != 0.0 {
        viewport.apply_zoom(cursor_position(), wheel_y);
    }
}

/// Handle left-button drag panning.
/// A drag starts on press over the surface and ends on release anywhere;
/// the viewport tracks the pointer position between samples.
pub fn handle_pan(viewport: &mut Viewport) {
    let cursor = cursor_position();

    if is_mouse_button_pressed(MouseButton::Left) {
        viewport.begin_drag(cursor);
    } else if is_mouse_button_down(MouseButton::Left) {
        viewport.drag_to(cursor);
    } else {
        viewport.end_drag();
    }
}

/// Handle keyboard shortcuts: 'H' returns the view home
pub fn handle_keys(viewport: &mut Viewport) {
    if is_key_pressed(KeyCode::H) {
        viewport.reset();
    }
}
