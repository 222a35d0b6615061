use crate::domain::Coordinate;

/// Pointer-drag state: either idle, or dragging with the last sampled
/// pointer position.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last: Coordinate,
    },
}

/// Viewport manages the zoom/offset pair that maps world space to screen
/// space, plus the pointer-drag state that feeds panning.
///
/// Invariant: `zoom_level` stays within `[min_zoom, max_zoom]` after every
/// update; `min_zoom > 0` is what keeps the transform invertible.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub zoom_level: f32,
    pub offset: Coordinate,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub scroll_sensitivity: f32,
    drag: DragState,
}

impl Viewport {
    pub fn new(min_zoom: f32, max_zoom: f32, scroll_sensitivity: f32) -> Self {
        Self {
            zoom_level: 1.0,
            offset: Coordinate::ZERO,
            min_zoom,
            max_zoom,
            scroll_sensitivity,
            drag: DragState::Idle,
        }
    }

    /// Project a world-space point into screen space
    pub fn world_to_screen(&self, world: Coordinate) -> Coordinate {
        world * self.zoom_level + self.offset
    }

    /// Inverse of [`Viewport::world_to_screen`]
    pub fn screen_to_world(&self, screen: Coordinate) -> Coordinate {
        (screen - self.offset) * (1.0 / self.zoom_level)
    }

    /// Zoom by a wheel step, anchored at the cursor: the world point under
    /// the cursor stays visually fixed across the zoom change.
    pub fn apply_zoom(&mut self, cursor: Coordinate, wheel_delta: f32) {
        let previous_zoom = self.zoom_level;
        self.zoom_level = (previous_zoom + wheel_delta * self.scroll_sensitivity)
            .clamp(self.min_zoom, self.max_zoom);

        let zoom_factor = self.zoom_level / previous_zoom;
        self.offset = cursor - (cursor - self.offset) * zoom_factor;
    }

    /// Pan by a raw pointer delta.
    ///
    /// The delta is applied to the screen-space offset unscaled, so the
    /// grabbed world point tracks the pointer 1:1 at every zoom level.
    pub fn apply_pan(&mut self, delta: Coordinate) {
        self.offset += delta;
    }

    /// Pointer pressed on the surface: start tracking a drag
    pub fn begin_drag(&mut self, pointer: Coordinate) {
        self.drag = DragState::Dragging { last: pointer };
    }

    /// Pointer moved: pan by the movement since the last sample.
    /// A move without a preceding press is ignored.
    pub fn drag_to(&mut self, pointer: Coordinate) {
        if let DragState::Dragging { last } = self.drag {
            self.apply_pan(pointer - last);
            self.drag = DragState::Dragging { last: pointer };
        }
    }

    /// Pointer released, anywhere: the drag ends
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    pub const fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Restore the home view: zoom 1.0, zero offset, no drag in flight
    pub fn reset(&mut self) {
        self.zoom_level = 1.0;
        self.offset = Coordinate::ZERO;
        self.drag = DragState::Idle;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.25, 4.0, 0.1)
    }
}
