use macroquad::logging::info;

use crate::application::Viewport;
use crate::domain::HexGrid;

/// Board and viewport configuration.
/// Defaults match the reference board: 16x16 indices, 64px hexes,
/// zoom clamped to [0.25, 4.0].
#[derive(Clone, Debug)]
pub struct BoardConfig {
    pub size_x: u32,
    pub size_y: u32,
    pub hex_radius: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub scroll_sensitivity: f32,
    pub sprite_sheet_path: String,
    pub sprite_tile_size: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size_x: 16,
            size_y: 16,
            hex_radius: 64.0,
            min_zoom: 0.25,
            max_zoom: 4.0,
            scroll_sensitivity: 0.1,
            sprite_sheet_path: "assets/sprites/64Map.png".to_owned(),
            sprite_tile_size: 64.0,
        }
    }
}

/// App ties the session state together: the immutable grid and the
/// mutable viewport. Built once from a config by an explicit factory,
/// never from module-level state.
pub struct App {
    pub grid: HexGrid,
    pub viewport: Viewport,
}

impl App {
    pub fn new(config: &BoardConfig) -> Self {
        let grid = HexGrid::build(config.size_x, config.size_y, config.hex_radius);
        info!(
            "board ready: {} cells from a {}x{} index range, hex radius {}",
            grid.len(),
            config.size_x,
            config.size_y,
            config.hex_radius
        );

        Self {
            grid,
            viewport: Viewport::new(config.min_zoom, config.max_zoom, config.scroll_sensitivity),
        }
    }
}
