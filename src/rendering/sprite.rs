use macroquad::logging::warn;
use macroquad::prelude::*;

use crate::domain::Coordinate;

/// Sprite sheet collaborator: one bitmap holding a grid of equally sized
/// tiles, addressed by (column, row).
pub struct SpriteSheet {
    texture: Texture2D,
    tile_size: f32,
}

impl SpriteSheet {
    /// Load a sheet from the asset path.
    ///
    /// A failed load is a local degradation, not a startup failure: the
    /// warning is logged once and the board renders outline-only.
    pub async fn load(path: &str, tile_size: f32) -> Option<Self> {
        match load_texture(path).await {
            Ok(texture) => {
                texture.set_filter(FilterMode::Nearest);
                Some(Self { texture, tile_size })
            }
            Err(err) => {
                warn!(
                    "sprite sheet '{}' unavailable, drawing outlines only: {:?}",
                    path, err
                );
                None
            }
        }
    }

    pub const fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Composite one tile centered on a screen point, scaled by the
    /// current zoom so it stays glued to the hex under it.
    pub fn draw_tile(&self, tile: (u32, u32), center: Coordinate, zoom: f32) {
        let source = Rect::new(
            tile.0 as f32 * self.tile_size,
            tile.1 as f32 * self.tile_size,
            self.tile_size,
            self.tile_size,
        );
        let dest_size = self.tile_size * zoom;

        draw_texture_ex(
            &self.texture,
            center.left - dest_size / 2.0,
            center.top - dest_size / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest_size, dest_size)),
                source: Some(source),
                ..Default::default()
            },
        );
    }
}
