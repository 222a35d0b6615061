use macroquad::prelude::*;

use hexboard::{App, BoardConfig, SpriteSheet, input, rendering};

fn window_conf() -> Conf {
    Conf {
        window_title: "Hex Board".to_owned(),
        window_width: 1024,
        window_height: 768,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = BoardConfig::default();
    let mut app = App::new(&config);
    let sprites = SpriteSheet::load(&config.sprite_sheet_path, config.sprite_tile_size).await;

    loop {
        input::handle_zoom(&mut app.viewport);
        input::handle_pan(&mut app.viewport);
        input::handle_keys(&mut app.viewport);

        clear_background(Color::from_rgba(18, 18, 18, 255));
        rendering::draw_board(&app.grid, &app.viewport, sprites.as_ref());
        rendering::draw_hud(&app.grid, &app.viewport);

        next_frame().await;
    }
}
