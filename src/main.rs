//! SWARMFIELD: outrun the pyramid swarm
//!
//! A small 3D chase game. A field of pyramids steers toward you; one touch
//! and the run is over. Hold W to run, lean through turns with A/D, and hit
//! Tab for a free-fly look around the field.
//!
//! The frame loop here is the host: once per frame it polls input, advances
//! the simulation, then draws the world and the HUD overlay.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod input;
mod math;
mod render;
mod ui;

use macroquad::prelude::*;

use config::Settings;
use game::{CameraMode, GameState};
use input::InputState;
use render::ModelLibrary;
use ui::{Align, FlexParams, FlexRow, Image, Label, Margin, Spacer};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("SWARMFIELD v{}", VERSION),
        window_width: 800,
        window_height: 600,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let settings = Settings::load_or_default("settings.ron");
    let models = ModelLibrary::load().await;
    let hud = build_hud().await;

    let (mut width, mut height) = (screen_width(), screen_height());
    let mut game = GameState::new(models, hud, &settings, width, height);
    let mut input = InputState::new();

    loop {
        // Window-size changes arrive between frames
        if screen_width() != width || screen_height() != height {
            width = screen_width();
            height = screen_height();
            game.resize(width, height);
        }

        let frame = input.snapshot();
        let dt = get_frame_time() * 1000.0;

        let mode_before = game.mode();
        game.update(dt, &frame);
        if game.mode() != mode_before {
            // Free-fly steers with relative mouse motion, so it owns the cursor
            input.set_grab(game.mode() == CameraMode::FreeFly);
        }

        game.draw(dt);

        next_frame().await;
    }
}

/// Build the HUD overlay: an emblem on the left, the control hints on the
/// right. Both assets degrade gracefully when missing.
async fn build_hud() -> FlexRow {
    let emblem = match load_texture("assets/ui/emblem.png").await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Linear);
            Some(texture)
        }
        Err(e) => {
            eprintln!("Failed to load emblem: {}, showing a placeholder", e);
            None
        }
    };

    let font = match load_ttf_font("assets/fonts/DejaVuSans.ttf").await {
        Ok(font) => Some(font),
        Err(e) => {
            eprintln!("Failed to load font: {}, falling back to the built-in", e);
            None
        }
    };

    let mut hud = FlexRow::new();
    hud.add(
        Box::new(Image::new(emblem, 100.0, 100.0)),
        FlexParams {
            align: Align::End,
            margin: Margin { left: 20.0, top: 0.0, right: 20.0, bottom: 20.0 },
            ..FlexParams::default()
        },
    );
    hud.add(Box::new(Spacer::new(0.0, 0.0)), FlexParams { grow: 1.0, ..FlexParams::default() });
    hud.add(
        Box::new(Label::new(
            "W: run  A/D: lean  Tab: fly-around",
            font,
            24,
            WHITE,
        )),
        FlexParams {
            align: Align::Center,
            margin: Margin::uniform(20.0),
            ..FlexParams::default()
        },
    );
    hud
}
