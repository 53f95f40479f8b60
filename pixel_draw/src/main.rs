// main.rs - Pixel Drawing grid editor

use eframe::egui;
use egui::Color32;
use tracing::info;

use pixel_grid::Grid;

mod ui; // Canvas rendering and pointer handling

// Compile-time canvas configuration
pub const GRID_HEIGHT: usize = 100; // Rows
pub const GRID_WIDTH: usize = 100; // Columns
pub const PIXEL_SIZE: f32 = 10.0; // On-screen square size per cell
pub const TOOLBAR_HEIGHT: f32 = 100.0; // Window band for the controls row and panel margins

/// Where the canvas is saved when the window closes.
pub const OUTPUT_PATH: &str = "output/pixel_state.csv";

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let window_width = GRID_WIDTH as f32 * PIXEL_SIZE + 20.0;
    let window_height = GRID_HEIGHT as f32 * PIXEL_SIZE + TOOLBAR_HEIGHT;
    info!("starting {}x{} canvas", GRID_WIDTH, GRID_HEIGHT);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_width, window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Drawing",
        options,
        Box::new(|_cc| Box::new(PixelDraw::default())),
    )
}

/// Editor state: the grid plus presentation settings. Owned here and handed
/// by reference to the input, render and export code.
pub struct PixelDraw {
    pub grid: Grid,
    pub fg_color: Color32,
    pub bg_color: Color32,
}

impl Default for PixelDraw {
    fn default() -> Self {
        Self {
            grid: Grid::new(GRID_HEIGHT, GRID_WIDTH),
            fg_color: Color32::BLACK,
            bg_color: Color32::WHITE,
        }
    }
}
