// ui.rs - Canvas rendering and pointer-to-cell input handling

use std::path::Path;

use eframe::egui;
use egui::{Pos2, Rect, Sense, Vec2};
use tracing::info;

use pixel_grid::export;

use crate::{GRID_HEIGHT, GRID_WIDTH, OUTPUT_PATH, PIXEL_SIZE, PixelDraw};

/// Maps a pointer position to (row, col) with plain floor division. The
/// result can be negative or past the last row/column when the pointer sits
/// off the canvas; `Grid::set_cell` drops those instead of clamping.
fn pointer_to_cell(pos: Pos2, origin: Pos2) -> (isize, isize) {
    let col = ((pos.x - origin.x) / PIXEL_SIZE).floor() as isize;
    let row = ((pos.y - origin.y) / PIXEL_SIZE).floor() as isize;
    (row, col)
}

impl eframe::App for PixelDraw {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Controls
            ui.horizontal(|ui| {
                if ui.button("Clear All").clicked() {
                    self.grid.clear();
                }

                if ui.button("Fill All").clicked() {
                    self.grid.fill();
                }

                ui.separator();

                ui.label("Draw:");
                ui.color_edit_button_srgba(&mut self.fg_color);
                ui.label("Canvas:");
                ui.color_edit_button_srgba(&mut self.bg_color);

                ui.separator();

                ui.label(format!(
                    "Set: {} / {}",
                    self.grid.count_set(),
                    GRID_HEIGHT * GRID_WIDTH
                ));
            });

            ui.separator();

            ui.label("Hold the left mouse button and drag to draw. The canvas is saved on exit.");

            ui.separator();

            // Canvas
            let canvas_size = Vec2::new(
                GRID_WIDTH as f32 * PIXEL_SIZE,
                GRID_HEIGHT as f32 * PIXEL_SIZE,
            );
            let (response, painter) = ui.allocate_painter(canvas_size, Sense::click_and_drag());
            let origin = response.rect.min;

            // Fill background
            painter.rect_filled(response.rect, 0.0, self.bg_color);

            // Draw set cells
            for row in 0..GRID_HEIGHT {
                for col in 0..GRID_WIDTH {
                    if self.grid.get_cell(row, col) {
                        let rect = Rect::from_min_size(
                            egui::pos2(
                                origin.x + col as f32 * PIXEL_SIZE,
                                origin.y + row as f32 * PIXEL_SIZE,
                            ),
                            Vec2::splat(PIXEL_SIZE),
                        );
                        painter.rect_filled(rect, 0.0, self.fg_color);
                    }
                }
            }

            // Every sampled position draws while the button is held down
            if response.is_pointer_button_down_on() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let (row, col) = pointer_to_cell(pos, origin);
                    self.grid.set_cell(row, col);
                    ctx.request_repaint();
                }
            }
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("saving canvas to {}", OUTPUT_PATH);

        if let Err(err) = export::write_csv(&self.grid, Path::new(OUTPUT_PATH)) {
            panic!("failed to save {}: {}", OUTPUT_PATH, err);
        }

        info!("saved {} set cells", self.grid.count_set());
    }
}
