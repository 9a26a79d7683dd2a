/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui. It provides controls for adjusting
 * simulation parameters and switching color themes. Parameter change
 * detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::theme::Theme;

// Update the UI. Returns whether particles should be reset, whether the
// population count changed, and whether the grid cell size changed.
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    theme: &mut Theme,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Particles", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.num_particles,
                        SimulationParams::get_num_particles_range(),
                    )
                    .text("Particle Count"),
                );

                if ui.button("Reset Particles").clicked() {
                    should_reset = true;
                }

                ui.add(
                    egui::Slider::new(
                        &mut params.speed_multiplier,
                        SimulationParams::get_speed_multiplier_range(),
                    )
                    .text("Speed Multiplier"),
                );
            });

            ui.collapsing("Connections", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.connection_distance,
                        SimulationParams::get_connection_distance_range(),
                    )
                    .text("Connection Distance"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.line_weight,
                        SimulationParams::get_line_weight_range(),
                    )
                    .text("Line Weight"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.push_factor,
                        SimulationParams::get_push_factor_range(),
                    )
                    .text("Pointer Push Factor"),
                );
            });

            ui.collapsing("Theme", |ui| {
                ui.horizontal_wrapped(|ui| {
                    for preset in Theme::all() {
                        if ui.button(preset.name).clicked() {
                            *theme = preset;
                        }
                    }
                });
            });

            ui.collapsing("Performance Tuning", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.cell_size, SimulationParams::get_cell_size_range())
                        .text("Grid Cell Size"),
                );

                ui.separator();

                // Performance metrics
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Frame time: {:.2} ms",
                    debug_info.frame_time.as_secs_f64() * 1000.0
                ));
                ui.label(format!("Edges: {}", debug_info.edge_count));
                ui.label(format!("Line slots: {}", debug_info.line_slots));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (num_particles_changed, cell_size_changed) = params.detect_changes();

    (should_reset, num_particles_changed, cell_size_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    particle_count: usize,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Particles: {}", particle_count),
        format!("Edges: {}", debug_info.edge_count),
        format!("Line slots: {}", debug_info.line_slots),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
