/*
 * Application Module
 *
 * This module defines the main application model for the particle
 * simulation and wires the nannou frame loop to the simulation core: one
 * update tick drives exactly one simulation step, and the window is the
 * simulation plane.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::input;
use crate::params::SimulationParams;
use crate::renderer::{self, VisualTable};
use crate::simulation::Simulation;
use crate::theme::Theme;
use crate::ui;

// Main model for the application
pub struct Model {
    pub sim: Simulation,
    pub scene: VisualTable,
    pub params: SimulationParams,
    pub egui: Egui,
    pub theme: Theme,
    pub debug_info: DebugInfo,
    // Last pointer position propagated to the core, in screen coordinates
    pub last_pointer: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Size the window from the primary monitor, falling back to a fixed
    // size when the monitor cannot be queried
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1280.0, 800.0),
    };

    // Create the main window; the plane dimensions are fixed at startup
    let window_id = app
        .new_window()
        .title("Particle Plexus")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SimulationParams::default();

    // Create the simulation and its visual table
    let mut scene = VisualTable::new();
    let mut sim = Simulation::new(window_width, window_height);
    sim.spawn(&params, &mut scene);

    Model {
        sim,
        scene,
        params,
        egui,
        theme: Theme::default(),
        debug_info: DebugInfo::default(),
        last_pointer: Vec2::ZERO,
    }
}

// Update the model: one tick, one simulation step
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check for parameter changes
    let (should_reset, num_particles_changed, cell_size_changed) = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.theme,
        &model.debug_info,
    );

    // Reconfiguration happens between steps, never mid-step
    if should_reset || num_particles_changed {
        reset_particles(model);
    } else if cell_size_changed {
        model.sim.rebuild_grid(model.params.cell_size);
    }

    // Only advance the simulation if it is not paused
    if !model.params.pause_simulation {
        model.sim.step(&model.params, &mut model.scene);
    }

    model.debug_info.edge_count = model.scene.line_count();
    model.debug_info.line_slots = model.scene.line_slots();
}

// Respawn the population and its visuals, keeping the plane dimensions
fn reset_particles(model: &mut Model) {
    let width = model.sim.width;
    let height = model.sim.height;
    let pointer = model.sim.pointer;

    model.scene = VisualTable::new();
    model.sim = Simulation::new(width, height);
    model.sim.pointer = pointer;
    model.sim.spawn(&model.params, &mut model.scene);
}
