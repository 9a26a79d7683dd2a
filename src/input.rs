/*
 * Input Module
 *
 * This module handles user input events for the particle simulation. The
 * only input the core consumes is the resolved pointer position: cursor
 * moves are coalesced with a small pixel threshold before being handed to
 * the simulation, so the pointer field is not rewritten on every jitter.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::renderer;
use crate::POINTER_DEBOUNCE;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    if (pos - model.last_pointer).length() > POINTER_DEBOUNCE {
        model.last_pointer = pos;
        model.sim.pointer = renderer::screen_to_plane(pos, model.sim.width, model.sim.height);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Pass events to egui
    model.egui.handle_raw_event(event);
}
