/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the particle simulation. These parameters can
 * be modified through the UI. It also provides methods for parameter change
 * detection and management to improve separation of concerns.
 */

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_particles: usize,
    pub cell_size: f32,
    pub connection_distance: f32,
    pub speed_multiplier: f32,
    pub push_factor: f32,
    pub line_weight: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_particles: usize,
    cell_size: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_particles: 50,
            cell_size: 100.0,
            connection_distance: 100.0,
            speed_multiplier: 0.75,
            push_factor: 1.5,
            line_weight: 0.2,
            show_debug: false,
            pause_simulation: false,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_particles: self.num_particles,
            cell_size: self.cell_size,
        });
    }

    // Check what changed since the last snapshot.
    // Returns (num_particles_changed, cell_size_changed).
    pub fn detect_changes(&self) -> (bool, bool) {
        match &self.previous_values {
            Some(prev) => (
                self.num_particles != prev.num_particles,
                self.cell_size != prev.cell_size,
            ),
            None => (false, false),
        }
    }

    // Parameter ranges for UI sliders
    pub fn get_num_particles_range() -> std::ops::RangeInclusive<usize> {
        2..=500
    }

    pub fn get_cell_size_range() -> std::ops::RangeInclusive<f32> {
        25.0..=400.0
    }

    pub fn get_connection_distance_range() -> std::ops::RangeInclusive<f32> {
        20.0..=300.0
    }

    pub fn get_speed_multiplier_range() -> std::ops::RangeInclusive<f32> {
        0.1..=3.0
    }

    pub fn get_push_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }

    pub fn get_line_weight_range() -> std::ops::RangeInclusive<f32> {
        0.1..=2.0
    }
}
