/*
 * Particle Constellation Simulation - Module Definitions
 *
 * This file defines the module structure for the particle simulation.
 * It organizes the code into logical components for better maintainability.
 */

// Re-export key components for easier access
pub use app::Model;
pub use debug::DebugInfo;
pub use edge_pool::EdgePool;
pub use params::SimulationParams;
pub use particle::Particle;
pub use renderer::{DotId, LineId, Scene, VisualTable};
pub use simulation::Simulation;
pub use spatial_grid::SpatialGrid;
pub use theme::Theme;

// Define modules
pub mod app;
pub mod debug;
pub mod edge_pool;
pub mod input;
pub mod params;
pub mod particle;
pub mod renderer;
pub mod simulation;
pub mod spatial_grid;
pub mod steering;
pub mod theme;
pub mod ui;

// Constants
pub const PARTICLE_RADIUS: f32 = 2.5;
pub const POINTER_DEBOUNCE: f32 = 5.0;
