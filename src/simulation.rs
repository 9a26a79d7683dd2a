/*
 * Simulation Module
 *
 * This module orchestrates one frame of the particle simulation: steering,
 * integration, toroidal wraparound, the spatial grid rebuild, neighbor
 * queries and edge reconciliation. Steps are strictly serialized by the
 * tick source; the grid swap at the end of each step is the only state
 * crossing frame boundaries.
 */

use std::mem;

use nannou::prelude::*;
use rand::Rng;
use tracing::{error, warn};

use crate::edge_pool::EdgePool;
use crate::params::SimulationParams;
use crate::particle::Particle;
use crate::renderer::Scene;
use crate::spatial_grid::SpatialGrid;
use crate::steering;

pub struct Simulation {
    pub particles: Vec<Particle>,
    pub grid: Option<SpatialGrid>,
    pub pointer: Point2,
    pub width: f32,
    pub height: f32,
}

impl Simulation {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            particles: Vec::new(),
            grid: None,
            pointer: Point2::ZERO,
            width,
            height,
        }
    }

    // Create the particle population and the initial grid of record,
    // registering one dot per particle with the renderer
    pub fn spawn(&mut self, params: &SimulationParams, scene: &mut impl Scene) {
        if self.width <= 0.0 || self.height <= 0.0 {
            error!(
                width = %self.width,
                height = %self.height,
                "plane has no area, refusing to spawn particles"
            );
            return;
        }

        let mut rng = rand::thread_rng();
        let (width, height) = (self.width, self.height);

        self.particles = (0..params.num_particles)
            .map(|_| {
                let x = rng.gen_range(0.0..width);
                let y = rng.gen_range(0.0..height);
                let dot = scene.create_dot(pt2(x, y));
                Particle::new(x, y, dot)
            })
            .collect();

        self.rebuild_grid(params.cell_size);
    }

    // Replace the grid of record with a fresh one at the given cell size,
    // re-inserting every particle. Used at spawn time and when the cell
    // size is reconfigured between steps.
    pub fn rebuild_grid(&mut self, cell_size: f32) {
        let mut grid = SpatialGrid::new(cell_size, self.width, self.height);

        for (index, particle) in self.particles.iter().enumerate() {
            grid.insert(index, particle.position);
        }

        self.grid = Some(grid);
    }

    // Advance the simulation by one frame
    pub fn step(&mut self, params: &SimulationParams, scene: &mut impl Scene) {
        // Degrade to a frozen frame rather than crash when the grid was
        // never initialized
        let Some(grid) = self.grid.take() else {
            warn!("simulation stepped before the grid was initialized, skipping frame");
            return;
        };

        let mut next = grid.empty_like();

        // Iterate a snapshot of the old grid's cell contents; the old grid
        // is never mutated while we walk it
        let order = grid.snapshot();
        let pointer = self.pointer;

        // Pass 1: steer, integrate, wrap, push positions to the renderer
        // and populate the new grid
        for &index in &order {
            let particle = &mut self.particles[index];

            particle.direction = steering::steer(
                particle.position,
                particle.spawn_direction,
                pointer,
                params.connection_distance,
                params.push_factor,
            );
            particle.advance(params.speed_multiplier);
            particle.wrap(self.width, self.height);

            scene.move_dot(particle.dot, particle.position);
            next.insert(index, particle.position);
        }

        // Pass 2: neighbor queries run against the fully populated new
        // grid, so edges reflect the positions just written
        for &index in &order {
            let position = self.particles[index].position;
            let nearby = next.nearby_indices(position);

            let previous = mem::take(&mut self.particles[index].edges);
            let mut pool = EdgePool::new(previous);

            for other in nearby {
                // Self shows up in its own neighborhood; filter by identity
                if other == index {
                    continue;
                }

                let other_position = self.particles[other].position;

                if position.distance(other_position) < params.connection_distance {
                    pool.acquire(scene, position, other_position);
                }
            }

            self.particles[index].edges = pool.finish(scene);
        }

        self.grid = Some(next);
    }
}
