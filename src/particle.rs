/*
 * Particle Module
 *
 * This module defines the Particle struct: the per-agent mutable state of
 * the simulation. Particles are created once at startup and never destroyed
 * during a run; position, direction and edge list are rewritten every frame.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::renderer::{DotId, LineId};

#[derive(Clone)]
pub struct Particle {
    pub position: Point2,
    pub direction: Vec2,
    // Spawn-time heading. Immutable after creation; the steering blend
    // always relaxes back to this, never to the previous frame's direction.
    pub spawn_direction: Vec2,
    pub speed: f32,
    pub dot: DotId,
    pub edges: Vec<LineId>,
}

impl Particle {
    pub fn new(x: f32, y: f32, dot: DotId) -> Self {
        let mut rng = rand::thread_rng();

        // Random unit heading and speed
        let heading = rng.gen_range(0.0..TAU);
        let direction = vec2(heading.cos(), heading.sin());

        Self {
            position: pt2(x, y),
            direction,
            spawn_direction: direction,
            speed: rng.gen_range(0.5..2.0),
            dot,
            edges: Vec::new(),
        }
    }

    // Move along the current direction
    pub fn advance(&mut self, speed_multiplier: f32) {
        self.position += self.direction * self.speed * speed_multiplier;
    }

    // Wrap the particle around the plane edges. A single-step correction,
    // not a modulo: a particle crossing more than one plane-width in a
    // single frame is not fully wrapped.
    pub fn wrap(&mut self, width: f32, height: f32) {
        if self.position.x < 0.0 {
            self.position.x += width;
        } else if self.position.x > width {
            self.position.x -= width;
        }

        if self.position.y < 0.0 {
            self.position.y += height;
        } else if self.position.y > height {
            self.position.y -= height;
        }
    }
}
