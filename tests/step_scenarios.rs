/*
 * Simulation Step Scenarios
 *
 * End-to-end checks of the per-frame algorithm: steering, integration,
 * wraparound, grid rebuild, neighbor-driven edge reconciliation and line
 * handle reuse, all observed through the visual table.
 */

use nannou::prelude::*;

use plexus::{Particle, Simulation, SimulationParams, VisualTable};
use plexus::renderer::Scene;

// A simulation with hand-placed particles so scenarios are deterministic
fn place_particles(
    sim: &mut Simulation,
    scene: &mut VisualTable,
    placements: &[(Point2, Vec2, f32)],
    cell_size: f32,
) {
    for &(position, direction, speed) in placements {
        let dot = scene.create_dot(position);
        sim.particles.push(Particle {
            position,
            direction,
            spawn_direction: direction,
            speed,
            dot,
            edges: Vec::new(),
        });
    }
    sim.rebuild_grid(cell_size);
}

fn base_params() -> SimulationParams {
    let mut params = SimulationParams::default();
    params.speed_multiplier = 1.0;
    params
}

#[test]
fn close_pair_links_with_one_edge_each() {
    let mut sim = Simulation::new(400.0, 400.0);
    let mut scene = VisualTable::new();
    place_particles(
        &mut sim,
        &mut scene,
        &[
            (pt2(100.0, 200.0), vec2(1.0, 0.0), 1.0),
            (pt2(150.0, 200.0), vec2(1.0, 0.0), 1.0),
        ],
        100.0,
    );
    // Pointer well outside the connection distance of both particles
    sim.pointer = pt2(390.0, 10.0);

    sim.step(&base_params(), &mut scene);

    // Each particle owns exactly one edge referencing the other; ownership
    // is per particle, so the pair is drawn twice (coincident lines)
    assert_eq!(sim.particles[0].edges.len(), 1);
    assert_eq!(sim.particles[1].edges.len(), 1);
    assert_ne!(sim.particles[0].edges[0], sim.particles[1].edges[0]);
    assert_eq!(scene.line_count(), 2);

    // Far from the pointer, directions stay pinned to the spawn heading
    assert_eq!(sim.particles[0].direction, vec2(1.0, 0.0));
    assert_eq!(sim.particles[1].direction, vec2(1.0, 0.0));
}

#[test]
fn distant_pair_stays_unlinked() {
    let mut sim = Simulation::new(400.0, 400.0);
    let mut scene = VisualTable::new();
    place_particles(
        &mut sim,
        &mut scene,
        &[
            (pt2(100.0, 200.0), vec2(0.0, 1.0), 0.5),
            (pt2(250.0, 200.0), vec2(0.0, -1.0), 0.5),
        ],
        100.0,
    );
    sim.pointer = pt2(390.0, 10.0);

    sim.step(&base_params(), &mut scene);

    assert!(sim.particles[0].edges.is_empty());
    assert!(sim.particles[1].edges.is_empty());
    assert_eq!(scene.line_count(), 0);
}

#[test]
fn lone_particle_never_links_to_itself() {
    let mut sim = Simulation::new(400.0, 400.0);
    let mut scene = VisualTable::new();
    place_particles(
        &mut sim,
        &mut scene,
        &[(pt2(200.0, 200.0), vec2(1.0, 0.0), 0.5)],
        100.0,
    );
    sim.pointer = pt2(390.0, 10.0);

    sim.step(&base_params(), &mut scene);

    assert!(sim.particles[0].edges.is_empty());
    assert_eq!(scene.line_count(), 0);
}

#[test]
fn crossing_the_plane_edge_wraps_once() {
    let mut sim = Simulation::new(400.0, 400.0);
    let mut scene = VisualTable::new();
    place_particles(
        &mut sim,
        &mut scene,
        &[(pt2(399.0, 200.0), vec2(1.0, 0.0), 2.0)],
        100.0,
    );
    sim.pointer = pt2(10.0, 10.0);

    sim.step(&base_params(), &mut scene);

    // 399 + 2 = 401, corrected by one plane width to 1
    assert!((sim.particles[0].position.x - 1.0).abs() < 1e-3);
    assert!((sim.particles[0].position.y - 200.0).abs() < 1e-3);

    // The wrapped particle still lands in exactly one grid cell
    assert_eq!(sim.grid.as_ref().unwrap().occupant_count(), 1);
}

#[test]
fn pointer_on_top_of_particle_is_survivable() {
    let mut sim = Simulation::new(400.0, 400.0);
    let mut scene = VisualTable::new();
    let spawn = vec2(0.0, 1.0);
    place_particles(&mut sim, &mut scene, &[(pt2(200.0, 200.0), spawn, 1.0)], 100.0);
    sim.pointer = pt2(200.0, 200.0);

    sim.step(&base_params(), &mut scene);

    // Degenerate geometry falls back to the spawn heading, no NaN anywhere
    let particle = &sim.particles[0];
    assert!(particle.position.x.is_finite() && particle.position.y.is_finite());
    assert_eq!(particle.direction, spawn);
    assert_eq!(particle.position, pt2(200.0, 201.0));
}

#[test]
fn steady_pair_reuses_line_handles_across_frames() {
    let mut sim = Simulation::new(400.0, 400.0);
    let mut scene = VisualTable::new();
    place_particles(
        &mut sim,
        &mut scene,
        &[
            (pt2(100.0, 200.0), vec2(1.0, 0.0), 1.0),
            (pt2(150.0, 200.0), vec2(1.0, 0.0), 1.0),
        ],
        100.0,
    );
    sim.pointer = pt2(390.0, 10.0);

    let params = base_params();
    for _ in 0..5 {
        sim.step(&params, &mut scene);
    }

    // The pair keeps its two lines; no per-frame allocation churn
    assert_eq!(scene.line_count(), 2);
    assert_eq!(scene.line_slots(), 2);
}

#[test]
fn separating_pair_releases_its_edges() {
    let mut sim = Simulation::new(400.0, 400.0);
    let mut scene = VisualTable::new();
    place_particles(
        &mut sim,
        &mut scene,
        &[
            (pt2(150.0, 200.0), vec2(-1.0, 0.0), 30.0),
            (pt2(160.0, 200.0), vec2(1.0, 0.0), 30.0),
        ],
        100.0,
    );
    sim.pointer = pt2(390.0, 10.0);

    let params = base_params();

    // First step: 70 apart, still linked
    sim.step(&params, &mut scene);
    assert_eq!(scene.line_count(), 2);

    // Second step: 130 apart, both handles released back to the renderer
    sim.step(&params, &mut scene);
    assert_eq!(scene.line_count(), 0);
    assert!(sim.particles[0].edges.is_empty());
    assert!(sim.particles[1].edges.is_empty());
    // The slots stay allocated for reuse
    assert_eq!(scene.line_slots(), 2);
}

#[test]
fn spawned_population_survives_many_steps() {
    let mut sim = Simulation::new(640.0, 480.0);
    let mut scene = VisualTable::new();
    let mut params = SimulationParams::default();
    params.num_particles = 80;
    sim.spawn(&params, &mut scene);
    sim.pointer = pt2(320.0, 240.0);

    for _ in 0..20 {
        sim.step(&params, &mut scene);
    }

    let grid = sim.grid.as_ref().unwrap();
    assert_eq!(grid.occupant_count(), 80);

    for particle in &sim.particles {
        assert!(particle.position.x.is_finite() && particle.position.y.is_finite());
        assert!(particle.position.x >= 0.0 && particle.position.x <= 640.0);
        assert!(particle.position.y >= 0.0 && particle.position.y <= 480.0);
    }

    // Dots track particle positions through the renderer binding
    assert_eq!(scene.dot_count(), 80);
}
