/*
 * Renderer Module
 *
 * This module owns the boundary between the simulation core and drawing.
 * The core only ever sees opaque handles (DotId, LineId) into a visual
 * table it drives through the Scene trait; the nannou view walks that table
 * once per frame and turns it into draw calls. The core never inspects
 * renderer internals beyond the position setters exposed here.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::PARTICLE_RADIUS;

// Opaque handle to a point marker owned by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DotId(usize);

// Opaque handle to a connection line owned by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineId(usize);

// The renderer surface the simulation core drives
pub trait Scene {
    fn create_dot(&mut self, position: Point2) -> DotId;
    fn move_dot(&mut self, dot: DotId, position: Point2);
    fn create_line(&mut self, a: Point2, b: Point2) -> LineId;
    fn move_line(&mut self, line: LineId, a: Point2, b: Point2);
    fn remove_line(&mut self, line: LineId);
}

// Retained table of everything on screen, in plane coordinates. Line slots
// freed by remove_line are recycled before the table grows.
#[derive(Default)]
pub struct VisualTable {
    dots: Vec<Point2>,
    lines: Vec<Option<(Point2, Point2)>>,
    free_lines: Vec<usize>,
}

impl VisualTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dots(&self) -> impl Iterator<Item = Point2> + '_ {
        self.dots.iter().copied()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.lines.iter().filter_map(|line| *line)
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    // Lines currently on screen
    pub fn line_count(&self) -> usize {
        self.lines.len() - self.free_lines.len()
    }

    // Line slots ever allocated, live or pooled
    pub fn line_slots(&self) -> usize {
        self.lines.len()
    }
}

impl Scene for VisualTable {
    fn create_dot(&mut self, position: Point2) -> DotId {
        self.dots.push(position);
        DotId(self.dots.len() - 1)
    }

    fn move_dot(&mut self, dot: DotId, position: Point2) {
        self.dots[dot.0] = position;
    }

    fn create_line(&mut self, a: Point2, b: Point2) -> LineId {
        match self.free_lines.pop() {
            Some(slot) => {
                self.lines[slot] = Some((a, b));
                LineId(slot)
            }
            None => {
                self.lines.push(Some((a, b)));
                LineId(self.lines.len() - 1)
            }
        }
    }

    fn move_line(&mut self, line: LineId, a: Point2, b: Point2) {
        self.lines[line.0] = Some((a, b));
    }

    fn remove_line(&mut self, line: LineId) {
        self.lines[line.0] = None;
        self.free_lines.push(line.0);
    }
}

// Plane coordinates have their origin at the top-left corner; nannou draws
// from a centered origin with y up.
#[inline]
pub fn plane_to_screen(position: Point2, width: f32, height: f32) -> Point2 {
    pt2(position.x - width / 2.0, height / 2.0 - position.y)
}

#[inline]
pub fn screen_to_plane(position: Point2, width: f32, height: f32) -> Point2 {
    pt2(position.x + width / 2.0, height / 2.0 - position.y)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    let width = model.sim.width;
    let height = model.sim.height;

    // Draw connection lines underneath the particles
    for (a, b) in model.scene.lines() {
        draw.line()
            .start(plane_to_screen(a, width, height))
            .end(plane_to_screen(b, width, height))
            .weight(model.params.line_weight)
            .color(model.theme.line);
    }

    // Draw each particle: a soft glow halo behind a solid dot
    let glow = model.theme.glow;
    let glow_color = rgba(
        glow.red as f32 / 255.0,
        glow.green as f32 / 255.0,
        glow.blue as f32 / 255.0,
        0.25,
    );

    for position in model.scene.dots() {
        let screen = plane_to_screen(position, width, height);

        draw.ellipse()
            .xy(screen)
            .radius(PARTICLE_RADIUS * 2.0)
            .color(glow_color);

        draw.ellipse()
            .xy(screen)
            .radius(PARTICLE_RADIUS)
            .color(model.theme.particle);
    }

    // Draw debug info if enabled
    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            app.window_rect(),
            model.sim.particles.len(),
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
