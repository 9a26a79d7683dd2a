/*
 * Edge Pool Module
 *
 * Reuse discipline for edge visual handles. Each particle carries the edge
 * handles it used last frame; during reconciliation those are handed out
 * FIFO before any new handle is created, and whatever is left over at the
 * end is released back to the renderer. Allocation churn is therefore
 * bounded by the net change in edge count per particle per frame, not the
 * total edge count.
 */

use std::collections::VecDeque;

use nannou::prelude::*;

use crate::renderer::{LineId, Scene};

pub struct EdgePool {
    spare: VecDeque<LineId>,
    used: Vec<LineId>,
}

impl EdgePool {
    // Begin reconciling against the handles a particle used last frame
    pub fn new(previous: Vec<LineId>) -> Self {
        Self {
            spare: previous.into(),
            used: Vec::new(),
        }
    }

    // Hand out a line handle for an edge between `a` and `b`, reusing the
    // oldest spare handle when one exists
    pub fn acquire(&mut self, scene: &mut impl Scene, a: Point2, b: Point2) -> LineId {
        let id = match self.spare.pop_front() {
            Some(id) => {
                scene.move_line(id, a, b);
                id
            }
            None => scene.create_line(a, b),
        };

        self.used.push(id);
        id
    }

    // Release every handle that went unused this frame and return the set
    // that is now live for the particle
    pub fn finish(self, scene: &mut impl Scene) -> Vec<LineId> {
        for id in self.spare {
            scene.remove_line(id);
        }

        self.used
    }
}
