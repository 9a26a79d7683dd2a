/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct for efficient neighbor lookups.
 * It divides the simulation plane into a grid of cells, allowing for O(1)
 * neighbor queries instead of O(n) linear searches.
 *
 * The grid is discarded and rebuilt from scratch every frame: continuous
 * motion changes the cell membership of essentially every particle, so
 * incremental updates would cost more than they save. Two grid instances
 * coexist briefly across a frame boundary (the old one is read while the
 * new one is populated).
 */

use nannou::prelude::*;

pub struct SpatialGrid {
    pub cell_size: f32,
    pub cols: usize,
    pub rows: usize,
    cells: Vec<Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32, width: f32, height: f32) -> Self {
        let cols = (width / cell_size).ceil().max(1.0) as usize;
        let rows = (height / cell_size).ceil().max(1.0) as usize;

        Self {
            cell_size,
            cols,
            rows,
            cells: vec![Vec::new(); cols * rows],
        }
    }

    // A fresh grid with the same shape and no occupants
    pub fn empty_like(&self) -> Self {
        Self {
            cell_size: self.cell_size,
            cols: self.cols,
            rows: self.rows,
            cells: vec![Vec::new(); self.cols * self.rows],
        }
    }

    // Convert plane coordinates to grid cell coordinates. Uses mod rather
    // than clamp so a position sitting exactly on the wrap boundary still
    // lands in a valid cell.
    #[inline]
    pub fn cell_of(&self, position: Point2) -> (usize, usize) {
        let col = (position.x / self.cell_size).floor() as isize;
        let row = (position.y / self.cell_size).floor() as isize;

        (
            col.rem_euclid(self.cols as isize) as usize,
            row.rem_euclid(self.rows as isize) as usize,
        )
    }

    // Insert a particle index into the cell containing its position
    #[inline]
    pub fn insert(&mut self, index: usize, position: Point2) {
        let (col, row) = self.cell_of(position);
        self.cells[row * self.cols + col].push(index);
    }

    // Particle indices within and adjacent to the cell containing the given
    // position (3x3 block). Block coordinates outside the grid are skipped,
    // not wrapped: only particle positions are toroidal, so a particle near
    // the plane edge sees a smaller neighborhood. The querying particle's
    // own index is included; callers filter by identity.
    pub fn nearby_indices(&self, position: Point2) -> Vec<usize> {
        let (col, row) = self.cell_of(position);
        let mut result = Vec::with_capacity(32);

        let cols = self.cols as isize;
        let rows = self.rows as isize;

        for row_offset in -1..=1 {
            let check_row = row as isize + row_offset;

            if check_row < 0 || check_row >= rows {
                continue;
            }

            let row_index = check_row as usize * self.cols;

            for col_offset in -1..=1 {
                let check_col = col as isize + col_offset;

                if check_col < 0 || check_col >= cols {
                    continue;
                }

                result.extend_from_slice(&self.cells[row_index + check_col as usize]);
            }
        }

        result
    }

    // All occupant indices in cell-then-insertion order. Gives the step loop
    // a stable iteration order that is independent of the live grid.
    pub fn snapshot(&self) -> Vec<usize> {
        let total = self.cells.iter().map(Vec::len).sum();
        let mut indices = Vec::with_capacity(total);

        for cell in &self.cells {
            indices.extend_from_slice(cell);
        }

        indices
    }

    pub fn occupant_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }
}
