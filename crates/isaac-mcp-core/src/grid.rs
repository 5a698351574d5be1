//! Grid layout for placing robots on the stage

use crate::robot::Position;

/// One slot of a placement grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// Index along x
    pub row: usize,
    /// Index along y
    pub col: usize,
    /// Stage position of this slot
    pub position: Position,
}

/// Spread `rows` x `cols` positions evenly between two corners.
///
/// Rows walk along x and columns along y; every slot shares the start's z.
/// Cells come out row-major. A dimension of size one stays on the start
/// coordinate.
pub fn grid_positions(start: Position, end: Position, rows: usize, cols: usize) -> Vec<GridCell> {
    let x_spacing = spacing(start[0], end[0], rows);
    let y_spacing = spacing(start[1], end[1], cols);

    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            cells.push(GridCell {
                row,
                col,
                position: [
                    start[0] + row as f64 * x_spacing,
                    start[1] + col as f64 * y_spacing,
                    start[2],
                ],
            });
        }
    }
    cells
}

fn spacing(from: f64, to: f64, count: usize) -> f64 {
    if count > 1 {
        (to - from) / (count - 1) as f64
    } else {
        0.0
    }
}
