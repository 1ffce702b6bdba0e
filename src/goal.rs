use itertools::Itertools;
use tracing::{trace, trace_span};

use crate::{Block, Color, Grid};

/// A quality target: a color to collect plus a scoring strategy.
///
/// Goals are immutable once built; scoring reads the tree, flattens it
/// exactly once, and never fails.
pub trait Goal {
    fn target(&self) -> Color;
    /// the board's current score against this goal, always >= 0
    fn score(&self, board: &Block) -> u64;
    /// a human-readable summary of what the goal rewards
    fn describe(&self) -> String;
}

/// Rewards target-colored cells on the outer edge of the board. A cell
/// counts once per edge it touches, so corner cells count twice.
pub struct PerimeterGoal {
    target: Color,
}
impl PerimeterGoal {
    pub fn new(target: Color) -> Self {
        Self { target }
    }
}
impl Goal for PerimeterGoal {
    fn target(&self) -> Color {
        self.target
    }
    #[allow(clippy::cast_possible_truncation)] // cell counts fit comfortably
    fn score(&self, board: &Block) -> u64 {
        let grid = board.flatten();
        let side = grid.side();
        let _span = trace_span!("perimeter_score", side).entered();
        let last = side - 1;
        let total = (0..side)
            .map(|i| {
                [
                    grid.get(i, 0),
                    grid.get(i, last),
                    grid.get(0, i),
                    grid.get(last, i),
                ]
                .into_iter()
                .filter(|&cell| cell == self.target)
                .count() as u64
            })
            .sum();
        trace!(total, "scored");
        total
    }
    fn describe(&self) -> String {
        format!("most {} cells on the board edge", self.target)
    }
}

/// Rewards the largest blob of the target color: a maximal group of
/// cells connected edge to edge (corners do not connect).
pub struct BlobGoal {
    target: Color,
}
impl BlobGoal {
    pub fn new(target: Color) -> Self {
        Self { target }
    }

    /// Size of the undiscovered blob of the target color containing the
    /// given cell; 0 if the cell is out of bounds, already visited, or
    /// off-color. Marks every cell it looks at, so a full scan stays
    /// linear in the cell count.
    fn blob_size(&self, col: i64, row: i64, grid: &Grid, visited: &mut [Visit]) -> u64 {
        #[allow(clippy::cast_possible_wrap)] // side is capped by Block::MAX_DEPTH
        let side = grid.side() as i64;
        if col < 0 || col >= side || row < 0 || row >= side {
            return 0;
        }
        #[allow(clippy::cast_sign_loss)] // bounds checked above
        let at = (col * side + row) as usize;
        match visited[at] {
            Visit::Miss | Visit::Match => 0,
            #[allow(clippy::cast_sign_loss)] // bounds checked above
            Visit::Unvisited if grid.get(col as usize, row as usize) != self.target => {
                visited[at] = Visit::Miss;
                0
            }
            Visit::Unvisited => {
                visited[at] = Visit::Match;
                1 + self.blob_size(col, row - 1, grid, visited)
                    + self.blob_size(col, row + 1, grid, visited)
                    + self.blob_size(col - 1, row, grid, visited)
                    + self.blob_size(col + 1, row, grid, visited)
            }
        }
    }
}
impl Goal for BlobGoal {
    fn target(&self) -> Color {
        self.target
    }
    #[allow(clippy::cast_possible_wrap)] // side is capped by Block::MAX_DEPTH
    fn score(&self, board: &Block) -> u64 {
        let grid = board.flatten();
        let side = grid.side();
        let _span = trace_span!("blob_score", side).entered();
        let mut visited = vec![Visit::Unvisited; side * side];
        let total = (0..side)
            .cartesian_product(0..side)
            .map(|(col, row)| self.blob_size(col as i64, row as i64, &grid, &mut visited))
            .max()
            .unwrap_or(0);
        trace!(total, "scored");
        total
    }
    fn describe(&self) -> String {
        format!("largest connected {} region", self.target)
    }
}

/// Per-cell flood-fill state, parallel to the flattened grid and rebuilt
/// for every scoring call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Visit {
    Unvisited,
    Miss,
    Match,
}
