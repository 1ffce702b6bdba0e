use crate::{Color, Quad};

/// A square matrix of unit-cell colors, one cell per deepest possible
/// leaf, stored column-major: index 0 is the upper-left cell, columns
/// run west to east, rows north to south.
///
/// Derived from a block tree per scoring call and discarded afterwards.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    side: usize,
    cells: Vec<Color>,
}
impl Grid {
    pub(crate) fn solid(side: usize, color: Color) -> Self {
        Self {
            side,
            cells: vec![color; side * side],
        }
    }
    /// assembles four equally sized quadrant grids into one twice the side
    pub(crate) fn splice(parts: Quad<Grid>) -> Self {
        let half = parts.nw.side;
        debug_assert!(parts.iter().all(|part| part.side == half));
        let side = half * 2;
        let mut cells = Vec::with_capacity(side * side);
        for col in 0..half {
            cells.extend_from_slice(parts.nw.column(col));
            cells.extend_from_slice(parts.sw.column(col));
        }
        for col in 0..half {
            cells.extend_from_slice(parts.ne.column(col));
            cells.extend_from_slice(parts.se.column(col));
        }
        Self { side, cells }
    }

    pub fn side(&self) -> usize {
        self.side
    }
    pub fn get(&self, col: usize, row: usize) -> Color {
        assert!(col < self.side && row < self.side, "cell out of bounds");
        self.cells[col * self.side + row]
    }
    fn column(&self, col: usize) -> &[Color] {
        &self.cells[col * self.side..][..self.side]
    }
}

#[cfg(test)]
mod test {
    use crate::{Color, Grid, Quad};

    #[test]
    fn splice_keeps_quadrant_layout() {
        let grid = Grid::splice(Quad {
            ne: Grid::solid(1, Color::RED),
            nw: Grid::solid(1, Color::OLIVE),
            sw: Grid::solid(1, Color::GOLD),
            se: Grid::solid(1, Color::TEAL),
        });
        assert_eq!(grid.side(), 2);
        assert_eq!(grid.get(1, 0), Color::RED);
        assert_eq!(grid.get(0, 0), Color::OLIVE);
        assert_eq!(grid.get(0, 1), Color::GOLD);
        assert_eq!(grid.get(1, 1), Color::TEAL);
    }

    #[test]
    fn solid_fills_every_cell() {
        let grid = Grid::solid(4, Color::TEAL);
        for col in 0..4 {
            for row in 0..4 {
                assert_eq!(grid.get(col, row), Color::TEAL);
            }
        }
    }
}
