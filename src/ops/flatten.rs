use crate::{Block, Fill, Grid, Quad};

impl Block {
    /// Rasterize this subtree into a uniform grid of unit cells so that
    /// grid algorithms need not care about tree depth.
    ///
    /// The side is `2^(max_depth - level)` cells; each cell holds the
    /// color of the leaf covering it, laid out exactly as the tree's
    /// positions dictate.
    pub fn flatten(&self) -> Grid {
        let side = 1_usize << (self.max_depth - self.level);
        match &self.fill {
            Fill::Solid(color) => Grid::solid(side, *color),
            Fill::Split(children) => Grid::splice(Quad::as_ref(children).map(Block::flatten)),
        }
    }
}
