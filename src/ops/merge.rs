use itertools::Itertools;

use crate::{Block, Color, Fill, Quad};

impl Block {
    /// Turn this block into a leaf of its children's plurality color.
    ///
    /// Applies only one level above the deepest, where the four children
    /// are necessarily leaves. A tie for the highest count (2-2, or
    /// 1-1-1-1) is not a plurality and leaves the block untouched.
    ///
    /// Returns true iff the block was turned into a leaf.
    pub fn merge(&mut self) -> bool {
        if self.level + 1 != self.max_depth {
            return false;
        }
        let color = match self.children().and_then(plurality) {
            Some(color) => color,
            None => return false,
        };
        self.fill = Fill::Solid(color);
        true
    }
}

/// the color held by strictly more children than any other, if any
fn plurality(children: &Quad<Block>) -> Option<Color> {
    let counts = children
        .iter()
        .map(|child| child.color().expect("children above max depth are leaves"))
        .counts();
    let (&color, &best) = counts.iter().max_by_key(|&(_, count)| count)?;
    if counts.values().filter(|&&count| count == best).count() > 1 {
        None
    } else {
        Some(color)
    }
}
