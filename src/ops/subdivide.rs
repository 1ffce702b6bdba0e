use crate::{Block, Color, Fill, Quad};

impl Block {
    /// A block can be subdivided if it is a leaf and not already at the
    /// deepest allowed level.
    pub fn is_subdividable(&self) -> bool {
        self.is_leaf() && self.level != self.max_depth
    }

    /// Split this block into four children filled with the given colors,
    /// one per quadrant. The caller (normally an external generator)
    /// chooses the colors.
    ///
    /// Returns true iff the split was performed.
    pub fn subdivide(&mut self, colors: Quad<Color>) -> bool {
        if !self.is_subdividable() {
            return false;
        }
        let children = colors.index_map(|q, color| {
            Block::with_level(
                self.child_pos(q),
                self.child_width(),
                color,
                self.level + 1,
                self.max_depth,
            )
        });
        self.fill = Fill::Split(Box::new(children));
        true
    }
}
