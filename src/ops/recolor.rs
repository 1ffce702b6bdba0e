use crate::{Block, Color, Fill};

impl Block {
    /// Change this block's color iff it is a leaf at the deepest level
    /// and the new color differs from the current one. Painting is only
    /// allowed at the finest granularity.
    ///
    /// Returns true iff the color was changed.
    pub fn recolor(&mut self, color: Color) -> bool {
        if self.level != self.max_depth {
            return false;
        }
        match &mut self.fill {
            Fill::Solid(current) if *current != color => {
                *current = color;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Block, Color, Pos, Quad, Quadrant};

    #[test]
    fn paints_a_deepest_leaf() {
        let mut root = Block::new(Pos::new(0, 0), 4, Color::RED, 1);
        root.subdivide(Quad::splat(Color::OLIVE));
        let leaf = &mut root.children_mut().unwrap()[Quadrant::SW];
        assert!(leaf.recolor(Color::GOLD));
        assert_eq!(leaf.color(), Some(Color::GOLD));
    }

    #[test]
    fn same_color_is_a_no_op() {
        let mut leaf = Block::new(Pos::new(0, 0), 4, Color::RED, 0);
        assert!(!leaf.recolor(Color::RED));
        assert_eq!(leaf.color(), Some(Color::RED));
    }

    #[test]
    fn refuses_above_max_depth() {
        let mut root = Block::new(Pos::new(0, 0), 4, Color::RED, 2);
        assert!(!root.recolor(Color::GOLD));
        assert_eq!(root.color(), Some(Color::RED));

        root.subdivide(Quad::splat(Color::OLIVE));
        let child = &mut root.children_mut().unwrap()[Quadrant::NE];
        assert!(!child.recolor(Color::GOLD), "level 1 of 2 is still too coarse");
    }
}
