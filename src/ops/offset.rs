use crate::{Block, Pos};

impl Block {
    /// Displace this subtree, keeping every descendant's position
    /// consistent with its parent's.
    ///
    /// The single position-bookkeeping primitive shared by swap and
    /// rotate.
    pub(crate) fn offset(&mut self, amount: Pos) {
        self.pos = self.pos + amount;
        if let Some(children) = self.children_mut() {
            for child in children.iter_mut() {
                child.offset(amount);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Block, Color, Pos, Quad, Quadrant};

    #[test]
    fn reaches_grandchildren() {
        let mut root = Block::new(Pos::new(0, 0), 8, Color::RED, 2);
        root.subdivide(Quad::splat(Color::OLIVE));
        root.children_mut().unwrap()[Quadrant::SE].subdivide(Quad::splat(Color::GOLD));

        root.offset(Pos::new(3, 5));

        assert_eq!(root.pos(), Pos::new(3, 5));
        let se = &root.children().unwrap()[Quadrant::SE];
        assert_eq!(se.pos(), Pos::new(7, 9));
        assert_eq!(se.children().unwrap()[Quadrant::NW].pos(), Pos::new(7, 9));
        assert_eq!(se.children().unwrap()[Quadrant::SE].pos(), Pos::new(9, 11));
    }
}
