use crate::{Block, Quadrant};

/// Axis a swap reflects the children across.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    /// exchange the east and west columns
    Horizontal,
    /// exchange the north and south rows
    Vertical,
}

impl Block {
    /// Swap the child subtrees of this block across the given axis.
    ///
    /// Each exchanged pair is relocated by the positional delta to its
    /// sibling's slot, translating the whole subtree, and the pair's
    /// slots are exchanged so positions stay consistent with indices.
    /// Only the immediate children move; grandchildren keep their own
    /// arrangement and are merely carried along.
    ///
    /// Returns true iff the swap was performed.
    pub fn swap(&mut self, axis: Axis) -> bool {
        let children = match self.children_mut() {
            Some(children) => children,
            None => return false,
        };
        let (a, b, c, d) = match axis {
            Axis::Horizontal => (Quadrant::NE, Quadrant::NW, Quadrant::SW, Quadrant::SE),
            Axis::Vertical => (Quadrant::NE, Quadrant::SE, Quadrant::NW, Quadrant::SW),
        };
        let mut exchange = |from: Quadrant, to: Quadrant| {
            let delta = children[to].pos - children[from].pos;
            children[from].offset(delta);
            children[to].offset(-delta);
            let (x, y) = children.pair_mut(from, to);
            std::mem::swap(x, y);
        };
        exchange(a, b);
        exchange(c, d);
        true
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use crate::test_util::boards;
    use crate::{Axis, Block, Color, Pos, Quad, Quadrant};

    fn corners() -> Block {
        let mut root = Block::new(Pos::new(0, 0), 4, Color::RED, 2);
        root.subdivide(Quad {
            ne: Color::RED,
            nw: Color::OLIVE,
            sw: Color::GOLD,
            se: Color::TEAL,
        });
        root
    }

    #[test]
    fn horizontal_exchanges_columns() {
        let mut root = corners();
        assert!(root.swap(Axis::Horizontal));
        root.validate();
        let children = root.children().unwrap();
        assert_eq!(children[Quadrant::NE].color(), Some(Color::OLIVE));
        assert_eq!(children[Quadrant::NW].color(), Some(Color::RED));
        assert_eq!(children[Quadrant::SW].color(), Some(Color::TEAL));
        assert_eq!(children[Quadrant::SE].color(), Some(Color::GOLD));
    }

    #[test]
    fn vertical_exchanges_rows() {
        let mut root = corners();
        assert!(root.swap(Axis::Vertical));
        root.validate();
        let children = root.children().unwrap();
        assert_eq!(children[Quadrant::NE].color(), Some(Color::TEAL));
        assert_eq!(children[Quadrant::NW].color(), Some(Color::GOLD));
        assert_eq!(children[Quadrant::SW].color(), Some(Color::OLIVE));
        assert_eq!(children[Quadrant::SE].color(), Some(Color::RED));
    }

    #[test]
    fn carries_grandchildren_along() {
        let mut root = corners();
        root.children_mut().unwrap()[Quadrant::NE].subdivide(Quad::splat(Color::GOLD));
        assert!(root.swap(Axis::Horizontal));
        root.validate();

        // the split subtree now sits in the north-west slot, translated
        let nw = &root.children().unwrap()[Quadrant::NW];
        assert!(!nw.is_leaf());
        assert_eq!(nw.pos(), Pos::new(0, 0));
        assert_eq!(nw.children().unwrap()[Quadrant::SE].pos(), Pos::new(1, 1));
    }

    #[test]
    fn refuses_on_a_leaf() {
        let mut leaf = Block::new(Pos::new(0, 0), 4, Color::RED, 1);
        assert!(!leaf.swap(Axis::Horizontal));
        assert!(!leaf.swap(Axis::Vertical));
    }

    proptest! {
        #[test]
        fn twice_is_the_identity(mut board in boards(), vertical: bool) {
            let axis = if vertical { Axis::Vertical } else { Axis::Horizontal };
            let before = board.clone();
            let swapped = board.swap(axis);
            assert_eq!(board.swap(axis), swapped);
            prop_assert_eq!(board, before);
        }
    }
}
