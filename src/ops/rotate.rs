use crate::{Block, Quad, Quadrant};

/// Handedness of a rotation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}
impl Turn {
    /// the slot a child in quadrant `q` moves into
    fn destination(self, q: Quadrant) -> Quadrant {
        match self {
            Self::Clockwise => q.clockwise(),
            Self::CounterClockwise => q.counter_clockwise(),
        }
    }
}

impl Block {
    /// Rotate this block and all its descendants a quarter turn.
    ///
    /// Each child subtree is translated to its destination slot's
    /// coordinates (deltas taken from the stored positions before
    /// anything moves), the slots are cyclically permuted to match, and
    /// the same turn then recurses into every repositioned child, so the
    /// whole subtree spins with one consistent handedness.
    ///
    /// Returns true iff the rotation was performed.
    pub fn rotate(&mut self, turn: Turn) -> bool {
        let children = match self.children_mut() {
            Some(children) => children,
            None => return false,
        };
        let deltas = Quad::from_fn(|q| children[turn.destination(q)].pos - children[q].pos);
        for q in Quadrant::iter_all() {
            children[q].offset(deltas[q]);
        }
        match turn {
            Turn::Clockwise => children.spin_cw(),
            Turn::CounterClockwise => children.spin_ccw(),
        }
        for child in children.iter_mut() {
            child.rotate(turn);
        }
        true
    }
}

impl<T> Quad<T> {
    // slot permutations matching Turn::destination
    fn spin_cw(&mut self) {
        std::mem::swap(&mut self.ne, &mut self.nw);
        std::mem::swap(&mut self.ne, &mut self.sw);
        std::mem::swap(&mut self.ne, &mut self.se);
    }
    fn spin_ccw(&mut self) {
        std::mem::swap(&mut self.ne, &mut self.se);
        std::mem::swap(&mut self.ne, &mut self.sw);
        std::mem::swap(&mut self.ne, &mut self.nw);
    }
}
