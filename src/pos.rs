use std::ops::{Add, Neg, Sub};

use crate::Quadrant;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// x increases to the east
/// y increases to the south
pub struct Pos {
    pub x: i64,
    pub y: i64,
}
impl Pos {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    /// relative position of the child in quadrant `q`, given the child width
    pub(crate) fn in_quadrant(q: Quadrant, width: i64) -> Self {
        Self {
            x: if q.is_west() { 0 } else { width },
            y: if q.is_north() { 0 } else { width },
        }
    }
}
impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Neg for Pos {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
