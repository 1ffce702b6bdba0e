use crate::{Color, Pos, Quad, Quadrant};

/// A square region of the board, represented as a tree.
///
/// `pos` names the upper-left corner of the region; x increases to the
/// east and y to the south, both non-negative. A block is either solid
/// (a leaf holding a color) or split into exactly four children, stored
/// in child-index order: upper-right, upper-left, lower-left,
/// lower-right. Children have the parent's `max_depth`, half its width
/// (rounded), `level + 1`, and positions derived from the parent's.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Block {
    pub(crate) pos: Pos,
    pub(crate) width: u64,
    pub(crate) level: u8,
    pub(crate) max_depth: u8,
    pub(crate) fill: Fill,
}

/// Leaf color or four children, never both.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Fill {
    Solid(Color),
    Split(Box<Quad<Block>>),
}

impl Block {
    /// deepest level a tree may be configured to subdivide to; keeps the
    /// flattened grid side addressable
    pub const MAX_DEPTH: u8 = 31;
    pub(crate) const MAX_WIDTH: u64 = 1 << 62;

    /// a level-0 single-leaf root; external generators grow it with
    /// [`Block::subdivide`]
    pub fn new(pos: Pos, width: u64, color: Color, max_depth: u8) -> Self {
        Self::with_level(pos, width, color, 0, max_depth)
    }
    pub(crate) fn with_level(pos: Pos, width: u64, color: Color, level: u8, max_depth: u8) -> Self {
        assert!(pos.x >= 0 && pos.y >= 0, "position must be non-negative");
        assert!(width > 0, "width must be positive");
        assert!(width <= Self::MAX_WIDTH, "width too large");
        assert!(level <= max_depth, "level exceeds max depth");
        assert!(max_depth <= Self::MAX_DEPTH, "max depth too large");
        Self {
            pos,
            width,
            level,
            max_depth,
            fill: Fill::Solid(color),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }
    pub fn width(&self) -> u64 {
        self.width
    }
    pub fn level(&self) -> u8 {
        self.level
    }
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
    pub fn fill(&self) -> &Fill {
        &self.fill
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self.fill, Fill::Solid(_))
    }
    pub fn color(&self) -> Option<Color> {
        match &self.fill {
            Fill::Solid(color) => Some(*color),
            Fill::Split(_) => None,
        }
    }
    pub fn children(&self) -> Option<&Quad<Block>> {
        match &self.fill {
            Fill::Solid(_) => None,
            Fill::Split(children) => Some(children),
        }
    }
    pub(crate) fn children_mut(&mut self) -> Option<&mut Quad<Block>> {
        match &mut self.fill {
            Fill::Solid(_) => None,
            Fill::Split(children) => Some(children),
        }
    }

    /// width of this block's children, half this width with halves
    /// rounding up
    pub fn child_width(&self) -> u64 {
        self.width / 2 + self.width % 2
    }
    #[allow(clippy::cast_possible_wrap)] // width is capped at construction
    pub(crate) fn child_pos(&self, q: Quadrant) -> Pos {
        self.pos + Pos::in_quadrant(q, self.child_width() as i64)
    }
}

#[cfg(test)]
impl Block {
    /// asserts the structural invariants over the whole subtree
    pub(crate) fn validate(&self) {
        assert!(self.pos.x >= 0 && self.pos.y >= 0);
        assert!(self.width > 0);
        assert!(self.level <= self.max_depth);
        if let Some(children) = self.children() {
            for q in Quadrant::iter_all() {
                let child = &children[q];
                assert_eq!(child.max_depth, self.max_depth);
                assert_eq!(child.level, self.level + 1);
                assert_eq!(child.width, self.child_width());
                assert_eq!(child.pos, self.child_pos(q));
                child.validate();
            }
        }
    }
}
