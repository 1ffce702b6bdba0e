//! Proptest strategies shared by the per-file test modules.

use proptest::prelude::*;

use crate::{Axis, Block, Color, Pos, Quad, Quadrant, Turn};

/// Recursive board outline: which regions split and which colors the
/// leaves take. Built into a real tree through the public API.
#[derive(Clone, Debug)]
pub(crate) enum Shape {
    Solid(Color),
    Split(Box<Quad<Shape>>),
}

pub(crate) fn colors() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::PALETTE.to_vec())
}

pub(crate) fn quadrants() -> impl Strategy<Value = Quadrant> {
    prop::sample::select(vec![Quadrant::NE, Quadrant::NW, Quadrant::SW, Quadrant::SE])
}

fn shapes(levels: u32) -> impl Strategy<Value = Shape> {
    colors().prop_map(Shape::Solid).prop_recursive(levels, 85, 4, |inner| {
        (inner.clone(), inner.clone(), inner.clone(), inner)
            .prop_map(|(ne, nw, sw, se)| Shape::Split(Box::new(Quad { ne, nw, sw, se })))
    })
}

const BOARD_DEPTH: u8 = 3;

/// Boards at the origin with a unit cell width of 1, so flattened cell
/// coordinates equal positions.
pub(crate) fn boards() -> impl Strategy<Value = Block> {
    shapes(u32::from(BOARD_DEPTH)).prop_map(|shape| {
        let mut root = Block::new(
            Pos::new(0, 0),
            1 << BOARD_DEPTH,
            seed_color(&shape),
            BOARD_DEPTH,
        );
        grow(&mut root, &shape);
        root
    })
}

fn grow(block: &mut Block, shape: &Shape) {
    if let Shape::Split(kids) = shape {
        if block.subdivide(Quad::as_ref(kids).map(seed_color)) {
            let children = block.children_mut().expect("just subdivided");
            for q in Quadrant::iter_all() {
                grow(&mut children[q], &kids[q]);
            }
        }
    }
}

fn seed_color(shape: &Shape) -> Color {
    match shape {
        Shape::Solid(color) => *color,
        Shape::Split(_) => Color::TEAL,
    }
}

/// One transform aimed at the node reached by walking `path` from the
/// root (stopping early at a leaf).
#[derive(Clone, Debug)]
pub(crate) struct Op {
    pub(crate) path: Vec<Quadrant>,
    pub(crate) kind: OpKind,
}

#[derive(Clone, Debug)]
pub(crate) enum OpKind {
    Swap(Axis),
    Rotate(Turn),
    Merge,
    Recolor(Color),
    Subdivide(Quad<Color>),
}
impl OpKind {
    pub(crate) fn apply(self, block: &mut Block) -> bool {
        match self {
            Self::Swap(axis) => block.swap(axis),
            Self::Rotate(turn) => block.rotate(turn),
            Self::Merge => block.merge(),
            Self::Recolor(color) => block.recolor(color),
            Self::Subdivide(colors) => block.subdivide(colors),
        }
    }
}

pub(crate) fn ops() -> impl Strategy<Value = Vec<Op>> {
    let quad_colors = (colors(), colors(), colors(), colors())
        .prop_map(|(ne, nw, sw, se)| Quad { ne, nw, sw, se });
    let kind = prop_oneof![
        prop::sample::select(vec![Axis::Horizontal, Axis::Vertical]).prop_map(OpKind::Swap),
        prop::sample::select(vec![Turn::Clockwise, Turn::CounterClockwise])
            .prop_map(OpKind::Rotate),
        Just(OpKind::Merge),
        colors().prop_map(OpKind::Recolor),
        quad_colors.prop_map(OpKind::Subdivide),
    ];
    let op = (prop::collection::vec(quadrants(), 0..=usize::from(BOARD_DEPTH)), kind)
        .prop_map(|(path, kind)| Op { path, kind });
    prop::collection::vec(op, 0..12)
}
