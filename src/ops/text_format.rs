use std::fmt::{self, Display};

use crate::{Block, Fill};

/// Human-readable indented tree listing, one line per node, for
/// diagnostics. The exact format is not load-bearing.
impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = 2 * self.level() as usize;
        let (x, y) = (self.pos().x, self.pos().y);
        match self.fill() {
            Fill::Solid(color) => {
                writeln!(
                    f,
                    "{:indent$}leaf {color} pos=({x}, {y}) width={} level={}",
                    "",
                    self.width(),
                    self.level(),
                )
            }
            Fill::Split(children) => {
                writeln!(
                    f,
                    "{:indent$}split pos=({x}, {y}) width={} level={}",
                    "",
                    self.width(),
                    self.level(),
                )?;
                children.iter().try_for_each(|child| child.fmt(f))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use unindent::unindent;

    use crate::{Block, Color, Pos, Quad, Quadrant};

    #[test]
    fn leaf_line() {
        let leaf = Block::new(Pos::new(0, 0), 750, Color::TEAL, 1);
        assert_eq!(
            leaf.to_string(),
            "leaf teal pos=(0, 0) width=750 level=0\n"
        );
    }

    #[test]
    fn indented_listing() {
        let mut root = Block::new(Pos::new(0, 0), 4, Color::RED, 2);
        root.subdivide(Quad {
            ne: Color::RED,
            nw: Color::OLIVE,
            sw: Color::GOLD,
            se: Color::TEAL,
        });
        root.children_mut().unwrap()[Quadrant::SE].subdivide(Quad::splat(Color::GOLD));

        let expected = unindent(
            "
            split pos=(0, 0) width=4 level=0
              leaf red pos=(2, 0) width=2 level=1
              leaf olive pos=(0, 0) width=2 level=1
              leaf gold pos=(0, 2) width=2 level=1
              split pos=(2, 2) width=2 level=1
                leaf gold pos=(3, 2) width=1 level=2
                leaf gold pos=(2, 2) width=1 level=2
                leaf gold pos=(2, 3) width=1 level=2
                leaf gold pos=(3, 3) width=1 level=2
            ",
        );
        assert_eq!(root.to_string(), expected);
    }
}
