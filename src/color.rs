use std::fmt::{self, Debug, Display};

/// An RGB color filling a leaf region
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub const RED: Self = Self::rgb(199, 44, 58);
    pub const OLIVE: Self = Self::rgb(138, 151, 71);
    pub const GOLD: Self = Self::rgb(255, 211, 92);
    pub const TEAL: Self = Self::rgb(1, 128, 181);
    /// the board palette, one entry per distinct goal color
    pub const PALETTE: [Self; 4] = [Self::RED, Self::OLIVE, Self::GOLD, Self::TEAL];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::RED => Some("red"),
            Self::OLIVE => Some("olive"),
            Self::GOLD => Some("gold"),
            Self::TEAL => Some("teal"),
            _ => None,
        }
    }
}
impl Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:02x}{:02x}{:02x})", self.r, self.g, self.b)
    }
}
impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    #[test]
    fn names() {
        assert_eq!(Color::RED.to_string(), "red");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
    }
}
