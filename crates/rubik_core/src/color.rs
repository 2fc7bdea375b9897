use std::fmt;

/// Sticker color.
///
/// The six named constants are the solved colors. Other values are valid and
/// are useful for marking individual stickers, for example when checking
/// exactly where each sticker goes during a move.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Color(pub u8);

impl Color {
    /// Solved color of [`crate::Face::Up`].
    pub const WHITE: Self = Self(0);
    /// Solved color of [`crate::Face::Down`].
    pub const YELLOW: Self = Self(1);
    /// Solved color of [`crate::Face::Front`].
    pub const BLUE: Self = Self(2);
    /// Solved color of [`crate::Face::Back`].
    pub const GREEN: Self = Self(3);
    /// Solved color of [`crate::Face::Right`].
    pub const RED: Self = Self(4);
    /// Solved color of [`crate::Face::Left`].
    pub const ORANGE: Self = Self(5);

    /// Names of the solved colors, indexed by color ID.
    pub const NAMES: [&'static str; 6] = ["white", "yellow", "blue", "green", "red", "orange"];

    /// Returns the name of the color, or `None` if it is not one of the six
    /// solved colors.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMES.get(self.0 as usize).copied()
    }

    /// Returns the single-character abbreviation used when printing a net.
    pub fn abbr(self) -> char {
        match self.name() {
            Some(name) => name.chars().next().unwrap_or('?').to_ascii_uppercase(),
            None => '?',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "#{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(Color::ORANGE.to_string(), "orange");
        assert_eq!(Color(42).to_string(), "#42");
        assert_eq!(Color::WHITE.abbr(), 'W');
        assert_eq!(Color(200).abbr(), '?');
    }
}
