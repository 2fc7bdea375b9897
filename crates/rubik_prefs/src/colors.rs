use std::fmt;
use std::str::FromStr;

use rubik_core::Color;
use serde::{Deserialize, Serialize};

/// 8-bit sRGB color written as `"#rrggbb"` (or shorthand `"#rgb"`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub rgb: [u8; 3],
}
impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        let mut rgb = [0_u8; 3];
        if digits.len() == 3 {
            let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
            hex::decode_to_slice(doubled, &mut rgb)?;
        } else {
            hex::decode_to_slice(digits, &mut rgb)?;
        }
        Ok(Self { rgb })
    }
}
impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// Display colors for stickers and the scene around them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColorScheme {
    pub white: Rgb,
    pub yellow: Rgb,
    pub blue: Rgb,
    pub green: Rgb,
    pub red: Rgb,
    pub orange: Rgb,
    /// Used for sticker colors outside the six solved colors.
    pub unknown: Rgb,
    pub body: Rgb,
    pub background: Rgb,
}
impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            white: Rgb::new(0xff, 0xff, 0xff),
            yellow: Rgb::new(0xff, 0xe6, 0x00),
            blue: Rgb::new(0x00, 0x66, 0xff),
            green: Rgb::new(0x00, 0xcc, 0x33),
            red: Rgb::new(0xff, 0x1a, 0x00),
            orange: Rgb::new(0xff, 0x66, 0x00),
            unknown: Rgb::new(0x80, 0x80, 0x80),
            body: Rgb::new(0x33, 0x33, 0x33),
            background: Rgb::new(0xf2, 0xf2, 0xf2),
        }
    }
}
impl ColorScheme {
    /// Returns the display color for a sticker color.
    pub fn get(&self, color: Color) -> Rgb {
        match color {
            Color::WHITE => self.white,
            Color::YELLOW => self.yellow,
            Color::BLUE => self.blue,
            Color::GREEN => self.green,
            Color::RED => self.red,
            Color::ORANGE => self.orange,
            _ => self.unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rgb_parse() {
        assert_eq!("#ff6600".parse::<Rgb>(), Ok(Rgb::new(0xff, 0x66, 0x00)));
        assert_eq!("f60".parse::<Rgb>(), Ok(Rgb::new(0xff, 0x66, 0x00)));
        assert!("#ff66".parse::<Rgb>().is_err());
        assert_eq!(Rgb::new(0, 0x66, 0xff).to_string(), "#0066ff");
    }

    #[test]
    fn test_default_scheme_matches_default_file() {
        assert_eq!(ColorScheme::default(), crate::DEFAULT_PREFS.colors);
    }

    #[test]
    fn test_scheme_lookup() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.get(Color::RED), scheme.red);
        assert_eq!(scheme.get(Color(42)), scheme.unknown);
    }
}
