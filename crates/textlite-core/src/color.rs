//! RGB colors for the text foreground and the color schemes.

use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const NEON_GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
    pub const DARK_GREEN: Rgb = Rgb::new(0x00, 0x33, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to `0.0..=1.0`, the form GUI toolkits expect.
    pub fn to_f32(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|c| f32::from(c) / 255.0)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            // #RGB shorthand
            3 => {
                let channel =
                    |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => None,
        }
    }
}

/// Named swatches offered by the color picker.
pub const PALETTE: &[(&str, Rgb)] = &[
    ("black", Rgb::BLACK),
    ("white", Rgb::WHITE),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("red", Rgb::new(0xFF, 0x00, 0x00)),
    ("maroon", Rgb::new(0x80, 0x00, 0x00)),
    ("orange", Rgb::new(0xFF, 0xA5, 0x00)),
    ("yellow", Rgb::new(0xFF, 0xFF, 0x00)),
    ("green", Rgb::new(0x00, 0x80, 0x00)),
    ("lime", Rgb::NEON_GREEN),
    ("teal", Rgb::new(0x00, 0x80, 0x80)),
    ("cyan", Rgb::new(0x00, 0xFF, 0xFF)),
    ("blue", Rgb::new(0x00, 0x00, 0xFF)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
    ("purple", Rgb::new(0x80, 0x00, 0x80)),
    ("magenta", Rgb::new(0xFF, 0x00, 0xFF)),
    ("brown", Rgb::new(0xA5, 0x2A, 0x2A)),
];

/// A string that is neither a known color name nor a hex code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color: {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts a palette name (case-insensitive), `#RRGGBB` or `#RGB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => PALETTE
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
                .map(|&(_, rgb)| rgb),
        };
        parsed.ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
