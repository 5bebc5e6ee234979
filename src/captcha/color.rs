use std::fmt;
use std::str::FromStr;

use rand::Rng;

/// Hex digits a base color may be built from. `0` and `f` are left out so
/// every gray stays in the low-to-mid band and keeps contrast subtle.
pub const BASE_DIGITS: [u8; 14] = [
    0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xa, 0xb, 0xc, 0xd, 0xe,
];

/// Offset used for distinguished pairs. Every digit moves, so the shifted
/// color never shares a digit with its source.
pub const DEFAULT_SHIFT: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Not 3 or 6 digits once the leading `#` is gone.
    Length(usize),
    /// A character outside `0-9a-fA-F`.
    Digit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => write!(f, "expected 3 or 6 hex digits, got {len}"),
            Self::Digit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let digits = hex
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::Digit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits.as_slice() {
            [r, g, b] => Ok(Self::rgb(r * 0x11, g * 0x11, b * 0x11)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2)),
            _ => Err(ParseColorError::Length(digits.len())),
        }
    }
}

/// A random gray: one byte built from two palette digits, copied to all
/// three channels.
pub fn generate_base_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let hi = BASE_DIGITS[rng.gen_range(0..BASE_DIGITS.len())];
    let lo = BASE_DIGITS[rng.gen_range(0..BASE_DIGITS.len())];
    Color::gray(hi << 4 | lo)
}

/// Advances every hex digit of `color` by `offset`, wrapping modulo 16.
pub fn shift_color(color: Color, offset: i32) -> Color {
    let step = offset.rem_euclid(16) as u8;
    let shift_byte = |byte: u8| {
        let hi = ((byte >> 4) + step) % 16;
        let lo = ((byte & 0x0f) + step) % 16;
        hi << 4 | lo
    };
    Color::rgb(shift_byte(color.r), shift_byte(color.g), shift_byte(color.b))
}

/// String form of [`shift_color`]. Accepts any case and an optional `#`.
pub fn shift_hex(hex: &str, offset: i32) -> Result<Color, ParseColorError> {
    Ok(shift_color(hex.parse()?, offset))
}
