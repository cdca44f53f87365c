//! Material color value and the observable shared color parameter.
//!
//! Colors are stored as sRGB components in \[0, 1\], matching what a color
//! picker produces. Shaders receive linear values via [`Color::to_linear`].

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::Length(s.to_string()));
        }
        // from_str_radix alone would accept a sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorParseError::Digit(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// `#rrggbb`, lowercase, as accepted by `<input type="color">`.
    pub fn to_hex(&self) -> String {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", q(self.r), q(self.g), q(self.b))
    }

    pub fn to_linear(&self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Anything whose rendered color follows the shared material parameter.
pub trait ColorTarget {
    fn apply_color(&mut self, color: Color);
}

/// Single source of truth for the material color.
///
/// Every change goes through [`SharedColor::set`], which pushes the value to
/// all targets before returning, so no frame can observe two materials with
/// different colors.
#[derive(Clone, Debug)]
pub struct SharedColor {
    value: Color,
    revision: u64,
}

impl SharedColor {
    pub fn new(value: Color) -> Self {
        Self { value, revision: 0 }
    }

    pub fn get(&self) -> Color {
        self.value
    }

    /// Number of changes applied since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set(&mut self, value: Color, targets: &mut [&mut dyn ColorTarget]) {
        self.value = value;
        self.revision += 1;
        self.apply(targets);
    }

    pub fn apply(&self, targets: &mut [&mut dyn ColorTarget]) {
        for t in targets.iter_mut() {
            t.apply_color(self.value);
        }
    }
}
