//! Device color values consumed by the border renderers
//!
//! This module provides the opaque color value type the canvas interface
//! accepts. Colors are device-space values with components in `[0, 1]` and
//! component-wise equality.
//!
//! # Color Spaces
//!
//! - **RGB**: Red, Green, Blue
//! - **CMYK**: Cyan, Magenta, Yellow, Key (black)
//! - **Gray**: single luminance component
//!
//! Color-space conversion and validation are out of scope here; a color is
//! forwarded to the canvas exactly as constructed. The only manipulation
//! this crate performs is the lighter/darker shading used by the 3-D border
//! styles.
//!
//! # Examples
//!
//! ```
//! use fastborder::Color;
//!
//! let red = Color::rgb(1.0, 0.0, 0.0);
//! let ink = Color::cmyk(0.0, 0.0, 0.0, 1.0);
//! let mid = Color::gray(0.5);
//!
//! assert_ne!(red, Color::BLACK);
//! assert_eq!(mid.lighter().darker(), Color::gray(0.46875));
//! ```

use std::hash::{Hash, Hasher};

/// Multiplicative factor applied by [`Color::lighter`].
const LIGHTEN_FACTOR: f32 = 1.25;

/// Multiplicative factor applied by [`Color::darker`].
const DARKEN_FACTOR: f32 = 0.75;

/// A device color value with components in `[0, 1]`
///
/// Equality is component-wise: two colors are equal iff they are in the same
/// color space and every component matches exactly.
///
/// # Examples
///
/// ```
/// use fastborder::Color;
///
/// let a = Color::rgb(0.2, 0.4, 0.6);
/// let b = Color::rgb(0.2, 0.4, 0.6);
/// assert_eq!(a, b);
/// assert_ne!(a, Color::gray(0.4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Device RGB
    Rgb { r: f32, g: f32, b: f32 },
    /// Device CMYK
    Cmyk { c: f32, m: f32, y: f32, k: f32 },
    /// Device gray
    Gray { value: f32 },
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::Rgb { r: 0.0, g: 0.0, b: 0.0 };

    /// Opaque white
    pub const WHITE: Self = Self::Rgb { r: 1.0, g: 1.0, b: 1.0 };

    /// Mid gray
    pub const GRAY: Self = Self::Gray { value: 0.5 };

    /// Opaque red
    pub const RED: Self = Self::Rgb { r: 1.0, g: 0.0, b: 0.0 };

    /// Opaque green
    pub const GREEN: Self = Self::Rgb { r: 0.0, g: 1.0, b: 0.0 };

    /// Opaque blue
    pub const BLUE: Self = Self::Rgb { r: 0.0, g: 0.0, b: 1.0 };

    /// Creates a device RGB color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Creates a device CMYK color
    pub const fn cmyk(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self::Cmyk { c, m, y, k }
    }

    /// Creates a device gray color
    pub const fn gray(value: f32) -> Self {
        Self::Gray { value }
    }

    /// Returns a lighter shade of this color
    ///
    /// Used by the 3-D border styles for the illuminated half of the border
    /// band. Components are clamped to `[0, 1]`.
    pub fn lighter(self) -> Self {
        self.shade(LIGHTEN_FACTOR)
    }

    /// Returns a darker shade of this color
    ///
    /// Used by the 3-D border styles for the shadowed half of the border
    /// band. Components are clamped to `[0, 1]`.
    pub fn darker(self) -> Self {
        self.shade(DARKEN_FACTOR)
    }

    /// Scales the perceived intensity of this color by `factor`
    ///
    /// Additive components (RGB, gray) are scaled directly. Subtractive CMYK
    /// components are scaled through their complement so a factor above 1.0
    /// always moves toward paper white.
    fn shade(self, factor: f32) -> Self {
        let scale = |v: f32| (v * factor).clamp(0.0, 1.0);
        match self {
            Self::Rgb { r, g, b } => Self::Rgb {
                r: scale(r),
                g: scale(g),
                b: scale(b),
            },
            Self::Gray { value } => Self::Gray { value: scale(value) },
            Self::Cmyk { c, m, y, k } => {
                let scale_ink = |v: f32| (1.0 - (1.0 - v) * factor).clamp(0.0, 1.0);
                Self::Cmyk {
                    c: scale_ink(c),
                    m: scale_ink(m),
                    y: scale_ink(y),
                    k: scale_ink(k),
                }
            }
        }
    }
}

// Components are finite by contract, so hashing the bit patterns keeps
// equal colors hashing equally without an Eq bound on f32.
impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match *self {
            Self::Rgb { r, g, b } => {
                state.write_u8(0);
                state.write_u32(r.to_bits());
                state.write_u32(g.to_bits());
                state.write_u32(b.to_bits());
            }
            Self::Cmyk { c, m, y, k } => {
                state.write_u8(1);
                state.write_u32(c.to_bits());
                state.write_u32(m.to_bits());
                state.write_u32(y.to_bits());
                state.write_u32(k.to_bits());
            }
            Self::Gray { value } => {
                state.write_u8(2);
                state.write_u32(value.to_bits());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHasher;

    fn hash_of(color: Color) -> u64 {
        let mut hasher = FxHasher::default();
        color.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_component_wise_equality() {
        assert_eq!(Color::rgb(0.1, 0.2, 0.3), Color::rgb(0.1, 0.2, 0.3));
        assert_ne!(Color::rgb(0.1, 0.2, 0.3), Color::rgb(0.1, 0.2, 0.4));
    }

    #[test]
    fn test_spaces_never_equal() {
        // Same luminance, different space: still distinct values.
        assert_ne!(Color::gray(0.0), Color::BLACK);
        assert_ne!(Color::cmyk(0.0, 0.0, 0.0, 1.0), Color::BLACK);
    }

    #[test]
    fn test_lighter_rgb() {
        let lighter = Color::rgb(0.2, 0.4, 0.8).lighter();
        assert_eq!(lighter, Color::rgb(0.25, 0.5, 1.0));
    }

    #[test]
    fn test_darker_rgb() {
        let darker = Color::rgb(0.2, 0.4, 0.8).darker();
        assert_eq!(darker, Color::rgb(0.15, 0.3, 0.6));
    }

    #[test]
    fn test_lighter_clamps() {
        assert_eq!(Color::WHITE.lighter(), Color::WHITE);
        assert_eq!(Color::gray(0.9).lighter(), Color::gray(1.0));
    }

    #[test]
    fn test_darker_black_stays_black() {
        assert_eq!(Color::BLACK.darker(), Color::BLACK);
    }

    #[test]
    fn test_cmyk_lighter_reduces_ink() {
        let Color::Cmyk { c, m, y, k } = Color::cmyk(0.5, 0.5, 0.5, 0.5).lighter() else {
            panic!("shading must preserve the color space");
        };
        assert!(c < 0.5 && m < 0.5 && y < 0.5 && k < 0.5);
    }

    #[test]
    fn test_cmyk_darker_adds_ink() {
        let Color::Cmyk { c, m, y, k } = Color::cmyk(0.0, 0.0, 0.0, 0.0).darker() else {
            panic!("shading must preserve the color space");
        };
        assert_eq!((c, m, y, k), (0.25, 0.25, 0.25, 0.25));
    }

    #[test]
    fn test_equal_colors_hash_equally() {
        assert_eq!(hash_of(Color::rgb(0.1, 0.2, 0.3)), hash_of(Color::rgb(0.1, 0.2, 0.3)));
        assert_ne!(hash_of(Color::gray(0.0)), hash_of(Color::BLACK));
    }
}
