//! Border identity: style tag, color, and width
//!
//! A [`Border`] is the resolved visual description of one box edge. The
//! layout engine builds one per styled edge and typically shares the same
//! value across every edge that resolved to the same styling, so equality
//! and hashing are defined over the value (style tag, color, width) and
//! never over instance identity.
//!
//! The drawing operations for borders live in [`crate::paint::border`];
//! this module only defines the value semantics.
//!
//! # Absent borders
//!
//! There is no "no border" sentinel value. An edge without a border is
//! represented as `Option<Border>::None` at the call site, so drawing
//! operations cannot be invoked on an absent border by construction. A
//! zero-width `Border` is a caller contract violation that renderers treat
//! as a no-op, not as absence.
//!
//! # Examples
//!
//! ```
//! use fastborder::{Border, BorderStyle, Color};
//!
//! let a = Border::solid(Color::BLACK, 1.0);
//! let b = Border::new(BorderStyle::Solid, Color::BLACK, 1.0);
//! assert_eq!(a, b);
//! assert_eq!(a.hash_code(), b.hash_code());
//!
//! let dashed = Border::dashed(Color::BLACK, 1.0);
//! assert_ne!(a, dashed);
//! ```

use crate::style::color::Color;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// The visual stroke pattern of a border
///
/// Each tag selects one renderer; the tag also participates in border
/// equality, so two borders of different styles never compare equal even
/// when color and width match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// Single full-width stroke
    Solid,
    /// Dashes five widths long
    Dashed,
    /// Square dots one width long
    Dotted,
    /// Circular dots drawn with a round line cap
    RoundDots,
    /// Two parallel strokes of a third of the width each
    Double,
    /// 3-D bevel reading as a carved channel
    Groove,
    /// 3-D bevel reading as a sunken face
    Inset,
    /// 3-D bevel reading as a raised face
    Outset,
    /// 3-D bevel reading as a raised rim
    Ridge,
}

/// The resolved border of one box edge
///
/// Immutable after construction. Cheap to clone and safe to share across
/// concurrent layout passes; the only interior state is the memoized hash,
/// which is computed at most once per value.
#[derive(Debug, Clone)]
pub struct Border {
    color: Color,
    width: f32,
    style: BorderStyle,
    hash: OnceLock<u64>,
}

impl Border {
    /// Creates a border with the given style, color, and width
    ///
    /// `width` is in page units and must be positive; renderers skip
    /// drawing entirely for non-positive widths.
    pub fn new(style: BorderStyle, color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style,
            hash: OnceLock::new(),
        }
    }

    /// Creates a solid border
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(BorderStyle::Solid, color, width)
    }

    /// Creates a dashed border
    pub fn dashed(color: Color, width: f32) -> Self {
        Self::new(BorderStyle::Dashed, color, width)
    }

    /// Creates a dotted border with square dots
    pub fn dotted(color: Color, width: f32) -> Self {
        Self::new(BorderStyle::Dotted, color, width)
    }

    /// Creates a dotted border with circular dots
    pub fn round_dots(color: Color, width: f32) -> Self {
        Self::new(BorderStyle::RoundDots, color, width)
    }

    /// Creates a double border
    pub fn double(color: Color, width: f32) -> Self {
        Self::new(BorderStyle::Double, color, width)
    }

    /// Creates a groove 3-D border
    pub fn groove(color: Color, width: f32) -> Self {
        Self::new(BorderStyle::Groove, color, width)
    }

    /// Creates an inset 3-D border
    pub fn inset(color: Color, width: f32) -> Self {
        Self::new(BorderStyle::Inset, color, width)
    }

    /// Creates an outset 3-D border
    pub fn outset(color: Color, width: f32) -> Self {
        Self::new(BorderStyle::Outset, color, width)
    }

    /// Creates a ridge 3-D border
    pub fn ridge(color: Color, width: f32) -> Self {
        Self::new(BorderStyle::Ridge, color, width)
    }

    /// The style tag of this border
    pub fn style(&self) -> BorderStyle {
        self.style
    }

    /// The border color
    pub fn color(&self) -> Color {
        self.color
    }

    /// The border width in page units
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The memoized hash of this border value
    ///
    /// Computed as `floor(width) * 31 + hash(color)` on first call and
    /// cached. The cell is single-assignment, so a concurrent first read
    /// can at worst duplicate the computation, never observe a torn value.
    /// Width and color are immutable, so the cache can never go stale.
    pub fn hash_code(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let mut hasher = FxHasher::default();
            self.color.hash(&mut hasher);
            (self.width.floor() as i64 as u64)
                .wrapping_mul(31)
                .wrapping_add(hasher.finish())
        })
    }
}

impl PartialEq for Border {
    /// Borders are equal iff style tag, color, and width all match
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style && self.color == other.color && self.width == other.width
    }
}

impl Hash for Border {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_when_style_color_width_match() {
        let a = Border::solid(Color::rgb(0.0, 0.0, 0.0), 1.0);
        let b = Border::solid(Color::rgb(0.0, 0.0, 0.0), 1.0);
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_color_change_breaks_equality() {
        let a = Border::solid(Color::BLACK, 1.0);
        let b = Border::solid(Color::RED, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_width_change_breaks_equality() {
        let a = Border::solid(Color::BLACK, 1.0);
        let b = Border::solid(Color::BLACK, 2.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_style_change_breaks_equality() {
        // Same color and width, different concrete style.
        let a = Border::groove(Color::BLACK, 1.0);
        let b = Border::ridge(Color::BLACK, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_identity_is_irrelevant() {
        let a = Border::dotted(Color::GRAY, 0.5);
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_code_is_idempotent() {
        let border = Border::double(Color::rgb(0.3, 0.6, 0.9), 2.5);
        assert_eq!(border.hash_code(), border.hash_code());
    }

    #[test]
    fn test_hash_formula() {
        let color = Color::cmyk(0.1, 0.2, 0.3, 0.4);
        let border = Border::solid(color, 7.9);
        let mut hasher = FxHasher::default();
        color.hash(&mut hasher);
        let expected = 7u64.wrapping_mul(31).wrapping_add(hasher.finish());
        assert_eq!(border.hash_code(), expected);
    }

    #[test]
    fn test_hash_survives_clone() {
        let a = Border::outset(Color::GREEN, 4.0);
        let before = a.hash_code();
        assert_eq!(a.clone().hash_code(), before);
    }

    #[test]
    fn test_borders_usable_as_map_keys() {
        use std::collections::HashMap;

        let mut merged: HashMap<u64, u32> = HashMap::new();
        let a = Border::solid(Color::BLACK, 1.0);
        let b = Border::solid(Color::BLACK, 1.0);
        *merged.entry(a.hash_code()).or_insert(0) += 1;
        *merged.entry(b.hash_code()).or_insert(0) += 1;
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[&a.hash_code()], 2);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Border>();
    }
}
