//! Deterministic colors for brands missing from the palette.
//!
//! The brand name is folded into a 32-bit signed hash (`acc * 31 + c`, wrapping
//! on overflow) and the hash picks a hue. Saturation and lightness are fixed so
//! every generated color has the same visual weight.
//!
//! The hash is computed over the name as given; callers that want
//! case-insensitive fallbacks must normalize before calling.

use crate::color::BrandColor;

/// Saturation (percent) of every generated color.
pub const FALLBACK_SATURATION: u8 = 80;

/// Lightness (percent) of every generated color.
pub const FALLBACK_LIGHTNESS: u8 = 60;

/// Hash a brand name.
///
/// Each Unicode scalar value is combined as `c + ((acc << 5) - acc)` with
/// `i32` wraparound at every step.
///
/// ```
/// use brand_colors::fallback::brand_hash;
///
/// assert_eq!(brand_hash(""), 0);
/// assert_eq!(brand_hash("a"), 97);
/// assert_eq!(brand_hash("ab"), 97 * 31 + 98);
/// ```
#[must_use]
pub fn brand_hash(name: &str) -> i32 {
    name.chars()
        .fold(0_i32, |acc, c| (c as i32).wrapping_add((acc << 5).wrapping_sub(acc)))
}

/// Hue in degrees (`0..360`) for a hash.
///
/// Uses the magnitude of the hash, so `i32::MIN` counts as `2^31`.
#[must_use]
pub fn hue_for_hash(hash: i32) -> u16 {
    u16::try_from(hash.unsigned_abs() % 360).unwrap_or_default()
}

/// The generated color for a brand name: `hsl(<hue>, 80%, 60%)`.
#[must_use]
pub fn fallback_color(name: &str) -> BrandColor {
    let hue = hue_for_hash(brand_hash(name));
    BrandColor::from(format!(
        "hsl({hue}, {FALLBACK_SATURATION}%, {FALLBACK_LIGHTNESS}%)"
    ))
}
