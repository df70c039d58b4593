//! Color values handed back to renderers.
//!
//! A [`BrandColor`] is an opaque color string: whatever the curated table holds
//! (a named keyword or a `#hex` value) or a generated `hsl(...)` value. The
//! resolver never rewrites one notation into another, so renderers receive the
//! string exactly as it was curated.
//!
//! Renderers that need numeric components can convert with
//! [`BrandColor::to_triplet`].
//!
//! # Examples
//!
//! ```
//! use brand_colors::color::{BrandColor, ColorNotation, ColorTriplet};
//!
//! let color = BrandColor::parse("#00008B").unwrap();
//! assert_eq!(color.notation(), Some(ColorNotation::Hex));
//! assert_eq!(color.to_triplet().unwrap(), ColorTriplet::new(0, 0, 139));
//!
//! let generated = BrandColor::from("hsl(38, 80%, 60%)".to_string());
//! assert_eq!(generated.to_triplet().unwrap().hex(), "#ebaf47");
//! ```

use lru::LruCache;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::LazyLock;
use std::sync::Mutex;

/// RGB color triplet with values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorTriplet {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorTriplet {
    /// Create a new color triplet from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Convert HSL to RGB.
    ///
    /// `hue` is in degrees and wraps around; `saturation` and `lightness` are
    /// fractions in `0.0..=1.0` and are clamped to that range.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let turn = hue.rem_euclid(360.0) / 360.0;
        let sat = saturation.clamp(0.0, 1.0);
        let light = lightness.clamp(0.0, 1.0);

        if sat <= 0.0 {
            let gray = to_channel(light);
            return Self::new(gray, gray, gray);
        }

        let upper = if light < 0.5 {
            light * (1.0 + sat)
        } else {
            light + sat - light * sat
        };
        let lower = 2.0 * light - upper;

        Self::new(
            to_channel(hue_to_rgb(lower, upper, turn + 1.0 / 3.0)),
            to_channel(hue_to_rgb(lower, upper, turn)),
            to_channel(hue_to_rgb(lower, upper, turn - 1.0 / 3.0)),
        )
    }

    /// Returns CSS-style hex format `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Returns CSS-style rgb format `rgb(r,g,b)`.
    #[must_use]
    pub fn rgb(&self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }
}

fn hue_to_rgb(lower: f64, upper: f64, turn: f64) -> f64 {
    let turn = turn.rem_euclid(1.0);
    if turn < 1.0 / 6.0 {
        lower + (upper - lower) * 6.0 * turn
    } else if turn < 0.5 {
        upper
    } else if turn < 2.0 / 3.0 {
        lower + (upper - lower) * (2.0 / 3.0 - turn) * 6.0
    } else {
        lower
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=255 before the cast"
)]
fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<(u8, u8, u8)> for ColorTriplet {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for ColorTriplet {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for ColorTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// The notation a color string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorNotation {
    /// A CSS keyword such as `green`.
    Named,
    /// `#RGB` or `#RRGGBB`.
    Hex,
    /// `hsl(h, s%, l%)`.
    Hsl,
}

/// A display color for a brand.
///
/// Compares and displays as the exact string it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrandColor(Cow<'static, str>);

impl BrandColor {
    /// Wrap a static color string without allocating.
    #[must_use]
    pub const fn from_static(color: &'static str) -> Self {
        Self(Cow::Borrowed(color))
    }

    /// Parse and validate a color string.
    ///
    /// The returned color keeps the input's spelling (minus surrounding
    /// whitespace); parsing only checks that it is a recognized notation.
    ///
    /// # Errors
    ///
    /// Returns `ColorParseError` if the color string is invalid:
    /// - `Empty` if the string is empty
    /// - `InvalidHex` if hex format is malformed
    /// - `InvalidHsl` if `hsl(h, s%, l%)` format is malformed or out of range
    /// - `UnknownColor` if the color name is not recognized
    pub fn parse(color: &str) -> Result<Self, ColorParseError> {
        let trimmed = color.trim();
        convert(trimmed)?;
        Ok(Self(Cow::Owned(trimmed.to_string())))
    }

    /// The color string as handed to renderers.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the color, returning the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0.into_owned()
    }

    /// Classify the notation of this color, or `None` if it does not convert
    /// (same acceptance as [`BrandColor::to_triplet`]).
    #[must_use]
    pub fn notation(&self) -> Option<ColorNotation> {
        convert(&self.0).ok()?;
        let normalized = self.0.trim_start();
        if normalized.starts_with('#') {
            Some(ColorNotation::Hex)
        } else if normalized.get(..4).is_some_and(|head| head.eq_ignore_ascii_case("hsl(")) {
            Some(ColorNotation::Hsl)
        } else {
            Some(ColorNotation::Named)
        }
    }

    /// Convert to an RGB triplet (cached).
    ///
    /// # Errors
    ///
    /// Returns `ColorParseError` when the string is not a recognized
    /// notation; see [`BrandColor::parse`].
    pub fn to_triplet(&self) -> Result<ColorTriplet, ColorParseError> {
        convert(&self.0)
    }
}

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})%\s*,\s*([0-9]{1,3})%\s*\)$")
        .expect("valid regex")
});

fn convert(color: &str) -> Result<ColorTriplet, ColorParseError> {
    static CACHE: LazyLock<Mutex<LruCache<String, ColorTriplet>>> =
        LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(512).expect("non-zero"))));

    let normalized = color.trim().to_lowercase();

    if let Ok(mut cache) = CACHE.lock()
        && let Some(cached) = cache.get(&normalized)
    {
        return Ok(*cached);
    }

    let result = convert_uncached(&normalized)?;

    if let Ok(mut cache) = CACHE.lock() {
        cache.put(normalized, result);
    }

    Ok(result)
}

fn convert_uncached(color: &str) -> Result<ColorTriplet, ColorParseError> {
    if color.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(hex) = color.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(color.to_string()));
    }

    if let Some(caps) = HSL_RE.captures(color)
        && let (Ok(hue), Ok(sat), Ok(light)) = (
            caps[1].parse::<u16>(),
            caps[2].parse::<u16>(),
            caps[3].parse::<u16>(),
        )
        && hue <= 360
        && sat <= 100
        && light <= 100
    {
        return Ok(ColorTriplet::from_hsl(
            f64::from(hue),
            f64::from(sat) / 100.0,
            f64::from(light) / 100.0,
        ));
    } else if color.starts_with("hsl(") {
        return Err(ColorParseError::InvalidHsl(color.to_string()));
    }

    named_color(color).ok_or_else(|| ColorParseError::UnknownColor(color.to_string()))
}

/// Parse the digits after `#`: `RRGGBB` or the `RGB` shorthand.
fn parse_hex(hex: &str) -> Option<ColorTriplet> {
    // `from_str_radix` alone would let a `+` sign through.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(ColorTriplet::new(r, g, b))
        }
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16));
            let mut next = || -> Option<u8> {
                let d = u8::try_from(digits.next()??).ok()?;
                Some(d * 17)
            };
            Some(ColorTriplet::new(next()?, next()?, next()?))
        }
        _ => None,
    }
}

/// CSS basic color keywords (plus `orange` and the `grey` spelling).
fn named_color(name: &str) -> Option<ColorTriplet> {
    let triplet = match name {
        "black" => ColorTriplet::new(0, 0, 0),
        "silver" => ColorTriplet::new(192, 192, 192),
        "gray" | "grey" => ColorTriplet::new(128, 128, 128),
        "white" => ColorTriplet::new(255, 255, 255),
        "maroon" => ColorTriplet::new(128, 0, 0),
        "red" => ColorTriplet::new(255, 0, 0),
        "purple" => ColorTriplet::new(128, 0, 128),
        "fuchsia" | "magenta" => ColorTriplet::new(255, 0, 255),
        "green" => ColorTriplet::new(0, 128, 0),
        "lime" => ColorTriplet::new(0, 255, 0),
        "olive" => ColorTriplet::new(128, 128, 0),
        "yellow" => ColorTriplet::new(255, 255, 0),
        "navy" => ColorTriplet::new(0, 0, 128),
        "blue" => ColorTriplet::new(0, 0, 255),
        "teal" => ColorTriplet::new(0, 128, 128),
        "aqua" | "cyan" => ColorTriplet::new(0, 255, 255),
        "orange" => ColorTriplet::new(255, 165, 0),
        _ => return None,
    };
    Some(triplet)
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BrandColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BrandColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BrandColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<String> for BrandColor {
    fn from(color: String) -> Self {
        Self(Cow::Owned(color))
    }
}

impl From<BrandColor> for String {
    fn from(color: BrandColor) -> Self {
        color.into_string()
    }
}

impl FromStr for BrandColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BrandColor {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidHex(String),
    InvalidHsl(String),
    UnknownColor(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::InvalidHex(s) => write!(f, "Invalid hex color: {s}"),
            Self::InvalidHsl(s) => write!(f, "Invalid HSL color: {s}"),
            Self::UnknownColor(s) => write!(f, "Unknown color: {s}"),
        }
    }
}

impl std::error::Error for ColorParseError {}
