//! Brand name to display color resolution.
//!
//! Resolution order:
//!
//! 1. absent or empty name: the default grey `#CCCCCC`
//! 2. the palette entry for the lowercased name, returned verbatim
//! 3. a color generated from the name as given (see [`crate::fallback`])
//!
//! Resolution never fails and has no side effects.
//!
//! # Examples
//!
//! ```
//! use brand_colors::resolve_color;
//!
//! assert_eq!(resolve_color(None), "#CCCCCC");
//! assert_eq!(resolve_color("Red Bull"), "#00008B");
//! assert_eq!(resolve_color("Monster"), "hsl(38, 80%, 60%)");
//! ```

use std::sync::LazyLock;

use crate::color::BrandColor;
use crate::fallback::fallback_color;
use crate::palette::BrandPalette;

/// Color returned for an absent or empty brand name.
pub const DEFAULT_COLOR: &str = "#CCCCCC";

static SHARED: LazyLock<BrandColorResolver> = LazyLock::new(BrandColorResolver::default);

/// Resolve a brand name with the built-in palette.
///
/// Accepts `&str` or `Option<&str>`.
#[must_use]
pub fn resolve_color<'a>(brand_name: impl Into<Option<&'a str>>) -> BrandColor {
    SHARED.resolve(brand_name)
}

/// Resolves brand names against a palette.
///
/// # Thread Safety
///
/// The resolver is immutable once built and can be shared freely between
/// threads.
#[derive(Debug, Clone)]
pub struct BrandColorResolver {
    palette: BrandPalette,
    default_color: BrandColor,
}

impl BrandColorResolver {
    /// Create a resolver using the built-in palette and the default grey.
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: BrandPalette::builtin().clone(),
            default_color: BrandColor::from_static(DEFAULT_COLOR),
        }
    }

    /// Use a different palette.
    #[must_use]
    pub fn palette(mut self, palette: BrandPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Use a different color for absent or empty names.
    #[must_use]
    pub fn default_color(mut self, color: BrandColor) -> Self {
        self.default_color = color;
        self
    }

    /// The palette consulted before falling back.
    #[must_use]
    pub fn current_palette(&self) -> &BrandPalette {
        &self.palette
    }

    /// Resolve a brand name to its display color.
    #[must_use]
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, brand_name)))]
    pub fn resolve<'a>(&self, brand_name: impl Into<Option<&'a str>>) -> BrandColor {
        let Some(name) = brand_name.into().filter(|name| !name.is_empty()) else {
            log::trace!("no brand name, using default {}", self.default_color);
            return self.default_color.clone();
        };

        if let Some(color) = self.palette.get(name) {
            log::trace!("brand {name:?} found in palette: {color}");
            return BrandColor::from(color.to_string());
        }

        let color = fallback_color(name);
        log::debug!("brand {name:?} not in palette, generated {color}");
        color
    }
}

impl Default for BrandColorResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test_log::test]
    fn test_absent_and_empty_use_default() {
        assert_eq!(resolve_color(None), DEFAULT_COLOR);
        assert_eq!(resolve_color(Some("")), "#CCCCCC");
        assert_eq!(resolve_color(""), "#CCCCCC");
    }

    #[test_log::test]
    fn test_known_brands_any_case() {
        for name in ["Purdeys", "PURDEYS", "purdeys", "pUrDeYs"] {
            assert_eq!(resolve_color(name), "green", "{name}");
        }
        for name in ["red bull", "Red Bull", "RED BULL"] {
            assert_eq!(resolve_color(name), "#00008B", "{name}");
        }
        for name in ["celsius", "Celsius", "CELSIUS"] {
            assert_eq!(resolve_color(name), "#EFEFEF", "{name}");
        }
    }

    #[test_log::test]
    fn test_fallback_uses_original_case() {
        assert_eq!(resolve_color("Monster"), "hsl(38, 80%, 60%)");
        assert_eq!(resolve_color("monster"), "hsl(258, 80%, 60%)");
        assert_eq!(resolve_color("MONSTER"), "hsl(26, 80%, 60%)");
    }

    #[test_log::test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(resolve_color("  "), "hsl(304, 80%, 60%)");
        assert_eq!(resolve_color("Celsius "), "hsl(126, 80%, 60%)");
    }

    #[test]
    fn test_custom_palette_and_default() {
        let palette = BrandPalette::new(
            Some(HashMap::from([("Monster".to_string(), "lime".to_string())])),
            false,
        );
        let resolver = BrandColorResolver::new()
            .palette(palette)
            .default_color(BrandColor::from_static("black"));

        assert_eq!(resolver.resolve(None), "black");
        assert_eq!(resolver.resolve("MONSTER"), "lime");
        // Built-in entries are gone without inherit.
        assert_eq!(resolver.resolve("purdeys"), crate::fallback::fallback_color("purdeys"));
        assert_eq!(resolver.current_palette().len(), 1);
    }

    #[test]
    fn test_resolve_does_not_touch_palette() {
        let resolver = BrandColorResolver::default();
        let before = resolver.current_palette().clone();
        let _ = resolver.resolve("Monster");
        let _ = resolver.resolve("purdeys");
        assert_eq!(resolver.current_palette(), &before);
    }
}
