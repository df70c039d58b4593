//! # `brand_colors`
//!
//! Stable display colors for brand names.
//!
//! Known brands come from a small curated palette; every other brand gets a
//! color generated from a hash of its name, so the same brand always renders
//! the same way.
//!
//! ## Quick Start
//!
//! ```rust
//! use brand_colors::prelude::*;
//!
//! assert_eq!(resolve_color("Purdeys"), "green");
//! assert_eq!(resolve_color(None), DEFAULT_COLOR);
//!
//! let generated = resolve_color("Lucozade");
//! assert_eq!(generated, resolve_color("Lucozade"));
//! assert_eq!(generated.notation(), Some(ColorNotation::Hsl));
//! ```
//!
//! ## Core Concepts
//!
//! - **`BrandColorResolver`**: palette lookup with a generated fallback
//! - **`BrandPalette`**: case-insensitive brand to color table
//! - **`BrandColor`**: the color string handed to renderers
//!
//! ## Logging
//!
//! Resolution emits `log` records (`trace` for palette hits, `debug` for
//! generated colors). Enable the `tracing` feature to also get a span per
//! resolution.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod fallback;
pub mod palette;
pub mod resolver;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{BrandColor, ColorNotation, ColorParseError, ColorTriplet};
    pub use crate::fallback::{brand_hash, fallback_color};
    pub use crate::palette::{BrandPalette, PaletteError};
    pub use crate::resolver::{BrandColorResolver, DEFAULT_COLOR, resolve_color};
}

// Re-export key types at crate root
pub use color::{BrandColor, ColorNotation, ColorTriplet};
pub use palette::BrandPalette;
pub use resolver::{BrandColorResolver, DEFAULT_COLOR, resolve_color};
