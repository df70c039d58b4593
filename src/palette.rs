//! Curated brand colors.
//!
//! The built-in palette is read from `brand_colors.tsv` (embedded at compile
//! time) the first time it is needed. Keys are lowercase brand names; values
//! are color strings handed out verbatim.
//!
//! Custom palettes are built in code, optionally inheriting the built-in
//! entries, the same way a theme layers named styles over its defaults.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::color::{BrandColor, ColorParseError};

static BUILTIN: LazyLock<BrandPalette> = LazyLock::new(|| {
    let mut entries = HashMap::new();

    for (line_no, line) in include_str!("brand_colors.tsv").lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (brand, color) = line
            .split_once('\t')
            .expect("src/brand_colors.tsv: expected TAB-separated brand + color");

        let prior = entries.insert(brand.trim().to_lowercase(), color.trim().to_string());
        assert!(
            prior.is_none(),
            "src/brand_colors.tsv:{}: duplicate brand key {brand:?}",
            line_no + 1
        );
    }

    BrandPalette { entries }
});

/// A case-insensitive mapping from brand name to color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPalette {
    entries: HashMap<String, String>,
}

impl BrandPalette {
    /// The curated built-in palette.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Create a palette from a map of brand colors.
    ///
    /// If `inherit` is true, the palette starts with the built-in entries and
    /// the provided ones override / extend them. Keys are lowercased.
    #[must_use]
    pub fn new(entries: Option<HashMap<String, String>>, inherit: bool) -> Self {
        let mut merged = if inherit {
            BUILTIN.entries.clone()
        } else {
            HashMap::new()
        };

        if let Some(entries) = entries {
            merged.extend(
                entries
                    .into_iter()
                    .map(|(brand, color)| (brand.to_lowercase(), color)),
            );
        }

        Self { entries: merged }
    }

    /// Build a palette from brand/color pairs, validating every color.
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::EmptyBrand` for an empty brand name and
    /// `PaletteError::InvalidColor` for a color that does not parse.
    pub fn from_definitions<I, K, V>(entries: I, inherit: bool) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut parsed = HashMap::new();
        for (brand, color) in entries {
            let brand = brand.into().to_lowercase();
            if brand.is_empty() {
                return Err(PaletteError::EmptyBrand { line_no: None });
            }
            let color = BrandColor::parse(color.as_ref()).map_err(|err| {
                PaletteError::InvalidColor {
                    name: brand.clone(),
                    err,
                }
            })?;
            parsed.insert(brand, color.into_string());
        }
        Ok(Self::new(Some(parsed), inherit))
    }

    /// Parse `brand<TAB>color` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped. This is the format
    /// of the embedded table and of [`BrandPalette::to_tsv`].
    ///
    /// # Errors
    ///
    /// Returns a `PaletteError` carrying the 1-based line number for lines
    /// without a TAB, empty brand names and duplicate brands, and
    /// `PaletteError::InvalidColor` for colors that do not parse.
    pub fn from_tsv_str(contents: &str, inherit: bool) -> Result<Self, PaletteError> {
        let mut parsed: HashMap<String, String> = HashMap::new();

        for (line_no, raw_line) in contents.lines().enumerate() {
            let trimmed = raw_line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (brand, color) = raw_line.split_once('\t').ok_or_else(|| {
                PaletteError::InvalidLine {
                    line_no: line_no + 1,
                    line: raw_line.to_string(),
                }
            })?;

            let name = brand.trim().to_lowercase();
            if name.is_empty() {
                return Err(PaletteError::EmptyBrand {
                    line_no: Some(line_no + 1),
                });
            }

            let color = BrandColor::parse(color).map_err(|err| PaletteError::InvalidColor {
                name: name.clone(),
                err,
            })?;

            if parsed.insert(name.clone(), color.into_string()).is_some() {
                return Err(PaletteError::DuplicateBrand {
                    line_no: line_no + 1,
                    name,
                });
            }
        }

        Ok(Self::new(Some(parsed), inherit))
    }

    /// Look up a brand, ignoring case.
    #[must_use]
    pub fn get(&self, brand: &str) -> Option<&str> {
        self.entries.get(&brand.to_lowercase()).map(String::as_str)
    }

    /// Number of brands in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no brands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Brand keys, sorted.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Render the palette as sorted `brand<TAB>color` lines.
    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        for brand in self.brands() {
            out.push_str(brand);
            out.push('\t');
            out.push_str(&self.entries[brand]);
            out.push('\n');
        }
        out
    }
}

impl Default for BrandPalette {
    fn default() -> Self {
        Self::new(None, true)
    }
}

/// Errors returned while building a [`BrandPalette`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    InvalidLine {
        line_no: usize,
        line: String,
    },
    EmptyBrand {
        line_no: Option<usize>,
    },
    DuplicateBrand {
        line_no: usize,
        name: String,
    },
    InvalidColor {
        name: String,
        err: ColorParseError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLine { line_no, line } => {
                write!(f, "invalid palette line {line_no}: {line:?}")
            }
            Self::EmptyBrand { line_no: Some(line_no) } => {
                write!(f, "empty brand name at line {line_no}")
            }
            Self::EmptyBrand { line_no: None } => write!(f, "empty brand name"),
            Self::DuplicateBrand { line_no, name } => {
                write!(f, "duplicate brand {name:?} at line {line_no}")
            }
            Self::InvalidColor { name, err } => {
                write!(f, "invalid color for brand {name:?}: {err}")
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidColor { err, .. } => Some(err),
            _ => None,
        }
    }
}
