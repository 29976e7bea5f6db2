//! Name normalization and annotated candidate names.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::price::PriceVariant;

/// Trailing grade marker, e.g. the `[4]` in `感電の杖[4]`.
static GRADE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\]\s*$").unwrap());

/// Strip the trailing grade marker from a catalog name.
///
/// ```
/// use kantei::catalog::normalize_name;
///
/// assert_eq!(normalize_name("感電の杖[4]"), "感電の杖");
/// assert_eq!(normalize_name("薬草"), "薬草");
/// ```
pub fn normalize_name(name: &str) -> &str {
    let name = name.trim();
    match GRADE_MARKER.find(name) {
        Some(m) => name[..m.start()].trim_end(),
        None => name,
    }
}

/// A candidate identity: a base name plus the price rule that produced it.
///
/// Blessed and cursed are display annotations; uniqueness is always decided
/// on [`AnnotatedName::base`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotatedName {
    pub base: String,
    pub variant: PriceVariant,
}

impl AnnotatedName {
    pub fn new(base: impl Into<String>, variant: PriceVariant) -> Self {
        Self {
            base: base.into(),
            variant,
        }
    }

    /// A name matched at face value.
    pub fn plain(base: impl Into<String>) -> Self {
        Self::new(base, PriceVariant::Normal)
    }
}

impl fmt::Display for AnnotatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.variant.suffix())
    }
}
