//! Accent folding.
//!
//! Maps accented Latin letters to their unaccented base letter, keeping the
//! input's case: `Á` folds to `A`, `á` folds to `a`. Everything not in the
//! table passes through unchanged.

mod config;

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

pub use config::{parse_fold_toml, FoldConfigError};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_fold.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default accent table TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Variant → lowercase base letter lookup.
pub struct AccentTable {
    map: HashMap<char, char>,
}

impl AccentTable {
    /// Set a custom table before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), FoldConfigError> {
        // Validate eagerly
        parse_fold_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| FoldConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static AccentTable {
        static INSTANCE: OnceLock<AccentTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_fold_toml(toml_str).expect("accent table TOML must be valid");
            debug!(entries = map.len(), "accent table loaded");
            AccentTable::from_map(map.into_iter())
        })
    }

    pub fn from_map(entries: impl Iterator<Item = (char, char)>) -> Self {
        Self {
            map: entries.collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Lowercase base letter for `c`, if `c` is a known accented variant.
    pub fn base_of(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    pub fn fold_char(&self, c: char) -> char {
        match self.base_of(c) {
            Some(base) if c.is_uppercase() => base.to_ascii_uppercase(),
            Some(base) => base,
            None => c,
        }
    }

    pub fn fold(&self, text: &str) -> String {
        text.chars().map(|c| self.fold_char(c)).collect()
    }
}

/// Fold a single character with the global table.
pub fn fold_char(c: char) -> char {
    AccentTable::global().fold_char(c)
}

/// Fold every character of `text` with the global table.
pub fn fold(text: &str) -> String {
    AccentTable::global().fold(text)
}
