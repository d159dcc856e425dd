use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct FoldConfig {
    fold: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum FoldConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[fold] table is empty")]
    Empty,
    #[error("base must be a single lowercase ASCII letter: {0:?}")]
    InvalidBase(String),
    #[error("invalid variant {variant:?} for base {base:?}: must be one non-ASCII character")]
    InvalidVariant { base: String, variant: String },
    #[error("variant listed more than once: {0:?}")]
    DuplicateVariant(char),
    #[error("accent table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a `variant → lowercase base letter` map.
pub fn parse_fold_toml(toml_str: &str) -> Result<BTreeMap<char, char>, FoldConfigError> {
    let config: FoldConfig =
        toml::from_str(toml_str).map_err(|e| FoldConfigError::Parse(e.to_string()))?;

    if config.fold.is_empty() {
        return Err(FoldConfigError::Empty);
    }

    let mut map = BTreeMap::new();
    for (base_str, variants) in &config.fold {
        let base = single_char(base_str)
            .filter(char::is_ascii_lowercase)
            .ok_or_else(|| FoldConfigError::InvalidBase(base_str.clone()))?;

        for variant_str in variants {
            // Fold targets are ASCII, so an ASCII variant would break idempotence.
            let variant = single_char(variant_str)
                .filter(|c| !c.is_ascii())
                .ok_or_else(|| FoldConfigError::InvalidVariant {
                    base: base_str.clone(),
                    variant: variant_str.clone(),
                })?;
            if map.insert(variant, base).is_some() {
                return Err(FoldConfigError::DuplicateVariant(variant));
            }
        }
    }

    Ok(map)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
