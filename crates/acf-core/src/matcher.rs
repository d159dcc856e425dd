//! Match predicates over comparison keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidates::{lowercase_key, CandidateList, FilteredResult};
use crate::fold::AccentTable;

/// How a candidate's key must relate to the query's key.
///
/// Every `StartsWith` match is also a `Contains` match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    StartsWith,
    #[default]
    Contains,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartsWith => "starts_with",
            Self::Contains => "contains",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMatchModeError(pub String);

impl fmt::Display for ParseMatchModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown match mode {:?} (expected \"contains\" or \"starts_with\")",
            self.0
        )
    }
}

impl std::error::Error for ParseMatchModeError {}

impl FromStr for MatchMode {
    type Err = ParseMatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains" => Ok(Self::Contains),
            "starts_with" | "starts-with" | "startswith" => Ok(Self::StartsWith),
            _ => Err(ParseMatchModeError(s.to_string())),
        }
    }
}

/// Case-insensitive, optionally accent-insensitive candidate filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    pub mode: MatchMode,
    pub fold_accents: bool,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            mode: MatchMode::Contains,
            fold_accents: true,
        }
    }
}

impl Matcher {
    pub fn new(mode: MatchMode, fold_accents: bool) -> Self {
        Self { mode, fold_accents }
    }

    /// Fold (when enabled), then lowercase.
    pub fn comparison_key(&self, text: &str) -> String {
        if self.fold_accents {
            let table = AccentTable::global();
            lowercase_key(text.chars().map(|c| table.fold_char(c)))
        } else {
            lowercase_key(text.chars())
        }
    }

    pub fn is_match(&self, candidate_key: &str, query_key: &str) -> bool {
        match self.mode {
            MatchMode::StartsWith => candidate_key.starts_with(query_key),
            MatchMode::Contains => candidate_key.contains(query_key),
        }
    }

    /// Filter the full candidate list against `query`.
    pub fn filter(&self, candidates: &CandidateList, query: &str) -> FilteredResult {
        let query_key = self.comparison_key(query);
        let mut result = FilteredResult::default();
        for index in 0..candidates.len() {
            if self.is_match(candidates.key(index, self.fold_accents), &query_key) {
                if let Some(display) = candidates.get(index) {
                    result.items.push(display.to_string());
                    result.indices.push(index);
                }
            }
        }
        debug!(
            query,
            mode = %self.mode,
            fold = self.fold_accents,
            matches = result.len(),
            "filtered candidates"
        );
        result
    }
}

/// Visible-row hint for a dropdown showing `count` matches.
pub fn visible_rows(count: usize, cap: usize) -> usize {
    count.min(cap)
}
