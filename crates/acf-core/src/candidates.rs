//! The fixed candidate universe and filter results.

use serde::Serialize;

use crate::fold::AccentTable;

struct Candidate {
    display: String,
    /// Lower-cased, unfolded comparison key.
    plain_key: String,
    /// Lower-cased comparison key after accent folding.
    folded_key: String,
}

/// Ordered, immutable list of selectable values.
///
/// Comparison keys are computed once per candidate so that each filter pass
/// only has to key the query. Filtering still walks the whole list every
/// time; nothing is carried over from a previous result.
pub struct CandidateList {
    entries: Vec<Candidate>,
}

impl CandidateList {
    pub fn new(values: Vec<String>) -> Self {
        let table = AccentTable::global();
        let entries = values
            .into_iter()
            .map(|display| Candidate {
                plain_key: lowercase_key(display.chars()),
                folded_key: lowercase_key(display.chars().map(|c| table.fold_char(c))),
                display,
            })
            .collect();
        Self { entries }
    }

    /// One candidate per line. Trailing `\r` is stripped and blank lines skipped.
    pub fn from_lines(text: &str) -> Self {
        text.lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|c| c.display.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.display.as_str())
    }

    /// Comparison key of the candidate at `index`.
    pub(crate) fn key(&self, index: usize, folded: bool) -> &str {
        let c = &self.entries[index];
        if folded {
            &c.folded_key
        } else {
            &c.plain_key
        }
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Per-char lowercase. Unlike `str::to_lowercase` this ignores context
/// (final sigma), so the key of `q + c` always starts with the key of `q`.
pub(crate) fn lowercase_key(chars: impl Iterator<Item = char>) -> String {
    chars.flat_map(char::to_lowercase).collect()
}

/// Candidates matching a query, in original list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilteredResult {
    /// Original (unfolded) display text.
    pub items: Vec<String>,
    /// Position of each item in the `CandidateList`.
    pub indices: Vec<usize>,
}

impl FilteredResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, candidate_index: usize) -> bool {
        self.indices.contains(&candidate_index)
    }
}
