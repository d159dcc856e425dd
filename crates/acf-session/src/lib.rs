//! Stateful autocomplete session: query text, caret, selection and filtering.
//!
//! `AutoCompleteSession` owns the editing state and processes each semantic
//! key event synchronously, returning responses that the host UI translates
//! into editor and dropdown calls.

mod filtering;
mod key_handlers;
mod selection;
mod types;

#[cfg(test)]
mod tests;

use acf_core::settings::{settings, Settings};
use acf_core::{CandidateList, FilteredResult, MatchMode, Matcher};

pub use types::{
    Caret, CaretKey, DeletionKey, DropdownAction, KeyEvent, KeyResponse, ListUpdate,
    NavigationKey,
};

use types::QueryState;

/// Autocomplete controller over a fixed candidate list.
pub struct AutoCompleteSession {
    candidates: CandidateList,
    matcher: Matcher,
    max_visible_rows: usize,

    query: QueryState,
    /// Index into `candidates`; always a member of `filtered` when set.
    selection: Option<usize>,
    /// Last produced result.
    filtered: FilteredResult,
    /// Visibility the session last asked for, or the host last reported.
    dropdown_visible: bool,
}

impl AutoCompleteSession {
    /// New session using the global settings for mode, folding and row cap.
    pub fn new(candidates: CandidateList) -> Self {
        Self::with_settings(candidates, settings())
    }

    pub fn with_settings(candidates: CandidateList, settings: &Settings) -> Self {
        Self::from_parts(
            candidates,
            settings.matcher(),
            settings.display.max_visible_rows,
        )
    }

    pub fn with_mode(candidates: CandidateList, mode: MatchMode) -> Self {
        let mut session = Self::new(candidates);
        session.set_match_mode(mode);
        session
    }

    fn from_parts(candidates: CandidateList, matcher: Matcher, max_visible_rows: usize) -> Self {
        // Before any input the dropdown lists every candidate.
        let filtered = matcher.filter(&candidates, "");
        Self {
            candidates,
            matcher,
            max_visible_rows: max_visible_rows.max(1),
            query: QueryState::new(),
            selection: None,
            filtered,
            dropdown_visible: false,
        }
    }

    // Settings. None of these refilter; the next text event does.

    pub fn set_match_mode(&mut self, mode: MatchMode) {
        self.matcher.mode = mode;
    }

    pub fn set_fold_accents(&mut self, enabled: bool) {
        self.matcher.fold_accents = enabled;
    }

    pub fn set_max_visible_rows(&mut self, rows: usize) {
        self.max_visible_rows = rows.max(1);
    }

    pub fn match_mode(&self) -> MatchMode {
        self.matcher.mode
    }

    pub fn fold_accents(&self) -> bool {
        self.matcher.fold_accents
    }

    pub fn max_visible_rows(&self) -> usize {
        self.max_visible_rows
    }

    // State accessors.

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    pub fn query(&self) -> &str {
        &self.query.text
    }

    /// Resolved caret offset in chars.
    pub fn caret(&self) -> usize {
        self.query.caret_offset()
    }

    pub fn filtered(&self) -> &FilteredResult {
        &self.filtered
    }

    pub fn is_dropdown_visible(&self) -> bool {
        self.dropdown_visible
    }

    /// The host closed or opened the dropdown on its own (Escape, click-away).
    pub fn set_dropdown_visible(&mut self, visible: bool) {
        self.dropdown_visible = visible;
    }
}
