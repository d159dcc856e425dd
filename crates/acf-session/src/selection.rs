use tracing::debug;

use super::types::{Caret, DropdownAction, KeyResponse};
use super::AutoCompleteSession;

impl AutoCompleteSession {
    /// Accept the candidate at `filtered_index` of the last result.
    ///
    /// The editor text becomes the candidate's display text. This is not a
    /// text edit: the host must not report it back through `on_text_changed`.
    pub fn select(&mut self, filtered_index: usize) -> KeyResponse {
        let Some(&candidate) = self.filtered.indices.get(filtered_index) else {
            return KeyResponse::not_consumed();
        };
        let Some(shown) = self.candidates.get(candidate) else {
            return KeyResponse::not_consumed();
        };
        debug!(candidate, shown, "candidate selected");

        self.selection = Some(candidate);
        self.query.text = shown.to_string();
        self.dropdown_visible = false;

        let mut resp = KeyResponse::consumed();
        resp.replace_text = Some(self.query.text.clone());
        resp.caret = Some(self.query.place_caret(Caret::End));
        resp.dropdown = DropdownAction::Hide;
        resp
    }

    /// Display text of the selected candidate.
    pub fn selection(&self) -> Option<&str> {
        self.selection.and_then(|i| self.candidates.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }
}
