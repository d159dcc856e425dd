use tracing::debug;

use acf_core::visible_rows;

use super::types::{Caret, DropdownAction, KeyResponse, ListUpdate};
use super::AutoCompleteSession;

impl AutoCompleteSession {
    /// Recompute the filtered list for the full editor text `new_text`.
    ///
    /// The caret goes to `caret_hint`: a held position from a deletion, or
    /// the end of the text.
    pub fn on_text_changed(&mut self, new_text: &str, caret_hint: Caret) -> KeyResponse {
        self.query.text.clear();
        self.query.text.push_str(new_text);
        self.refilter(caret_hint)
    }

    /// Filter `self.query.text` from the full candidate list.
    pub(super) fn refilter(&mut self, caret_hint: Caret) -> KeyResponse {
        let result = self.matcher.filter(&self.candidates, &self.query.text);

        let has_text = !self.query.text.is_empty();
        if has_text && self.selection.take().is_some() {
            debug!("selection cleared by edit");
        }

        let show = !result.is_empty() && has_text && self.selection.is_none();
        self.dropdown_visible = show;

        let caret = self.query.place_caret(caret_hint);
        let rows = visible_rows(result.len(), self.max_visible_rows);
        self.filtered = result.clone();

        let mut resp = KeyResponse::consumed();
        resp.list = Some(ListUpdate {
            result,
            visible_rows: rows,
        });
        resp.caret = Some(caret);
        resp.dropdown = if show {
            DropdownAction::Show
        } else {
            DropdownAction::Hide
        };
        resp
    }
}
