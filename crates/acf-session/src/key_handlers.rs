use tracing::{debug, debug_span};

use super::types::{
    text_after_deletion, Caret, CaretKey, DeletionKey, DropdownAction, KeyEvent, KeyResponse,
    NavigationKey,
};
use super::AutoCompleteSession;

impl AutoCompleteSession {
    /// Process a key event. Returns a KeyResponse describing what the host should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        match event {
            KeyEvent::TextChanged { text } => self.on_text_changed(&text, Caret::End),

            KeyEvent::CaretUp => self.on_caret_key(CaretKey::Up),

            KeyEvent::CaretDown => self.on_caret_key(CaretKey::Down),

            // Backing out of a selection replaces the text itself; otherwise the
            // host already applied the edit and we filter it, holding the caret.
            KeyEvent::Deletion {
                key,
                text,
                caret_before,
            } => {
                let resp = self.on_deletion_key(key, caret_before);
                if resp.consumed {
                    resp
                } else {
                    self.on_text_changed(&text, Caret::At(caret_before))
                }
            }

            KeyEvent::Navigation(key) => self.on_navigation_key(key),
        }
    }

    /// Up/Down: no filtering, caret to the end. Down also opens the dropdown.
    pub fn on_caret_key(&mut self, key: CaretKey) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        resp.caret = Some(self.query.place_caret(Caret::End));
        if key == CaretKey::Down && !self.dropdown_visible {
            self.dropdown_visible = true;
            resp.dropdown = DropdownAction::Show;
        }
        resp
    }

    /// Backspace/Delete while a candidate is selected: drop the selection and
    /// replace the text ("" for Delete, one char shorter for Backspace), then
    /// refilter with the caret held at `caret_before`.
    ///
    /// With nothing selected the key is not consumed; the host applies its
    /// default edit and reports the text via `on_text_changed` with
    /// `Caret::At(caret_before)`.
    pub fn on_deletion_key(&mut self, key: DeletionKey, caret_before: usize) -> KeyResponse {
        let Some(selected) = self.selection.take() else {
            return KeyResponse::not_consumed();
        };
        debug!(selected, ?key, "backing out of selection");

        let new_text = text_after_deletion(key, &self.query.text);
        self.query.text.clone_from(&new_text);
        let mut resp = self.refilter(Caret::At(caret_before));
        resp.replace_text = Some(new_text);
        resp
    }

    /// Left/Right/Home/End/Tab and Control chords keep default editing behaviour.
    pub fn on_navigation_key(&mut self, _key: NavigationKey) -> KeyResponse {
        KeyResponse::not_consumed()
    }
}
