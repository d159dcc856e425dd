use serde::Serialize;

use acf_core::FilteredResult;

/// Caret position in the editor, in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Caret {
    /// After the last character, whatever the text's length.
    End,
    /// Hold at this offset. Clamped to the text length when resolved.
    At(usize),
}

/// Keys that move the caret to the end without filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretKey {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionKey {
    Backspace,
    Delete,
}

/// Keys that keep normal text-editing behaviour: no filtering, no caret move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Left,
    Right,
    Home,
    End,
    Tab,
    /// Any key pressed with Control held.
    ControlModified,
}

/// Semantic input events. The host classifies raw key events into these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Editor content after a regular edit (typing, paste).
    TextChanged { text: String },
    CaretUp,
    CaretDown,
    /// Backspace or Delete. `text` is the editor content after the host's
    /// default edit; `caret_before` the caret offset before it.
    Deletion {
        key: DeletionKey,
        text: String,
        caret_before: usize,
    },
    Navigation(NavigationKey),
}

impl KeyEvent {
    pub fn text(s: &str) -> Self {
        Self::TextChanged {
            text: s.to_string(),
        }
    }
}

/// Dropdown visibility directive. The host opens or closes the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropdownAction {
    /// Leave the dropdown as-is.
    Keep,
    /// Show the dropdown (re-showing refreshes its contents).
    Show,
    Hide,
}

/// Recomputed dropdown contents.
/// Bundles the result with its row hint so one never arrives without the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUpdate {
    pub result: FilteredResult,
    /// `min(result.len(), max_visible_rows)`; a sizing hint, not a truncation.
    pub visible_rows: usize,
}

/// Response from a key handler, returned to the host UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyResponse {
    /// False when the host's default behaviour should apply untouched.
    pub consumed: bool,
    /// Set when filtering ran.
    pub list: Option<ListUpdate>,
    /// Caret offset (chars) to apply to the editor.
    pub caret: Option<usize>,
    pub dropdown: DropdownAction,
    /// Replace the editor's text with this.
    pub replace_text: Option<String>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            list: None,
            caret: None,
            dropdown: DropdownAction::Keep,
            replace_text: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    /// Neither filtering, caret nor text changed.
    pub fn is_ignored(&self) -> bool {
        !self.consumed
            && self.list.is_none()
            && self.caret.is_none()
            && self.replace_text.is_none()
            && self.dropdown == DropdownAction::Keep
    }
}

/// Current editor text and caret.
pub(crate) struct QueryState {
    pub(crate) text: String,
    pub(crate) caret: Caret,
}

impl QueryState {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            caret: Caret::End,
        }
    }

    pub(crate) fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Caret offset in chars, clamped to `[0, char_len]`.
    pub(crate) fn caret_offset(&self) -> usize {
        let len = self.char_len();
        match self.caret {
            Caret::End => len,
            Caret::At(pos) => pos.min(len),
        }
    }

    /// Store `hint` (clamped) and return the resolved offset.
    pub(crate) fn place_caret(&mut self, hint: Caret) -> usize {
        self.caret = match hint {
            Caret::End => Caret::End,
            Caret::At(pos) => Caret::At(pos.min(self.char_len())),
        };
        self.caret_offset()
    }
}

/// Text left after a deletion key backs out of an accepted completion.
pub(crate) fn text_after_deletion(key: DeletionKey, text: &str) -> String {
    match key {
        DeletionKey::Delete => String::new(),
        DeletionKey::Backspace => {
            let mut t = text.to_string();
            t.pop();
            t
        }
    }
}
