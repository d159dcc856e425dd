//! Autocomplete filtering engine for host UI layers.
//!
//! Re-exports the candidate/matching core and the keystroke session so a host
//! depends on one crate, and wires optional JSON tracing.

mod trace_init;

pub use acf_core::{
    fold, fold::AccentTable, settings, CandidateList, FilteredResult, MatchMode, Matcher,
};
pub use acf_session::{
    AutoCompleteSession, Caret, CaretKey, DeletionKey, DropdownAction, KeyEvent, KeyResponse,
    ListUpdate, NavigationKey,
};
pub use trace_init::init_tracing;
