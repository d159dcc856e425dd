//! Candidate filtering for autocomplete-style text inputs.
//!
//! Accent folding, match modes and the immutable candidate universe live
//! here; the per-keystroke controller lives in `acf-session`.

pub mod candidates;
pub mod fold;
pub mod matcher;
pub mod settings;

pub use candidates::{CandidateList, FilteredResult};
pub use fold::{fold, fold_char};
pub use matcher::{visible_rows, MatchMode, Matcher};
