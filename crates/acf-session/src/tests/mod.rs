mod deletion;

use acf_core::settings::parse_settings_toml;
use acf_core::CandidateList;

use super::{AutoCompleteSession, KeyEvent, KeyResponse};

pub(super) const FRUITS: &[&str] = &[
    "Açaí", "Apple", "Apricot", "Avocado", "Ackee", "Banana", "Blueberry", "Blackberry",
    "Cantaloupe", "Cardón", "Cherry", "Cranberry", "Cucumber", "Currant", "Date", "Durian",
    "Eggplant", "Elderberry", "Fig", "Gooseberry", "Grape", "Grapefruit", "Guava",
    "Honey Dew Melon", "Horned Melon", "Huckleberry", "Ita Palm", "Jatobá", "Jujube", "Kiwi",
    "Kumquat", "Lemon", "Lime", "Lúcuma", "Lychee", "Mango", "Mangosteen", "Mortiño",
    "Mulberry", "Muskmelon", "Nectarine", "Néré", "Olive", "Orange", "Papaya", "Passion Fruit",
    "Peach", "Pear", "Pepper", "Persimmon", "Pineapple", "Plum", "Pluot", "Pomegranate",
    "Prickly Pear", "Quince", "Rambuton", "Raspberry", "Rose Apple", "Starfruit", "Sapadilla",
    "Strawberry", "Tamarind", "Tangelo", "Tanagerine", "Tomato", "Tōtara", "Ugli Fruit",
    "Voavanga", "Watermelon", "Xigua Melon", "Zucchini",
];

pub(super) fn fruits() -> CandidateList {
    FRUITS.iter().copied().collect()
}

/// Session with the embedded default settings (Contains, folding on, 8 rows).
pub(super) fn make_session() -> AutoCompleteSession {
    let settings = parse_settings_toml(acf_core::settings::DEFAULT_SETTINGS_TOML).unwrap();
    AutoCompleteSession::with_settings(fruits(), &settings)
}

// Helper: simulate typing a string one character at a time, reporting the
// full editor text after each keystroke as the host would.
pub(super) fn type_string(session: &mut AutoCompleteSession, s: &str) -> Vec<KeyResponse> {
    let mut text = session.query().to_string();
    let mut responses = Vec::new();
    for ch in s.chars() {
        text.push(ch);
        responses.push(session.handle_key(KeyEvent::text(&text)));
    }
    responses
}

pub(super) fn items(resp: &KeyResponse) -> Vec<&str> {
    resp.list
        .as_ref()
        .map(|l| l.result.items.iter().map(String::as_str).collect())
        .unwrap_or_default()
}
