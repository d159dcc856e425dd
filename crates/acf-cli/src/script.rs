//! Keystroke scripts for `acftool replay`.
//!
//! One step per line; blank lines and `#` comments are skipped. A comment
//! starts at a `#` that begins the line or follows whitespace. `type` takes
//! everything after the single space that follows it, so leading spaces can
//! be typed; trailing spaces and a space-prefixed `#` cannot.
//!
//! ```text
//! type ap        # one TextChanged per char
//! backspace
//! delete
//! up | down
//! left | right | home | end | tab | ctrl
//! select 0
//! mode starts_with
//! fold off
//! ```

use std::fmt;

use acf_core::MatchMode;
use acf_session::{AutoCompleteSession, DeletionKey, KeyEvent, KeyResponse, NavigationKey};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown step {word:?}")]
    UnknownStep { line: usize, word: String },
    #[error("line {line}: {step} needs {expected}")]
    MissingArgument {
        line: usize,
        step: &'static str,
        expected: &'static str,
    },
    #[error("line {line}: invalid argument {arg:?}: {reason}")]
    InvalidArgument {
        line: usize,
        arg: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Type(String),
    Deletion(DeletionKey),
    Up,
    Down,
    Navigate(NavigationKey),
    Select(usize),
    Mode(MatchMode),
    Fold(bool),
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(text) => write!(f, "type {text}"),
            Self::Deletion(DeletionKey::Backspace) => f.write_str("backspace"),
            Self::Deletion(DeletionKey::Delete) => f.write_str("delete"),
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::Navigate(key) => write!(f, "{}", nav_name(*key)),
            Self::Select(i) => write!(f, "select {i}"),
            Self::Mode(mode) => write!(f, "mode {mode}"),
            Self::Fold(on) => write!(f, "fold {}", if *on { "on" } else { "off" }),
        }
    }
}

fn nav_name(key: NavigationKey) -> &'static str {
    match key {
        NavigationKey::Left => "left",
        NavigationKey::Right => "right",
        NavigationKey::Home => "home",
        NavigationKey::End => "end",
        NavigationKey::Tab => "tab",
        NavigationKey::ControlModified => "ctrl",
    }
}

/// Cut a `#` comment that starts the line or follows whitespace, then drop
/// trailing whitespace. A `#` inside a word (`type C#`) is kept.
fn strip_comment(raw: &str) -> &str {
    let mut prev_blank = true;
    for (i, c) in raw.char_indices() {
        if c == '#' && prev_blank {
            return raw[..i].trim_end();
        }
        prev_blank = c.is_whitespace();
    }
    raw.trim_end()
}

/// Parse a script into `(line number, step)` pairs.
pub fn parse_script(text: &str) -> Result<Vec<(usize, ScriptStep)>, ScriptError> {
    let mut steps = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = strip_comment(raw).trim_start();
        if content.is_empty() {
            continue;
        }
        // One separator after the step word; `type` keeps the rest verbatim.
        let (word, rest) = match content.split_once(char::is_whitespace) {
            Some((w, rest)) => (w, rest),
            None => (content, ""),
        };
        let arg = if word == "type" { rest } else { rest.trim() };
        let require = |step: &'static str, expected: &'static str| {
            if arg.is_empty() {
                Err(ScriptError::MissingArgument {
                    line,
                    step,
                    expected,
                })
            } else {
                Ok(arg)
            }
        };

        let step = match word {
            "type" => ScriptStep::Type(require("type", "text")?.to_string()),
            "backspace" => ScriptStep::Deletion(DeletionKey::Backspace),
            "delete" => ScriptStep::Deletion(DeletionKey::Delete),
            "up" => ScriptStep::Up,
            "down" => ScriptStep::Down,
            "left" => ScriptStep::Navigate(NavigationKey::Left),
            "right" => ScriptStep::Navigate(NavigationKey::Right),
            "home" => ScriptStep::Navigate(NavigationKey::Home),
            "end" => ScriptStep::Navigate(NavigationKey::End),
            "tab" => ScriptStep::Navigate(NavigationKey::Tab),
            "ctrl" => ScriptStep::Navigate(NavigationKey::ControlModified),
            "select" => {
                let arg = require("select", "an index")?;
                let index = arg.parse::<usize>().map_err(|e| {
                    ScriptError::InvalidArgument {
                        line,
                        arg: arg.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                ScriptStep::Select(index)
            }
            "mode" => {
                let arg = require("mode", "contains or starts_with")?;
                let mode = arg.parse::<MatchMode>().map_err(|e| {
                    ScriptError::InvalidArgument {
                        line,
                        arg: arg.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                ScriptStep::Mode(mode)
            }
            "fold" => match require("fold", "on or off")? {
                "on" => ScriptStep::Fold(true),
                "off" => ScriptStep::Fold(false),
                other => {
                    return Err(ScriptError::InvalidArgument {
                        line,
                        arg: other.to_string(),
                        reason: "expected on or off".to_string(),
                    })
                }
            },
            other => {
                return Err(ScriptError::UnknownStep {
                    line,
                    word: other.to_string(),
                })
            }
        };
        steps.push((line, step));
    }
    Ok(steps)
}

impl ScriptStep {
    /// Drive `session` as a text field with the caret at the end would.
    /// Returns the last response, or `None` for setting changes.
    pub fn apply(&self, session: &mut AutoCompleteSession) -> Option<KeyResponse> {
        match self {
            Self::Type(text) => {
                let mut current = session.query().to_string();
                let mut last = None;
                for ch in text.chars() {
                    current.push(ch);
                    last = Some(session.handle_key(KeyEvent::text(&current)));
                }
                last
            }
            Self::Deletion(key) => {
                let mut text = session.query().to_string();
                let caret_before = session.caret();
                match key {
                    DeletionKey::Backspace => {
                        text.pop();
                    }
                    // Caret at the end: nothing after it to delete.
                    DeletionKey::Delete => {}
                }
                Some(session.handle_key(KeyEvent::Deletion {
                    key: *key,
                    text,
                    caret_before,
                }))
            }
            Self::Up => Some(session.handle_key(KeyEvent::CaretUp)),
            Self::Down => Some(session.handle_key(KeyEvent::CaretDown)),
            Self::Navigate(key) => Some(session.handle_key(KeyEvent::Navigation(*key))),
            Self::Select(i) => Some(session.select(*i)),
            Self::Mode(mode) => {
                session.set_match_mode(*mode);
                None
            }
            Self::Fold(on) => {
                session.set_fold_accents(*on);
                None
            }
        }
    }
}
