use std::fs;

use serde::Serialize;

use acf_core::{fold, visible_rows, CandidateList, FilteredResult, MatchMode};
use acf_session::{AutoCompleteSession, KeyResponse};

use super::die;
use crate::script::{parse_script, ScriptStep};

/// Matching options shared by `filter` and `replay`.
pub struct MatchOptions {
    pub mode: Option<MatchMode>,
    pub no_fold: bool,
    pub json: bool,
}

fn open_session(candidates_file: &str, opts: &MatchOptions) -> AutoCompleteSession {
    let content = die!(
        fs::read_to_string(candidates_file),
        "Error reading {candidates_file}: {}"
    );
    let mut session = AutoCompleteSession::new(CandidateList::from_lines(&content));
    if let Some(mode) = opts.mode {
        session.set_match_mode(mode);
    }
    if opts.no_fold {
        session.set_fold_accents(false);
    }
    session
}

#[derive(Serialize)]
struct FilterOutput<'a> {
    query: &'a str,
    mode: MatchMode,
    fold_accents: bool,
    visible_rows: usize,
    #[serde(flatten)]
    result: &'a FilteredResult,
}

pub fn filter(candidates_file: &str, query: &str, opts: &MatchOptions) {
    let mut session = open_session(candidates_file, opts);
    let resp = session.on_text_changed(query, acf_session::Caret::End);
    let result = resp.list.map(|l| l.result).unwrap_or_default();

    if opts.json {
        let out = FilterOutput {
            query,
            mode: session.match_mode(),
            fold_accents: session.fold_accents(),
            visible_rows: visible_rows(result.len(), session.max_visible_rows()),
            result: &result,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&out).expect("JSON serialization failed")
        );
    } else {
        for item in &result.items {
            println!("{item}");
        }
        eprintln!("{} of {} candidates", result.len(), session.candidates().len());
    }
}

pub fn fold_text(text: &str) {
    println!("{}", fold(text));
}

#[derive(Serialize)]
struct ReplayLine<'a> {
    line: usize,
    step: String,
    query: &'a str,
    caret: usize,
    selection: Option<&'a str>,
    response: Option<&'a KeyResponse>,
}

pub fn replay(candidates_file: &str, script_file: &str, opts: &MatchOptions) {
    let mut session = open_session(candidates_file, opts);
    let script = die!(
        fs::read_to_string(script_file),
        "Error reading {script_file}: {}"
    );
    let steps = die!(parse_script(&script), "Error in {script_file}: {}");

    for (line, step) in steps {
        let resp = step.apply(&mut session);
        if opts.json {
            let out = ReplayLine {
                line,
                step: step.to_string(),
                query: session.query(),
                caret: session.caret(),
                selection: session.selection(),
                response: resp.as_ref(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).expect("JSON serialization failed")
            );
        } else {
            print!("{}", format_step(&session, &step, resp.as_ref()));
        }
    }
}

/// Human-readable summary of one replayed step.
pub fn format_step(
    session: &AutoCompleteSession,
    step: &ScriptStep,
    resp: Option<&KeyResponse>,
) -> String {
    let mut out = format!(
        "> {step}\n  text={:?} caret={}",
        session.query(),
        session.caret()
    );
    if let Some(sel) = session.selection() {
        out.push_str(&format!(" selected={sel:?}"));
    }
    out.push('\n');
    let Some(resp) = resp else {
        return out;
    };
    if resp.is_ignored() {
        out.push_str("  (ignored)\n");
        return out;
    }
    if let Some(ref text) = resp.replace_text {
        out.push_str(&format!("  replace_text={text:?}\n"));
    }
    if let Some(ref list) = resp.list {
        out.push_str(&format!(
            "  {} matches (rows={}): {}\n",
            list.result.len(),
            list.visible_rows,
            list.result.items.join(", ")
        ));
    }
    out.push_str(&format!("  dropdown={:?}\n", resp.dropdown));
    out
}
