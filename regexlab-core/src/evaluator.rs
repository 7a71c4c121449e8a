//! evaluator.rs - Match evaluation over a subject text.
//!
//! Given a pattern, flags and sample text, the evaluator compiles the pattern
//! and scans the whole text, producing one `MatchRecord` per occurrence plus
//! the elapsed wall-clock time. Compile failures surface as an in-band error
//! message with the record list cleared; no input combination panics.
//!
//! Repeated-scan semantics are always in force: the scan walks every
//! occurrence whether or not `g` was given, without mutating the flag string
//! the user sees. The sticky flag (`y`) additionally requires each match to
//! start exactly at the scan cursor; the first anchor failure ends the scan.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeMap;
use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::pattern::{compile, CompiledPattern, PatternSpec};

/// Hard ceiling on the number of records one pass may produce.
///
/// Truncation at the cap is silent: it bounds the cost of pathological
/// pattern/text pairs and is not reported as an error.
pub const MATCH_CAP: usize = 10_000;

/// A single match found during one evaluation pass.
///
/// Offsets are byte offsets into the UTF-8 subject text and always lie on
/// character boundaries. Group values are `None` where a group did not
/// participate in the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 1-based position of this match within the pass.
    pub ordinal: usize,
    pub start: usize,
    pub end: usize,
    /// The matched substring.
    pub text: String,
    /// Unnamed capture groups, in group-number order (group 1 first).
    pub numbered_groups: Vec<Option<String>>,
    /// Named capture groups, keyed by name.
    pub named_groups: BTreeMap<String, Option<String>>,
}

/// The outcome of one evaluation pass.
///
/// Exactly one of {non-empty records, no error} or {empty records, error
/// possibly set} holds: a failure forcibly empties the record list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub records: Vec<MatchRecord>,
    /// Wall-clock duration of the scan in fractional milliseconds.
    pub elapsed_millis: f64,
    /// The compiler's message when the pattern failed to compile.
    pub error: Option<String>,
}

impl EvaluationResult {
    fn failed(error: String) -> Self {
        Self {
            records: Vec::new(),
            elapsed_millis: 0.0,
            error: Some(error),
        }
    }
}

/// Evaluates `pattern` with `flags` against `text`.
///
/// Flags are normalized before compilation, so callers may pass raw input.
/// This is a pure function of its arguments (plus the fixed match cap):
/// identical inputs re-derive identical records.
pub fn evaluate(text: &str, pattern: &str, flags: &str) -> EvaluationResult {
    let spec = PatternSpec::new(pattern, flags);
    let compiled = match compile(&spec) {
        Ok(compiled) => compiled,
        Err(e) => {
            debug!("evaluation aborted, pattern did not compile: {e}");
            return EvaluationResult::failed(e.to_string());
        }
    };

    let started = Instant::now();
    let records = scan(&compiled, text);
    let elapsed_millis = started.elapsed().as_secs_f64() * 1000.0;

    debug!("scan produced {} record(s) in {elapsed_millis:.3} ms", records.len());
    EvaluationResult {
        records,
        elapsed_millis,
        error: None,
    }
}

/// Walks all matches of a compiled pattern over `text`, up to `MATCH_CAP`.
fn scan(compiled: &CompiledPattern, text: &str) -> Vec<MatchRecord> {
    let regex = compiled.regex();
    let sticky = compiled.flags().sticky;
    let names: Vec<&str> = regex.capture_names().flatten().collect();

    let mut records = Vec::new();
    let mut cursor = 0usize;

    while records.len() < MATCH_CAP && cursor <= text.len() {
        let caps = match regex.captures_at(text, cursor) {
            Some(caps) => caps,
            None => break,
        };
        // Group 0 always participates; treat its absence as end-of-scan
        // rather than unwrapping.
        let whole = match caps.get(0) {
            Some(m) => m,
            None => break,
        };
        if sticky && whole.start() != cursor {
            break;
        }

        let numbered_groups = caps
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect();
        let named_groups = names
            .iter()
            .map(|&name| (name.to_string(), caps.name(name).map(|m| m.as_str().to_string())))
            .collect();

        records.push(MatchRecord {
            ordinal: records.len() + 1,
            start: whole.start(),
            end: whole.end(),
            text: whole.as_str().to_string(),
            numbered_groups,
            named_groups,
        });

        cursor = next_scan_position(text, whole.start(), whole.end());
    }

    records
}

/// Returns the cursor position for the search following a match at
/// `[start, end)`.
///
/// A zero-width match advances by exactly one character so the scan always
/// makes forward progress; past the end of the text the returned position
/// fails the scan-loop bound and ends the pass.
pub(crate) fn next_scan_position(text: &str, start: usize, end: usize) -> usize {
    if end > start {
        return end;
    }
    match text[end..].chars().next() {
        Some(c) => end + c.len_utf8(),
        None => end + 1,
    }
}
