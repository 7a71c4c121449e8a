//! pipeline.rs - One-shot evaluation of the whole editor state.
//!
//! The UI-facing contract: four strings in, four artifacts out. Callers
//! invoke this after every field change; there is no hidden cross-call state,
//! so repeated invocation with identical input yields identical output.

use serde::{Deserialize, Serialize};

use crate::evaluator::{evaluate, EvaluationResult};
use crate::flags::normalize_flags;
use crate::highlight::{render_highlight, Span};
use crate::replacer::replace_all;

/// The four editor fields, raw as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorInput {
    pub pattern: String,
    pub flags: String,
    pub text: String,
    pub replacement: String,
}

/// Everything a front end needs to render one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorOutput {
    /// The normalized flag string actually used.
    pub flags: String,
    pub result: EvaluationResult,
    /// The replacement preview; empty when the pass failed.
    pub replaced: String,
    /// Escaped markup of the sample text with matches demarcated.
    pub highlight: String,
}

/// Runs one full pass: normalize flags, evaluate, replace, highlight.
///
/// On a compile error the record list is empty, so the highlight degenerates
/// to the whole escaped text and the replacement preview is cleared.
pub fn run(input: &EditorInput) -> EditorOutput {
    let flags = normalize_flags(&input.flags);
    let result = evaluate(&input.text, &input.pattern, &flags);

    let replaced = if result.error.is_some() {
        String::new()
    } else {
        replace_all(&input.text, &input.pattern, &flags, &input.replacement)
    };

    let spans: Vec<Span> = result.records.iter().map(Span::from).collect();
    let highlight = render_highlight(&input.text, &spans);

    EditorOutput {
        flags,
        result,
        replaced,
        highlight,
    }
}
