// regexlab-core/src/lib.rs
//! # RegexLab Core Library
//!
//! `regexlab-core` provides the evaluation engine behind the RegexLab
//! regular-expression tester: given a pattern, flags, sample text and a
//! replacement template, it produces match records, a replacement preview and
//! an escaped highlight rendering, and it defines the URL-safe codec for
//! shareable editor state.
//!
//! The library is a thin, carefully specified orchestration layer around the
//! host regex engine (the `regex` crate). It is pure and stateless: every
//! pass owns its compiled pattern and records, identical inputs re-derive
//! identical outputs, and no error is ever fatal to the caller.
//!
//! ## Modules
//!
//! * `flags`: normalization of flag strings and the typed `FlagSet`.
//! * `pattern`: compilation of a `PatternSpec` into a `CompiledPattern`.
//! * `evaluator`: the scan loop producing `MatchRecord`s with timing.
//! * `replacer`: whole-text replacement previews with host backreferences.
//! * `highlight`: escaped `<pre>`/`<mark>` rendering of match spans.
//! * `share`: the shareable-state codec (query keys `p`, `f`, `t`, `r`).
//! * `pipeline`: the four-strings-in, four-artifacts-out entry point.
//! * `presets`: the built-in preset catalog and merge/validation helpers.
//! * `errors`: the `RegexLabError` taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use regexlab_core::{run, EditorInput};
//!
//! let output = run(&EditorInput {
//!     pattern: r"(\d{4})-(\d{2})-(\d{2})".to_string(),
//!     flags: "g".to_string(),
//!     text: "due 2025-09-11".to_string(),
//!     replacement: "$3/$2/$1".to_string(),
//! });
//!
//! assert_eq!(output.result.records.len(), 1);
//! assert_eq!(output.replaced, "due 11/09/2025");
//! assert!(output.highlight.contains("<mark>2025-09-11</mark>"));
//! ```
//!
//! ## Error Handling
//!
//! Failures are local and recoverable by design: a bad pattern surfaces as
//! `EvaluationResult::error` with the records cleared, a failing replacement
//! yields an empty preview, and a malformed share field decodes as absent.
//! The `RegexLabError` enum carries the causes for callers that want them.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod errors;
pub mod evaluator;
pub mod flags;
pub mod highlight;
pub mod pattern;
pub mod pipeline;
pub mod presets;
pub mod replacer;
pub mod share;

/// Re-exports the custom error type for clear error reporting.
pub use errors::RegexLabError;

/// Re-exports flag handling: the supported alphabet, normalization and the
/// typed flag view.
pub use flags::{normalize_flags, FlagSet, ALLOWED_FLAGS};

/// Re-exports pattern compilation types.
pub use pattern::{compile, CompiledPattern, PatternSpec};

/// Re-exports the match evaluator and its result types.
pub use evaluator::{evaluate, EvaluationResult, MatchRecord, MATCH_CAP};

/// Re-exports the replacement engine.
pub use replacer::{replace_all, try_replace_all};

/// Re-exports the highlight renderer.
pub use highlight::{render_highlight, Span};

/// Re-exports the shareable-state codec.
pub use share::{decode_state, encode_state, ShareState};

/// Re-exports the one-shot evaluation pipeline.
pub use pipeline::{run, EditorInput, EditorOutput};

/// Re-exports the preset catalog and its helpers.
pub use presets::{default_presets, merge_presets, validate_presets, Preset};
