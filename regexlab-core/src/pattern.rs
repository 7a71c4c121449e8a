//! pattern.rs - Compilation of pattern specifications.
//!
//! This module is the only place that talks to the host regex engine's
//! builder. It turns a `PatternSpec` (pattern source plus normalized flags)
//! into a `CompiledPattern` ready for scanning, applying the typed flags and
//! a size limit that bounds the cost of pathological patterns.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::RegexLabError;
use crate::flags::{normalize_flags, FlagSet};

/// A pattern source paired with its normalized flag string.
///
/// Rebuilt on every edit to either field; compilation is attempted each time
/// and may fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    /// The regular expression source, independent of flags.
    pub pattern: String,
    /// Deduplicated subset of the supported flag alphabet, first-seen order.
    pub flags: String,
}

impl PatternSpec {
    /// Builds a spec from raw input, normalizing the flag string.
    pub fn new(pattern: &str, flags: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            flags: normalize_flags(flags),
        }
    }
}

/// A compiled pattern bound to exactly one `PatternSpec`.
///
/// Owned by a single evaluation pass and never mutated after creation;
/// discarded and rebuilt whenever the spec changes.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    flags: FlagSet,
}

impl CompiledPattern {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn flags(&self) -> FlagSet {
        self.flags
    }
}

/// Compiles a spec with the host engine.
///
/// `i`, `m` and `s` map onto the builder's corresponding modes. The engine is
/// Unicode-first, so `u` is recorded without changing compilation, and `g`,
/// `y` and `d` only affect how the scanner uses the compiled pattern. The
/// compiled program is capped at 10 MiB.
pub fn compile(spec: &PatternSpec) -> Result<CompiledPattern, RegexLabError> {
    let flags = FlagSet::parse(&spec.flags);
    debug!("compiling pattern ({} bytes, flags '{}')", spec.pattern.len(), spec.flags);

    let regex = RegexBuilder::new(&spec.pattern)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_matches_new_line)
        .unicode(true)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()?;

    Ok(CompiledPattern { regex, flags })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_plain_pattern() {
        let compiled = compile(&PatternSpec::new(r"\d+", "g")).unwrap();
        assert!(compiled.regex().is_match("42"));
        assert!(compiled.flags().global);
    }

    #[test]
    fn unbalanced_group_is_a_compile_error() {
        let err = compile(&PatternSpec::new("(", "")).unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn case_insensitive_flag_reaches_the_builder() {
        let compiled = compile(&PatternSpec::new("abc", "i")).unwrap();
        assert!(compiled.regex().is_match("ABC"));

        let sensitive = compile(&PatternSpec::new("abc", "")).unwrap();
        assert!(!sensitive.regex().is_match("ABC"));
    }

    #[test]
    fn multiline_flag_changes_anchor_semantics() {
        let compiled = compile(&PatternSpec::new("^b", "m")).unwrap();
        assert!(compiled.regex().is_match("a\nb"));

        let plain = compile(&PatternSpec::new("^b", "")).unwrap();
        assert!(!plain.regex().is_match("a\nb"));
    }

    #[test]
    fn spec_construction_normalizes_flags() {
        let spec = PatternSpec::new("a", "ggiz");
        assert_eq!(spec.flags, "gi");
    }
}
