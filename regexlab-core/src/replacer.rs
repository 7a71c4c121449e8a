//! replacer.rs - Whole-text replacement previews.
//!
//! The replacement engine recompiles the pattern independently of the match
//! evaluator and substitutes a template at every position the evaluator's
//! scan policy would match (global forced, sticky honored, zero-width
//! one-character advance). Template syntax is the host engine's: `$1`..`$9`,
//! `$name`, `${name}` and `$$` for a literal dollar.
//!
//! A failing pass yields an empty preview rather than stale output or a
//! propagated error.

use log::debug;

use crate::errors::RegexLabError;
use crate::evaluator::next_scan_position;
use crate::pattern::{compile, PatternSpec};

/// Applies `template` to every match of `pattern` over `text`.
///
/// Recovers from any failure by returning the empty string, keeping the
/// preview panel stable. Use [`try_replace_all`] to observe the cause.
pub fn replace_all(text: &str, pattern: &str, flags: &str, template: &str) -> String {
    match try_replace_all(text, pattern, flags, template) {
        Ok(replaced) => replaced,
        Err(e) => {
            debug!("replacement failed, emitting empty preview: {e}");
            String::new()
        }
    }
}

/// Fallible form of [`replace_all`].
pub fn try_replace_all(
    text: &str,
    pattern: &str,
    flags: &str,
    template: &str,
) -> Result<String, RegexLabError> {
    let spec = PatternSpec::new(pattern, flags);
    let compiled = compile(&spec).map_err(|e| RegexLabError::Replacement(e.to_string()))?;
    let regex = compiled.regex();
    let sticky = compiled.flags().sticky;

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    let mut last_end = 0usize;

    while cursor <= text.len() {
        let caps = match regex.captures_at(text, cursor) {
            Some(caps) => caps,
            None => break,
        };
        let whole = match caps.get(0) {
            Some(m) => m,
            None => break,
        };
        if sticky && whole.start() != cursor {
            break;
        }

        out.push_str(&text[last_end..whole.start()]);
        caps.expand(template, &mut out);
        last_end = whole.end();
        cursor = next_scan_position(text, whole.start(), whole.end());
    }

    out.push_str(&text[last_end..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_backreferences_reorder_captures() {
        let replaced = replace_all("2025-09-11", r"(\d{4})-(\d{2})-(\d{2})", "g", "$3/$2/$1");
        assert_eq!(replaced, "11/09/2025");
    }

    #[test]
    fn named_backreferences_expand() {
        let replaced = replace_all(
            "john@example.com",
            r"(?P<user>\w+)@(?P<host>[\w.]+)",
            "g",
            "${host}: $user",
        );
        assert_eq!(replaced, "example.com: john");
    }

    #[test]
    fn dollar_dollar_is_a_literal_dollar() {
        let replaced = replace_all("5", r"\d", "g", "$$$0");
        assert_eq!(replaced, "$5");
    }

    #[test]
    fn every_occurrence_is_substituted() {
        let replaced = replace_all("a-b-c", "-", "", "+");
        assert_eq!(replaced, "a+b+c");
    }

    #[test]
    fn zero_width_matches_substitute_between_characters() {
        let replaced = replace_all("abc", "(?:)", "g", "-");
        assert_eq!(replaced, "-a-b-c-");
    }

    #[test]
    fn trailing_empty_match_after_a_greedy_one() {
        // `a*` consumes "aa", then matches empty before `b` and at the end.
        let replaced = replace_all("aab", "a*", "g", "-");
        assert_eq!(replaced, "--b-");
    }

    #[test]
    fn sticky_replacement_stops_at_the_first_gap() {
        let replaced = replace_all("aab", "a", "y", "x");
        assert_eq!(replaced, "xxb");
    }

    #[test]
    fn invalid_pattern_yields_an_empty_preview() {
        assert_eq!(replace_all("abc", "(", "g", "$1"), "");
        let err = try_replace_all("abc", "(", "g", "$1").unwrap_err();
        assert!(matches!(err, RegexLabError::Replacement(_)));
    }

    #[test]
    fn unknown_group_references_expand_to_nothing() {
        let replaced = replace_all("abc", "b", "g", "[$9]");
        assert_eq!(replaced, "a[]c");
    }
}
