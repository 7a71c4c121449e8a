//! Flag normalization for pattern specifications.
//!
//! A raw flag string from the UI (or recovered from a decoded share token)
//! may contain duplicates and arbitrary garbage. `normalize_flags` reduces it
//! to the supported alphabet, and `FlagSet` turns a normalized string into the
//! typed toggles the compiler and scanner consume.
//!
//! License: MIT OR APACHE 2.0

/// The flag characters the editor understands, in their conventional order.
///
/// `g` scan all occurrences, `i` case-insensitive, `m` multiline anchors,
/// `s` dot matches newline, `u` unicode mode, `y` sticky anchoring,
/// `d` match-index reporting.
pub const ALLOWED_FLAGS: [char; 7] = ['g', 'i', 'm', 's', 'u', 'y', 'd'];

/// Reduces a raw flag string to supported characters, each at most once,
/// in first-seen order. Unsupported characters are silently dropped.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize_flags(raw: &str) -> String {
    let mut out = String::with_capacity(ALLOWED_FLAGS.len());
    for c in raw.chars() {
        if ALLOWED_FLAGS.contains(&c) && !out.contains(c) {
            out.push(c);
        }
    }
    out
}

/// Typed view of a normalized flag string.
///
/// `global` and `sticky` select scan behavior; `case_insensitive`,
/// `multi_line`, `dot_matches_new_line` and `unicode` feed the compiler.
/// `indices` is accepted for compatibility: match offsets are always
/// reported, so it changes nothing at evaluation time. Likewise the host
/// engine is Unicode-first, so `unicode` is recorded but never disables
/// anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagSet {
    pub global: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub unicode: bool,
    pub sticky: bool,
    pub indices: bool,
}

impl FlagSet {
    /// Parses a flag string into its typed form. Characters outside the
    /// supported alphabet are ignored, so parsing is total.
    pub fn parse(flags: &str) -> Self {
        let mut set = FlagSet::default();
        for c in flags.chars() {
            match c {
                'g' => set.global = true,
                'i' => set.case_insensitive = true,
                'm' => set.multi_line = true,
                's' => set.dot_matches_new_line = true,
                'u' => set.unicode = true,
                'y' => set.sticky = true,
                'd' => set.indices = true,
                _ => {}
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_unsupported_and_duplicate_flags() {
        assert_eq!(normalize_flags("ggiz"), "gi");
        assert_eq!(normalize_flags("xyzzy"), "y");
        assert_eq!(normalize_flags(""), "");
    }

    #[test]
    fn preserves_first_seen_order() {
        assert_eq!(normalize_flags("dgi"), "dgi");
        assert_eq!(normalize_flags("uigsmyd"), "uigsmyd");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["ggiz", "abcdefg", "GIMSUYD", "m+s*i"] {
            let once = normalize_flags(raw);
            assert_eq!(normalize_flags(&once), once);
        }
    }

    #[test]
    fn uppercase_flags_are_not_supported() {
        assert_eq!(normalize_flags("GI"), "");
    }

    #[test]
    fn parse_maps_every_flag() {
        let set = FlagSet::parse("gimsuyd");
        assert!(set.global);
        assert!(set.case_insensitive);
        assert!(set.multi_line);
        assert!(set.dot_matches_new_line);
        assert!(set.unicode);
        assert!(set.sticky);
        assert!(set.indices);
        assert_eq!(FlagSet::parse(""), FlagSet::default());
    }
}
