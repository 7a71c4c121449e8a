//! share.rs - The shareable-state codec.
//!
//! Editor state (pattern, flags, sample text, optional replacement) is packed
//! into a query-string-shaped token with keys `p`, `f`, `t` and `r`. Each
//! value is URL-safe, unpadded base64 over the field's UTF-8 bytes, so the
//! token embeds in a URL without further percent-encoding and arbitrary
//! Unicode round-trips exactly.
//!
//! Decoding is total: unknown keys are ignored, and a field that fails to
//! decode is treated as absent without disturbing the others. Values minted
//! by older standard-alphabet encoders (padded, percent-escaped) are still
//! accepted.
//!
//! License: MIT OR APACHE 2.0

use base64::{engine::general_purpose, Engine as _};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::RegexLabError;

/// Decoded editor state. Every field is optional: an absent field means the
/// caller leaves its current value untouched, never that it resets to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareState {
    pub pattern: Option<String>,
    pub flags: Option<String>,
    pub text: Option<String>,
    pub replacement: Option<String>,
}

/// Encodes editor state into a URL-safe token.
///
/// `p`, `f` and `t` are always present; `r` is omitted entirely when no
/// replacement is given.
pub fn encode_state(pattern: &str, flags: &str, text: &str, replacement: Option<&str>) -> String {
    let enc = |s: &str| general_purpose::URL_SAFE_NO_PAD.encode(s.as_bytes());
    let mut token = format!("p={}&f={}&t={}", enc(pattern), enc(flags), enc(text));
    if let Some(replacement) = replacement {
        token.push_str("&r=");
        token.push_str(&enc(replacement));
    }
    token
}

/// Recovers whatever subset of the editor state `qs` carries.
///
/// Never fails: malformed pairs and undecodable fields simply stay absent. A
/// leading `?` is tolerated so a raw `location.search` can be passed through.
pub fn decode_state(qs: &str) -> ShareState {
    let mut state = ShareState::default();
    for pair in qs.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        let slot = match key {
            "p" => &mut state.pattern,
            "f" => &mut state.flags,
            "t" => &mut state.text,
            "r" => &mut state.replacement,
            _ => {
                debug!("ignoring unknown share key '{key}'");
                continue;
            }
        };
        match decode_field(key, value) {
            Ok(decoded) => *slot = Some(decoded),
            Err(e) => debug!("dropping share field: {e}"),
        }
    }
    state
}

/// Decodes one field value, tolerating both this codec's URL-safe unpadded
/// alphabet and the standard padded alphabet of older tokens.
fn decode_field(key: &str, raw: &str) -> Result<String, RegexLabError> {
    let cleaned = percent_decode(raw);
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(cleaned.as_bytes())
        .or_else(|_| general_purpose::STANDARD.decode(cleaned.as_bytes()))
        .map_err(|_| RegexLabError::ShareDecode(key.to_string()))?;
    String::from_utf8(bytes).map_err(|_| RegexLabError::ShareDecode(key.to_string()))
}

/// Resolves `%XX` escapes left by URL machinery in foreign tokens. Invalid
/// escapes pass through literally.
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(p: &str, f: &str, t: &str, r: Option<&str>) -> ShareState {
        decode_state(&encode_state(p, f, t, r))
    }

    #[test]
    fn round_trips_plain_ascii() {
        let state = round_trip(r"\d+", "gi", "call 911", Some("#"));
        assert_eq!(state.pattern.as_deref(), Some(r"\d+"));
        assert_eq!(state.flags.as_deref(), Some("gi"));
        assert_eq!(state.text.as_deref(), Some("call 911"));
        assert_eq!(state.replacement.as_deref(), Some("#"));
    }

    #[test]
    fn round_trips_empty_strings() {
        let state = round_trip("", "", "", Some(""));
        assert_eq!(state.pattern.as_deref(), Some(""));
        assert_eq!(state.flags.as_deref(), Some(""));
        assert_eq!(state.text.as_deref(), Some(""));
        assert_eq!(state.replacement.as_deref(), Some(""));
    }

    #[test]
    fn round_trips_reserved_url_characters() {
        let state = round_trip("%&=?", "g", "a=b&c=d%20", Some("100%"));
        assert_eq!(state.pattern.as_deref(), Some("%&=?"));
        assert_eq!(state.text.as_deref(), Some("a=b&c=d%20"));
        assert_eq!(state.replacement.as_deref(), Some("100%"));
    }

    #[test]
    fn round_trips_multibyte_unicode() {
        let state = round_trip("héllo", "u", "emoji: 🦀🦀", Some("日本語"));
        assert_eq!(state.pattern.as_deref(), Some("héllo"));
        assert_eq!(state.text.as_deref(), Some("emoji: 🦀🦀"));
        assert_eq!(state.replacement.as_deref(), Some("日本語"));
    }

    #[test]
    fn omitted_replacement_has_no_r_key() {
        let token = encode_state("a", "g", "b", None);
        assert!(!token.contains("&r="));
        assert_eq!(decode_state(&token).replacement, None);
    }

    #[test]
    fn the_token_is_url_safe() {
        // Bytes that force `+`, `/` and `=` in standard base64 must not
        // appear in the minted token.
        let token = encode_state("é~~~>", "g", "????>", Some("~"));
        assert!(token.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '=' | '&')
        }));
        // The only `=` are the key/value separators.
        assert_eq!(token.matches('=').count(), 4);
    }

    #[test]
    fn malformed_field_is_absent_while_others_decode() {
        let good = general_purpose::URL_SAFE_NO_PAD.encode("abc".as_bytes());
        let state = decode_state(&format!("p=!!!not-base64!!!&t={good}"));
        assert_eq!(state.pattern, None);
        assert_eq!(state.text.as_deref(), Some("abc"));
    }

    #[test]
    fn invalid_utf8_field_is_absent() {
        let bad = general_purpose::URL_SAFE_NO_PAD.encode([0xff, 0xfe]);
        let state = decode_state(&format!("p={bad}"));
        assert_eq!(state.pattern, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let token = format!("{}&zz=what&v=2", encode_state("a", "", "b", None));
        let state = decode_state(&token);
        assert_eq!(state.pattern.as_deref(), Some("a"));
        assert_eq!(state.text.as_deref(), Some("b"));
    }

    #[test]
    fn accepts_standard_alphabet_tokens_from_the_old_encoder() {
        // btoa-style: standard alphabet with padding, '=' percent-escaped by
        // URL machinery.
        let legacy = general_purpose::STANDARD.encode("pa>>?".as_bytes());
        let escaped = legacy.replace('=', "%3D").replace('+', "%2B").replace('/', "%2F");
        let state = decode_state(&format!("p={escaped}"));
        assert_eq!(state.pattern.as_deref(), Some("pa>>?"));
    }

    #[test]
    fn tolerates_a_leading_question_mark() {
        let token = format!("?{}", encode_state("x", "g", "y", None));
        assert_eq!(decode_state(&token).pattern.as_deref(), Some("x"));
    }

    #[test]
    fn decode_never_panics_on_garbage() {
        for garbage in ["", "&&&", "=", "p", "p=", "%", "p=%", "p=%zz", "p=%3", "🦀=🦀"] {
            let _ = decode_state(garbage);
        }
    }
}
