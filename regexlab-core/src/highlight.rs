//! highlight.rs - Escaped, markup-safe rendering of match spans.
//!
//! The renderer merges an ordered list of `[start, end)` spans over the
//! original text into a `<pre>` block with each matched region wrapped in
//! `<mark>`. Literal `&`, `<` and `>` are escaped before markers are
//! inserted, so the injected markers are the only interpreted markup and the
//! sample text can never introduce structure of its own.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::evaluator::MatchRecord;

/// A half-open `[start, end)` byte range over the subject text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl From<&MatchRecord> for Span {
    fn from(record: &MatchRecord) -> Self {
        Span {
            start: record.start,
            end: record.end,
        }
    }
}

/// Renders `text` with the given spans demarcated.
///
/// Spans are expected in increasing order without overlap, as produced by an
/// evaluation pass. A span that is inverted, out of bounds, overlapping the
/// previous one, or off a character boundary is skipped rather than
/// panicking, so the renderer stays total for arbitrary caller input.
/// Deterministic and pure: identical input yields identical output.
pub fn render_highlight(text: &str, spans: &[Span]) -> String {
    let mut html = String::with_capacity(text.len() + 16);
    html.push_str("<pre>");

    let mut cursor = 0usize;
    for span in spans {
        if span.end < span.start || span.start < cursor || span.end > text.len() {
            debug!("skipping out-of-order highlight span {}..{}", span.start, span.end);
            continue;
        }
        let (gap, body) = match (text.get(cursor..span.start), text.get(span.start..span.end)) {
            (Some(gap), Some(body)) => (gap, body),
            _ => {
                debug!("skipping non-boundary highlight span {}..{}", span.start, span.end);
                continue;
            }
        };
        push_escaped(&mut html, gap);
        html.push_str("<mark>");
        push_escaped(&mut html, body);
        html.push_str("</mark>");
        cursor = span.end;
    }

    // `cursor` is 0 or the end of an accepted span, both char boundaries.
    push_escaped(&mut html, &text[cursor..]);
    html.push_str("</pre>");
    html
}

fn push_escaped(out: &mut String, raw: &str) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_spans_wrap_the_whole_escaped_text() {
        assert_eq!(render_highlight("a & b", &[]), "<pre>a &amp; b</pre>");
    }

    #[test]
    fn angle_brackets_never_survive_unescaped() {
        let spans = [Span { start: 1, end: 4 }];
        let html = render_highlight("a<b>c", &spans);
        assert_eq!(html, "<pre>a<mark>&lt;b&gt;</mark>c</pre>");
    }

    #[test]
    fn ampersand_is_escaped_before_markers_are_inserted() {
        let spans = [Span { start: 0, end: 5 }];
        let html = render_highlight("&amp;", &spans);
        assert_eq!(html, "<pre><mark>&amp;amp;</mark></pre>");
    }

    #[test]
    fn adjacent_spans_keep_their_order() {
        let spans = [Span { start: 0, end: 1 }, Span { start: 1, end: 2 }];
        assert_eq!(
            render_highlight("ab", &spans),
            "<pre><mark>a</mark><mark>b</mark></pre>"
        );
    }

    #[test]
    fn invalid_spans_are_skipped_not_fatal() {
        let spans = [
            Span { start: 3, end: 1 },  // inverted
            Span { start: 0, end: 99 }, // out of bounds
            Span { start: 1, end: 2 },
        ];
        assert_eq!(render_highlight("abc", &spans), "<pre>a<mark>b</mark>c</pre>");
    }

    #[test]
    fn overlapping_span_is_dropped() {
        let spans = [Span { start: 0, end: 2 }, Span { start: 1, end: 3 }];
        assert_eq!(render_highlight("abc", &spans), "<pre><mark>ab</mark>c</pre>");
    }

    #[test]
    fn non_boundary_span_is_dropped() {
        // "é" is two bytes; a span splitting it cannot be rendered.
        let spans = [Span { start: 0, end: 1 }];
        assert_eq!(render_highlight("é", &spans), "<pre>é</pre>");
    }

    #[test]
    fn rendering_is_deterministic() {
        let spans = [Span { start: 0, end: 1 }];
        assert_eq!(render_highlight("xyz", &spans), render_highlight("xyz", &spans));
    }
}
