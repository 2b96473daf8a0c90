// src/markdown/links.rs
//! `[[url]]` inline link extraction.

use crate::model::RichSpan;

const LINK_OPEN: &str = "[[";
const LINK_CLOSE: &str = "]]";

/// Splits a line into plain and link spans.
///
/// Text between `[[` and the next `]]` becomes a link whose label and target
/// are the same string, minus one trailing `/`. An unclosed `[[` ends the scan
/// and everything from it onward is kept as plain text. Empty plain runs are
/// not emitted, so an empty input yields no spans.
pub fn parse_text_with_links(text: &str) -> Vec<RichSpan> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(open) = rest.find(LINK_OPEN) else {
            spans.push(RichSpan::plain(rest));
            break;
        };

        if open > 0 {
            spans.push(RichSpan::plain(&rest[..open]));
        }

        let label_start = open + LINK_OPEN.len();
        match rest[label_start..].find(LINK_CLOSE) {
            Some(len) => {
                let label = &rest[label_start..label_start + len];
                log::debug!("Found link: {}", label);
                spans.push(RichSpan::link(label));
                rest = &rest[label_start + len + LINK_CLOSE.len()..];
            }
            None => {
                spans.push(RichSpan::plain(&rest[open..]));
                break;
            }
        }
    }

    spans
}

/// Writes spans back as Markdown, wrapping links in `[[...]]`.
pub fn render_spans(spans: &[RichSpan]) -> String {
    spans
        .iter()
        .map(|span| match span {
            RichSpan::Text { content } => content.clone(),
            RichSpan::Link { url, .. } => format!("{}{}{}", LINK_OPEN, url, LINK_CLOSE),
        })
        .collect()
}
