// src/markdown/mod.rs
//! Line-oriented Markdown to Notion block conversion.
//!
//! Each line outside a code fence becomes exactly one block; a fenced region
//! becomes one code block once its closing fence is seen. Conversion never
//! fails: constructs it does not understand fall through to paragraphs.

mod links;

pub use links::{parse_text_with_links, render_spans};

use crate::constants::DEFAULT_CODE_LANGUAGE;
use crate::model::Block;
use once_cell::sync::Lazy;
use regex::Regex;

const CODE_FENCE: &str = "```";

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\. ").expect("numbered item regex is valid"));

/// Scanner state carried from one line to the next.
#[derive(Debug, PartialEq)]
enum ScanState<'a> {
    Normal,
    InCode {
        language: String,
        lines: Vec<&'a str>,
    },
}

impl<'a> ScanState<'a> {
    fn advance(self, line: &'a str, blocks: &mut Vec<Block>) -> Self {
        match self {
            ScanState::Normal => match line.strip_prefix(CODE_FENCE) {
                Some(info) => ScanState::InCode {
                    language: fence_language(info),
                    lines: Vec::new(),
                },
                None => {
                    blocks.push(line_to_block(line));
                    ScanState::Normal
                }
            },
            ScanState::InCode { language, lines } if line.starts_with(CODE_FENCE) => {
                log::debug!("Closing code block with language: {}", language);
                blocks.push(Block::Code {
                    text: lines.join("\n"),
                    language,
                });
                ScanState::Normal
            }
            ScanState::InCode {
                language,
                mut lines,
            } => {
                lines.push(line);
                ScanState::InCode { language, lines }
            }
        }
    }
}

fn fence_language(info: &str) -> String {
    match info.trim() {
        "" => DEFAULT_CODE_LANGUAGE.to_string(),
        language => language.to_string(),
    }
}

/// Converts a document into blocks, preserving line order.
///
/// Splitting is on `\n` only, so an empty document is one empty line and
/// yields a single empty paragraph. A code fence that is never closed is
/// dropped together with everything after it.
pub fn convert(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let end = content
        .split('\n')
        .fold(ScanState::Normal, |state, line| state.advance(line, &mut blocks));

    if let ScanState::InCode { language, lines } = end {
        log::warn!(
            "Discarding unterminated {} code block ({} lines)",
            language,
            lines.len()
        );
    }

    log::debug!("Converted markdown into {} blocks", blocks.len());
    blocks
}

/// Maps one line outside a code fence to its block.
fn line_to_block(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("# ") {
        return Block::Heading1(parse_text_with_links(rest));
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Block::Heading2(parse_text_with_links(rest));
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return Block::Heading3(parse_text_with_links(rest));
    }
    if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        return Block::BulletListItem(parse_text_with_links(rest));
    }
    if let Some(marker) = NUMBERED_ITEM.find(line) {
        return Block::NumberedListItem(parse_text_with_links(&line[marker.end()..]));
    }
    if line.trim().is_empty() {
        // Blank lines are kept as empty paragraphs for spacing.
        return Block::Paragraph(Vec::new());
    }
    Block::Paragraph(parse_text_with_links(line))
}

/// One-line text rendering of a block for previews; links come back as `[[url]]`.
pub fn preview(block: &Block) -> String {
    match block {
        Block::Code { text, language } => {
            format!("code ({}): {}", language, text.replace('\n', "\\n"))
        }
        _ => format!("{}: {}", block.kind_name(), render_spans(block.spans())),
    }
}
