// src/model/block.rs
//! Block and rich-text values submitted to the "append block children" endpoint.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// A run of text inside a block, either plain or a hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichSpan {
    Text { content: String },
    /// `url` never ends with `/`; `content` is the same stripped label.
    Link { content: String, url: String },
}

impl RichSpan {
    pub fn plain(content: impl Into<String>) -> Self {
        RichSpan::Text {
            content: content.into(),
        }
    }

    /// Builds a link span from a raw `[[...]]` label, dropping one trailing `/`.
    pub fn link(label: &str) -> Self {
        let target = label.strip_suffix('/').unwrap_or(label);
        RichSpan::Link {
            content: target.to_string(),
            url: target.to_string(),
        }
    }

    /// The visible text of the span.
    pub fn content(&self) -> &str {
        match self {
            RichSpan::Text { content } | RichSpan::Link { content, .. } => content,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            RichSpan::Text { .. } => None,
            RichSpan::Link { url, .. } => Some(url),
        }
    }
}

#[derive(Serialize)]
struct LinkRef<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct TextRef<'a> {
    content: &'a str,
    link: Option<LinkRef<'a>>,
}

impl Serialize for RichSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut span = serializer.serialize_struct("RichSpan", 2)?;
        span.serialize_field("type", "text")?;
        span.serialize_field(
            "text",
            &TextRef {
                content: self.content(),
                link: self.url().map(|url| LinkRef { url }),
            },
        )?;
        span.end()
    }
}

/// One content block produced from a line (or fenced region) of Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading1(Vec<RichSpan>),
    Heading2(Vec<RichSpan>),
    Heading3(Vec<RichSpan>),
    Paragraph(Vec<RichSpan>),
    BulletListItem(Vec<RichSpan>),
    NumberedListItem(Vec<RichSpan>),
    Code { text: String, language: String },
}

impl Block {
    /// The Notion block type this value is submitted as.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::Paragraph(_) => "paragraph",
            Block::BulletListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::Code { .. } => "code",
        }
    }

    /// Rich text spans of a text block; empty for code blocks.
    pub fn spans(&self) -> &[RichSpan] {
        match self {
            Block::Heading1(spans)
            | Block::Heading2(spans)
            | Block::Heading3(spans)
            | Block::Paragraph(spans)
            | Block::BulletListItem(spans)
            | Block::NumberedListItem(spans) => spans,
            Block::Code { .. } => &[],
        }
    }

    /// Concatenated visible text.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Code { text, .. } => text.clone(),
            _ => self.spans().iter().map(RichSpan::content).collect(),
        }
    }
}

#[derive(Serialize)]
struct TextBody<'a> {
    rich_text: &'a [RichSpan],
    color: &'static str,
}

#[derive(Serialize)]
struct CodeBody<'a> {
    rich_text: [RichSpan; 1],
    language: &'a str,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind_name();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", kind)?;
        match self {
            Block::Heading1(spans)
            | Block::Heading2(spans)
            | Block::Heading3(spans)
            | Block::Paragraph(spans)
            | Block::BulletListItem(spans)
            | Block::NumberedListItem(spans) => map.serialize_entry(
                kind,
                &TextBody {
                    rich_text: spans,
                    color: "default",
                },
            )?,
            Block::Code { text, language } => map.serialize_entry(
                kind,
                &CodeBody {
                    rich_text: [RichSpan::plain(text.as_str())],
                    language,
                },
            )?,
        }
        map.end()
    }
}
