// tests/unit/markdown_conversion.rs
//! Markdown to block conversion through the public API.

use notion_daily::{convert, parse_text_with_links, render_spans, Block, RichSpan};
use pretty_assertions::assert_eq;

fn text(s: &str) -> Vec<RichSpan> {
    vec![RichSpan::plain(s)]
}

#[test]
fn heading_one() {
    assert_eq!(convert("# Hello"), vec![Block::Heading1(text("Hello"))]);
}

#[test]
fn bullet_items_keep_order() {
    assert_eq!(
        convert("- a\n- b"),
        vec![Block::BulletListItem(text("a")), Block::BulletListItem(text("b"))]
    );
}

#[test]
fn fenced_python() {
    assert_eq!(
        convert("```py\nx=1\n```"),
        vec![Block::Code {
            text: "x=1".to_string(),
            language: "py".to_string(),
        }]
    );
}

#[test]
fn link_trailing_slash_is_stripped() {
    let blocks = convert("Link [[https://x.com/]]");
    assert_eq!(
        blocks,
        vec![Block::Paragraph(vec![
            RichSpan::plain("Link "),
            RichSpan::Link {
                content: "https://x.com".to_string(),
                url: "https://x.com".to_string(),
            },
        ])]
    );
}

#[test]
fn empty_document_is_one_empty_paragraph() {
    assert_eq!(convert(""), vec![Block::Paragraph(Vec::new())]);
}

#[test]
fn daily_note_document() {
    let doc = "# Heading 1
## Heading 2
### Heading 3

This is a paragraph with a [[https://example.com]] link.

- Bullet point 1
- Bullet point 2

1. Numbered item 1
2. Numbered item 2

```
const code = \"block\";
console.log(code);
```";

    let kinds: Vec<&str> = convert(doc).iter().map(Block::kind_name).collect();
    assert_eq!(
        kinds,
        vec![
            "heading_1",
            "heading_2",
            "heading_3",
            "paragraph",
            "paragraph",
            "paragraph",
            "bulleted_list_item",
            "bulleted_list_item",
            "paragraph",
            "numbered_list_item",
            "numbered_list_item",
            "paragraph",
            "code",
        ]
    );

    let blocks = convert(doc);
    assert_eq!(
        blocks[4],
        Block::Paragraph(vec![
            RichSpan::plain("This is a paragraph with a "),
            RichSpan::link("https://example.com"),
            RichSpan::plain(" link."),
        ])
    );
    assert_eq!(
        blocks[12],
        Block::Code {
            text: "const code = \"block\";\nconsole.log(code);".to_string(),
            language: "typescript".to_string(),
        }
    );
}

/// One block per line outside fences, one per closed fence, none for an open one.
#[test]
fn block_count_follows_lines_and_fences() {
    let cases = [
        ("a\nb\nc", 3),
        ("a\n```\nx\ny\n```\nb", 3),
        ("```\n```\n```\n```", 2),
        ("a\n```\nnever closed\n# heading", 1),
        ("```rust\n```\n\n", 3),
        ("\n\n", 3),
    ];
    for (doc, expected) in cases {
        assert_eq!(convert(doc).len(), expected, "document: {:?}", doc);
    }
}

#[test]
fn arbitrary_inputs_never_panic() {
    let nasty = [
        "[[",
        "]]",
        "[[[[]]]]",
        "```",
        "``",
        "# ",
        "##",
        "1.",
        "1. ",
        "١. arabic digit",
        "* [[a/]] * [[b",
        "\u{0}\u{feff}# bom",
        "🙂 [[🙂/]] 🙂",
    ];
    for doc in nasty {
        let _ = convert(doc);
        let _ = convert(&format!("{}\n{}", doc, doc));
    }
    assert_eq!(convert("١. arabic digit"), vec![Block::Paragraph(text("١. arabic digit"))]);
}

#[test]
fn text_without_links_round_trips() {
    for line in ["plain", "  spaced  ", "brackets [ ] and ]] alone", "tab\there"] {
        assert_eq!(parse_text_with_links(line), text(line));
    }
}

#[test]
fn reparsing_rendered_spans_is_idempotent() {
    for line in [
        "a [[https://x.com/]] b",
        "[[one/]][[two]] tail",
        "no links at all",
        "broken [[tail",
    ] {
        let once = parse_text_with_links(line);
        let twice = parse_text_with_links(&render_spans(&once));
        assert_eq!(twice, once, "line: {:?}", line);
    }
}

#[test]
fn blocks_serialize_for_submission() {
    let json = serde_json::to_value(convert("1. first [[https://x.com/]]")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "object": "block",
            "type": "numbered_list_item",
            "numbered_list_item": {
                "rich_text": [
                    {"type": "text", "text": {"content": "first ", "link": null}},
                    {"type": "text", "text": {"content": "https://x.com", "link": {"url": "https://x.com"}}}
                ],
                "color": "default"
            }
        }])
    );
}
