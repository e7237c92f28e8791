//! End-to-end tests for the markdown to content-block pipeline, pinning
//! the exact wire shapes the destination page API expects.

use notedown_engine::{ContentBlock, TranslateError, blocks_from_markdown};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("")]
#[case("   \n   \n   ")]
#[case("\n\n\n")]
fn blank_input_produces_no_blocks(#[case] markdown: &str) {
    assert_eq!(blocks_from_markdown(markdown).unwrap(), vec![]);
}

#[test]
fn converts_a_simple_paragraph() {
    let blocks = blocks_from_markdown("This is a simple paragraph").unwrap();

    assert_eq!(
        serde_json::to_value(&blocks).unwrap(),
        json!([
            {
                "type": "paragraph",
                "object": "block",
                "paragraph": {
                    "rich_text": [
                        { "type": "text", "text": { "content": "This is a simple paragraph" } }
                    ]
                }
            }
        ])
    );
}

#[test]
fn converts_multiple_paragraphs_into_separate_blocks() {
    let blocks = blocks_from_markdown("First paragraph\n\nSecond paragraph").unwrap();

    assert_eq!(
        blocks,
        vec![
            ContentBlock::paragraph("First paragraph"),
            ContentBlock::paragraph("Second paragraph"),
        ]
    );
}

#[rstest]
#[case(1, "heading_1")]
#[case(2, "heading_2")]
#[case(3, "heading_3")]
fn shallow_headings_keep_their_level(#[case] level: usize, #[case] key: &str) {
    let markdown = format!("{} What's new", "#".repeat(level));
    let blocks = blocks_from_markdown(&markdown).unwrap();

    assert_eq!(
        serde_json::to_value(&blocks).unwrap(),
        json!([
            {
                "type": key,
                "object": "block",
                key: {
                    "rich_text": [
                        { "type": "text", "text": { "content": "What's new" } }
                    ]
                }
            }
        ])
    );
}

#[rstest]
#[case(4)]
#[case(5)]
#[case(6)]
fn deep_headings_demote_to_bold_paragraphs(#[case] level: usize) {
    let markdown = format!("{} What's new", "#".repeat(level));
    let blocks = blocks_from_markdown(&markdown).unwrap();

    assert_eq!(
        serde_json::to_value(&blocks).unwrap(),
        json!([
            {
                "type": "paragraph",
                "object": "block",
                "paragraph": {
                    "rich_text": [
                        {
                            "type": "text",
                            "text": { "content": "What's new" },
                            "annotations": { "bold": true }
                        }
                    ]
                }
            }
        ])
    );
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn empty_and_whitespace_headings_are_ignored(#[case] level: usize) {
    let hashes = "#".repeat(level);

    assert_eq!(blocks_from_markdown(&format!("{hashes} ")).unwrap(), vec![]);
    assert_eq!(
        blocks_from_markdown(&format!("{hashes}   \t  ")).unwrap(),
        vec![]
    );
}

#[test]
fn fenced_code_becomes_a_code_block() {
    let blocks = blocks_from_markdown("```rust\nfn main() {}\n```").unwrap();

    assert_eq!(
        serde_json::to_value(&blocks).unwrap(),
        json!([
            {
                "type": "code",
                "object": "block",
                "code": {
                    "language": "rust",
                    "rich_text": [
                        { "type": "text", "text": { "content": "fn main() {}" } }
                    ]
                }
            }
        ])
    );
}

#[test]
fn untagged_code_defaults_to_plaintext() {
    let blocks = blocks_from_markdown("```\nsome output\n```").unwrap();
    assert_eq!(blocks, vec![ContentBlock::code("some output", "plaintext")]);
}

#[test]
fn mixed_document_keeps_block_order() {
    let markdown = "# Title\n\nIntro paragraph\n\n## Details\n\n```sh\nls -la\n```\n\n#### Footnote heading";
    let blocks = blocks_from_markdown(markdown).unwrap();

    assert_eq!(
        blocks,
        vec![
            ContentBlock::heading_1("Title"),
            ContentBlock::paragraph("Intro paragraph"),
            ContentBlock::heading_2("Details"),
            ContentBlock::code("ls -la", "sh"),
            ContentBlock::bold_paragraph("Footnote heading"),
        ]
    );
}

#[test]
fn inline_markdown_passes_through_verbatim() {
    let blocks = blocks_from_markdown("Read [the docs](https://example.com) for **details**").unwrap();

    assert_eq!(
        blocks,
        vec![ContentBlock::paragraph(
            "Read [the docs](https://example.com) for **details**"
        )]
    );
}

#[test]
fn every_emitted_block_has_non_empty_rich_text() {
    let markdown = "# Title\n\nBody\n\n#### Deep\n\n```\ncode\n```";
    let blocks = blocks_from_markdown(markdown).unwrap();

    assert!(!blocks.is_empty());
    for block in &blocks {
        let runs = block.rich_text();
        assert!(!runs.is_empty());
        assert!(runs.iter().all(|run| !run.content().trim().is_empty()));
    }
}

#[test]
fn demoted_heading_run_is_bold() {
    let blocks = blocks_from_markdown("##### Deep heading").unwrap();

    assert_eq!(blocks.len(), 1);
    let run = &blocks[0].rich_text()[0];
    assert!(run.is_bold());
    assert_eq!(run.content(), "Deep heading");
}

#[test]
fn translation_is_deterministic() {
    let markdown = "# Title\n\nBody\n\n##### Deep";

    assert_eq!(
        blocks_from_markdown(markdown).unwrap(),
        blocks_from_markdown(markdown).unwrap()
    );
}

#[rstest]
#[case("* item one\n* item two", "list")]
#[case("1. first\n2. second", "ordered_list")]
#[case("> a quote", "blockquote")]
#[case("---", "hr")]
#[case("| a | b |\n|---|---|\n| 1 | 2 |", "table")]
#[case("<div>markup</div>", "html")]
fn unsupported_constructs_fail_translation(#[case] markdown: &str, #[case] kind: &str) {
    let err = blocks_from_markdown(markdown).unwrap_err();

    assert!(matches!(
        &err,
        TranslateError::UnparseableToken { kind: k, .. } if k == kind
    ));
}

#[test]
fn one_unsupported_token_discards_the_valid_rest() {
    let markdown = "Good paragraph\n\n* a list item\n\nAnother good paragraph";

    let err = blocks_from_markdown(markdown).unwrap_err();
    match err {
        TranslateError::UnparseableToken { kind, raw } => {
            assert_eq!(kind, "list");
            assert!(raw.contains("a list item"));
        }
    }
}
