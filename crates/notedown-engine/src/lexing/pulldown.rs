use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

use super::MarkdownLexer;
use crate::tokens::Token;

/// [`MarkdownLexer`] backed by pulldown-cmark.
///
/// Heading and paragraph text is sliced straight out of the source, so
/// inline markdown (`**bold**`, `[label](url)`, backticks) survives
/// verbatim in the token text instead of being flattened to plain text.
#[derive(Debug, Default)]
pub struct PulldownLexer;

impl PulldownLexer {
    pub fn new() -> Self {
        Self::default()
    }

    fn options() -> Options {
        // Match what mainstream markdown sources produce: with these off,
        // GFM constructs would lex as ordinary paragraphs and slip past
        // the unsupported-token check.
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_FOOTNOTES
    }
}

impl MarkdownLexer for PulldownLexer {
    fn lex(&self, markdown: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut events = Parser::new_ext(markdown, Self::options()).into_offset_iter();

        while let Some((event, range)) = events.next() {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    let text = inner_source(markdown, &mut events);
                    tokens.push(Token::Heading {
                        depth: level as u8,
                        text,
                    });
                }
                Event::Start(Tag::Paragraph) => {
                    let text = inner_source(markdown, &mut events);
                    tokens.push(Token::Paragraph { text });
                }
                Event::Start(Tag::CodeBlock(kind)) => {
                    let language = fence_language(&kind);
                    let text = code_content(&mut events);
                    tokens.push(Token::Code { text, language });
                }
                Event::Start(tag) => {
                    let kind = unsupported_kind(&tag);
                    skip_to_end(&mut events);
                    tokens.push(unsupported(kind, markdown, range));
                }
                Event::Rule => tokens.push(unsupported("hr", markdown, range)),
                Event::Html(_) | Event::InlineHtml(_) => {
                    tokens.push(unsupported("html", markdown, range));
                }
                Event::Text(_) | Event::Code(_) => tokens.push(Token::Text {
                    text: markdown[range].to_owned(),
                }),
                Event::End(_) | Event::SoftBreak | Event::HardBreak => {}
                _ => tokens.push(unsupported("unknown", markdown, range)),
            }
        }

        tokens
    }
}

fn unsupported(kind: &str, source: &str, range: Range<usize>) -> Token {
    Token::Unsupported {
        kind: kind.to_owned(),
        raw: source[range].to_owned(),
    }
}

/// Stable kind tags for constructs the destination format cannot hold.
fn unsupported_kind(tag: &Tag) -> &'static str {
    match tag {
        Tag::BlockQuote(_) => "blockquote",
        Tag::List(Some(_)) => "ordered_list",
        Tag::List(None) => "list",
        Tag::Item => "list_item",
        Tag::Table(_) | Tag::TableHead | Tag::TableRow | Tag::TableCell => "table",
        Tag::FootnoteDefinition(_) => "footnote",
        Tag::HtmlBlock => "html",
        Tag::Link { .. } => "link",
        Tag::Image { .. } => "image",
        Tag::MetadataBlock(_) => "metadata",
        _ => "unknown",
    }
}

/// Raw source of everything between a `Start` event and its matching
/// `End`, spanning from the first to the last inner event.
///
/// Returns an empty string when the construct has no inner events (`# `
/// lexes to a heading with no content).
fn inner_source<'a, I>(source: &str, events: &mut I) -> String
where
    I: Iterator<Item = (Event<'a>, Range<usize>)>,
{
    let mut depth = 1usize;
    let mut span: Option<(usize, usize)> = None;

    for (event, range) in events.by_ref() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        span = Some(match span {
            None => (range.start, range.end),
            Some((start, end)) => (start.min(range.start), end.max(range.end)),
        });
    }

    span.map(|(start, end)| source[start..end].to_owned())
        .unwrap_or_default()
}

/// Concatenated text content of a code block, fence delimiters excluded.
fn code_content<'a, I>(events: &mut I) -> String
where
    I: Iterator<Item = (Event<'a>, Range<usize>)>,
{
    let mut text = String::new();
    let mut depth = 1usize;

    for (event, _) in events.by_ref() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Text(chunk) => text.push_str(&chunk),
            _ => {}
        }
    }

    text
}

/// Consume events up to and including the matching `End`.
fn skip_to_end<'a, I>(events: &mut I)
where
    I: Iterator<Item = (Event<'a>, Range<usize>)>,
{
    let mut depth = 1usize;

    for (event, _) in events.by_ref() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
    }
}

fn fence_language(kind: &CodeBlockKind) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_owned),
        CodeBlockKind::Indented => None,
    }
}
