//! The token-to-block translation pass.
//!
//! One synchronous sweep over the token sequence; each token maps to zero
//! or more blocks independently of its neighbours, and input order is
//! preserved exactly. Whitespace-only content is dropped; unsupported
//! structure aborts the whole call with no partial output.

use crate::blocks::ContentBlock;
use crate::error::TranslateError;
use crate::lexing::{MarkdownLexer, PulldownLexer};
use crate::tokens::Token;

/// Translate a lexed token sequence into destination content blocks.
///
/// Headings deeper than the destination's three levels are demoted to
/// bold paragraphs rather than dropped, so their text always survives.
/// Code blocks default to the `"plaintext"` language. The first
/// [`Token::Unsupported`] in the sequence fails the call with no partial
/// output.
pub fn translate(tokens: &[Token]) -> Result<Vec<ContentBlock>, TranslateError> {
    let mut blocks = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Heading { depth, text } => {
                let content = text.trim();
                if content.is_empty() {
                    continue;
                }
                blocks.push(match depth {
                    1 => ContentBlock::heading_1(content),
                    2 => ContentBlock::heading_2(content),
                    3 => ContentBlock::heading_3(content),
                    // No heading level this deep exists downstream; keep
                    // the text with its emphasis, lose the depth.
                    _ => ContentBlock::bold_paragraph(content),
                });
            }
            Token::Paragraph { text } | Token::Text { text } => {
                let content = text.trim();
                if !content.is_empty() {
                    blocks.push(ContentBlock::paragraph(content));
                }
            }
            Token::Code { text, language } => {
                let content = text.trim();
                if !content.is_empty() {
                    blocks.push(ContentBlock::code(
                        content,
                        language.as_deref().unwrap_or("plaintext"),
                    ));
                }
            }
            Token::Space => {}
            Token::Unsupported { kind, raw } => {
                return Err(TranslateError::UnparseableToken {
                    kind: kind.clone(),
                    raw: raw.clone(),
                });
            }
        }
    }

    Ok(blocks)
}

/// Lex and translate in one step using the default pulldown-cmark lexer.
pub fn blocks_from_markdown(markdown: &str) -> Result<Vec<ContentBlock>, TranslateError> {
    translate(&PulldownLexer::new().lex(markdown))
}
