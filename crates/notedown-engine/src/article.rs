use crate::blocks::ContentBlock;
use crate::error::TranslateError;
use crate::lexing::{MarkdownLexer, PulldownLexer};
use crate::translate::translate;

/// Article content handed over by the upstream extraction step, ready to
/// become a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub byline: Option<String>,
    pub markdown_content: String,
    /// Character count of the extracted article text.
    pub length: usize,
}

impl Article {
    /// Destination blocks for the page body: a bold byline paragraph
    /// (when present and non-empty) followed by the translated article
    /// content.
    ///
    /// The title is not a block; it belongs in the destination page's
    /// properties.
    pub fn to_blocks(&self, lexer: &dyn MarkdownLexer) -> Result<Vec<ContentBlock>, TranslateError> {
        let mut blocks = Vec::new();

        if let Some(byline) = self.byline.as_deref() {
            let byline = byline.trim();
            if !byline.is_empty() {
                blocks.push(ContentBlock::bold_paragraph(byline));
            }
        }

        blocks.extend(translate(&lexer.lex(&self.markdown_content))?);
        Ok(blocks)
    }

    /// [`Article::to_blocks`] with the default pulldown-cmark lexer.
    pub fn blocks(&self) -> Result<Vec<ContentBlock>, TranslateError> {
        self.to_blocks(&PulldownLexer::new())
    }

    /// Plain-markdown export for the clipboard: title heading, source
    /// metadata lines, a rule, then the unmodified body.
    pub fn clipboard_markdown(&self, url: &str, cover_url: Option<&str>) -> String {
        let mut lines = vec![
            format!("# {}", self.title),
            format!("**URL:** {url}"),
            format!("**Author:** {}", self.byline.as_deref().unwrap_or("")),
        ];
        if let Some(cover) = cover_url {
            lines.push(format!("**Cover:** {cover}"));
        }
        lines.push("---".to_owned());
        lines.push(self.markdown_content.clone());
        lines.join("\n")
    }
}
