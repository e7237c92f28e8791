pub mod article;
pub mod blocks;
pub mod error;
pub mod lexing;
pub mod tokens;
pub mod translate;

// Re-export key types for easier usage
pub use article::Article;
pub use blocks::{Annotations, ContentBlock, RichTextRun};
pub use error::TranslateError;
pub use lexing::{MarkdownLexer, PulldownLexer};
pub use tokens::Token;
pub use translate::{blocks_from_markdown, translate};
