//! The destination content model.
//!
//! Blocks serialize to the exact wire shape the destination page API
//! accepts: a `type` discriminant, the `object: "block"` marker, and a
//! body keyed by the block kind holding `rich_text` runs. Field names and
//! nesting must not drift; the integration tests pin the full JSON shape.

use serde::Serialize;

/// The `"object": "block"` marker every block carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Block,
}

/// Discriminant for rich-text runs. Only plain text runs exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum RunKind {
    Text,
}

/// Formatting annotations on a rich-text run.
///
/// Bold is the only annotation in use; it carries the emphasis left over
/// when an over-deep heading is demoted to a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Annotations {
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPayload {
    pub content: String,
}

/// One run of text inside a block, the atomic unit of block content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextRun {
    #[serde(rename = "type")]
    kind: RunKind,
    pub text: TextPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

impl RichTextRun {
    /// An unannotated run. `annotations` is omitted from the wire shape
    /// entirely, never serialized as null.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: RunKind::Text,
            text: TextPayload {
                content: content.into(),
            },
            annotations: None,
        }
    }

    /// A bold run.
    pub fn bold(content: impl Into<String>) -> Self {
        Self {
            annotations: Some(Annotations { bold: true }),
            ..Self::plain(content)
        }
    }

    pub fn content(&self) -> &str {
        &self.text.content
    }

    pub fn is_bold(&self) -> bool {
        self.annotations.is_some_and(|a| a.bold)
    }
}

/// Body of the heading and paragraph block kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextBody {
    pub rich_text: Vec<RichTextRun>,
}

/// Body of the code block kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBody {
    pub language: String,
    pub rich_text: Vec<RichTextRun>,
}

/// One unit of destination page content.
///
/// The output of translation is a flat ordered sequence of these; there is
/// no block identity, no cross-block references, and no nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "heading_1")]
    Heading1 {
        object: ObjectKind,
        heading_1: RichTextBody,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        object: ObjectKind,
        heading_2: RichTextBody,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        object: ObjectKind,
        heading_3: RichTextBody,
    },
    #[serde(rename = "paragraph")]
    Paragraph {
        object: ObjectKind,
        paragraph: RichTextBody,
    },
    #[serde(rename = "code")]
    Code { object: ObjectKind, code: CodeBody },
}

impl ContentBlock {
    pub fn heading_1(content: impl Into<String>) -> Self {
        Self::Heading1 {
            object: ObjectKind::Block,
            heading_1: RichTextBody {
                rich_text: vec![RichTextRun::plain(content)],
            },
        }
    }

    pub fn heading_2(content: impl Into<String>) -> Self {
        Self::Heading2 {
            object: ObjectKind::Block,
            heading_2: RichTextBody {
                rich_text: vec![RichTextRun::plain(content)],
            },
        }
    }

    pub fn heading_3(content: impl Into<String>) -> Self {
        Self::Heading3 {
            object: ObjectKind::Block,
            heading_3: RichTextBody {
                rich_text: vec![RichTextRun::plain(content)],
            },
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::Paragraph {
            object: ObjectKind::Block,
            paragraph: RichTextBody {
                rich_text: vec![RichTextRun::plain(content)],
            },
        }
    }

    /// A paragraph whose single run is bold. This is what an over-deep
    /// heading demotes to.
    pub fn bold_paragraph(content: impl Into<String>) -> Self {
        Self::Paragraph {
            object: ObjectKind::Block,
            paragraph: RichTextBody {
                rich_text: vec![RichTextRun::bold(content)],
            },
        }
    }

    pub fn code(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self::Code {
            object: ObjectKind::Block,
            code: CodeBody {
                language: language.into(),
                rich_text: vec![RichTextRun::plain(content)],
            },
        }
    }

    /// The rich-text runs of this block, whatever its kind.
    pub fn rich_text(&self) -> &[RichTextRun] {
        match self {
            Self::Heading1 { heading_1, .. } => &heading_1.rich_text,
            Self::Heading2 { heading_2, .. } => &heading_2.rich_text,
            Self::Heading3 { heading_3, .. } => &heading_3.rich_text,
            Self::Paragraph { paragraph, .. } => &paragraph.rich_text,
            Self::Code { code, .. } => &code.rich_text,
        }
    }
}
