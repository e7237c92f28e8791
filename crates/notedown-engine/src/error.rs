use thiserror::Error;

/// Errors from translating a token sequence into content blocks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The token stream contained a construct the destination format has
    /// no block type for. The whole translation aborts with no partial
    /// output.
    #[error("cannot translate unsupported markdown construct `{kind}`: {raw:?}")]
    UnparseableToken { kind: String, raw: String },
}
