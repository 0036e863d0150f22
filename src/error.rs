use std::io;

use thiserror::Error;

/// Errors raised while converting Markdown text to an HTML tree.
///
/// Conversion is fail-fast: the first structural problem aborts the whole
/// document and propagates to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// An inline delimiter opened a styled run that never closes.
    #[error("unmatched `{delimiter}` in {text:?}")]
    MalformedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    /// A block handed to a converter violates that converter's shape.
    #[error("invalid {kind} block: {reason}")]
    InvalidBlock {
        kind: &'static str,
        reason: String,
    },
}

/// Errors raised by the site build steps around the conversion core.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Every page needs an `# h1` line to fill the template title.
    #[error("document has no h1 title")]
    NoTitle,
}
