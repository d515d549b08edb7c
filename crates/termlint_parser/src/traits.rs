//! Parser trait definition.

use termlint_ast::{AstArena, TxtNode};

use crate::ParseError;

/// Trait for parsing source text into TxtAST.
///
/// The returned root is a `Document` node whose spans are byte offsets into
/// `source`.
pub trait Parser: Send + Sync {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions do not include the leading dot (e.g., `["md", "markdown"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text into a TxtAST allocated in `arena`.
    fn parse<'a>(&self, arena: &'a AstArena, source: &str) -> Result<TxtNode<'a>, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

/// Ensures every byte offset of `source` fits in a `u32` span.
pub(crate) fn check_source_len(source: &str) -> Result<(), ParseError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ParseError::TooLarge(source.len()));
    }
    Ok(())
}
