//! # termlint_parser
//!
//! Parsers turning source text into TxtAST.
//!
//! - [`Parser`] trait for format-specific parsers
//! - [`MarkdownParser`] built on `markdown-rs` (GFM)
//! - [`PlainTextParser`] for `.txt` files
//!
//! ## Example
//!
//! ```rust
//! use termlint_ast::{AstArena, NodeType};
//! use termlint_parser::{MarkdownParser, Parser};
//!
//! let arena = AstArena::new();
//! let parser = MarkdownParser::new();
//!
//! let ast = parser.parse(&arena, "Use `id` here.").unwrap();
//! assert_eq!(ast.node_type, NodeType::Document);
//! ```

mod error;
mod markdown;
mod text;
mod traits;

pub use error::ParseError;
pub use markdown::MarkdownParser;
pub use text::PlainTextParser;
pub use traits::Parser;
