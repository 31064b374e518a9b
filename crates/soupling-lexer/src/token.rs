//! Token types produced by the HTML lexer.

use crate::position::{Position, Span};

/// A token produced by the lexer.
///
/// `TagStart` and `TagEnd` each carry one half of the span of the tag
/// they bracket; the parser stitches the halves together. `TagName` and
/// `Attribute` carry raw source fragments with no position of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A run of ordinary text.
    Text { content: String, span: Span },

    /// A `<!-- -->` comment. Content excludes the markers.
    Comment { content: String, span: Span },

    /// The `<` or `</` opening a tag. `close` is true for `</`.
    TagStart { close: bool, start: Position },

    /// The tag name, exactly as written.
    TagName { name: String },

    /// One unparsed attribute fragment: `key` or `key=value`.
    Attribute { content: String },

    /// The `>` or `/>` finishing a tag. `close` is true for `/>`.
    TagEnd { close: bool, end: Position },
}
