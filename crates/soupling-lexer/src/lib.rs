//! Soupling Lexer
//!
//! Tokenizes raw HTML source into a flat stream of tokens.
//! Handles text runs, `<!-- -->` comments, tag brackets, quoted and
//! unquoted attributes, and a raw-text skip mode for childless tags
//! (`script`, `style`, `template`) whose content is never tokenized
//! as markup.
//!
//! Lexing is total: any input string produces a token stream, anything
//! unparseable degrades to text, and no error type exists.
//!
//! # Example
//!
//! ```
//! use soupling_lexer::{LexOptions, Lexer};
//!
//! let tokens = Lexer::tokenize("", &LexOptions::default());
//! assert!(tokens.is_empty());
//! ```

pub mod lexer;
pub mod position;
pub mod tags;
pub mod token;

pub use lexer::{LexOptions, Lexer};
pub use position::{Position, Span};
pub use token::Token;
