//! Static tag classification tables.
//!
//! These are the default tables; both the lexer and the parser accept
//! caller-supplied replacements through their option structs.

/// Tags that can never have children or a closing tag.
pub const VOID_TAGS: &[&str] = &[
    "!doctype", "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Tags that implicitly close a same-named open sibling
/// (`<p>one<p>two` produces two sibling paragraphs).
pub const CLOSING_TAGS: &[&str] = &[
    "html", "head", "body", "p", "dt", "dd", "li", "option", "thead", "th", "tbody", "tr", "td",
    "tfoot", "colgroup",
];

/// Ancestor tags that suppress the sibling auto-close, keyed by the
/// opening tag. An `li` inside a fresh `ul` starts a nested list rather
/// than closing the outer `li`.
pub const CLOSING_TAG_ANCESTOR_BREAKERS: &[(&str, &[&str])] = &[
    ("li", &["ul", "ol", "menu"]),
    ("dt", &["dl"]),
    ("dd", &["dl"]),
    ("tbody", &["table"]),
    ("thead", &["table"]),
    ("tfoot", &["table"]),
    ("tr", &["table"]),
    ("td", &["table"]),
];

/// Tags whose content is raw text, never tokenized as markup.
pub const CHILDLESS_TAGS: &[&str] = &["style", "script", "template"];

/// Check if a tag name (lower-cased) is a void tag.
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Check if a tag name (lower-cased) is a childless/raw-text tag.
pub fn is_childless_tag(tag: &str) -> bool {
    CHILDLESS_TAGS.contains(&tag)
}
