//! The public node tree.
//!
//! These are the formatted nodes handed back by `parse`: tag names
//! lower-cased, attributes split into key/value pairs, spans present
//! only when requested. The serde shape (`type` tag, camelCase
//! `tagName`, `key`/`value` with `null` for valueless attributes) is
//! what the CLI's JSON dumps emit.

use serde::{Deserialize, Serialize};
use soupling_lexer::Span;

/// A node in the parsed tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text(Text),
    Comment(Comment),
}

/// An element with attributes and children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag_name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Span>,
}

/// A run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Span>,
}

/// A `<!-- -->` comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Span>,
}

/// One attribute. `value` is `None` for a bare key like `disabled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: Option<String>,
}
