//! Formatting pass: raw tree to public nodes.
//!
//! Lower-cases tag names, splits raw attribute fragments into key/value
//! pairs, unquotes quoted values, and keeps spans only when requested.

use crate::ast::{Attribute, Comment, Element, Node, Text};
use crate::builder::RawNode;
use crate::ParseOptions;
use soupling_lexer::Span;

pub(crate) fn format_nodes(raw: Vec<RawNode>, options: &ParseOptions) -> Vec<Node> {
    raw.into_iter()
        .map(|node| format_node(node, options))
        .collect()
}

fn format_node(node: RawNode, options: &ParseOptions) -> Node {
    match node {
        RawNode::Text { content, span } => Node::Text(Text {
            content,
            position: keep(span, options),
        }),
        RawNode::Comment { content, span } => Node::Comment(Comment {
            content,
            position: keep(span, options),
        }),
        RawNode::Element {
            tag_name,
            attributes,
            children,
            span,
        } => Node::Element(Element {
            tag_name: tag_name.to_lowercase(),
            attributes: attributes
                .iter()
                .map(|fragment| format_attribute(fragment))
                .collect(),
            children: format_nodes(children, options),
            position: keep(span, options),
        }),
    }
}

fn keep(span: Span, options: &ParseOptions) -> Option<Span> {
    options.include_positions.then_some(span)
}

/// Split a raw fragment at the first `=`. A fragment with no `=` is a
/// bare key; a quoted value loses its quotes.
fn format_attribute(fragment: &str) -> Attribute {
    let trimmed = fragment.trim();
    match trimmed.split_once('=') {
        Some((key, value)) => Attribute {
            key: key.to_string(),
            value: Some(unquote(value).to_string()),
        },
        None => Attribute {
            key: trimmed.to_string(),
            value: None,
        },
    }
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
