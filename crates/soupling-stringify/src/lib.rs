//! Soupling Stringifier
//!
//! Serializes a parsed node tree back into HTML text. The output is
//! normalized markup rather than a byte-for-byte reproduction of the
//! input source: tag names come out lower-cased (the parser's
//! formatting pass already did that) and attribute values are
//! re-quoted. Re-parsing the output yields a structurally identical
//! tree.

use soupling_lexer::tags;
use soupling_parser::{Attribute, Node};

/// Options for a stringify call.
#[derive(Debug, Clone)]
pub struct StringifyOptions {
    /// Tags emitted without children or a closing tag. Matched
    /// case-insensitively against lower-cased entries.
    pub void_tags: Vec<String>,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            void_tags: tags::VOID_TAGS.iter().map(|tag| (*tag).to_string()).collect(),
        }
    }
}

/// Serialize a node tree with the default void table.
pub fn stringify(tree: &[Node]) -> String {
    stringify_with_options(tree, &StringifyOptions::default())
}

/// Serialize a node tree into markup text.
pub fn stringify_with_options(tree: &[Node], options: &StringifyOptions) -> String {
    let mut out = String::new();
    for node in tree {
        write_node(node, options, &mut out);
    }
    out
}

fn write_node(node: &Node, options: &StringifyOptions, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&text.content),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(&comment.content);
            out.push_str("-->");
        }
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag_name);
            write_attributes(&element.attributes, out);
            out.push('>');

            let lower = element.tag_name.to_lowercase();
            if options.void_tags.iter().any(|tag| *tag == lower) {
                return;
            }
            for child in &element.children {
                write_node(child, options, out);
            }
            out.push_str("</");
            out.push_str(&element.tag_name);
            out.push('>');
        }
    }
}

/// A valueless attribute emits just its key. Values are single-quoted,
/// switching to double quotes when the value itself contains a single
/// quote.
fn write_attributes(attributes: &[Attribute], out: &mut String) {
    for attribute in attributes {
        out.push(' ');
        out.push_str(&attribute.key);
        let Some(value) = &attribute.value else {
            continue;
        };
        let quote = if value.contains('\'') { '"' } else { '\'' };
        out.push('=');
        out.push(quote);
        out.push_str(value);
        out.push(quote);
    }
}
