//! Soupling Parser
//!
//! Builds a node tree from the token stream produced by
//! `soupling-lexer`. The tree builder keeps an explicit stack of open
//! elements and implements HTML's informal grammar: omittable closing
//! tags, implicit auto-closing of constrained siblings, void elements,
//! and best-effort recovery from tag soup.
//!
//! Parsing is total: any input yields a tree, malformed structure
//! degrades deterministically (stray closers are discarded, anything
//! open at EOF is implicitly closed), and no error type exists.
//!
//! # Example
//!
//! ```
//! use soupling_parser::{parse, Node};
//!
//! let tree = parse("<p>one<p>two");
//! assert_eq!(tree.len(), 2);
//! assert!(matches!(&tree[0], Node::Element(el) if el.tag_name == "p"));
//! ```

pub mod ast;
pub mod builder;
pub mod format;

pub use ast::{Attribute, Comment, Element, Node, Text};

use std::collections::HashMap;

use soupling_lexer::{tags, LexOptions, Lexer};

/// Options controlling a parse call.
///
/// The defaults are the tables in `soupling_lexer::tags`; callers can
/// substitute their own classifications wholesale. Tag entries are
/// expected lower-cased.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Tags that can never have children or a closing tag.
    pub void_tags: Vec<String>,
    /// Tags that implicitly close a same-named open sibling.
    pub closing_tags: Vec<String>,
    /// Tags whose content is raw text, never tokenized as markup.
    pub childless_tags: Vec<String>,
    /// Per-tag ancestor sets that suppress the sibling auto-close.
    pub closing_tag_ancestor_breakers: HashMap<String, Vec<String>>,
    /// Keep source spans on the formatted nodes. The builder always
    /// computes them; this only controls whether they survive
    /// formatting.
    pub include_positions: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            void_tags: to_owned_table(tags::VOID_TAGS),
            closing_tags: to_owned_table(tags::CLOSING_TAGS),
            childless_tags: to_owned_table(tags::CHILDLESS_TAGS),
            closing_tag_ancestor_breakers: tags::CLOSING_TAG_ANCESTOR_BREAKERS
                .iter()
                .map(|(tag, breakers)| ((*tag).to_string(), to_owned_table(breakers)))
                .collect(),
            include_positions: false,
        }
    }
}

fn to_owned_table(table: &[&str]) -> Vec<String> {
    table.iter().map(|tag| (*tag).to_string()).collect()
}

/// Parse HTML with the default options.
pub fn parse(html: &str) -> Vec<Node> {
    parse_with_options(html, &ParseOptions::default())
}

/// Parse HTML into a formatted node tree.
pub fn parse_with_options(html: &str, options: &ParseOptions) -> Vec<Node> {
    let lex_options = LexOptions {
        childless_tags: options.childless_tags.clone(),
    };
    let tokens = Lexer::tokenize(html, &lex_options);
    let raw = builder::build(&tokens, options);
    format::format_nodes(raw, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_positioned(html: &str) -> Vec<Node> {
        parse_with_options(
            html,
            &ParseOptions {
                include_positions: true,
                ..ParseOptions::default()
            },
        )
    }

    fn element(node: &Node) -> &Element {
        match node {
            Node::Element(el) => el,
            other => panic!("Expected element, got {other:?}"),
        }
    }

    // =========================================================================
    // Formatted output shape
    // =========================================================================

    #[test]
    fn test_tag_names_lowercased() {
        let tree = parse("<DIV><SpAn></SpAn></DIV>");
        let el = element(&tree[0]);
        assert_eq!(el.tag_name, "div");
        assert_eq!(element(&el.children[0]).tag_name, "span");
    }

    #[test]
    fn test_attributes_split_into_pairs() {
        let tree = parse("<div class='a' data-x></div>text");
        assert_eq!(tree.len(), 2);
        let el = element(&tree[0]);
        assert_eq!(
            el.attributes,
            vec![
                Attribute {
                    key: "class".into(),
                    value: Some("a".into()),
                },
                Attribute {
                    key: "data-x".into(),
                    value: None,
                },
            ]
        );
        assert!(el.children.is_empty());
        assert!(matches!(&tree[1], Node::Text(t) if t.content == "text"));
    }

    #[test]
    fn test_positions_dropped_by_default() {
        let tree = parse("<div>x</div>");
        let el = element(&tree[0]);
        assert!(el.position.is_none());
        assert!(matches!(&el.children[0], Node::Text(t) if t.position.is_none()));
    }

    #[test]
    fn test_positions_kept_on_request() {
        let tree = parse_positioned("<div>x</div>");
        let el = element(&tree[0]);
        let span = el.position.expect("position requested");
        assert_eq!(span.start.index, 0);
        assert_eq!(span.end.index, 12);
    }

    #[test]
    fn test_comment_node_content() {
        let tree = parse("<!-- abc");
        assert_eq!(tree.len(), 1);
        assert!(matches!(&tree[0], Node::Comment(c) if c.content == " abc"));
    }

    // =========================================================================
    // Tag-soup degradations
    // =========================================================================

    #[test]
    fn test_stray_closer_yields_text_only() {
        let tree = parse("</b>hi");
        assert_eq!(tree.len(), 1);
        assert!(matches!(&tree[0], Node::Text(t) if t.content == "hi"));
    }

    #[test]
    fn test_every_void_tag_is_childless() {
        for tag in soupling_lexer::tags::VOID_TAGS {
            let tree = parse(&format!("<{tag}>"));
            assert_eq!(tree.len(), 1, "tag {tag}");
            let el = element(&tree[0]);
            assert!(el.children.is_empty(), "tag {tag}");
        }
    }

    #[test]
    fn test_script_content_is_single_text_child() {
        let tree = parse("<script><p></script>");
        let el = element(&tree[0]);
        assert_eq!(el.tag_name, "script");
        assert_eq!(el.children.len(), 1);
        assert!(matches!(&el.children[0], Node::Text(t) if t.content == "<p>"));
    }

    #[test]
    fn test_sibling_paragraphs() {
        let tree = parse("<p>A<p>B");
        assert_eq!(tree.len(), 2);
        let first = element(&tree[0]);
        let second = element(&tree[1]);
        assert_eq!(first.children.len(), 1);
        assert_eq!(second.children.len(), 1);
        assert!(matches!(&first.children[0], Node::Text(t) if t.content == "A"));
        assert!(matches!(&second.children[0], Node::Text(t) if t.content == "B"));
    }

    #[test]
    fn test_nested_list_keeps_outer_item_open() {
        let tree = parse("<li><ul><li></ul></li>");
        assert_eq!(tree.len(), 1);
        let outer = element(&tree[0]);
        assert_eq!(outer.tag_name, "li");
        let list = element(&outer.children[0]);
        assert_eq!(list.tag_name, "ul");
        assert_eq!(list.children.len(), 1);
        assert_eq!(element(&list.children[0]).tag_name, "li");
    }

    // =========================================================================
    // Span invariants
    // =========================================================================

    fn assert_span_invariants(node: &Node) {
        let (position, children) = match node {
            Node::Element(el) => (el.position, Some(&el.children)),
            Node::Text(t) => (t.position, None),
            Node::Comment(c) => (c.position, None),
        };
        let span = position.expect("invariant checks need positions");
        assert!(span.end.index >= span.start.index);
        if let Some(children) = children {
            for child in children {
                let child_span = match child {
                    Node::Element(el) => el.position,
                    Node::Text(t) => t.position,
                    Node::Comment(c) => c.position,
                }
                .expect("invariant checks need positions");
                assert!(child_span.start.index >= span.start.index);
                assert!(child_span.end.index <= span.end.index);
                assert_span_invariants(child);
            }
        }
    }

    #[test]
    fn test_span_invariants_on_tag_soup() {
        let samples = [
            "<div><p>a<p>b</div>",
            "<a><b>x</a>y",
            "<ul><li>1<li>2<li>3</ul>",
            "<table><tr><td>a<td>b<tr><td>c</table>",
            "<div>text",
            "</b>hi<b>ok",
            "<script>var x = '<div>';</script>done",
            "<!-- open<div>unterminated",
        ];
        for html in samples {
            for node in parse_positioned(html) {
                assert_span_invariants(&node);
            }
        }
    }

    // =========================================================================
    // Custom options
    // =========================================================================

    #[test]
    fn test_custom_void_tags() {
        let options = ParseOptions {
            void_tags: vec!["thing".into()],
            ..ParseOptions::default()
        };
        let tree = parse_with_options("<thing>x", &options);
        assert_eq!(tree.len(), 2);
        assert!(element(&tree[0]).children.is_empty());
    }

    #[test]
    fn test_custom_closing_tags() {
        let options = ParseOptions {
            closing_tags: vec!["item".into()],
            closing_tag_ancestor_breakers: HashMap::new(),
            ..ParseOptions::default()
        };
        let tree = parse_with_options("<item>a<item>b", &options);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_empty_tables_disable_special_casing() {
        let options = ParseOptions {
            void_tags: Vec::new(),
            closing_tags: Vec::new(),
            childless_tags: Vec::new(),
            closing_tag_ancestor_breakers: HashMap::new(),
            include_positions: false,
        };
        // Without the void table `<br>` nests its following text.
        let tree = parse_with_options("<br>x", &options);
        assert_eq!(tree.len(), 1);
        let el = element(&tree[0]);
        assert_eq!(el.children.len(), 1);
    }

    // =========================================================================
    // JSON shape
    // =========================================================================

    #[test]
    fn test_json_wire_shape() {
        let tree = parse("<input disabled>");
        let json = serde_json::to_value(&tree).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!([{
                "type": "element",
                "tagName": "input",
                "attributes": [{"key": "disabled", "value": null}],
                "children": [],
            }])
        );
    }

    #[test]
    fn test_json_round_trip() {
        let tree = parse_positioned("<div id=a>x<!--c--></div>");
        let json = serde_json::to_string(&tree).expect("serializes");
        let back: Vec<Node> = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, tree);
    }
}
