//! Tree builder.
//!
//! A single pass over the token stream with an explicit stack of open
//! element frames, one iteration per token. The stack replaces the
//! recursion a tree builder would otherwise use for children, so depth
//! is bounded by the heap, not the call stack. A frame owns its subtree
//! until it is closed; closing converts it into a node ending at the
//! resolved position and attaches it to the frame below.
//!
//! Building is total: stray closers are discarded, anything left open
//! at EOF is implicitly closed, and no error type exists.

use crate::ParseOptions;
use soupling_lexer::{Position, Span, Token};

/// A node as emitted by the tree builder: tag names as written, raw
/// attribute fragments, spans always present. The formatting pass turns
/// these into the public `ast::Node` shape.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawNode {
    Element {
        tag_name: String,
        attributes: Vec<String>,
        children: Vec<RawNode>,
        span: Span,
    },
    Text {
        content: String,
        span: Span,
    },
    Comment {
        content: String,
        span: Span,
    },
}

/// One currently-open element. `tag_name` holds the lower-cased name
/// used for matching and is `None` only for the synthetic root, which
/// is never popped.
struct Frame {
    tag_name: Option<String>,
    raw_name: String,
    attributes: Vec<String>,
    children: Vec<RawNode>,
    start: Position,
}

impl Frame {
    fn root() -> Self {
        Self {
            tag_name: None,
            raw_name: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
            start: Position::default(),
        }
    }

    fn open(raw_name: String, tag_name: String, attributes: Vec<String>, start: Position) -> Self {
        Self {
            tag_name: Some(tag_name),
            raw_name,
            attributes,
            children: Vec::new(),
            start,
        }
    }

    /// Close the frame into an element node ending at `end`.
    fn into_node(self, end: Position) -> RawNode {
        RawNode::Element {
            tag_name: self.raw_name,
            attributes: self.attributes,
            children: self.children,
            span: Span::new(self.start, end),
        }
    }
}

/// Build the raw tree for a lexed token stream.
pub(crate) fn build(tokens: &[Token], options: &ParseOptions) -> Vec<RawNode> {
    let mut stack = vec![Frame::root()];
    let mut cursor = 0;
    // End of the last consumed token; frames still open at EOF clamp
    // their end to it.
    let mut last_end = Position::default();

    while cursor < tokens.len() {
        match &tokens[cursor] {
            Token::Text { content, span } => {
                last_end = span.end;
                top(&mut stack).children.push(RawNode::Text {
                    content: content.clone(),
                    span: *span,
                });
                cursor += 1;
            }
            Token::Comment { content, span } => {
                last_end = span.end;
                top(&mut stack).children.push(RawNode::Comment {
                    content: content.clone(),
                    span: *span,
                });
                cursor += 1;
            }
            Token::TagStart { close: true, start } => {
                cursor = close_element(tokens, cursor, &mut stack, &mut last_end, *start);
            }
            Token::TagStart {
                close: false,
                start,
            } => {
                cursor = open_element(tokens, cursor, &mut stack, &mut last_end, *start, options);
            }
            // The lexer only emits these inside a tag bracket; a
            // hand-built stream may not, so skip them.
            Token::TagName { .. } | Token::Attribute { .. } => cursor += 1,
            Token::TagEnd { end, .. } => {
                last_end = *end;
                cursor += 1;
            }
        }
    }

    // EOF: anything still open is implicitly closed at the last token
    // boundary.
    while stack.len() > 1 {
        let node = pop(&mut stack).into_node(last_end);
        top(&mut stack).children.push(node);
    }
    pop(&mut stack).children
}

/// Handle a closing tag. Skips past its tag-end, then pops the stack
/// down through the nearest same-named frame. A closer with no open
/// counterpart is discarded.
fn close_element(
    tokens: &[Token],
    mut cursor: usize,
    stack: &mut Vec<Frame>,
    last_end: &mut Position,
    closer_start: Position,
) -> usize {
    cursor += 1;
    let tag_name = read_tag_name(tokens, &mut cursor).to_lowercase();

    // Advance past the tag-end; closers can carry junk attribute
    // fragments, which are dropped.
    let mut end = closer_start;
    while cursor < tokens.len() {
        let token = &tokens[cursor];
        cursor += 1;
        if let Token::TagEnd { end: tag_end, .. } = token {
            end = *tag_end;
            break;
        }
    }
    *last_end = end;

    if let Some(depth) = find_open(stack, &tag_name) {
        rewind(stack, depth, closer_start, end);
    }
    cursor
}

/// Handle an opening tag: auto-close a constrained same-named sibling,
/// collect attributes, then either finish the element in place (void or
/// self-closed) or push a frame for its children.
fn open_element(
    tokens: &[Token],
    mut cursor: usize,
    stack: &mut Vec<Frame>,
    last_end: &mut Position,
    start: Position,
    options: &ParseOptions,
) -> usize {
    cursor += 1;
    let raw_name = read_tag_name(tokens, &mut cursor);
    let tag_name = raw_name.to_lowercase();

    if options.closing_tags.iter().any(|tag| *tag == tag_name)
        && !has_breaker_ancestor(stack, &tag_name, options)
    {
        if let Some(depth) = find_open(stack, &tag_name) {
            if depth > 0 {
                rewind(stack, depth, start, start);
            }
        }
    }

    let mut attributes = Vec::new();
    let mut self_closing = false;
    let mut end = start;
    while cursor < tokens.len() {
        match &tokens[cursor] {
            Token::Attribute { content } => {
                attributes.push(content.clone());
                cursor += 1;
            }
            Token::TagEnd {
                close,
                end: tag_end,
            } => {
                self_closing = *close;
                end = *tag_end;
                cursor += 1;
                break;
            }
            _ => break,
        }
    }
    *last_end = end;

    let is_void = self_closing || options.void_tags.iter().any(|tag| *tag == tag_name);
    if is_void {
        top(stack).children.push(RawNode::Element {
            tag_name: raw_name,
            attributes,
            children: Vec::new(),
            span: Span::new(start, end),
        });
    } else {
        stack.push(Frame::open(raw_name, tag_name, attributes, start));
    }
    cursor
}

/// Read the tag name bracketed by the tag-start just consumed.
fn read_tag_name(tokens: &[Token], cursor: &mut usize) -> String {
    match tokens.get(*cursor) {
        Some(Token::TagName { name }) => {
            *cursor += 1;
            name.clone()
        }
        _ => String::new(),
    }
}

/// Depth of the nearest open frame with this (lower-cased) tag name.
fn find_open(stack: &[Frame], tag_name: &str) -> Option<usize> {
    stack
        .iter()
        .rposition(|frame| frame.tag_name.as_deref() == Some(tag_name))
}

/// Whether a breaker ancestor sits between the top of the stack and the
/// nearest same-named frame, suppressing the auto-close. The search
/// walks downward and stops at whichever comes first.
fn has_breaker_ancestor(stack: &[Frame], tag_name: &str, options: &ParseOptions) -> bool {
    let Some(breakers) = options.closing_tag_ancestor_breakers.get(tag_name) else {
        return false;
    };
    for frame in stack.iter().rev() {
        match frame.tag_name.as_deref() {
            Some(open) if open == tag_name => return false,
            Some(open) if breakers.iter().any(|breaker| breaker == open) => return true,
            _ => {}
        }
    }
    false
}

/// Pop every frame above `depth`, closing each at `children_end`, then
/// pop the frame at `depth` itself closing it at `end`. Each popped
/// frame's node attaches to the frame below it.
fn rewind(stack: &mut Vec<Frame>, depth: usize, children_end: Position, end: Position) {
    while stack.len() > depth + 1 {
        let node = pop(stack).into_node(children_end);
        top(stack).children.push(node);
    }
    let node = pop(stack).into_node(end);
    top(stack).children.push(node);
}

fn top(stack: &mut [Frame]) -> &mut Frame {
    stack
        .last_mut()
        .expect("open-element stack is never empty")
}

fn pop(stack: &mut Vec<Frame>) -> Frame {
    stack.pop().expect("open-element stack is never empty")
}
