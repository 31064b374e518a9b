//! HTML source lexer.
//!
//! A single left-to-right pass over the source that emits a flat token
//! stream. A `<` only opens a tag when the next character could start
//! one (`/`, `!`, or an ASCII alphanumeric); any other `<` is ordinary
//! text. Childless tags switch the lexer into a raw-text skip mode that
//! consumes everything up to the matching closing tag without
//! tokenizing it.
//!
//! The lexer is total: every input terminates and produces tokens, and
//! malformed markup degrades to text rather than erroring.

use crate::position::{Position, Span};
use crate::tags;
use crate::token::Token;

/// Options for a lex call.
#[derive(Debug, Clone)]
pub struct LexOptions {
    /// Tags whose content is consumed as raw text. Entries are expected
    /// lower-cased; matching against the source is case-insensitive.
    pub childless_tags: Vec<String>,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            childless_tags: tags::CHILDLESS_TAGS
                .iter()
                .map(|tag| (*tag).to_string())
                .collect(),
        }
    }
}

/// HTML source lexer.
///
/// Owns the live cursor and the output token stream for one pass over a
/// shared character buffer. The raw-text skip mode trial-lexes candidate
/// closing tags with a probe lexer borrowing the same buffer, so no part
/// of the source is ever copied for re-scanning.
pub struct Lexer<'a> {
    chars: &'a [char],
    options: &'a LexOptions,
    position: Position,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(source: &str, options: &LexOptions) -> Vec<Token> {
        let chars: Vec<char> = source.chars().collect();
        let mut lexer = Lexer::new(&chars, options);
        lexer.run();
        lexer.tokens
    }

    fn new(chars: &'a [char], options: &'a LexOptions) -> Self {
        Self {
            chars,
            options,
            position: Position::default(),
            tokens: Vec::new(),
        }
    }

    fn run(&mut self) {
        while self.position.index < self.chars.len() {
            let start = self.position.index;
            self.lex_text();
            if self.position.index == start {
                // The cursor is parked on a tag-like `<`.
                if self.looking_at(start + 1, "!--") {
                    self.lex_comment();
                } else {
                    let tag_name = self.lex_tag();
                    if self.is_childless(&tag_name) {
                        self.lex_skip_tag(&tag_name);
                    }
                }
            }
        }
    }

    fn is_childless(&self, tag_name: &str) -> bool {
        let lower = tag_name.to_lowercase();
        self.options.childless_tags.iter().any(|tag| *tag == lower)
    }

    // --- Text runs ---

    /// Find the end of the text run starting at `from`: the next `<`
    /// immediately followed by `/`, `!`, or an ASCII alphanumeric.
    /// A bare `<` not followed by one of those stays part of the text.
    fn find_text_end(&self, mut from: usize) -> Option<usize> {
        while let Some(open) = self.find_char(from, '<') {
            match self.chars.get(open + 1) {
                Some(&next) if next == '/' || next == '!' || next.is_ascii_alphanumeric() => {
                    return Some(open);
                }
                _ => from = open + 1,
            }
        }
        None
    }

    /// Consume a text run. Emits nothing (and leaves the cursor parked)
    /// when the run is empty.
    fn lex_text(&mut self) {
        let end = self
            .find_text_end(self.position.index)
            .unwrap_or(self.chars.len());
        if end != self.position.index {
            self.emit_text(end);
        }
    }

    /// Emit everything between the cursor and `end` as one text token.
    fn emit_text(&mut self, end: usize) {
        let start = self.position;
        let content: String = self.chars[start.index..end].iter().collect();
        self.position.advance_to(self.chars, end);
        self.tokens.push(Token::Text {
            content,
            span: Span::new(start, self.position),
        });
    }

    // --- Comments ---

    /// Lex a `<!-- -->` comment. An unterminated comment runs to the end
    /// of input.
    fn lex_comment(&mut self) {
        let start = self.position;
        self.position.advance_by(self.chars, 4); // <!--

        let (content_end, after) = match self.find_str(self.position.index, "-->") {
            Some(terminator) => (terminator, terminator + 3),
            None => (self.chars.len(), self.chars.len()),
        };
        let content: String = self.chars[self.position.index..content_end].iter().collect();
        self.position.advance_to(self.chars, after);
        self.tokens.push(Token::Comment {
            content,
            span: Span::new(start, self.position),
        });
    }

    // --- Tags ---

    /// Lex one full tag: tag-start, name, attributes, tag-end.
    /// Returns the raw tag name.
    fn lex_tag(&mut self) -> String {
        let close = self.chars.get(self.position.index + 1) == Some(&'/');
        let start = self.position;
        self.position
            .advance_by(self.chars, if close { 2 } else { 1 });
        self.tokens.push(Token::TagStart { close, start });

        let name = self.lex_tag_name();
        self.lex_tag_attributes();

        let close = self.chars.get(self.position.index) == Some(&'/');
        self.position
            .advance_by(self.chars, if close { 2 } else { 1 });
        self.tokens.push(Token::TagEnd {
            close,
            end: self.position,
        });
        name
    }

    /// Scan the contiguous run of name characters as the tag name,
    /// skipping any whitespace or stray `/` before it.
    fn lex_tag_name(&mut self) -> String {
        let len = self.chars.len();
        let mut index = self.position.index;
        while index < len && (self.chars[index].is_whitespace() || self.chars[index] == '/') {
            index += 1;
        }
        let start = index;
        while index < len && !is_name_end(self.chars[index]) {
            index += 1;
        }
        self.position.advance_to(self.chars, index);

        let name: String = self.chars[start..index].iter().collect();
        self.tokens.push(Token::TagName { name: name.clone() });
        name
    }

    /// Scan the attribute region with a three-state quote automaton
    /// (no quote / single / double), splitting words on whitespace
    /// outside quotes. `/` and `>` end the scan outside quotes and are
    /// legal verbatim inside them. A second pass stitches fragments that
    /// whitespace around `=` split apart.
    fn lex_tag_attributes(&mut self) {
        let len = self.chars.len();
        let mut cursor = self.position.index;
        let mut word_begin = cursor;
        let mut quote: Option<char> = None;
        let mut words: Vec<String> = Vec::new();

        while cursor < len {
            let ch = self.chars[cursor];
            if let Some(open) = quote {
                if ch == open {
                    quote = None;
                }
                cursor += 1;
                continue;
            }
            if ch == '/' || ch == '>' {
                if cursor != word_begin {
                    words.push(self.chars[word_begin..cursor].iter().collect());
                }
                break;
            }
            if ch.is_whitespace() {
                if cursor != word_begin {
                    words.push(self.chars[word_begin..cursor].iter().collect());
                }
                word_begin = cursor + 1;
                cursor += 1;
                continue;
            }
            if ch == '\'' || ch == '"' {
                quote = Some(ch);
            }
            cursor += 1;
        }
        self.position.advance_to(self.chars, cursor);

        // Stitch pass: whitespace around `=` splits one attribute into
        // up to three words (`key`, `=`, `value`); reassemble them.
        let mut i = 0;
        while i < words.len() {
            let word = &words[i];
            if !word.contains('=') {
                match words.get(i + 1) {
                    Some(second) if second.starts_with('=') => {
                        if second.len() > 1 {
                            // `key` `=value`
                            self.emit_attribute(format!("{word}{second}"));
                            i += 2;
                            continue;
                        }
                        if let Some(third) = words.get(i + 2) {
                            // `key` `=` `value`
                            self.emit_attribute(format!("{word}={third}"));
                            i += 3;
                            continue;
                        }
                        // `key` `=` at the end of the tag: the dangling
                        // `=` is dropped.
                        self.emit_attribute(word.clone());
                        i += 2;
                        continue;
                    }
                    _ => {}
                }
            }
            if word.ends_with('=') {
                match words.get(i + 1) {
                    Some(second) if !second.contains('=') => {
                        // `key=` `value`
                        self.emit_attribute(format!("{word}{second}"));
                        i += 2;
                        continue;
                    }
                    _ => {}
                }
                // Lone trailing `=` on a valueless key.
                self.emit_attribute(word[..word.len() - 1].to_string());
                i += 1;
                continue;
            }
            self.emit_attribute(word.clone());
            i += 1;
        }
    }

    fn emit_attribute(&mut self, content: String) {
        self.tokens.push(Token::Attribute { content });
    }

    // --- Raw-text skip mode ---

    /// Consume the content of a childless tag as raw text, up to its
    /// matching closing tag. Each candidate `</` is trial-lexed by a
    /// probe lexer; candidates whose name does not match stay part of
    /// the text. With no matching closer before EOF the remainder
    /// becomes one trailing text token.
    fn lex_skip_tag(&mut self, tag_name: &str) {
        let safe_tag_name = tag_name.to_lowercase();
        let mut index = self.position.index;

        while let Some(next_tag) = self.find_str(index, "</") {
            let mut probe = Lexer::new(self.chars, self.options);
            probe.position = self.position;
            probe.position.advance_to(self.chars, next_tag);
            let name = probe.lex_tag();
            if name.to_lowercase() != safe_tag_name {
                index = probe.position.index;
                continue;
            }
            if next_tag != self.position.index {
                self.emit_text(next_tag);
            }
            self.tokens.append(&mut probe.tokens);
            self.position = probe.position;
            return;
        }

        if self.position.index < self.chars.len() {
            self.emit_text(self.chars.len());
        }
    }

    // --- Scanning helpers ---

    /// Whether the characters at `at` spell out `needle`.
    fn looking_at(&self, at: usize, needle: &str) -> bool {
        let mut index = at;
        for expected in needle.chars() {
            if self.chars.get(index) != Some(&expected) {
                return false;
            }
            index += 1;
        }
        true
    }

    /// Next occurrence of `needle` at or after `from`.
    fn find_char(&self, from: usize, needle: char) -> Option<usize> {
        self.chars
            .get(from..)
            .and_then(|tail| tail.iter().position(|&ch| ch == needle))
            .map(|offset| from + offset)
    }

    /// Next occurrence of the literal `needle` at or after `from`.
    fn find_str(&self, from: usize, needle: &str) -> Option<usize> {
        let pattern: Vec<char> = needle.chars().collect();
        let mut at = from;
        while at + pattern.len() <= self.chars.len() {
            if self.chars[at..at + pattern.len()] == pattern[..] {
                return Some(at);
            }
            at += 1;
        }
        None
    }
}

/// Characters that end a tag-name run.
fn is_name_end(ch: char) -> bool {
    ch.is_whitespace() || ch == '/' || ch == '>'
}
