//! Structured tag scanner for notice documents
//!
//! The scanner works in two steps. `tokenize` splits the text into open tags,
//! close tags and `key = value` field lines; `build` folds the tokens into a
//! block tree with a stack, so nested blocks (including nested blocks with the
//! same tag) come out in document order.
//!
//! Recovery rules:
//! - an open tag that is never closed is closed at end of input
//! - a close tag for an outer block closes every inner block still open
//! - a close tag with no matching open tag is ignored
//! - lines that are neither tags nor fields are ignored
//!
//! Tags are recognized at the start of a line or right after another tag. A
//! field value runs to the end of the line, minus a trailing close tag for a
//! block that is open.

use tracing::debug;

/// A `key = value` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name, e.g. `t_site_name`
    pub key: String,
    /// Trimmed value
    pub value: String,
}

/// Entry of a block, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Field line owned by the block
    Field(Field),
    /// Nested block
    Block(Block),
}

/// A tagged section such as `<NOTICE> … </NOTICE>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// Tag name; empty for the document root
    pub tag: String,
    /// Fields and nested blocks in document order
    pub nodes: Vec<Node>,
}

impl Block {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            nodes: Vec::new(),
        }
    }

    /// Fields owned directly by this block
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Field(field) => Some(field),
            Node::Block(_) => None,
        })
    }

    /// Blocks nested directly inside this block
    pub fn children(&self) -> impl Iterator<Item = &Block> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Block(block) => Some(block),
            Node::Field(_) => None,
        })
    }

    /// Value of the first direct field named `key`
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.fields()
            .find(|field| field.key == key)
            .map(|field| field.value.as_str())
    }

    /// Every block tagged `tag` below this one, in document order.
    ///
    /// The search does not descend into a matching block, so a block nested
    /// in a same-tagged block is reached through its parent.
    pub fn blocks(&self, tag: &str) -> Vec<&Block> {
        let mut found = Vec::new();
        self.collect_blocks(tag, &mut found);
        found
    }

    /// First block tagged `tag` below this one
    pub fn first_block(&self, tag: &str) -> Option<&Block> {
        self.blocks(tag).into_iter().next()
    }

    fn collect_blocks<'a>(&'a self, tag: &str, found: &mut Vec<&'a Block>) {
        for child in self.children() {
            if child.tag == tag {
                found.push(child);
            } else {
                child.collect_blocks(tag, found);
            }
        }
    }
}

/// A scanned notice document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    root: Block,
}

impl Document {
    /// Scan document text into a block tree; never fails
    pub fn parse(text: &str) -> Self {
        let tokens = tokenize(text);
        debug!("Scanned {} tokens", tokens.len());
        Self {
            root: build(tokens),
        }
    }

    /// Root block holding the top-level fields and blocks
    pub fn root(&self) -> &Block {
        &self.root
    }

    /// Every block tagged `tag`, in document order
    pub fn blocks(&self, tag: &str) -> Vec<&Block> {
        self.root.blocks(tag)
    }

    /// First block tagged `tag`
    pub fn first_block(&self, tag: &str) -> Option<&Block> {
        self.root.first_block(tag)
    }
}

/// Value of the first `field_name = value` line owned by `block`
pub fn extract_scalar<'a>(block: &'a Block, field_name: &str) -> Option<&'a str> {
    block.scalar(field_name)
}

/// Every `<tag_name>` block of the document, in document order
pub fn extract_blocks<'a>(document: &'a Document, tag_name: &str) -> Vec<&'a Block> {
    document.blocks(tag_name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Open(String),
    Close(String),
    Field(Field),
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for line in text.lines() {
        tokenize_line(line, &mut tokens);
    }
    tokens
}

fn tokenize_line(line: &str, tokens: &mut Vec<Token>) {
    let mut rest = line.trim_start();
    while let Some(tag) = match_tag(rest) {
        let name = tag.name.to_string();
        tokens.push(if tag.closing {
            Token::Close(name)
        } else {
            Token::Open(name)
        });
        rest = rest[tag.len..].trim_start();
    }
    if let Some(field) = parse_field(rest) {
        tokens.push(Token::Field(field));
    }
}

struct Tag<'a> {
    name: &'a str,
    closing: bool,
    len: usize,
}

/// Match a well-formed `<NAME>` or `</NAME>` at the start of `s`
fn match_tag(s: &str) -> Option<Tag<'_>> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }
    let closing = bytes.get(1) == Some(&b'/');
    let name_start = if closing { 2 } else { 1 };
    let name_len = bytes[name_start.min(bytes.len())..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count();
    let name_end = name_start + name_len;
    if name_len == 0 || bytes.get(name_end) != Some(&b'>') {
        return None;
    }
    Some(Tag {
        name: &s[name_start..name_end],
        closing,
        len: name_end + 1,
    })
}

/// Parse `key = value`; the value runs to the end of the line.
fn parse_field(segment: &str) -> Option<Field> {
    let (key, value) = segment.split_once('=')?;
    let key = key.trim();
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(Field {
        key: key.to_string(),
        value: value.trim().to_string(),
    })
}

/// Split a trailing `</NAME>` off a field value
fn split_trailing_close(value: &str) -> Option<(&str, &str)> {
    let start = value.rfind("</")?;
    let tag = match_tag(&value[start..])?;
    (start + tag.len == value.len()).then(|| (value[..start].trim_end(), tag.name))
}

fn build(tokens: Vec<Token>) -> Block {
    let mut stack = vec![Block::default()];

    for token in tokens {
        match token {
            Token::Open(tag) => stack.push(Block::new(tag)),
            Token::Close(tag) => close_block(&mut stack, &tag),
            Token::Field(mut field) => {
                // Only a tag closing an open block ends the value
                let mut close = None;
                if let Some((value, tag)) = split_trailing_close(&field.value) {
                    if open_depth(&stack, tag).is_some() {
                        close = Some(tag.to_string());
                        field.value = value.to_string();
                    }
                }

                // Empty values are dropped so a later occurrence can still match
                if !field.value.is_empty() {
                    if let Some(block) = stack.last_mut() {
                        block.nodes.push(Node::Field(field));
                    }
                }
                if let Some(tag) = close {
                    close_block(&mut stack, &tag);
                }
            }
        }
    }

    if stack.len() > 1 {
        debug!("Closing {} unterminated block(s) at end of input", stack.len() - 1);
    }
    while stack.len() > 1 {
        close_innermost(&mut stack);
    }
    stack.pop().unwrap_or_default()
}

/// Stack depth of the innermost open block tagged `tag`, excluding the root
fn open_depth(stack: &[Block], tag: &str) -> Option<usize> {
    stack
        .iter()
        .rposition(|block| block.tag == tag)
        .filter(|depth| *depth > 0)
}

fn close_block(stack: &mut Vec<Block>, tag: &str) {
    match open_depth(stack, tag) {
        Some(depth) => {
            while stack.len() > depth {
                close_innermost(stack);
            }
        }
        None => debug!("Ignoring stray closing tag </{}>", tag),
    }
}

fn close_innermost(stack: &mut Vec<Block>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(block) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.nodes.push(Node::Block(block));
        }
    }
}
