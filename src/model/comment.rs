//! Documentation comment parsing for the reference host.
//!
//! A raw `/** ... */` comment is first cleaned of its delimiters and leading
//! `*` decoration, then tokenized with logos and assembled into [`DocTree`]
//! nodes. Every node remembers its byte offset relative to the start of the
//! raw comment.

use logos::Logos;
use smol_str::SmolStr;
use text_size::TextSize;

use crate::base::DocTreeId;
use crate::host::{DocCommentTree, DocTree};

// ============================================================================
// NODE ARENA
// ============================================================================

/// Storage for every comment node of a program.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<DocTree>,
    offsets: Vec<TextSize>,
}

impl NodeArena {
    pub(crate) fn alloc(&mut self, tree: DocTree, offset: TextSize) -> DocTreeId {
        let id = DocTreeId::new(self.nodes.len() as u32);
        self.nodes.push(tree);
        self.offsets.push(offset);
        id
    }

    pub(crate) fn get(&self, id: DocTreeId) -> Option<&DocTree> {
        self.nodes.get(id.index())
    }

    pub(crate) fn offset(&self, id: DocTreeId) -> Option<TextSize> {
        self.offsets.get(id.index()).copied()
    }
}

// ============================================================================
// LEXER
// ============================================================================

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum CommentToken {
    #[regex(r"\{@[A-Za-z][A-Za-z0-9.\-]*")]
    InlineOpen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[regex(r"@[A-Za-z][A-Za-z0-9.\-]*")]
    TagName,

    #[token("@")]
    At,

    #[regex(r"\r\n|\n|\r")]
    Newline,

    #[regex(r"[ \t\x0C]+")]
    Space,

    #[regex(r"[^{}@ \t\x0C\r\n]+")]
    Word,
}

#[derive(Debug, Clone, Copy)]
struct Tok<'a> {
    kind: CommentToken,
    text: &'a str,
    offset: usize,
}

impl Tok<'_> {
    fn is_blank(&self) -> bool {
        matches!(self.kind, CommentToken::Space | CommentToken::Newline)
    }
}

fn tokenize(text: &str) -> Vec<Tok<'_>> {
    let mut lexer = CommentToken::lexer(text);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        tokens.push(Tok {
            kind: result.unwrap_or(CommentToken::Word),
            text: lexer.slice(),
            offset: lexer.span().start,
        });
    }
    tokens
}

fn trim_blank<'t, 'a>(tokens: &'t [Tok<'a>]) -> &'t [Tok<'a>] {
    let start = tokens
        .iter()
        .position(|t| !t.is_blank())
        .unwrap_or(tokens.len());
    let end = tokens
        .iter()
        .rposition(|t| !t.is_blank())
        .map_or(start, |i| i + 1);
    &tokens[start..end]
}

/// Whether `name` is an identifier per Unicode Standard Annex #31.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c == '$' || unicode_ident::is_xid_start(c))
        && chars.all(|c| c == '$' || unicode_ident::is_xid_continue(c))
}

fn concat(tokens: &[Tok<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
}

/// Split off the first word. Parentheses keep a signature such as
/// `add(int, Object)` together across spaces.
fn split_word<'t, 'a>(tokens: &'t [Tok<'a>]) -> (Option<(String, usize)>, &'t [Tok<'a>]) {
    let tokens = trim_blank(tokens);
    let Some(first) = tokens.first() else {
        return (None, tokens);
    };
    let mut word = String::new();
    let mut depth = 0i32;
    let mut end = 0;
    for tok in tokens {
        if tok.is_blank() && depth <= 0 {
            break;
        }
        depth += tok.text.matches('(').count() as i32;
        depth -= tok.text.matches(')').count() as i32;
        word.push_str(tok.text);
        end += 1;
    }
    (Some((word, first.offset)), &tokens[end..])
}

// ============================================================================
// CLEANING
// ============================================================================

/// Comment body with delimiters and leading stars removed, plus a map back
/// to offsets in the raw comment.
struct Cleaned {
    text: String,
    /// `(cleaned offset, raw offset)` at the start of every kept line.
    segments: Vec<(usize, usize)>,
}

impl Cleaned {
    fn new(raw: &str) -> Self {
        let start = if raw.starts_with("/**") { 3 } else { 0 };
        let end = if raw.len() >= start + 2 && raw.ends_with("*/") {
            raw.len() - 2
        } else {
            raw.len()
        };
        let body = &raw[start..end];

        let mut text = String::with_capacity(body.len());
        let mut segments = Vec::new();
        let mut line_start = start;
        for (i, line) in body.split_inclusive('\n').enumerate() {
            let skip = if i == 0 {
                0
            } else {
                let indented = line.trim_start_matches([' ', '\t']);
                if indented.starts_with('*') {
                    line.len() - indented.trim_start_matches('*').len()
                } else {
                    0
                }
            };
            segments.push((text.len(), line_start + skip));
            text.push_str(&line[skip..]);
            line_start += line.len();
        }
        Self { text, segments }
    }

    fn raw_offset(&self, clean: usize) -> TextSize {
        let i = self
            .segments
            .partition_point(|&(c, _)| c <= clean)
            .saturating_sub(1);
        let raw = match self.segments.get(i) {
            Some(&(c, r)) => r + (clean - c),
            None => clean,
        };
        TextSize::new(raw as u32)
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// Parse a raw documentation comment, allocating its nodes in `arena`.
pub(crate) fn parse_comment(raw: &str, arena: &mut NodeArena) -> DocCommentTree {
    let cleaned = Cleaned::new(raw);
    let tokens = tokenize(&cleaned.text);
    let mut parser = Parser {
        cleaned: &cleaned,
        arena,
    };

    let sections = split_sections(&tokens);
    let (body, blocks) = match sections.split_first() {
        Some((body, blocks)) => (*body, blocks),
        None => (&tokens[..0], &[][..]),
    };

    let full_body = parser.inline_content(body);
    let first_sentence = parser.first_sentence(&full_body);
    let block_tags = blocks
        .iter()
        .map(|section| parser.block_tag(section))
        .collect();

    DocCommentTree {
        full_body,
        first_sentence,
        block_tags,
    }
}

/// Body followed by one slice per block tag. A block tag starts at a tag
/// name that is the first non-blank token of its line.
fn split_sections<'t, 'a>(tokens: &'t [Tok<'a>]) -> Vec<&'t [Tok<'a>]> {
    let mut sections = Vec::new();
    let mut section_start = 0;
    let mut at_line_start = true;
    let mut brace_depth = 0usize;
    for (i, tok) in tokens.iter().enumerate() {
        match tok.kind {
            CommentToken::Newline => at_line_start = true,
            CommentToken::Space => {}
            CommentToken::TagName if at_line_start && brace_depth == 0 => {
                sections.push(&tokens[section_start..i]);
                section_start = i;
                at_line_start = false;
            }
            CommentToken::InlineOpen | CommentToken::LBrace => {
                brace_depth += 1;
                at_line_start = false;
            }
            CommentToken::RBrace => {
                brace_depth = brace_depth.saturating_sub(1);
                at_line_start = false;
            }
            _ => at_line_start = false,
        }
    }
    sections.push(&tokens[section_start..]);
    sections
}

struct Parser<'c, 'a> {
    cleaned: &'c Cleaned,
    arena: &'a mut NodeArena,
}

impl Parser<'_, '_> {
    fn alloc(&mut self, tree: DocTree, clean_offset: usize) -> DocTreeId {
        let offset = self.cleaned.raw_offset(clean_offset);
        self.arena.alloc(tree, offset)
    }

    /// Running text interleaved with inline tags.
    fn inline_content(&mut self, tokens: &[Tok<'_>]) -> Vec<DocTreeId> {
        let tokens = trim_blank(tokens);
        let mut nodes = Vec::new();
        let mut text = String::new();
        let mut text_start = None;
        let mut i = 0;
        while i < tokens.len() {
            let tok = tokens[i];
            if tok.kind == CommentToken::InlineOpen {
                if let Some(at) = text_start.take() {
                    let node = self.alloc(
                        DocTree::Text {
                            text: std::mem::take(&mut text),
                        },
                        at,
                    );
                    nodes.push(node);
                }
                let (node, next) = self.inline_tag(tokens, i);
                nodes.push(node);
                i = next;
                continue;
            }
            text_start.get_or_insert(tok.offset);
            text.push_str(tok.text);
            i += 1;
        }
        if let Some(at) = text_start {
            nodes.push(self.alloc(DocTree::Text { text }, at));
        }
        nodes
    }

    /// `{@name content}` starting at `tokens[start]`. Returns the node and
    /// the index just past the closing brace.
    fn inline_tag(&mut self, tokens: &[Tok<'_>], start: usize) -> (DocTreeId, usize) {
        let open = tokens[start];
        let name = &open.text[2..];

        let mut depth = 0usize;
        let mut close = None;
        for (j, tok) in tokens.iter().enumerate().skip(start + 1) {
            match tok.kind {
                CommentToken::InlineOpen | CommentToken::LBrace => depth += 1,
                CommentToken::RBrace if depth == 0 => {
                    close = Some(j);
                    break;
                }
                CommentToken::RBrace => depth -= 1,
                _ => {}
            }
        }
        let Some(close) = close else {
            let body = concat(&tokens[start..]);
            return (
                self.alloc(DocTree::Erroneous { body }, open.offset),
                tokens.len(),
            );
        };

        let inner = trim_blank(&tokens[start + 1..close]);
        let content = concat(inner);
        let (reference, label) = if name == "link" || name == "linkplain" {
            let (word, rest) = split_word(inner);
            let reference =
                word.map(|(signature, at)| self.alloc(DocTree::Reference { signature }, at));
            (reference, self.inline_content(rest))
        } else {
            (None, Vec::new())
        };
        let node = self.alloc(
            DocTree::InlineTag {
                name: SmolStr::new(name),
                reference,
                label,
                content,
            },
            open.offset,
        );
        (node, close + 1)
    }

    fn block_tag(&mut self, section: &[Tok<'_>]) -> DocTreeId {
        let head = section[0];
        let name = &head.text[1..];
        let rest = &section[1..];
        match name {
            "see" => self.see_tag(head, rest),
            "param" => match split_word(rest) {
                (Some((word, _)), tail) => {
                    let type_parameter = word.starts_with('<') && word.ends_with('>');
                    let name = if type_parameter {
                        &word[1..word.len() - 1]
                    } else {
                        word.as_str()
                    };
                    if !is_identifier(name) {
                        return self.erroneous(head);
                    }
                    let name = SmolStr::new(name);
                    let description = self.inline_content(tail);
                    self.alloc(
                        DocTree::Param {
                            type_parameter,
                            name,
                            description,
                        },
                        head.offset,
                    )
                }
                (None, _) => self.erroneous(head),
            },
            "throws" | "exception" => {
                let (word, tail) = split_word(rest);
                let exception =
                    word.map(|(signature, at)| self.alloc(DocTree::Reference { signature }, at));
                let description = self.inline_content(tail);
                self.alloc(
                    DocTree::Throws {
                        tag_name: SmolStr::new(name),
                        exception,
                        description,
                    },
                    head.offset,
                )
            }
            "serialField" => match split_word(rest) {
                (Some((field, _)), tail) => {
                    let (ty, tail) = split_word(tail);
                    let field_type =
                        ty.map(|(signature, at)| self.alloc(DocTree::Reference { signature }, at));
                    let description = self.inline_content(tail);
                    self.alloc(
                        DocTree::SerialField {
                            name: SmolStr::new(field),
                            field_type,
                            description,
                        },
                        head.offset,
                    )
                }
                (None, _) => self.erroneous(head),
            },
            _ => {
                let content = self.inline_content(rest);
                self.alloc(
                    DocTree::BlockTag {
                        name: SmolStr::new(name),
                        content,
                    },
                    head.offset,
                )
            }
        }
    }

    fn see_tag(&mut self, head: Tok<'_>, rest: &[Tok<'_>]) -> DocTreeId {
        let rest = trim_blank(rest);
        let Some(first) = rest.first() else {
            return self.erroneous(head);
        };
        let reference = if first.text.starts_with('"') || first.text.starts_with('<') {
            vec![self.alloc(DocTree::Text { text: concat(rest) }, first.offset)]
        } else {
            let (word, tail) = split_word(rest);
            let mut nodes: Vec<DocTreeId> = word
                .map(|(signature, at)| self.alloc(DocTree::Reference { signature }, at))
                .into_iter()
                .collect();
            nodes.extend(self.inline_content(tail));
            nodes
        };
        self.alloc(DocTree::See { reference }, head.offset)
    }

    fn erroneous(&mut self, head: Tok<'_>) -> DocTreeId {
        self.alloc(
            DocTree::Erroneous {
                body: head.text.to_string(),
            },
            head.offset,
        )
    }

    /// Body prefix up to the first `.` followed by whitespace or the end of
    /// the body. A text node cut in the middle is replaced by its head.
    fn first_sentence(&mut self, body: &[DocTreeId]) -> Vec<DocTreeId> {
        let mut sentence = Vec::new();
        for (i, &id) in body.iter().enumerate() {
            let is_last = i + 1 == body.len();
            if let Some(DocTree::Text { text }) = self.arena.get(id) {
                if let Some(end) = sentence_end(text, is_last) {
                    let head = text[..end].trim_end();
                    if head.len() == text.trim_end().len() {
                        sentence.push(id);
                    } else {
                        let head = head.to_string();
                        let offset = self.arena.offset(id).unwrap_or_default();
                        sentence.push(self.arena.alloc(DocTree::Text { text: head }, offset));
                    }
                    return sentence;
                }
            }
            sentence.push(id);
        }
        sentence
    }
}

/// Byte index just past the period that ends the first sentence.
fn sentence_end(text: &str, is_last: bool) -> Option<usize> {
    let bytes = text.as_bytes();
    bytes.iter().enumerate().find_map(|(i, &b)| {
        if b != b'.' {
            return None;
        }
        match bytes.get(i + 1) {
            None if is_last => Some(i + 1),
            Some(next) if next.is_ascii_whitespace() => Some(i + 1),
            _ => None,
        }
    })
}
