//! Parsed documentation comment trees.
//!
//! The host owns the nodes; the adapter refers to them by [`DocTreeId`]
//! and asks the host for their contents.

use smol_str::SmolStr;

use crate::base::DocTreeId;

/// A node of a documentation comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocTree {
    /// Plain running text.
    Text { text: String },
    /// A program element reference such as `java.util.List#add(Object)`.
    Reference { signature: String },
    /// A tag the parser could not make sense of. `body` is its source text.
    Erroneous { body: String },
    /// `{@name ...}` embedded in running text.
    InlineTag {
        name: SmolStr,
        reference: Option<DocTreeId>,
        label: Vec<DocTreeId>,
        content: String,
    },
    /// `@see reference label`
    See { reference: Vec<DocTreeId> },
    /// `@param name description` or `@param <T> description`
    Param {
        type_parameter: bool,
        name: SmolStr,
        description: Vec<DocTreeId>,
    },
    /// `@throws` or `@exception`
    Throws {
        tag_name: SmolStr,
        exception: Option<DocTreeId>,
        description: Vec<DocTreeId>,
    },
    /// `@serialField name type description`
    SerialField {
        name: SmolStr,
        field_type: Option<DocTreeId>,
        description: Vec<DocTreeId>,
    },
    /// Any other block tag.
    BlockTag { name: SmolStr, content: Vec<DocTreeId> },
}

/// Coarse node category, used to name nodes that are not tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocTreeKind {
    Text,
    Reference,
    Erroneous,
    InlineTag,
    See,
    Param,
    Throws,
    SerialField,
    BlockTag,
}

impl DocTreeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Reference => "REFERENCE",
            Self::Erroneous => "ERRONEOUS",
            Self::InlineTag => "INLINE_TAG",
            Self::See => "SEE",
            Self::Param => "PARAM",
            Self::Throws => "THROWS",
            Self::SerialField => "SERIAL_FIELD",
            Self::BlockTag => "UNKNOWN_BLOCK_TAG",
        }
    }
}

impl DocTree {
    pub fn kind(&self) -> DocTreeKind {
        match self {
            Self::Text { .. } => DocTreeKind::Text,
            Self::Reference { .. } => DocTreeKind::Reference,
            Self::Erroneous { .. } => DocTreeKind::Erroneous,
            Self::InlineTag { .. } => DocTreeKind::InlineTag,
            Self::See { .. } => DocTreeKind::See,
            Self::Param { .. } => DocTreeKind::Param,
            Self::Throws { .. } => DocTreeKind::Throws,
            Self::SerialField { .. } => DocTreeKind::SerialField,
            Self::BlockTag { .. } => DocTreeKind::BlockTag,
        }
    }

    /// The tag name without `@`, for block and inline tags.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::InlineTag { name, .. } | Self::BlockTag { name, .. } => Some(name),
            Self::See { .. } => Some("see"),
            Self::Param { .. } => Some("param"),
            Self::Throws { tag_name, .. } => Some(tag_name),
            Self::SerialField { .. } => Some("serialField"),
            Self::Text { .. } | Self::Reference { .. } | Self::Erroneous { .. } => None,
        }
    }

    pub fn is_block_tag(&self) -> bool {
        matches!(
            self,
            Self::See { .. }
                | Self::Param { .. }
                | Self::Throws { .. }
                | Self::SerialField { .. }
                | Self::BlockTag { .. }
        )
    }

    /// Render this node back to comment source. `child` renders nested nodes.
    pub fn render(&self, child: &impl Fn(DocTreeId) -> String) -> String {
        let join = |ids: &[DocTreeId], sep: &str| {
            ids.iter().map(|&id| child(id)).collect::<Vec<_>>().join(sep)
        };
        let with_rest = |head: String, rest: String| {
            if rest.is_empty() {
                head
            } else {
                format!("{head} {rest}")
            }
        };
        match self {
            Self::Text { text } => text.clone(),
            Self::Reference { signature } => signature.clone(),
            Self::Erroneous { body } => body.clone(),
            Self::InlineTag { name, content, .. } => {
                if content.is_empty() {
                    format!("{{@{name}}}")
                } else {
                    format!("{{@{name} {content}}}")
                }
            }
            Self::See { reference } => with_rest("@see".to_string(), join(reference, " ")),
            Self::Param {
                type_parameter,
                name,
                description,
            } => {
                let head = if *type_parameter {
                    format!("@param <{name}>")
                } else {
                    format!("@param {name}")
                };
                with_rest(head, join(description, ""))
            }
            Self::Throws {
                tag_name,
                exception,
                description,
            } => {
                let mut head = format!("@{tag_name}");
                if let Some(ex) = exception {
                    head = format!("{head} {}", child(*ex));
                }
                with_rest(head, join(description, ""))
            }
            Self::SerialField {
                name,
                field_type,
                description,
            } => {
                let mut head = format!("@serialField {name}");
                if let Some(ty) = field_type {
                    head = format!("{head} {}", child(*ty));
                }
                with_rest(head, join(description, ""))
            }
            Self::BlockTag { name, content } => with_rest(format!("@{name}"), join(content, "")),
        }
    }
}

/// The segmented comment of one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocCommentTree {
    /// Body nodes: text and inline tags before the first block tag.
    pub full_body: Vec<DocTreeId>,
    /// Prefix of the body up to the end of the first sentence.
    pub first_sentence: Vec<DocTreeId>,
    pub block_tags: Vec<DocTreeId>,
}
