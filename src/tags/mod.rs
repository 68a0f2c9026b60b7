//! Documentation tags.
//!
//! A [`Tag`] wraps one comment node of one documented element. Tags are
//! cached per owner and node, so asking twice for the tags of an element
//! yields the same instances. Block tags with structure (`@see`, `@param`,
//! `@throws`, `@serialField`) are reached through the `as_*_tag` casts.

mod param;
mod see;
mod serial_field;
mod throws;

use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;
use tracing::warn;

use crate::base::{DocTreeId, ElementId, SourcePosition};
use crate::context::Context;
use crate::doc::Doc;
use crate::error::Result;
use crate::host::{DocTree, DocTreeKind};

pub use param::ParamTag;
pub use see::SeeTag;
pub use serial_field::SerialFieldTag;
pub use throws::ThrowsTag;

/// Legacy kind of a tag name: `exception` is `throws`, `link` and
/// `linkplain` are `see`, `serialData` is `serial`.
pub fn remap_kind(name: &str) -> &str {
    match name {
        "exception" => "throws",
        "link" | "linkplain" => "see",
        "serialData" => "serial",
        other => other,
    }
}

#[derive(Debug)]
pub(crate) struct TagSlot {
    owner: ElementId,
    node: DocTreeId,
    tree: DocTree,
    name: String,
    kind: String,
    text: OnceCell<String>,
}

impl TagSlot {
    pub(crate) fn new(cx: &Context, owner: ElementId, node: DocTreeId) -> Self {
        let tree = cx.host().doc_tree(node);
        let bare = match (&tree, tree.tag_name()) {
            (DocTree::Erroneous { body }, _) => {
                warn!(
                    owner = %cx.host().qualified_name(owner),
                    body = %body,
                    "malformed tag"
                );
                "erroneous".to_string()
            }
            (_, Some(name)) => name.to_string(),
            (_, None) => tree.kind().as_str().to_lowercase(),
        };
        Self {
            owner,
            node,
            name: format!("@{bare}"),
            kind: format!("@{}", remap_kind(&bare)),
            tree,
            text: OnceCell::new(),
        }
    }
}

impl Context {
    /// The tag for comment node `node` of `owner`.
    pub fn tag(&self, owner: ElementId, node: DocTreeId) -> Tag<'_> {
        let table = self.caches.tags_of(owner);
        let slot = table.get_or_insert_with(node, || TagSlot::new(self, owner, node));
        Tag::new(self, slot)
    }
}

/// One node of a documentation comment: a block tag, an inline tag or a
/// run of text.
#[derive(Clone)]
pub struct Tag<'a> {
    cx: &'a Context,
    slot: Rc<TagSlot>,
}

impl<'a> Tag<'a> {
    pub(crate) fn new(cx: &'a Context, slot: Rc<TagSlot>) -> Self {
        Self { cx, slot }
    }

    /// `@` followed by the tag name as written, e.g. `@exception`. Text
    /// nodes are named `@text`.
    pub fn name(&self) -> &str {
        &self.slot.name
    }

    /// `@` followed by the remapped name, e.g. `@throws` for `@exception`.
    pub fn kind(&self) -> &str {
        &self.slot.kind
    }

    /// The node rendered back to comment source.
    pub fn text(&self) -> &str {
        self.slot
            .text
            .get_or_init(|| self.cx.host().doc_tree_text(self.slot.node))
    }

    pub fn owner(&self) -> ElementId {
        self.slot.owner
    }

    pub fn node(&self) -> DocTreeId {
        self.slot.node
    }

    pub fn tree(&self) -> &DocTree {
        &self.slot.tree
    }

    pub fn tree_kind(&self) -> DocTreeKind {
        self.slot.tree.kind()
    }

    /// The documented element this tag belongs to.
    pub fn holder(&self) -> Result<Doc<'a>> {
        self.cx.obtain(self.slot.owner)
    }

    pub fn position(&self) -> SourcePosition {
        self.cx.position(self.slot.owner, Some(self.slot.node))
    }

    /// Text and inline tags making up a block tag's description, or the
    /// label of an inline tag.
    pub fn inline_tags(&self) -> Vec<Tag<'a>> {
        let children: &[DocTreeId] = match &self.slot.tree {
            DocTree::Param { description, .. }
            | DocTree::Throws { description, .. }
            | DocTree::SerialField { description, .. } => description,
            DocTree::BlockTag { content, .. } => content,
            DocTree::See { reference } => reference,
            DocTree::InlineTag { label, .. } => label,
            DocTree::Text { .. } | DocTree::Reference { .. } | DocTree::Erroneous { .. } => &[],
        };
        children
            .iter()
            .map(|&child| self.cx.tag(self.slot.owner, child))
            .collect()
    }

    pub fn as_see_tag(&self) -> Option<SeeTag<'a>> {
        matches!(self.slot.tree, DocTree::See { .. }).then(|| SeeTag::from_tag(self.clone()))
    }

    pub fn as_param_tag(&self) -> Option<ParamTag<'a>> {
        matches!(self.slot.tree, DocTree::Param { .. }).then(|| ParamTag::from_tag(self.clone()))
    }

    pub fn as_throws_tag(&self) -> Option<ThrowsTag<'a>> {
        matches!(self.slot.tree, DocTree::Throws { .. }).then(|| ThrowsTag::from_tag(self.clone()))
    }

    pub fn as_serial_field_tag(&self) -> Option<SerialFieldTag<'a>> {
        matches!(self.slot.tree, DocTree::SerialField { .. })
            .then(|| SerialFieldTag::from_tag(self.clone()))
    }

    pub(crate) fn context(&self) -> &'a Context {
        self.cx
    }

    /// Rendered text of `nodes`, joined by `separator`.
    pub(crate) fn join_text(&self, nodes: &[DocTreeId], separator: &str) -> String {
        let host = self.cx.host();
        nodes
            .iter()
            .map(|&node| host.doc_tree_text(node))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl PartialEq for Tag<'_> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for Tag<'_> {}

impl fmt::Debug for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.slot.name)
            .field("text", &self.text())
            .finish()
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.slot.name, self.text())
    }
}

/// A typed view of a [`Tag`] whose node has a known shape.
macro_rules! tag_subtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name<'a>(crate::tags::Tag<'a>);

        impl<'a> $name<'a> {
            pub(crate) fn from_tag(tag: crate::tags::Tag<'a>) -> Self {
                Self(tag)
            }

            pub fn as_tag(&self) -> &crate::tags::Tag<'a> {
                &self.0
            }
        }

        impl<'a> std::ops::Deref for $name<'a> {
            type Target = crate::tags::Tag<'a>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0.text()).finish()
            }
        }
    };
}

pub(crate) use tag_subtype;
