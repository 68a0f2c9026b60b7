//! The legacy documentation entities.
//!
//! Every documentable element is reachable as a [`Doc`]. The common contract
//! lives in [`Documented`]; declarations inside a package add
//! [`ProgramElement`]. All wrappers are views over a slot owned by the
//! [`Context`] and compare equal only when they share that slot.

mod annotation;
mod class;
mod executable;
mod field;
mod package;
mod parameter;
mod program_element;
mod root;

use once_cell::unsync::OnceCell;

use crate::base::{ElementId, SourcePosition};
use crate::context::Context;
use crate::host::DocCommentTree;
use crate::tags::{SeeTag, Tag};

pub use annotation::{AnnotationDesc, AnnotationValue, AnnotationValueData, ElementValuePair};
pub use class::{AnnotationTypeDoc, ClassDoc};
pub use executable::{AnnotationElementDoc, ConstructorDoc, ExecutableMember, MethodDoc};
pub use field::{FieldConstant, FieldDoc};
pub use package::PackageDoc;
pub use parameter::Parameter;
pub use program_element::{Modifiers, ProgramElement};
pub use root::RootDoc;

pub(crate) use annotation::AnnotationValueSlot;
pub(crate) use class::ClassSlot;
pub(crate) use executable::ExecutableKind;
#[doc(hidden)]
pub use executable::ExecutableSlot;
pub(crate) use field::FieldSlot;
pub(crate) use package::PackageSlot;
pub(crate) use parameter::ParameterSlot;

// ============================================================================
// COMMENT MEMO
// ============================================================================

/// Comment-derived fields every documentable slot memoizes.
#[derive(Debug, Default)]
pub struct DocMemo {
    comment: OnceCell<Option<DocCommentTree>>,
    comment_text: OnceCell<String>,
    raw_comment_text: OnceCell<String>,
}

impl DocMemo {
    fn comment(&self, cx: &Context, element: ElementId) -> Option<&DocCommentTree> {
        self.comment
            .get_or_init(|| cx.host().doc_comment(element))
            .as_ref()
    }

    fn comment_text(&self, cx: &Context, element: ElementId) -> &str {
        self.comment_text.get_or_init(|| {
            let Some(comment) = self.comment(cx, element) else {
                return String::new();
            };
            let body: String = comment
                .full_body
                .iter()
                .map(|&node| cx.host().doc_tree_text(node))
                .collect();
            body.trim().to_string()
        })
    }

    fn raw_comment_text(&self, cx: &Context, element: ElementId) -> &str {
        self.raw_comment_text.get_or_init(|| {
            let Some(comment) = self.comment(cx, element) else {
                return String::new();
            };
            let host = cx.host();
            let body: String = comment
                .full_body
                .iter()
                .map(|&node| host.doc_tree_text(node))
                .collect();
            let tags: Vec<String> = comment
                .block_tags
                .iter()
                .map(|&node| host.doc_tree_text(node))
                .collect();
            match (body.is_empty(), tags.is_empty()) {
                (_, true) => body,
                (true, false) => tags.join("\n"),
                (false, false) => format!("{body}\n\n{}", tags.join("\n")),
            }
        })
    }
}

// ============================================================================
// DOCUMENTED
// ============================================================================

fn normalize_kind(kind: &str) -> String {
    if kind.starts_with('@') {
        kind.to_string()
    } else {
        format!("@{kind}")
    }
}

/// Queries shared by every documentable entity.
pub trait Documented<'a> {
    fn context(&self) -> &'a Context;

    /// The host element this wrapper stands for.
    fn element(&self) -> ElementId;

    #[doc(hidden)]
    fn memo(&self) -> &DocMemo;

    fn name(&self) -> &str;

    fn qualified_name(&self) -> &str;

    /// Whether the run documents this element.
    fn is_included(&self) -> bool {
        self.context().host().is_included(self.element())
    }

    /// Full comment body, trimmed. Empty without a comment.
    fn comment_text(&self) -> &str {
        self.memo().comment_text(self.context(), self.element())
    }

    fn raw_comment_text(&self) -> &str {
        self.memo().raw_comment_text(self.context(), self.element())
    }

    /// Block tags in comment order.
    fn tags(&self) -> Vec<Tag<'a>> {
        let cx = self.context();
        let element = self.element();
        self.memo()
            .comment(cx, element)
            .map(|c| c.block_tags.iter().map(|&n| cx.tag(element, n)).collect())
            .unwrap_or_default()
    }

    /// Block tags of one kind. `"throws"` and `"@throws"` both also match
    /// `@exception` tags.
    fn tags_of_kind(&self, kind: &str) -> Vec<Tag<'a>> {
        let kind = normalize_kind(kind);
        self.tags()
            .into_iter()
            .filter(|tag| tag.kind() == kind)
            .collect()
    }

    fn see_tags(&self) -> Vec<SeeTag<'a>> {
        self.tags()
            .into_iter()
            .filter_map(|tag| tag.as_see_tag())
            .collect()
    }

    /// Body text and inline tags.
    fn inline_tags(&self) -> Vec<Tag<'a>> {
        let cx = self.context();
        let element = self.element();
        self.memo()
            .comment(cx, element)
            .map(|c| c.full_body.iter().map(|&n| cx.tag(element, n)).collect())
            .unwrap_or_default()
    }

    fn first_sentence_tags(&self) -> Vec<Tag<'a>> {
        let cx = self.context();
        let element = self.element();
        self.memo()
            .comment(cx, element)
            .map(|c| c.first_sentence.iter().map(|&n| cx.tag(element, n)).collect())
            .unwrap_or_default()
    }

    /// Position of the element's doc comment.
    fn position(&self) -> SourcePosition {
        self.context().position(self.element(), None)
    }
}

// ============================================================================
// DOC
// ============================================================================

/// Any documentable entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Doc<'a> {
    Package(PackageDoc<'a>),
    Class(ClassDoc<'a>),
    AnnotationType(AnnotationTypeDoc<'a>),
    Field(FieldDoc<'a>),
    Method(MethodDoc<'a>),
    Constructor(ConstructorDoc<'a>),
    AnnotationElement(AnnotationElementDoc<'a>),
}

macro_rules! each_doc {
    ($self:expr, $doc:ident => $body:expr) => {
        match $self {
            Doc::Package($doc) => $body,
            Doc::Class($doc) => $body,
            Doc::AnnotationType($doc) => $body,
            Doc::Field($doc) => $body,
            Doc::Method($doc) => $body,
            Doc::Constructor($doc) => $body,
            Doc::AnnotationElement($doc) => $body,
        }
    };
}

impl<'a> Documented<'a> for Doc<'a> {
    fn context(&self) -> &'a Context {
        each_doc!(self, d => d.context())
    }

    fn element(&self) -> ElementId {
        each_doc!(self, d => d.element())
    }

    fn memo(&self) -> &DocMemo {
        each_doc!(self, d => d.memo())
    }

    fn name(&self) -> &str {
        each_doc!(self, d => d.name())
    }

    fn qualified_name(&self) -> &str {
        each_doc!(self, d => d.qualified_name())
    }
}

impl<'a> Doc<'a> {
    pub fn is_package(&self) -> bool {
        matches!(self, Doc::Package(_))
    }

    /// Classes, enums, exceptions and errors; not interfaces.
    pub fn is_class(&self) -> bool {
        matches!(self, Doc::Class(c) if c.is_class())
    }

    pub fn is_ordinary_class(&self) -> bool {
        matches!(self, Doc::Class(c) if c.is_ordinary_class())
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Doc::Class(c) if c.is_interface())
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Doc::Class(c) if c.is_enum())
    }

    pub fn is_exception(&self) -> bool {
        matches!(self, Doc::Class(c) if c.is_exception())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Doc::Class(c) if c.is_error())
    }

    pub fn is_annotation_type(&self) -> bool {
        matches!(self, Doc::AnnotationType(_))
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Doc::Field(f) if !f.is_enum_constant())
    }

    pub fn is_enum_constant(&self) -> bool {
        matches!(self, Doc::Field(f) if f.is_enum_constant())
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Doc::Method(_))
    }

    pub fn is_constructor(&self) -> bool {
        matches!(self, Doc::Constructor(_))
    }

    pub fn is_annotation_type_element(&self) -> bool {
        matches!(self, Doc::AnnotationElement(_))
    }

    pub fn as_package(&self) -> Option<&PackageDoc<'a>> {
        match self {
            Doc::Package(p) => Some(p),
            _ => None,
        }
    }

    /// Class view of a class, interface, enum or annotation type.
    pub fn as_class(&self) -> Option<&ClassDoc<'a>> {
        match self {
            Doc::Class(c) => Some(c),
            Doc::AnnotationType(a) => Some(a.as_class_doc()),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldDoc<'a>> {
        match self {
            Doc::Field(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodDoc<'a>> {
        match self {
            Doc::Method(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_constructor(&self) -> Option<&ConstructorDoc<'a>> {
        match self {
            Doc::Constructor(c) => Some(c),
            _ => None,
        }
    }
}
