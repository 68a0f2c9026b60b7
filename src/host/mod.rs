//! The host introspection environment.
//!
//! [`Host`] is everything the adapter needs from a compiler front end:
//! element and type queries, fully-qualified name lookup, run selection,
//! parsed documentation comments and raw compilation unit content. The
//! adapter never mutates the host.
//!
//! [`crate::model::Program`] is an in-memory implementation.

mod annotation;
mod comment;
mod kinds;

use std::io;

use smol_str::SmolStr;

use crate::base::{AnnotationValueId, DocTreeId, ElementId, TypeId, UnitId};

pub use annotation::{AnnotationMirror, AnnotationValueKind, ConstantValue};
pub use comment::{DocCommentTree, DocTree, DocTreeKind};
pub use kinds::{ElementKind, Modifier, NestingKind, Origin, TypeKind};

/// Offset reported when the host has no position for a node.
pub const NOPOS: i64 = -1;

/// Read-only view of a compiled program.
pub trait Host {
    // ========================================================================
    // ELEMENTS
    // ========================================================================

    fn element_kind(&self, element: ElementId) -> ElementKind;

    fn simple_name(&self, element: ElementId) -> SmolStr;

    /// Fully-qualified name for packages and types, the simple name otherwise.
    fn qualified_name(&self, element: ElementId) -> SmolStr;

    fn enclosing_element(&self, element: ElementId) -> Option<ElementId>;

    fn enclosed_elements(&self, element: ElementId) -> Vec<ElementId>;

    fn nesting_kind(&self, element: ElementId) -> NestingKind;

    fn modifiers(&self, element: ElementId) -> Vec<Modifier>;

    fn annotation_mirrors(&self, element: ElementId) -> Vec<AnnotationMirror>;

    fn origin(&self, element: ElementId) -> Origin;

    /// The type an element declares or has: a type element's declared type,
    /// a field's or parameter's type, a type parameter's type variable.
    fn as_type(&self, element: ElementId) -> TypeId;

    /// Superclass of a type element; a `NONE` type when there is none.
    fn superclass(&self, element: ElementId) -> TypeId;

    fn interfaces(&self, element: ElementId) -> Vec<TypeId>;

    fn type_parameters(&self, element: ElementId) -> Vec<ElementId>;

    fn parameters(&self, element: ElementId) -> Vec<ElementId>;

    /// Return type of an executable; `VOID` for constructors.
    fn return_type(&self, element: ElementId) -> TypeId;

    fn thrown_types(&self, element: ElementId) -> Vec<TypeId>;

    fn is_var_args(&self, element: ElementId) -> bool;

    fn constant_value(&self, element: ElementId) -> Option<ConstantValue>;

    fn default_value(&self, element: ElementId) -> Option<AnnotationValueId>;

    // ========================================================================
    // TYPES
    // ========================================================================

    fn type_kind(&self, ty: TypeId) -> TypeKind;

    /// Declaring element of a declared, error or type-variable type.
    fn type_element(&self, ty: TypeId) -> Option<ElementId>;

    fn component_type(&self, ty: TypeId) -> Option<TypeId>;

    fn type_arguments(&self, ty: TypeId) -> Vec<TypeId>;

    /// Annotations written on this use of the type.
    fn type_annotations(&self, ty: TypeId) -> Vec<AnnotationMirror>;

    fn upper_bound(&self, ty: TypeId) -> Option<TypeId>;

    fn intersection_bounds(&self, ty: TypeId) -> Vec<TypeId>;

    fn extends_bound(&self, ty: TypeId) -> Option<TypeId>;

    fn super_bound(&self, ty: TypeId) -> Option<TypeId>;

    fn erasure(&self, ty: TypeId) -> TypeId;

    fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool;

    /// Whether `overrider` overrides `overridden` as a member of `owner`.
    fn overrides(&self, overrider: ElementId, overridden: ElementId, owner: ElementId) -> bool;

    /// Source-like rendering of a type, e.g. `java.util.List<java.lang.String>`.
    fn type_display(&self, ty: TypeId) -> String;

    fn annotation_value(&self, value: AnnotationValueId) -> AnnotationValueKind;

    // ========================================================================
    // LOOKUP AND SELECTION
    // ========================================================================

    fn type_element_by_name(&self, name: &str) -> Option<ElementId>;

    fn package_element_by_name(&self, name: &str) -> Option<ElementId>;

    /// Elements named on the command line of this run.
    fn specified_elements(&self) -> Vec<ElementId>;

    /// Whether the run's selection policy admits this element.
    fn is_selected(&self, element: ElementId) -> bool;

    /// Whether the run documents this element.
    fn is_included(&self, element: ElementId) -> bool;

    // ========================================================================
    // COMMENTS AND SOURCES
    // ========================================================================

    fn doc_comment(&self, element: ElementId) -> Option<DocCommentTree>;

    fn doc_tree(&self, node: DocTreeId) -> DocTree;

    /// Source text of a node, with nested nodes rendered in place.
    fn doc_tree_text(&self, node: DocTreeId) -> String {
        self.doc_tree(node).render(&|child| self.doc_tree_text(child))
    }

    fn compilation_unit(&self, element: ElementId) -> Option<UnitId>;

    fn unit_name(&self, unit: UnitId) -> String;

    fn unit_content(&self, unit: UnitId) -> io::Result<String>;

    /// Character offset of `node` (or of the element's doc comment) within
    /// its compilation unit, [`NOPOS`] when unknown.
    fn start_position(&self, element: ElementId, node: Option<DocTreeId>) -> i64;
}
