//! Class, interface, enum and annotation type documentation.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use once_cell::unsync::OnceCell;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::ElementId;
use crate::context::Context;
use crate::error::Result;
use crate::host::{ElementKind, Modifier, NestingKind, TypeKind};
use crate::types::{Type, TypeVariable};

use super::{
    AnnotationElementDoc, ConstructorDoc, DocMemo, Documented, FieldDoc, MethodDoc, Modifiers,
    PackageDoc, ProgramElement,
};

/// A member list in its selected-only and its complete form.
#[derive(Debug, Default)]
struct Members {
    selected: OnceCell<Vec<ElementId>>,
    all: OnceCell<Vec<ElementId>>,
}

impl Members {
    fn get(&self, filter: bool, compute: impl FnOnce() -> Vec<ElementId>) -> &[ElementId] {
        let cell = if filter { &self.selected } else { &self.all };
        cell.get_or_init(compute)
    }
}

#[derive(Debug)]
pub(crate) struct ClassSlot {
    element: ElementId,
    kind: ElementKind,
    /// Name relative to the package, `Outer.Inner`.
    name: String,
    qualified_name: SmolStr,
    simple_name: SmolStr,
    memo: DocMemo,
    is_exception: OnceCell<bool>,
    is_error: OnceCell<bool>,
    fields: Members,
    methods: Members,
    constructors: Members,
    inner_classes: Members,
    enum_constants: OnceCell<Vec<ElementId>>,
}

impl ClassSlot {
    pub(crate) fn new(cx: &Context, element: ElementId) -> Self {
        let host = cx.host();
        Self {
            element,
            kind: host.element_kind(element),
            name: cx.utils().class_name_until_not_nested(element),
            qualified_name: host.qualified_name(element),
            simple_name: host.simple_name(element),
            memo: DocMemo::default(),
            is_exception: OnceCell::new(),
            is_error: OnceCell::new(),
            fields: Members::default(),
            methods: Members::default(),
            constructors: Members::default(),
            inner_classes: Members::default(),
            enum_constants: OnceCell::new(),
        }
    }
}

/// A class, interface or enum. Annotation types are reached through
/// [`AnnotationTypeDoc`], which dereferences to this.
#[derive(Clone)]
pub struct ClassDoc<'a> {
    cx: &'a Context,
    slot: Rc<ClassSlot>,
}

impl<'a> ClassDoc<'a> {
    pub(crate) fn new(cx: &'a Context, slot: Rc<ClassSlot>) -> Self {
        Self { cx, slot }
    }

    pub(crate) fn slot(&self) -> &Rc<ClassSlot> {
        &self.slot
    }

    pub fn kind(&self) -> ElementKind {
        self.slot.kind
    }

    // ========================================================================
    // CLASSIFICATION
    // ========================================================================

    pub fn is_interface(&self) -> bool {
        self.slot.kind == ElementKind::Interface
    }

    pub fn is_enum(&self) -> bool {
        self.slot.kind == ElementKind::Enum
    }

    pub fn is_annotation_type(&self) -> bool {
        self.slot.kind == ElementKind::AnnotationType
    }

    /// Classes and enums, exceptions and errors included.
    pub fn is_class(&self) -> bool {
        matches!(self.slot.kind, ElementKind::Class | ElementKind::Enum)
    }

    pub fn is_exception(&self) -> bool {
        *self
            .slot
            .is_exception
            .get_or_init(|| self.cx.utils().is_exception(self.slot.element))
    }

    pub fn is_error(&self) -> bool {
        *self
            .slot
            .is_error
            .get_or_init(|| self.cx.utils().is_error(self.slot.element))
    }

    pub fn is_ordinary_class(&self) -> bool {
        self.slot.kind == ElementKind::Class && !self.is_exception() && !self.is_error()
    }

    pub fn is_abstract(&self) -> bool {
        self.has_modifier(Modifier::Abstract)
    }

    pub fn is_serializable(&self) -> bool {
        self.cx.utils().is_serializable(self.slot.element)
    }

    pub fn is_externalizable(&self) -> bool {
        self.cx.utils().is_externalizable(self.slot.element)
    }

    // ========================================================================
    // SUPERTYPES
    // ========================================================================

    /// Superclass as a type. Interfaces and `Object` have none.
    pub fn superclass_type(&self) -> Result<Option<Type<'a>>> {
        if self.is_interface() || self.is_annotation_type() {
            return Ok(None);
        }
        let superclass = self.cx.host().superclass(self.slot.element);
        if self.cx.host().type_kind(superclass) == TypeKind::None {
            return Ok(None);
        }
        self.cx.type_of(superclass)
    }

    pub fn superclass(&self) -> Result<Option<ClassDoc<'a>>> {
        Ok(self.superclass_type()?.and_then(|ty| ty.as_class_doc()))
    }

    /// Whether this class is `other` or inherits from it. An interface is
    /// only a subclass of the root object class.
    pub fn subclass_of(&self, other: &ClassDoc<'_>) -> bool {
        let utils = self.cx.utils();
        if self.is_interface() {
            return utils.is_root_object(other.slot.element);
        }
        let host = self.cx.host();
        host.is_subtype(
            host.as_type(self.slot.element),
            host.as_type(other.slot.element),
        )
    }

    pub fn interface_types(&self) -> Result<Vec<Type<'a>>> {
        let mut types = Vec::new();
        for ty in self.cx.host().interfaces(self.slot.element) {
            if let Some(ty) = self.cx.type_of(ty)? {
                types.push(ty);
            }
        }
        Ok(types)
    }

    pub fn interfaces(&self) -> Result<Vec<ClassDoc<'a>>> {
        Ok(self
            .interface_types()?
            .into_iter()
            .filter_map(|ty| ty.as_class_doc())
            .collect())
    }

    pub fn type_parameters(&self) -> Result<Vec<TypeVariable<'a>>> {
        self.cx.type_variables_of(self.slot.element)
    }

    // ========================================================================
    // MEMBERS
    // ========================================================================

    fn enclosed_where(&self, filter: bool, accept: impl Fn(ElementId) -> bool) -> Vec<ElementId> {
        let host = self.cx.host();
        host.enclosed_elements(self.slot.element)
            .into_iter()
            .filter(|&e| accept(e))
            .filter(|&e| !filter || host.is_selected(e))
            .collect()
    }

    fn kind_of(&self, element: ElementId) -> ElementKind {
        self.cx.host().element_kind(element)
    }

    /// Fields, enum constants excluded. With `filter`, only selected ones.
    pub fn fields(&self, filter: bool) -> Vec<FieldDoc<'a>> {
        self.slot
            .fields
            .get(filter, || {
                self.enclosed_where(filter, |e| self.kind_of(e) == ElementKind::Field)
            })
            .iter()
            .map(|&e| self.cx.field_doc(e))
            .collect()
    }

    pub fn enum_constants(&self) -> Vec<FieldDoc<'a>> {
        self.slot
            .enum_constants
            .get_or_init(|| {
                self.enclosed_where(false, |e| self.kind_of(e) == ElementKind::EnumConstant)
            })
            .iter()
            .map(|&e| self.cx.field_doc(e))
            .collect()
    }

    pub fn methods(&self, filter: bool) -> Vec<MethodDoc<'a>> {
        self.slot
            .methods
            .get(filter, || {
                self.enclosed_where(filter, |e| self.kind_of(e) == ElementKind::Method)
            })
            .iter()
            .map(|&e| self.cx.method_doc(e))
            .collect()
    }

    pub fn constructors(&self, filter: bool) -> Vec<ConstructorDoc<'a>> {
        self.slot
            .constructors
            .get(filter, || {
                self.enclosed_where(filter, |e| self.kind_of(e) == ElementKind::Constructor)
            })
            .iter()
            .map(|&e| self.cx.constructor_doc(e))
            .collect()
    }

    /// Member classes and interfaces. Nested enums and annotation types are
    /// not listed here.
    pub fn inner_classes(&self, filter: bool) -> Vec<ClassDoc<'a>> {
        let host = self.cx.host();
        self.slot
            .inner_classes
            .get(filter, || {
                self.enclosed_where(filter, |e| {
                    host.nesting_kind(e) == NestingKind::Member
                        && matches!(
                            host.element_kind(e),
                            ElementKind::Class | ElementKind::Interface
                        )
                })
            })
            .iter()
            .map(|&e| self.cx.class_doc(e))
            .collect()
    }

    /// Every nested type of a kind this API can represent.
    fn member_types(&self) -> Vec<ClassDoc<'a>> {
        self.enclosed_where(false, |e| {
            matches!(
                self.kind_of(e),
                ElementKind::Class
                    | ElementKind::Interface
                    | ElementKind::Enum
                    | ElementKind::AnnotationType
            )
        })
        .into_iter()
        .map(|e| self.cx.class_doc(e))
        .collect()
    }

    // ========================================================================
    // CLASS SEARCH
    // ========================================================================

    /// Resolve a class name as seen from inside this class: the class's
    /// own scope first, then the scope of its outermost enclosing class.
    pub fn find_class(&self, name: &str) -> Result<Option<ClassDoc<'a>>> {
        if let Some(found) = self.search_class(name)? {
            return Ok(Some(found));
        }
        let outermost = self.outermost_class();
        if outermost != *self {
            debug!(name, from = %outermost.qualified_name(), "retrying class search from outermost class");
            return outermost.search_class(name);
        }
        Ok(None)
    }

    fn outermost_class(&self) -> ClassDoc<'a> {
        let utils = self.cx.utils();
        let mut current = self.slot.element;
        while let Some(owner) = utils.enclosing_type_element(current) {
            current = owner;
        }
        self.cx.class_doc(current)
    }

    /// Fully-qualified lookup, then nested types, then the package.
    fn search_class(&self, name: &str) -> Result<Option<ClassDoc<'a>>> {
        if let Some(element) = self.cx.host().type_element_by_name(name) {
            return self.cx.class(element).map(Some);
        }
        let suffix = format!(".{name}");
        for nested in self.member_types() {
            if nested.name() == name || nested.qualified_name().ends_with(&suffix) {
                return Ok(Some(nested));
            }
            if let Some(found) = nested.search_class(name)? {
                return Ok(Some(found));
            }
        }
        if let Some(found) = self
            .containing_package()
            .and_then(|package: PackageDoc<'a>| package.find_class(name))
        {
            return Ok(Some(found));
        }
        debug!(name, class = %self.slot.qualified_name, "class not found");
        Ok(None)
    }

    // ========================================================================
    // TYPE SURFACE
    // ========================================================================

    /// This class viewed as a type.
    pub fn as_type(&self) -> Type<'a> {
        if self.is_annotation_type() {
            Type::AnnotationType(AnnotationTypeDoc(self.clone()))
        } else {
            Type::Class(self.clone())
        }
    }

    pub fn type_name(&self) -> &str {
        &self.slot.name
    }

    pub fn qualified_type_name(&self) -> &str {
        &self.slot.qualified_name
    }

    pub fn simple_type_name(&self) -> &str {
        &self.slot.simple_name
    }

    /// Classes have no array dimension.
    pub fn dimension(&self) -> &str {
        ""
    }
}

impl<'a> Documented<'a> for ClassDoc<'a> {
    fn context(&self) -> &'a Context {
        self.cx
    }

    fn element(&self) -> ElementId {
        self.slot.element
    }

    fn memo(&self) -> &DocMemo {
        &self.slot.memo
    }

    fn name(&self) -> &str {
        &self.slot.name
    }

    fn qualified_name(&self) -> &str {
        &self.slot.qualified_name
    }
}

impl<'a> ProgramElement<'a> for ClassDoc<'a> {
    fn modifier_specifier(&self) -> Modifiers {
        let modifiers = Modifiers::from_host(&self.cx.host().modifiers(self.slot.element));
        if self.is_interface() || self.is_annotation_type() {
            modifiers
                .with(Modifiers::INTERFACE)
                .without(Modifiers::ABSTRACT)
        } else {
            modifiers
        }
    }
}

impl PartialEq for ClassDoc<'_> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for ClassDoc<'_> {}

impl fmt::Debug for ClassDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassDoc")
            .field(&self.slot.qualified_name)
            .finish()
    }
}

impl fmt::Display for ClassDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slot.qualified_name)
    }
}

// ============================================================================
// ANNOTATION TYPE
// ============================================================================

/// An annotation type declaration.
#[derive(Clone, PartialEq, Eq)]
pub struct AnnotationTypeDoc<'a>(ClassDoc<'a>);

impl<'a> AnnotationTypeDoc<'a> {
    pub(crate) fn from_class(class: ClassDoc<'a>) -> Self {
        Self(class)
    }

    pub fn as_class_doc(&self) -> &ClassDoc<'a> {
        &self.0
    }

    pub fn into_class_doc(self) -> ClassDoc<'a> {
        self.0
    }

    /// The elements declared by this annotation type, in source order.
    pub fn elements(&self) -> Vec<AnnotationElementDoc<'a>> {
        let cx = self.0.cx;
        let host = cx.host();
        host.enclosed_elements(self.0.slot.element)
            .into_iter()
            .filter(|&e| host.element_kind(e) == ElementKind::Method)
            .map(|e| cx.annotation_element_doc(e))
            .collect()
    }

    pub fn is_interface(&self) -> bool {
        false
    }
}

impl<'a> Deref for AnnotationTypeDoc<'a> {
    type Target = ClassDoc<'a>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> Documented<'a> for AnnotationTypeDoc<'a> {
    fn context(&self) -> &'a Context {
        self.0.cx
    }

    fn element(&self) -> ElementId {
        self.0.slot.element
    }

    fn memo(&self) -> &DocMemo {
        &self.0.slot.memo
    }

    fn name(&self) -> &str {
        &self.0.slot.name
    }

    fn qualified_name(&self) -> &str {
        &self.0.slot.qualified_name
    }
}

impl<'a> ProgramElement<'a> for AnnotationTypeDoc<'a> {
    fn modifier_specifier(&self) -> Modifiers {
        self.0.modifier_specifier()
    }
}

impl fmt::Debug for AnnotationTypeDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnnotationTypeDoc")
            .field(&self.0.slot.qualified_name)
            .finish()
    }
}

impl fmt::Display for AnnotationTypeDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
