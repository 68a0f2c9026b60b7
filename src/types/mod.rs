//! The legacy type hierarchy.
//!
//! [`Type`] is a closed sum over every variant the legacy API knows. One
//! factory, [`Context::type_of`], maps a host type to its variant:
//!
//! | host kind                   | variant                                      |
//! |-----------------------------|----------------------------------------------|
//! | primitive, `void`, null     | [`PrimitiveType`] (not cached)               |
//! | array                       | [`ArrayType`]                                |
//! | wildcard                    | [`WildcardType`]                             |
//! | type variable               | [`TypeVariable`]                             |
//! | declared, annotated         | [`AnnotatedType`]                            |
//! | declared, with arguments    | [`ParameterizedType`]                        |
//! | declared annotation type    | [`AnnotationTypeDoc`]                        |
//! | declared otherwise          | [`ClassDoc`]                                 |
//! | none                        | absent                                       |
//! | error                       | [`ErrorType`]                                |
//!
//! Any other kind is an [`AdapterError::UnsupportedKind`]. Callers branch
//! with the `as_*` down-casts rather than a visitor.

mod annotated;
mod array;
mod error_type;
mod parameterized;
mod primitive;
mod type_variable;
mod wildcard;

use std::fmt;
use std::rc::Rc;

use crate::base::{ElementId, TypeId};
use crate::context::Context;
use crate::doc::{AnnotationTypeDoc, ClassDoc, ClassSlot};
use crate::error::{AdapterError, Result};
use crate::host::{ElementKind, TypeKind};

pub use annotated::AnnotatedType;
pub use array::ArrayType;
pub use error_type::ErrorType;
pub use parameterized::ParameterizedType;
pub use primitive::PrimitiveType;
pub use type_variable::TypeVariable;
pub use wildcard::WildcardType;

pub(crate) use annotated::AnnotatedSlot;
pub(crate) use array::ArraySlot;
pub(crate) use error_type::ErrorSlot;
pub(crate) use parameterized::ParameterizedSlot;
pub(crate) use type_variable::TypeVariableSlot;
pub(crate) use wildcard::WildcardSlot;

// ============================================================================
// SLOTS
// ============================================================================

/// Owned form of a [`Type`], kept by slots that refer to another type.
#[derive(Clone, Debug)]
pub(crate) enum TypeSlot {
    Primitive(PrimitiveType),
    Array(Rc<ArraySlot>),
    Class(Rc<ClassSlot>),
    AnnotationType(Rc<ClassSlot>),
    Parameterized(Rc<ParameterizedSlot>),
    TypeVariable(Rc<TypeVariableSlot>),
    Wildcard(Rc<WildcardSlot>),
    Annotated(Rc<AnnotatedSlot>),
    Error(Rc<ErrorSlot>),
}

impl TypeSlot {
    pub(crate) fn view<'a>(&self, cx: &'a Context) -> Type<'a> {
        match self {
            TypeSlot::Primitive(p) => Type::Primitive(*p),
            TypeSlot::Array(s) => Type::Array(ArrayType::new(cx, s.clone())),
            TypeSlot::Class(s) => Type::Class(ClassDoc::new(cx, s.clone())),
            TypeSlot::AnnotationType(s) => {
                Type::AnnotationType(AnnotationTypeDoc::from_class(ClassDoc::new(cx, s.clone())))
            }
            TypeSlot::Parameterized(s) => {
                Type::Parameterized(ParameterizedType::new(cx, s.clone()))
            }
            TypeSlot::TypeVariable(s) => Type::TypeVariable(TypeVariable::new(cx, s.clone())),
            TypeSlot::Wildcard(s) => Type::Wildcard(WildcardType::new(cx, s.clone())),
            TypeSlot::Annotated(s) => Type::Annotated(AnnotatedType::new(cx, s.clone())),
            TypeSlot::Error(s) => Type::Error(ErrorType::new(cx, s.clone())),
        }
    }
}

// ============================================================================
// FACTORY
// ============================================================================

impl Context {
    /// The legacy view of a host type. `None` for the "none" kind, e.g. the
    /// superclass of `Object`.
    pub fn type_of(&self, ty: TypeId) -> Result<Option<Type<'_>>> {
        Ok(self.make_type(ty, false)?.map(|slot| slot.view(self)))
    }

    /// Canonicalize `ty`. `skip_annotations` is set only when unwrapping
    /// an annotated type, which would otherwise map to itself.
    pub(crate) fn make_type(&self, ty: TypeId, skip_annotations: bool) -> Result<Option<TypeSlot>> {
        let host = self.host();
        let kind = host.type_kind(ty);
        if let Some(primitive) = PrimitiveType::from_kind(kind) {
            return Ok(Some(TypeSlot::Primitive(primitive)));
        }
        let slot = match kind {
            TypeKind::Array => TypeSlot::Array(
                self.caches
                    .arrays
                    .get_or_try_insert_with(ty, || ArraySlot::new(self, ty))?,
            ),
            TypeKind::Wildcard => TypeSlot::Wildcard(
                self.caches
                    .wildcards
                    .get_or_insert_with(ty, || WildcardSlot::new(self, ty)),
            ),
            TypeKind::TypeVar => TypeSlot::TypeVariable(
                self.caches
                    .type_variables
                    .get_or_try_insert_with(ty, || TypeVariableSlot::new(self, ty))?,
            ),
            TypeKind::Declared => self.make_declared(ty, skip_annotations)?,
            TypeKind::None => return Ok(None),
            TypeKind::Error => TypeSlot::Error(
                self.caches
                    .errors
                    .get_or_insert_with(ty, || ErrorSlot::new(self, ty)),
            ),
            other => return Err(AdapterError::unsupported_type(other)),
        };
        Ok(Some(slot))
    }

    fn make_declared(&self, ty: TypeId, skip_annotations: bool) -> Result<TypeSlot> {
        let host = self.host();
        if !skip_annotations && !host.type_annotations(ty).is_empty() {
            return Ok(TypeSlot::Annotated(
                self.caches
                    .annotated
                    .get_or_insert_with(ty, || AnnotatedSlot::new(ty)),
            ));
        }
        let element = self.declared_element(ty)?;
        if !host.type_arguments(ty).is_empty() {
            return Ok(TypeSlot::Parameterized(
                self.caches
                    .parameterized
                    .get_or_insert_with(ty, || ParameterizedSlot::new(self, ty, element)),
            ));
        }
        let kind = host.element_kind(element);
        match kind {
            ElementKind::AnnotationType => Ok(TypeSlot::AnnotationType(
                self.class_doc(element).slot().clone(),
            )),
            ElementKind::Class | ElementKind::Interface | ElementKind::Enum => {
                Ok(TypeSlot::Class(self.class_doc(element).slot().clone()))
            }
            ElementKind::Record => Err(AdapterError::unsupported_element(kind)),
            _ => Err(AdapterError::invalid_argument("type element", kind)),
        }
    }

    fn declared_element(&self, ty: TypeId) -> Result<ElementId> {
        self.host()
            .type_element(ty)
            .ok_or_else(|| AdapterError::invalid_argument("declared type", self.host().type_display(ty)))
    }

    /// Class slot of the erasure of `ty`, if it erases to a class the
    /// legacy API can represent.
    pub(crate) fn erased_class(&self, ty: TypeId) -> Option<Rc<ClassSlot>> {
        let host = self.host();
        let element = host.type_element(host.erasure(ty))?;
        match host.element_kind(element) {
            ElementKind::Class
            | ElementKind::Interface
            | ElementKind::Enum
            | ElementKind::AnnotationType => Some(self.class_doc(element).slot().clone()),
            _ => None,
        }
    }

    /// Type variables declared by a generic class or executable.
    pub fn type_variables_of(&self, element: ElementId) -> Result<Vec<TypeVariable<'_>>> {
        let host = self.host();
        let mut variables = Vec::new();
        for parameter in host.type_parameters(element) {
            let ty = host.as_type(parameter);
            let slot = self
                .caches
                .type_variables
                .get_or_try_insert_with(ty, || TypeVariableSlot::new(self, ty))?;
            variables.push(TypeVariable::new(self, slot));
        }
        Ok(variables)
    }
}

// ============================================================================
// TYPE
// ============================================================================

/// Any type of the legacy API.
#[derive(Clone, Debug, PartialEq)]
pub enum Type<'a> {
    Primitive(PrimitiveType),
    Array(ArrayType<'a>),
    Class(ClassDoc<'a>),
    AnnotationType(AnnotationTypeDoc<'a>),
    Parameterized(ParameterizedType<'a>),
    TypeVariable(TypeVariable<'a>),
    Wildcard(WildcardType<'a>),
    Annotated(AnnotatedType<'a>),
    Error(ErrorType<'a>),
}

impl<'a> Type<'a> {
    /// Unqualified name with enclosing classes, e.g. `Outer.Inner`.
    pub fn type_name(&self) -> String {
        match self {
            Type::Primitive(p) => p.name().to_string(),
            Type::Array(a) => a.component_type().type_name(),
            Type::Class(c) => c.type_name().to_string(),
            Type::AnnotationType(a) => a.type_name().to_string(),
            Type::Parameterized(p) => p.type_name(),
            Type::TypeVariable(v) => v.type_name(),
            Type::Wildcard(_) => "?".to_string(),
            Type::Annotated(a) => a.type_name(),
            Type::Error(e) => e.simple_name().to_string(),
        }
    }

    /// Fully-qualified name without type arguments or dimension.
    pub fn qualified_type_name(&self) -> String {
        match self {
            Type::Primitive(p) => p.name().to_string(),
            Type::Array(a) => a.component_type().qualified_type_name(),
            Type::Class(c) => c.qualified_type_name().to_string(),
            Type::AnnotationType(a) => a.qualified_type_name().to_string(),
            Type::Parameterized(p) => p.qualified_type_name(),
            Type::TypeVariable(v) => v.name().to_string(),
            Type::Wildcard(_) => "?".to_string(),
            Type::Annotated(a) => a.qualified_type_name(),
            Type::Error(e) => e.name().to_string(),
        }
    }

    /// The qualified name after its last `.`.
    pub fn simple_type_name(&self) -> String {
        let qualified = self.qualified_type_name();
        match qualified.rfind('.') {
            Some(dot) => qualified[dot + 1..].to_string(),
            None => qualified,
        }
    }

    /// `[]` per array level, empty for anything but an array.
    pub fn dimension(&self) -> &str {
        match self {
            Type::Array(a) => a.dimension(),
            _ => "",
        }
    }

    pub fn is_primitive(&self) -> bool {
        match self {
            Type::Primitive(_) => true,
            Type::Array(a) => a.component_type().is_primitive(),
            _ => false,
        }
    }

    /// Component of an array type, `None` otherwise.
    pub fn element_type(&self) -> Option<Type<'a>> {
        match self {
            Type::Array(a) => Some(a.component_type()),
            _ => None,
        }
    }

    // ========================================================================
    // DOWN-CASTS
    // ========================================================================

    /// The class behind this type. Parameterized types, type variables and
    /// wildcards answer with their erasure; arrays with their element type.
    pub fn as_class_doc(&self) -> Option<ClassDoc<'a>> {
        match self {
            Type::Class(c) => Some(c.clone()),
            Type::AnnotationType(a) => Some(a.as_class_doc().clone()),
            Type::Array(a) => a.component_type().as_class_doc(),
            Type::Parameterized(p) => p.as_class_doc(),
            Type::TypeVariable(v) => v.as_class_doc(),
            Type::Wildcard(w) => w.as_class_doc(),
            Type::Primitive(_) | Type::Annotated(_) | Type::Error(_) => None,
        }
    }

    pub fn as_annotation_type_doc(&self) -> Option<AnnotationTypeDoc<'a>> {
        match self {
            Type::AnnotationType(a) => Some(a.clone()),
            Type::Array(a) => a.component_type().as_annotation_type_doc(),
            _ => None,
        }
    }

    pub fn as_parameterized_type(&self) -> Option<ParameterizedType<'a>> {
        match self {
            Type::Parameterized(p) => Some(p.clone()),
            Type::Array(a) => a.component_type().as_parameterized_type(),
            _ => None,
        }
    }

    pub fn as_type_variable(&self) -> Option<TypeVariable<'a>> {
        match self {
            Type::TypeVariable(v) => Some(v.clone()),
            Type::Array(a) => a.component_type().as_type_variable(),
            _ => None,
        }
    }

    pub fn as_wildcard_type(&self) -> Option<WildcardType<'a>> {
        match self {
            Type::Wildcard(w) => Some(w.clone()),
            _ => None,
        }
    }

    pub fn as_annotated_type(&self) -> Option<AnnotatedType<'a>> {
        match self {
            Type::Annotated(a) => Some(a.clone()),
            _ => None,
        }
    }

    pub fn as_array_type(&self) -> Option<ArrayType<'a>> {
        match self {
            Type::Array(a) => Some(a.clone()),
            _ => None,
        }
    }

    pub fn as_primitive_type(&self) -> Option<PrimitiveType> {
        match self {
            Type::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_error_type(&self) -> Option<ErrorType<'a>> {
        match self {
            Type::Error(e) => Some(e.clone()),
            _ => None,
        }
    }
}

impl From<PrimitiveType> for Type<'_> {
    fn from(primitive: PrimitiveType) -> Self {
        Type::Primitive(primitive)
    }
}

impl<'a> From<ClassDoc<'a>> for Type<'a> {
    fn from(class: ClassDoc<'a>) -> Self {
        class.as_type()
    }
}

/// Primitives and classes print their qualified name; every other variant
/// prints the host's rendering, type arguments included.
impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(p) => fmt::Display::fmt(p, f),
            Type::Class(c) => fmt::Display::fmt(c, f),
            Type::AnnotationType(a) => fmt::Display::fmt(a, f),
            Type::Array(a) => fmt::Display::fmt(a, f),
            Type::Parameterized(p) => fmt::Display::fmt(p, f),
            Type::TypeVariable(v) => fmt::Display::fmt(v, f),
            Type::Wildcard(w) => fmt::Display::fmt(w, f),
            Type::Annotated(a) => fmt::Display::fmt(a, f),
            Type::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Shared shape of the cached type views: a context and a slot, equal
/// only when the slot is shared, printed through the host.
macro_rules! type_view {
    ($(#[$meta:meta])* $name:ident, $slot:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name<'a> {
            cx: &'a crate::context::Context,
            slot: std::rc::Rc<$slot>,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(cx: &'a crate::context::Context, slot: std::rc::Rc<$slot>) -> Self {
                Self { cx, slot }
            }

            /// The host type this view stands for.
            pub fn host_type(&self) -> crate::base::TypeId {
                self.slot.ty
            }
        }

        impl PartialEq for $name<'_> {
            fn eq(&self, other: &Self) -> bool {
                std::rc::Rc::ptr_eq(&self.slot, &other.slot)
            }
        }

        impl Eq for $name<'_> {}

        impl std::fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.cx.host().type_display(self.slot.ty))
                    .finish()
            }
        }

        impl std::fmt::Display for $name<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.cx.host().type_display(self.slot.ty))
            }
        }
    };
}

pub(crate) use type_view;
