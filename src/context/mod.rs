//! The sole authority for wrapper identity.
//!
//! A [`Context`] owns one table per wrapper kind, keyed by host handle.
//! Asking twice for the same handle yields the same wrapper for the whole
//! life of the context; two contexts never share wrappers.
//!
//! Wrappers are cheap views (`&Context` plus a shared slot). Slots never
//! hold other slots' views; related wrappers are re-obtained through the
//! context, so the logical graph may be cyclic while ownership is not.

mod cache;
mod utils;

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::base::{AnnotationValueId, DocTreeId, ElementId, SourcePosition, TypeId};
use crate::config::ContextConfig;
use crate::doc::{
    AnnotationElementDoc, AnnotationTypeDoc, AnnotationValue, AnnotationValueSlot, ClassDoc,
    ClassSlot, ConstructorDoc, Doc, ExecutableKind, ExecutableSlot, FieldDoc, FieldSlot,
    MethodDoc, PackageDoc, PackageSlot, Parameter, ParameterSlot,
};
use crate::error::{AdapterError, Result};
use crate::host::{ElementKind, Host};
use crate::position;
use crate::tags::TagSlot;
use crate::types::{
    AnnotatedSlot, ArraySlot, ErrorSlot, ParameterizedSlot, TypeVariableSlot, WildcardSlot,
};

pub(crate) use cache::Cache;
pub use utils::ElementUtils;

pub(crate) struct Caches {
    pub(crate) packages: Cache<ElementId, PackageSlot>,
    pub(crate) classes: Cache<ElementId, ClassSlot>,
    pub(crate) annotation_types: Cache<ElementId, ClassSlot>,
    pub(crate) fields: Cache<ElementId, FieldSlot>,
    pub(crate) methods: Cache<ElementId, ExecutableSlot>,
    pub(crate) constructors: Cache<ElementId, ExecutableSlot>,
    pub(crate) annotation_elements: Cache<ElementId, ExecutableSlot>,
    pub(crate) parameters: Cache<ElementId, ParameterSlot>,
    pub(crate) annotation_values: Cache<AnnotationValueId, AnnotationValueSlot>,
    pub(crate) arrays: Cache<TypeId, ArraySlot>,
    pub(crate) parameterized: Cache<TypeId, ParameterizedSlot>,
    pub(crate) type_variables: Cache<TypeId, TypeVariableSlot>,
    pub(crate) wildcards: Cache<TypeId, WildcardSlot>,
    pub(crate) annotated: Cache<TypeId, AnnotatedSlot>,
    pub(crate) errors: Cache<TypeId, ErrorSlot>,
    /// Tags per owning element, then per comment node.
    pub(crate) tags: RefCell<FxHashMap<ElementId, Rc<Cache<DocTreeId, TagSlot>>>>,
}

impl Caches {
    fn new() -> Self {
        Self {
            packages: Cache::new("packages"),
            classes: Cache::new("classes"),
            annotation_types: Cache::new("annotation_types"),
            fields: Cache::new("fields"),
            methods: Cache::new("methods"),
            constructors: Cache::new("constructors"),
            annotation_elements: Cache::new("annotation_elements"),
            parameters: Cache::new("parameters"),
            annotation_values: Cache::new("annotation_values"),
            arrays: Cache::new("arrays"),
            parameterized: Cache::new("parameterized"),
            type_variables: Cache::new("type_variables"),
            wildcards: Cache::new("wildcards"),
            annotated: Cache::new("annotated"),
            errors: Cache::new("errors"),
            tags: RefCell::new(FxHashMap::default()),
        }
    }

    /// The tag table of `owner`, created on first use.
    pub(crate) fn tags_of(&self, owner: ElementId) -> Rc<Cache<DocTreeId, TagSlot>> {
        self.tags
            .borrow_mut()
            .entry(owner)
            .or_insert_with(|| Rc::new(Cache::new("tags")))
            .clone()
    }
}

/// Wrapper registry for one documentation run.
pub struct Context {
    host: Rc<dyn Host>,
    utils: ElementUtils,
    pub(crate) caches: Caches,
}

impl Context {
    pub fn new(host: impl Host + 'static) -> Self {
        Self::shared(Rc::new(host))
    }

    /// A context over a host other contexts may also use.
    pub fn shared(host: Rc<dyn Host>) -> Self {
        Self::with_config(host, ContextConfig::default())
    }

    pub fn with_config(host: Rc<dyn Host>, config: ContextConfig) -> Self {
        Self {
            utils: ElementUtils::new(host.clone(), config),
            host,
            caches: Caches::new(),
        }
    }

    pub fn host(&self) -> &dyn Host {
        &*self.host
    }

    pub fn utils(&self) -> &ElementUtils {
        &self.utils
    }

    pub fn config(&self) -> &ContextConfig {
        self.utils.config()
    }

    // ========================================================================
    // DISPATCH
    // ========================================================================

    /// The documentation wrapper of any documentable element.
    pub fn obtain(&self, element: ElementId) -> Result<Doc<'_>> {
        let kind = self.host.element_kind(element);
        let doc = match kind {
            ElementKind::Package => Doc::Package(self.package_doc(element)),
            ElementKind::Class | ElementKind::Interface | ElementKind::Enum => {
                Doc::Class(self.class_doc(element))
            }
            ElementKind::AnnotationType => {
                Doc::AnnotationType(AnnotationTypeDoc::from_class(self.class_doc(element)))
            }
            ElementKind::Field | ElementKind::EnumConstant => Doc::Field(self.field_doc(element)),
            ElementKind::Method if self.is_annotation_member(element) => {
                Doc::AnnotationElement(self.annotation_element_doc(element))
            }
            ElementKind::Method => Doc::Method(self.method_doc(element)),
            ElementKind::Constructor => Doc::Constructor(self.constructor_doc(element)),
            ElementKind::Record | ElementKind::Module => {
                return Err(AdapterError::unsupported_element(kind));
            }
            _ => return Err(AdapterError::invalid_argument("documented element", kind)),
        };
        Ok(doc)
    }

    fn is_annotation_member(&self, element: ElementId) -> bool {
        self.host
            .enclosing_element(element)
            .is_some_and(|owner| self.host.element_kind(owner) == ElementKind::AnnotationType)
    }

    // ========================================================================
    // CHECKED FACTORIES
    // ========================================================================

    pub fn package(&self, element: ElementId) -> Result<PackageDoc<'_>> {
        self.expect_kind(element, "package", |k| k == ElementKind::Package)?;
        Ok(self.package_doc(element))
    }

    /// Class, interface, enum or annotation type.
    pub fn class(&self, element: ElementId) -> Result<ClassDoc<'_>> {
        let kind = self.host.element_kind(element);
        match kind {
            ElementKind::Class
            | ElementKind::Interface
            | ElementKind::Enum
            | ElementKind::AnnotationType => Ok(self.class_doc(element)),
            ElementKind::Record => Err(AdapterError::unsupported_element(kind)),
            _ => Err(AdapterError::invalid_argument("type element", kind)),
        }
    }

    pub fn annotation_type(&self, element: ElementId) -> Result<AnnotationTypeDoc<'_>> {
        self.expect_kind(element, "annotation type", |k| {
            k == ElementKind::AnnotationType
        })?;
        Ok(AnnotationTypeDoc::from_class(self.class_doc(element)))
    }

    pub fn field(&self, element: ElementId) -> Result<FieldDoc<'_>> {
        self.expect_kind(element, "field", ElementKind::is_field)?;
        Ok(self.field_doc(element))
    }

    pub fn method(&self, element: ElementId) -> Result<MethodDoc<'_>> {
        self.expect_kind(element, "method", |k| k == ElementKind::Method)?;
        Ok(self.method_doc(element))
    }

    pub fn constructor(&self, element: ElementId) -> Result<ConstructorDoc<'_>> {
        self.expect_kind(element, "constructor", |k| k == ElementKind::Constructor)?;
        Ok(self.constructor_doc(element))
    }

    pub fn annotation_element(&self, element: ElementId) -> Result<AnnotationElementDoc<'_>> {
        let kind = self.host.element_kind(element);
        if kind != ElementKind::Method || !self.is_annotation_member(element) {
            return Err(AdapterError::invalid_argument("annotation type element", kind));
        }
        Ok(self.annotation_element_doc(element))
    }

    pub fn parameter(&self, element: ElementId) -> Result<Parameter<'_>> {
        self.expect_kind(element, "parameter", |k| k == ElementKind::Parameter)?;
        Ok(self.parameter_doc(element))
    }

    pub fn annotation_value(&self, value: AnnotationValueId) -> AnnotationValue<'_> {
        let slot = self
            .caches
            .annotation_values
            .get_or_insert_with(value, || AnnotationValueSlot::new(value));
        AnnotationValue::new(self, slot)
    }

    fn expect_kind(
        &self,
        element: ElementId,
        expected: &'static str,
        accepts: impl Fn(ElementKind) -> bool,
    ) -> Result<()> {
        let kind = self.host.element_kind(element);
        if accepts(kind) {
            Ok(())
        } else {
            Err(AdapterError::invalid_argument(expected, kind))
        }
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    /// The class with fully-qualified name `name`, if the host knows it.
    pub fn class_named(&self, name: &str) -> Result<Option<ClassDoc<'_>>> {
        match self.host.type_element_by_name(name) {
            Some(element) => self.class(element).map(Some),
            None => {
                debug!(name, "no type element by that name");
                Ok(None)
            }
        }
    }

    pub fn package_named(&self, name: &str) -> Option<PackageDoc<'_>> {
        self.host
            .package_element_by_name(name)
            .map(|element| self.package_doc(element))
    }

    pub fn position(&self, element: ElementId, node: Option<DocTreeId>) -> SourcePosition {
        position::resolve(self.host(), element, node)
    }

    // ========================================================================
    // UNCHECKED FACTORIES (caller has already classified the element)
    // ========================================================================

    pub(crate) fn package_doc(&self, element: ElementId) -> PackageDoc<'_> {
        let slot = self
            .caches
            .packages
            .get_or_insert_with(element, || PackageSlot::new(self, element));
        PackageDoc::new(self, slot)
    }

    /// Annotation types live in their own table; every other type kind in
    /// the class table.
    pub(crate) fn class_doc(&self, element: ElementId) -> ClassDoc<'_> {
        let cache = if self.host.element_kind(element) == ElementKind::AnnotationType {
            &self.caches.annotation_types
        } else {
            &self.caches.classes
        };
        let slot = cache.get_or_insert_with(element, || ClassSlot::new(self, element));
        ClassDoc::new(self, slot)
    }

    pub(crate) fn field_doc(&self, element: ElementId) -> FieldDoc<'_> {
        let slot = self
            .caches
            .fields
            .get_or_insert_with(element, || FieldSlot::new(self, element));
        FieldDoc::new(self, slot)
    }

    pub(crate) fn method_doc(&self, element: ElementId) -> MethodDoc<'_> {
        let slot = self.caches.methods.get_or_insert_with(element, || {
            ExecutableSlot::new(self, element, ExecutableKind::Method)
        });
        MethodDoc::new(self, slot)
    }

    pub(crate) fn constructor_doc(&self, element: ElementId) -> ConstructorDoc<'_> {
        let slot = self.caches.constructors.get_or_insert_with(element, || {
            ExecutableSlot::new(self, element, ExecutableKind::Constructor)
        });
        ConstructorDoc::new(self, slot)
    }

    pub(crate) fn annotation_element_doc(&self, element: ElementId) -> AnnotationElementDoc<'_> {
        let slot = self.caches.annotation_elements.get_or_insert_with(element, || {
            ExecutableSlot::new(self, element, ExecutableKind::AnnotationElement)
        });
        AnnotationElementDoc::new(self, slot)
    }

    pub(crate) fn parameter_doc(&self, element: ElementId) -> Parameter<'_> {
        let slot = self
            .caches
            .parameters
            .get_or_insert_with(element, || ParameterSlot::new(self, element));
        Parameter::new(self, slot)
    }

    /// Every class wrapper created so far, annotation types last.
    pub(crate) fn created_classes(&self) -> Vec<ClassDoc<'_>> {
        self.caches
            .classes
            .values()
            .into_iter()
            .chain(self.caches.annotation_types.values())
            .map(|slot| ClassDoc::new(self, slot))
            .collect()
    }

    pub(crate) fn created_packages(&self) -> Vec<PackageDoc<'_>> {
        self.caches
            .packages
            .values()
            .into_iter()
            .map(|slot| PackageDoc::new(self, slot))
            .collect()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("classes", &self.caches.classes.len())
            .field("annotation_types", &self.caches.annotation_types.len())
            .field("packages", &self.caches.packages.len())
            .finish_non_exhaustive()
    }
}
