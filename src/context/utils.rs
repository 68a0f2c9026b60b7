//! Element classification helpers shared by every wrapper.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{ElementId, TypeId};
use crate::config::ContextConfig;
use crate::host::{ElementKind, Host};

/// Stateless predicates over host elements, plus a memo of the library
/// types looked up by name.
pub struct ElementUtils {
    host: Rc<dyn Host>,
    config: ContextConfig,
    named_types: RefCell<FxHashMap<SmolStr, Option<TypeId>>>,
}

impl ElementUtils {
    pub(crate) fn new(host: Rc<dyn Host>, config: ContextConfig) -> Self {
        Self {
            host,
            config,
            named_types: RefCell::new(FxHashMap::default()),
        }
    }

    /// Declared type of the type element named `name`, if the host knows it.
    pub fn type_named(&self, name: &SmolStr) -> Option<TypeId> {
        if let Some(&found) = self.named_types.borrow().get(name) {
            return found;
        }
        let found = self
            .host
            .type_element_by_name(name)
            .map(|e| self.host.as_type(e));
        self.named_types.borrow_mut().insert(name.clone(), found);
        found
    }

    fn is_subtype_of(&self, element: ElementId, name: &SmolStr) -> bool {
        match self.type_named(name) {
            Some(sup) => self.host.is_subtype(self.host.as_type(element), sup),
            None => false,
        }
    }

    /// A class (not an interface or enum) that inherits from `Exception`.
    pub fn is_exception(&self, element: ElementId) -> bool {
        self.host.element_kind(element) == ElementKind::Class
            && self.is_subtype_of(element, &self.config.exception)
    }

    /// A class that inherits from `Error`.
    pub fn is_error(&self, element: ElementId) -> bool {
        self.host.element_kind(element) == ElementKind::Class
            && self.is_subtype_of(element, &self.config.error)
    }

    pub fn is_throwable(&self, element: ElementId) -> bool {
        self.host.element_kind(element) == ElementKind::Class
            && self.is_subtype_of(element, &self.config.throwable)
    }

    pub fn is_serializable(&self, element: ElementId) -> bool {
        self.is_subtype_of(element, &self.config.serializable)
    }

    pub fn is_externalizable(&self, element: ElementId) -> bool {
        self.is_subtype_of(element, &self.config.externalizable)
    }

    pub fn is_interface(&self, element: ElementId) -> bool {
        self.host.element_kind(element) == ElementKind::Interface
    }

    pub fn is_annotation_type(&self, element: ElementId) -> bool {
        self.host.element_kind(element) == ElementKind::AnnotationType
    }

    pub fn is_enum(&self, element: ElementId) -> bool {
        self.host.element_kind(element) == ElementKind::Enum
    }

    pub fn is_root_object(&self, element: ElementId) -> bool {
        self.host.qualified_name(element) == self.config.root_object
    }

    /// Nearest enclosing type element, `None` once a package is reached.
    pub fn enclosing_type_element(&self, element: ElementId) -> Option<ElementId> {
        let mut current = self.host.enclosing_element(element);
        while let Some(e) = current {
            let kind = self.host.element_kind(e);
            if kind == ElementKind::Package {
                return None;
            }
            if kind.is_type() {
                return Some(e);
            }
            current = self.host.enclosing_element(e);
        }
        None
    }

    /// Enclosing package, walking out through any number of types.
    pub fn package_of(&self, element: ElementId) -> Option<ElementId> {
        let mut current = self.host.enclosing_element(element);
        while let Some(e) = current {
            if self.host.element_kind(e) == ElementKind::Package {
                return Some(e);
            }
            current = self.host.enclosing_element(e);
        }
        None
    }

    /// `Outer.Inner.Leaf` for a nested type: simple names of the type and
    /// its enclosing types, outermost first.
    pub fn class_name_until_not_nested(&self, element: ElementId) -> String {
        let mut names = vec![self.host.simple_name(element)];
        let mut current = self.enclosing_type_element(element);
        while let Some(e) = current {
            names.push(self.host.simple_name(e));
            current = self.enclosing_type_element(e);
        }
        names.reverse();
        names.join(".")
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }
}
