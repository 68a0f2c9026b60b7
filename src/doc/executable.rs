//! Methods, constructors and annotation type elements.

use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::ElementId;
use crate::context::Context;
use crate::error::Result;
use crate::host::{ElementKind, Modifier, Origin, TypeKind};
use crate::tags::{ParamTag, ThrowsTag};
use crate::types::{Type, TypeVariable};

use super::{AnnotationValue, ClassDoc, DocMemo, Documented, Parameter, ProgramElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ExecutableKind {
    Method,
    Constructor,
    AnnotationElement,
}

#[doc(hidden)]
#[derive(Debug)]
pub struct ExecutableSlot {
    element: ElementId,
    name: SmolStr,
    qualified_name: String,
    memo: DocMemo,
    parameters: OnceCell<Vec<ElementId>>,
    signature: OnceCell<String>,
    flat_signature: OnceCell<String>,
}

impl ExecutableSlot {
    pub(crate) fn new(cx: &Context, element: ElementId, kind: ExecutableKind) -> Self {
        let host = cx.host();
        let owner = host.enclosing_element(element);
        let (name, qualified_name) = match (kind, owner) {
            // A constructor is named after its class.
            (ExecutableKind::Constructor, Some(owner)) => {
                let qualified = host.qualified_name(owner);
                (host.simple_name(owner), qualified.to_string())
            }
            (_, Some(owner)) => {
                let name = host.simple_name(element);
                let qualified = format!("{}.{name}", host.qualified_name(owner));
                (name, qualified)
            }
            (_, None) => {
                let name = host.simple_name(element);
                let qualified = name.to_string();
                (name, qualified)
            }
        };
        Self {
            element,
            name,
            qualified_name,
            memo: DocMemo::default(),
            parameters: OnceCell::new(),
            signature: OnceCell::new(),
            flat_signature: OnceCell::new(),
        }
    }
}

/// Queries shared by methods, constructors and annotation type elements.
pub trait ExecutableMember<'a>: ProgramElement<'a> {
    #[doc(hidden)]
    fn executable_slot(&self) -> &ExecutableSlot;

    /// Parameters in declaration order.
    fn parameters(&self) -> Vec<Parameter<'a>> {
        let cx: &'a Context = self.context();
        self.executable_slot()
            .parameters
            .get_or_init(|| cx.host().parameters(self.element()))
            .iter()
            .map(|&p| cx.parameter_doc(p))
            .collect()
    }

    fn thrown_exception_types(&self) -> Result<Vec<Type<'a>>> {
        let cx: &'a Context = self.context();
        let mut types = Vec::new();
        for ty in cx.host().thrown_types(self.element()) {
            if let Some(ty) = cx.type_of(ty)? {
                types.push(ty);
            }
        }
        Ok(types)
    }

    /// Declared exceptions that resolve to classes. Thrown type variables
    /// resolve to their erasure.
    fn thrown_exceptions(&self) -> Result<Vec<ClassDoc<'a>>> {
        Ok(self
            .thrown_exception_types()?
            .into_iter()
            .filter_map(|ty| ty.as_class_doc())
            .collect())
    }

    fn type_parameters(&self) -> Result<Vec<TypeVariable<'a>>> {
        self.context().type_variables_of(self.element())
    }

    /// `(java.util.List, int)`: erased parameter types, fully qualified.
    fn signature(&self) -> &str {
        let cx = self.context();
        self.executable_slot().signature.get_or_init(|| {
            let host = cx.host();
            let params: Vec<String> = host
                .parameters(self.element())
                .into_iter()
                .map(|p| host.type_display(host.erasure(host.as_type(p))))
                .collect();
            format!("({})", params.join(", "))
        })
    }

    /// `(List, int[])`: simple type names with their array dimension.
    fn flat_signature(&self) -> &str {
        let cx: &'a Context = self.context();
        self.executable_slot().flat_signature.get_or_init(|| {
            let host = cx.host();
            let params: Vec<String> = host
                .parameters(self.element())
                .into_iter()
                .map(|p| {
                    let ty = host.as_type(p);
                    match cx.type_of(ty) {
                        Ok(Some(ty)) => format!("{}{}", ty.simple_type_name(), ty.dimension()),
                        _ => host.type_display(ty),
                    }
                })
                .collect();
            format!("({})", params.join(", "))
        })
    }

    fn is_var_args(&self) -> bool {
        self.context().host().is_var_args(self.element())
    }

    fn is_native(&self) -> bool {
        self.has_modifier(Modifier::Native)
    }

    fn is_synchronized(&self) -> bool {
        self.has_modifier(Modifier::Synchronized)
    }

    fn is_synthetic(&self) -> bool {
        self.context().host().origin(self.element()) != Origin::Explicit
    }

    /// `@param` tags naming value parameters.
    fn param_tags(&self) -> Vec<ParamTag<'a>> {
        self.tags()
            .into_iter()
            .filter_map(|tag| tag.as_param_tag())
            .filter(|tag| !tag.is_type_parameter())
            .collect()
    }

    /// `@param <T>` tags.
    fn type_param_tags(&self) -> Vec<ParamTag<'a>> {
        self.tags()
            .into_iter()
            .filter_map(|tag| tag.as_param_tag())
            .filter(|tag| tag.is_type_parameter())
            .collect()
    }

    /// `@throws` and `@exception` tags.
    fn throws_tags(&self) -> Vec<ThrowsTag<'a>> {
        self.tags()
            .into_iter()
            .filter_map(|tag| tag.as_throws_tag())
            .collect()
    }
}

macro_rules! executable_doc {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name<'a> {
            cx: &'a Context,
            slot: Rc<ExecutableSlot>,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(cx: &'a Context, slot: Rc<ExecutableSlot>) -> Self {
                Self { cx, slot }
            }
        }

        impl<'a> Documented<'a> for $name<'a> {
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

        impl<'a> ProgramElement<'a> for $name<'a> {}

        impl<'a> ExecutableMember<'a> for $name<'a> {
            fn executable_slot(&self) -> &ExecutableSlot {
                &self.slot
            }
        }

        impl PartialEq for $name<'_> {
            fn eq(&self, other: &Self) -> bool {
                Rc::ptr_eq(&self.slot, &other.slot)
            }
        }

        impl Eq for $name<'_> {}

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}{})", stringify!($name), self.slot.qualified_name, self.signature())
            }
        }

        impl fmt::Display for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.slot.qualified_name, self.signature())
            }
        }
    };
}

executable_doc!(
    /// A method of a class or interface.
    MethodDoc
);

executable_doc!(
    /// A constructor. Its name is the simple name of its class.
    ConstructorDoc
);

executable_doc!(
    /// An element of an annotation type, e.g. `String value() default "";`.
    AnnotationElementDoc
);

// ============================================================================
// METHOD
// ============================================================================

impl<'a> MethodDoc<'a> {
    pub fn is_abstract(&self) -> bool {
        self.has_modifier(Modifier::Abstract)
    }

    /// A default method of an interface.
    pub fn is_default(&self) -> bool {
        self.has_modifier(Modifier::Default)
    }

    pub fn return_type(&self) -> Result<Option<Type<'a>>> {
        self.cx.type_of(self.cx.host().return_type(self.slot.element))
    }

    /// The superclass method this one overrides. Only the superclass chain
    /// is searched, never interfaces. Static methods override nothing.
    pub fn overridden_method(&self) -> Option<MethodDoc<'a>> {
        if self.is_static() {
            return None;
        }
        let host = self.cx.host();
        let owner = host.enclosing_element(self.slot.element)?;
        let mut superclass = host.superclass(owner);
        while host.type_kind(superclass) != TypeKind::None {
            let declaring = host.type_element(superclass)?;
            let found = host.enclosed_elements(declaring).into_iter().find(|&m| {
                host.element_kind(m) == ElementKind::Method
                    && host.simple_name(m) == self.slot.name
                    && host.overrides(self.slot.element, m, owner)
            });
            if let Some(overridden) = found {
                debug!(
                    method = %self.slot.qualified_name,
                    overridden = %host.qualified_name(declaring),
                    "resolved overridden method"
                );
                return Some(self.cx.method_doc(overridden));
            }
            superclass = host.superclass(declaring);
        }
        debug!(method = %self.slot.qualified_name, "overrides nothing");
        None
    }

    /// The class declaring the overridden method.
    pub fn overridden_class(&self) -> Result<Option<ClassDoc<'a>>> {
        match self.overridden_method() {
            Some(method) => method.containing_class(),
            None => Ok(None),
        }
    }

    /// Whether this method overrides `other`, directly or through a chain
    /// of overrides.
    pub fn overrides(&self, other: &MethodDoc<'_>) -> bool {
        let mut current = self.overridden_method();
        while let Some(method) = current {
            if method.element() == other.element() {
                return true;
            }
            current = method.overridden_method();
        }
        false
    }
}

// ============================================================================
// ANNOTATION TYPE ELEMENT
// ============================================================================

impl<'a> AnnotationElementDoc<'a> {
    pub fn return_type(&self) -> Result<Option<Type<'a>>> {
        self.cx.type_of(self.cx.host().return_type(self.slot.element))
    }

    /// The `default` clause, if any.
    pub fn default_value(&self) -> Option<AnnotationValue<'a>> {
        self.cx
            .host()
            .default_value(self.slot.element)
            .map(|value| self.cx.annotation_value(value))
    }
}
