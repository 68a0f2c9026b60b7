//! Executable parameters.

use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::base::ElementId;
use crate::context::Context;
use crate::error::Result;
use crate::host::ElementKind;
use crate::types::Type;

use super::AnnotationDesc;

#[derive(Debug)]
pub(crate) struct ParameterSlot {
    element: ElementId,
    name: SmolStr,
}

impl ParameterSlot {
    pub(crate) fn new(cx: &Context, element: ElementId) -> Self {
        Self {
            element,
            name: cx.host().simple_name(element),
        }
    }
}

/// One parameter of a method or constructor.
#[derive(Clone)]
pub struct Parameter<'a> {
    cx: &'a Context,
    slot: Rc<ParameterSlot>,
}

impl<'a> Parameter<'a> {
    pub(crate) fn new(cx: &'a Context, slot: Rc<ParameterSlot>) -> Self {
        Self { cx, slot }
    }

    pub fn element(&self) -> ElementId {
        self.slot.element
    }

    pub fn name(&self) -> &str {
        &self.slot.name
    }

    pub fn ty(&self) -> Result<Option<Type<'a>>> {
        self.cx.type_of(self.cx.host().as_type(self.slot.element))
    }

    /// Package-relative name for class and type variable types, the
    /// qualified name otherwise, followed by the array dimension.
    pub fn type_name(&self) -> Result<String> {
        let host = self.cx.host();
        let Some(ty) = self.ty()? else {
            return Ok(host.type_display(host.as_type(self.slot.element)));
        };
        let base = if matches!(
            ty,
            Type::Class(_) | Type::AnnotationType(_) | Type::TypeVariable(_)
        ) {
            ty.type_name()
        } else {
            ty.qualified_type_name()
        };
        Ok(format!("{base}{}", ty.dimension()))
    }

    pub fn annotations(&self) -> Vec<AnnotationDesc<'a>> {
        let host = self.cx.host();
        host.annotation_mirrors(self.slot.element)
            .into_iter()
            .filter(|mirror| {
                host.type_element(mirror.annotation_type)
                    .is_some_and(|e| host.element_kind(e) == ElementKind::AnnotationType)
            })
            .map(|mirror| AnnotationDesc::new(self.cx, mirror))
            .collect()
    }
}

impl PartialEq for Parameter<'_> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for Parameter<'_> {}

impl fmt::Debug for Parameter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Parameter").field(&self.slot.name).finish()
    }
}

impl fmt::Display for Parameter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self.cx.host();
        let ty = host.type_display(host.as_type(self.slot.element));
        write!(f, "{ty} {}", self.slot.name)
    }
}
