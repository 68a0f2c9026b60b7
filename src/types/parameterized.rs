use std::rc::Rc;

use smol_str::SmolStr;

use crate::base::{ElementId, TypeId};
use crate::context::Context;
use crate::doc::{ClassDoc, ClassSlot};
use crate::error::Result;

use super::{Type, type_view};

#[derive(Debug)]
pub(crate) struct ParameterizedSlot {
    ty: TypeId,
    element: ElementId,
    name: String,
    qualified_name: SmolStr,
    erased: Option<Rc<ClassSlot>>,
}

impl ParameterizedSlot {
    pub(crate) fn new(cx: &Context, ty: TypeId, element: ElementId) -> Self {
        Self {
            ty,
            element,
            name: cx.utils().class_name_until_not_nested(element),
            qualified_name: cx.host().qualified_name(element),
            erased: cx.erased_class(ty),
        }
    }
}

type_view!(
    /// A generic class applied to arguments, e.g. `List<String>`.
    ParameterizedType,
    ParameterizedSlot
);

impl<'a> ParameterizedType<'a> {
    pub fn element(&self) -> ElementId {
        self.slot.element
    }

    /// The type arguments in order. Every argument is a type the legacy API
    /// can represent; "none" arguments are dropped.
    pub fn type_arguments(&self) -> Result<Vec<Type<'a>>> {
        let mut arguments = Vec::new();
        for argument in self.cx.host().type_arguments(self.slot.ty) {
            if let Some(ty) = self.cx.type_of(argument)? {
                arguments.push(ty);
            }
        }
        Ok(arguments)
    }

    /// The generic class itself.
    pub fn as_class_doc(&self) -> Option<ClassDoc<'a>> {
        self.slot
            .erased
            .as_ref()
            .map(|slot| ClassDoc::new(self.cx, slot.clone()))
    }

    pub fn type_name(&self) -> String {
        self.slot.name.clone()
    }

    pub fn qualified_type_name(&self) -> String {
        self.slot.qualified_name.to_string()
    }
}
