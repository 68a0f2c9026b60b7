use std::rc::Rc;

use once_cell::unsync::OnceCell;
use smol_str::SmolStr;

use crate::base::{ElementId, TypeId};
use crate::context::Context;
use crate::doc::{ClassDoc, ClassSlot, Doc};
use crate::error::{AdapterError, Result};
use crate::host::TypeKind;

use super::{Type, TypeSlot, type_view};

#[derive(Debug)]
pub(crate) struct TypeVariableSlot {
    ty: TypeId,
    /// The declaring type parameter.
    element: ElementId,
    name: SmolStr,
    erased: Option<Rc<ClassSlot>>,
    bounds: OnceCell<Vec<TypeSlot>>,
}

impl TypeVariableSlot {
    pub(crate) fn new(cx: &Context, ty: TypeId) -> Result<Self> {
        let host = cx.host();
        let element = host.type_element(ty).ok_or_else(|| {
            AdapterError::invalid_argument("type variable", host.type_display(ty))
        })?;
        Ok(Self {
            ty,
            element,
            name: host.simple_name(element),
            erased: cx.erased_class(ty),
            bounds: OnceCell::new(),
        })
    }
}

type_view!(
    /// A type variable such as `T` in `class Box<T extends Number>`.
    TypeVariable,
    TypeVariableSlot
);

impl<'a> TypeVariable<'a> {
    pub fn name(&self) -> &str {
        &self.slot.name
    }

    /// Upper bounds, one per intersection member. A bound that is exactly
    /// the root object class is left out, so `<T>` has none.
    pub fn bounds(&self) -> Result<Vec<Type<'a>>> {
        let cx = self.cx;
        let slots = self.slot.bounds.get_or_try_init(|| {
            let host = cx.host();
            let Some(bound) = host.upper_bound(self.slot.ty) else {
                return Ok(Vec::new());
            };
            let parts = if host.type_kind(bound) == TypeKind::Intersection {
                host.intersection_bounds(bound)
            } else {
                vec![bound]
            };
            let root = &cx.config().root_object;
            let mut bounds = Vec::new();
            for part in parts {
                if let Some(slot) = cx.make_type(part, false)? {
                    if slot.view(cx).qualified_type_name() != root.as_str() {
                        bounds.push(slot);
                    }
                }
            }
            Ok::<_, AdapterError>(bounds)
        })?;
        Ok(slots.iter().map(|slot| slot.view(cx)).collect())
    }

    /// The class or executable declaring this variable.
    pub fn owner(&self) -> Result<Option<Doc<'a>>> {
        match self.cx.host().enclosing_element(self.slot.element) {
            Some(owner) => self.cx.obtain(owner).map(Some),
            None => Ok(None),
        }
    }

    /// The erasure, i.e. the class of the leftmost bound.
    pub fn as_class_doc(&self) -> Option<ClassDoc<'a>> {
        self.slot
            .erased
            .as_ref()
            .map(|slot| ClassDoc::new(self.cx, slot.clone()))
    }

    /// Name of the erasure, `Object` for an unbounded variable.
    pub fn type_name(&self) -> String {
        match self.as_class_doc() {
            Some(class) => class.type_name().to_string(),
            None => self.slot.name.to_string(),
        }
    }
}
