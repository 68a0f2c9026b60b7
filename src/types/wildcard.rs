use std::rc::Rc;

use crate::base::TypeId;
use crate::context::Context;
use crate::doc::{ClassDoc, ClassSlot};
use crate::error::Result;

use super::{Type, type_view};

#[derive(Debug)]
pub(crate) struct WildcardSlot {
    ty: TypeId,
    erased: Option<Rc<ClassSlot>>,
}

impl WildcardSlot {
    pub(crate) fn new(cx: &Context, ty: TypeId) -> Self {
        Self {
            ty,
            erased: cx.erased_class(ty),
        }
    }
}

type_view!(
    /// `?`, `? extends T` or `? super T`.
    WildcardType,
    WildcardSlot
);

impl<'a> WildcardType<'a> {
    fn bound(&self, bound: Option<TypeId>) -> Result<Vec<Type<'a>>> {
        match bound {
            Some(ty) => Ok(self.cx.type_of(ty)?.into_iter().collect()),
            None => Ok(Vec::new()),
        }
    }

    /// Zero or one `extends` bound.
    pub fn extends_bounds(&self) -> Result<Vec<Type<'a>>> {
        self.bound(self.cx.host().extends_bound(self.slot.ty))
    }

    /// Zero or one `super` bound.
    pub fn super_bounds(&self) -> Result<Vec<Type<'a>>> {
        self.bound(self.cx.host().super_bound(self.slot.ty))
    }

    pub fn as_class_doc(&self) -> Option<ClassDoc<'a>> {
        self.slot
            .erased
            .as_ref()
            .map(|slot| ClassDoc::new(self.cx, slot.clone()))
    }
}
