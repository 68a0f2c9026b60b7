use once_cell::unsync::OnceCell;

use crate::base::TypeId;
use crate::doc::AnnotationDesc;
use crate::error::{AdapterError, Result};
use crate::host::TypeKind;

use super::{Type, TypeSlot, type_view};

#[derive(Debug)]
pub(crate) struct AnnotatedSlot {
    ty: TypeId,
    underlying: OnceCell<TypeSlot>,
}

impl AnnotatedSlot {
    pub(crate) fn new(ty: TypeId) -> Self {
        Self {
            ty,
            underlying: OnceCell::new(),
        }
    }
}

type_view!(
    /// A type use carrying annotations, e.g. `@NonNull String`.
    AnnotatedType,
    AnnotatedSlot
);

impl<'a> AnnotatedType<'a> {
    /// The annotations on this type use.
    pub fn annotations(&self) -> Vec<AnnotationDesc<'a>> {
        self.cx
            .host()
            .type_annotations(self.slot.ty)
            .into_iter()
            .map(|mirror| AnnotationDesc::new(self.cx, mirror))
            .collect()
    }

    /// The same type with its annotations ignored.
    pub fn underlying_type(&self) -> Result<Type<'a>> {
        let slot = self.slot.underlying.get_or_try_init(|| {
            self.cx
                .make_type(self.slot.ty, true)?
                .ok_or_else(|| AdapterError::unsupported_type(TypeKind::None))
        })?;
        Ok(slot.view(self.cx))
    }

    fn declared_name(&self, name: impl Fn(crate::base::ElementId) -> String) -> String {
        let host = self.cx.host();
        match host.type_element(self.slot.ty) {
            Some(element) => name(element),
            None => host.type_display(self.slot.ty),
        }
    }

    pub fn type_name(&self) -> String {
        self.declared_name(|e| self.cx.utils().class_name_until_not_nested(e))
    }

    pub fn qualified_type_name(&self) -> String {
        self.declared_name(|e| self.cx.host().qualified_name(e).to_string())
    }
}
