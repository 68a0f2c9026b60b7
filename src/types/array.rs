use crate::base::TypeId;
use crate::context::Context;
use crate::error::{AdapterError, Result};
use crate::host::TypeKind;

use super::{Type, TypeSlot, type_view};

#[derive(Debug)]
pub(crate) struct ArraySlot {
    ty: TypeId,
    /// The innermost, non-array component.
    component: TypeSlot,
    dimension: String,
}

impl ArraySlot {
    pub(crate) fn new(cx: &Context, ty: TypeId) -> Result<Self> {
        let host = cx.host();
        let mut depth = 0;
        let mut current = ty;
        while host.type_kind(current) == TypeKind::Array {
            depth += 1;
            current = host.component_type(current).ok_or_else(|| {
                AdapterError::invalid_argument("array component", host.type_display(current))
            })?;
        }
        let component = cx
            .make_type(current, false)?
            .ok_or_else(|| AdapterError::unsupported_type(TypeKind::None))?;
        Ok(Self {
            ty,
            component,
            dimension: "[]".repeat(depth),
        })
    }
}

type_view!(
    /// An array type. Names and most down-casts come from the element
    /// type; the nesting depth is kept as [`ArrayType::dimension`].
    ArrayType,
    ArraySlot
);

impl<'a> ArrayType<'a> {
    /// The non-array element type, `T` for `T[][]`.
    pub fn component_type(&self) -> Type<'a> {
        self.slot.component.view(self.cx)
    }

    /// `[]` repeated once per level.
    pub fn dimension(&self) -> &str {
        &self.slot.dimension
    }

    pub fn depth(&self) -> usize {
        self.slot.dimension.len() / 2
    }
}
