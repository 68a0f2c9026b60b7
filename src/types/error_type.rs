use smol_str::SmolStr;

use crate::base::TypeId;
use crate::context::Context;

use super::type_view;

#[derive(Debug)]
pub(crate) struct ErrorSlot {
    ty: TypeId,
    name: SmolStr,
}

impl ErrorSlot {
    pub(crate) fn new(cx: &Context, ty: TypeId) -> Self {
        Self {
            ty,
            name: SmolStr::new(cx.host().type_display(ty)),
        }
    }
}

type_view!(
    /// Placeholder for a type the host could not resolve.
    ErrorType,
    ErrorSlot
);

impl ErrorType<'_> {
    /// The name as written in source.
    pub fn name(&self) -> &str {
        &self.slot.name
    }

    pub fn simple_name(&self) -> &str {
        match self.slot.name.rfind('.') {
            Some(dot) => &self.slot.name[dot + 1..],
            None => &self.slot.name,
        }
    }

    /// Unresolved types are never documented.
    pub fn is_included(&self) -> bool {
        false
    }
}
