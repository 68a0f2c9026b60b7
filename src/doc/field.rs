//! Fields and enum constants.

use std::fmt;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::base::ElementId;
use crate::context::Context;
use crate::error::Result;
use crate::host::{ConstantValue, ElementKind, Modifier, Origin};
use crate::tags::SerialFieldTag;
use crate::types::Type;

use super::{DocMemo, Documented, ProgramElement};

/// A field's compile-time constant, with byte, char and short widened to
/// int.
pub type FieldConstant = ConstantValue;

#[derive(Debug)]
pub(crate) struct FieldSlot {
    element: ElementId,
    name: SmolStr,
    qualified_name: String,
    is_enum_constant: bool,
    memo: DocMemo,
}

impl FieldSlot {
    pub(crate) fn new(cx: &Context, element: ElementId) -> Self {
        let host = cx.host();
        let name = host.simple_name(element);
        let qualified_name = match host.enclosing_element(element) {
            Some(owner) => format!("{}.{name}", host.qualified_name(owner)),
            None => name.to_string(),
        };
        Self {
            element,
            is_enum_constant: host.element_kind(element) == ElementKind::EnumConstant,
            name,
            qualified_name,
            memo: DocMemo::default(),
        }
    }
}

#[derive(Clone)]
pub struct FieldDoc<'a> {
    cx: &'a Context,
    slot: Rc<FieldSlot>,
}

impl<'a> FieldDoc<'a> {
    pub(crate) fn new(cx: &'a Context, slot: Rc<FieldSlot>) -> Self {
        Self { cx, slot }
    }

    pub fn ty(&self) -> Result<Option<Type<'a>>> {
        self.cx.type_of(self.cx.host().as_type(self.slot.element))
    }

    pub fn is_enum_constant(&self) -> bool {
        self.slot.is_enum_constant
    }

    pub fn is_transient(&self) -> bool {
        self.has_modifier(Modifier::Transient)
    }

    pub fn is_volatile(&self) -> bool {
        self.has_modifier(Modifier::Volatile)
    }

    pub fn is_synthetic(&self) -> bool {
        self.cx.host().origin(self.slot.element) != Origin::Explicit
    }

    /// The constant initializer, `None` unless the field is a compile-time
    /// constant.
    pub fn constant_value(&self) -> Option<FieldConstant> {
        self.cx
            .host()
            .constant_value(self.slot.element)
            .map(ConstantValue::widened)
    }

    /// The constant as a source literal, e.g. `"x"`, `'c'` or `10L`.
    pub fn constant_value_expression(&self) -> Option<String> {
        let constant = self.cx.host().constant_value(self.slot.element)?;
        Some(match constant {
            ConstantValue::Boolean(v) => v.to_string(),
            ConstantValue::Byte(v) => format!("(byte){v}"),
            ConstantValue::Char(v) => format!("'{}'", v.escape_default()),
            ConstantValue::Short(v) => format!("(short){v}"),
            ConstantValue::Int(v) => v.to_string(),
            ConstantValue::Long(v) => format!("{v}L"),
            ConstantValue::Float(v) => format!("{v:?}f"),
            ConstantValue::Double(v) => format!("{v:?}"),
            ConstantValue::String(v) => format!("\"{}\"", v.escape_default()),
        })
    }

    pub fn serial_field_tags(&self) -> Vec<SerialFieldTag<'a>> {
        self.tags()
            .into_iter()
            .filter_map(|tag| tag.as_serial_field_tag())
            .collect()
    }
}

impl<'a> Documented<'a> for FieldDoc<'a> {
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

impl<'a> ProgramElement<'a> for FieldDoc<'a> {}

impl PartialEq for FieldDoc<'_> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for FieldDoc<'_> {}

impl fmt::Debug for FieldDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldDoc")
            .field(&self.slot.qualified_name)
            .finish()
    }
}

impl fmt::Display for FieldDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slot.qualified_name)
    }
}
