//! Annotation uses and their values.

use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::base::AnnotationValueId;
use crate::context::Context;
use crate::error::{AdapterError, Result};
use crate::host::{AnnotationMirror, AnnotationValueKind};

use super::{AnnotationElementDoc, AnnotationTypeDoc, ClassDoc, Documented, FieldDoc};

/// One use of an annotation, e.g. `@Retention(RUNTIME)`. Not cached; two
/// descriptions of the same use are equal by content.
#[derive(Clone)]
pub struct AnnotationDesc<'a> {
    cx: &'a Context,
    mirror: AnnotationMirror,
}

impl<'a> AnnotationDesc<'a> {
    pub(crate) fn new(cx: &'a Context, mirror: AnnotationMirror) -> Self {
        Self { cx, mirror }
    }

    pub fn mirror(&self) -> &AnnotationMirror {
        &self.mirror
    }

    pub fn annotation_type(&self) -> Result<AnnotationTypeDoc<'a>> {
        let host = self.cx.host();
        match host.type_element(self.mirror.annotation_type) {
            Some(element) => self.cx.annotation_type(element),
            None => Err(AdapterError::invalid_argument(
                "annotation type",
                host.type_display(self.mirror.annotation_type),
            )),
        }
    }

    /// Explicitly given element values, in source order. Defaults are not
    /// filled in.
    pub fn element_values(&self) -> Vec<ElementValuePair<'a>> {
        self.mirror
            .values
            .iter()
            .map(|&(element, value)| ElementValuePair {
                element: self.cx.annotation_element_doc(element),
                value: self.cx.annotation_value(value),
            })
            .collect()
    }
}

impl PartialEq for AnnotationDesc<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.cx, other.cx) && self.mirror == other.mirror
    }
}

impl Eq for AnnotationDesc<'_> {}

impl fmt::Debug for AnnotationDesc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnnotationDesc")
            .field(&self.cx.host().type_display(self.mirror.annotation_type))
            .finish()
    }
}

impl fmt::Display for AnnotationDesc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.cx.host().type_display(self.mirror.annotation_type))?;
        let pairs = self.element_values();
        if pairs.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (i, pair) in pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", pair.element.name(), pair.value)?;
        }
        f.write_str(")")
    }
}

/// An `element = value` pair of an annotation use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementValuePair<'a> {
    element: AnnotationElementDoc<'a>,
    value: AnnotationValue<'a>,
}

impl<'a> ElementValuePair<'a> {
    pub fn element(&self) -> &AnnotationElementDoc<'a> {
        &self.element
    }

    pub fn value(&self) -> &AnnotationValue<'a> {
        &self.value
    }
}

// ============================================================================
// VALUES
// ============================================================================

#[derive(Debug)]
pub(crate) struct AnnotationValueSlot {
    value: AnnotationValueId,
    kind: OnceCell<AnnotationValueKind>,
}

impl AnnotationValueSlot {
    pub(crate) fn new(value: AnnotationValueId) -> Self {
        Self {
            value,
            kind: OnceCell::new(),
        }
    }
}

/// The resolved form of an annotation value.
#[derive(Clone, Debug, PartialEq)]
pub enum AnnotationValueData<'a> {
    Boolean(bool),
    Byte(i8),
    Char(char),
    Double(f64),
    Float(f32),
    Int(i32),
    Long(i64),
    Short(i16),
    String(String),
    /// A class literal.
    Class(ClassDoc<'a>),
    EnumConstant(FieldDoc<'a>),
    Annotation(AnnotationDesc<'a>),
    Array(Vec<AnnotationValue<'a>>),
}

#[derive(Clone)]
pub struct AnnotationValue<'a> {
    cx: &'a Context,
    slot: Rc<AnnotationValueSlot>,
}

impl<'a> AnnotationValue<'a> {
    pub(crate) fn new(cx: &'a Context, slot: Rc<AnnotationValueSlot>) -> Self {
        Self { cx, slot }
    }

    pub fn id(&self) -> AnnotationValueId {
        self.slot.value
    }

    fn kind(&self) -> &AnnotationValueKind {
        self.slot
            .kind
            .get_or_init(|| self.cx.host().annotation_value(self.slot.value))
    }

    pub fn value(&self) -> Result<AnnotationValueData<'a>> {
        let cx = self.cx;
        let data = match self.kind() {
            AnnotationValueKind::Boolean(v) => AnnotationValueData::Boolean(*v),
            AnnotationValueKind::Byte(v) => AnnotationValueData::Byte(*v),
            AnnotationValueKind::Char(v) => AnnotationValueData::Char(*v),
            AnnotationValueKind::Double(v) => AnnotationValueData::Double(*v),
            AnnotationValueKind::Float(v) => AnnotationValueData::Float(*v),
            AnnotationValueKind::Int(v) => AnnotationValueData::Int(*v),
            AnnotationValueKind::Long(v) => AnnotationValueData::Long(*v),
            AnnotationValueKind::Short(v) => AnnotationValueData::Short(*v),
            AnnotationValueKind::String(v) => AnnotationValueData::String(v.clone()),
            AnnotationValueKind::Type(ty) => match cx.host().type_element(*ty) {
                Some(element) => AnnotationValueData::Class(cx.class(element)?),
                None => return Err(AdapterError::unsupported_type(cx.host().type_kind(*ty))),
            },
            AnnotationValueKind::EnumConstant(element) => {
                AnnotationValueData::EnumConstant(cx.field(*element)?)
            }
            AnnotationValueKind::Annotation(mirror) => {
                AnnotationValueData::Annotation(AnnotationDesc::new(cx, mirror.clone()))
            }
            AnnotationValueKind::Array(values) => AnnotationValueData::Array(
                values.iter().map(|&v| cx.annotation_value(v)).collect(),
            ),
        };
        Ok(data)
    }
}

impl PartialEq for AnnotationValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for AnnotationValue<'_> {}

impl fmt::Debug for AnnotationValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnnotationValue").field(self.kind()).finish()
    }
}

/// Source form: `"text"`, `'c'`, `String.class`, `Level.HIGH`, `{1, 2}`.
impl fmt::Display for AnnotationValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self.cx.host();
        match self.kind() {
            AnnotationValueKind::Boolean(v) => write!(f, "{v}"),
            AnnotationValueKind::Byte(v) => write!(f, "(byte)0x{:02x}", *v as u8),
            AnnotationValueKind::Char(v) => write!(f, "'{}'", v.escape_default()),
            AnnotationValueKind::Double(v) => write!(f, "{v:?}"),
            AnnotationValueKind::Float(v) => write!(f, "{v:?}f"),
            AnnotationValueKind::Int(v) => write!(f, "{v}"),
            AnnotationValueKind::Long(v) => write!(f, "{v}L"),
            AnnotationValueKind::Short(v) => write!(f, "(short){v}"),
            AnnotationValueKind::String(v) => write!(f, "\"{}\"", v.escape_default()),
            AnnotationValueKind::Type(ty) => write!(f, "{}.class", host.type_display(*ty)),
            AnnotationValueKind::EnumConstant(element) => {
                match host.enclosing_element(*element) {
                    Some(owner) => write!(
                        f,
                        "{}.{}",
                        host.qualified_name(owner),
                        host.simple_name(*element)
                    ),
                    None => f.write_str(&host.simple_name(*element)),
                }
            }
            AnnotationValueKind::Annotation(mirror) => {
                fmt::Display::fmt(&AnnotationDesc::new(self.cx, mirror.clone()), f)
            }
            AnnotationValueKind::Array(values) => {
                f.write_str("{")?;
                for (i, &value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(&self.cx.annotation_value(value), f)?;
                }
                f.write_str("}")
            }
        }
    }
}
