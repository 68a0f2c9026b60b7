//! Annotation uses and constant values.

use crate::base::{AnnotationValueId, ElementId, TypeId};

/// One use of an annotation on an element or a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnnotationMirror {
    /// The annotation's declared type.
    pub annotation_type: TypeId,
    /// Explicitly given `(element, value)` pairs, in source order.
    pub values: Vec<(ElementId, AnnotationValueId)>,
}

impl AnnotationMirror {
    pub fn new(annotation_type: TypeId) -> Self {
        Self {
            annotation_type,
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, element: ElementId, value: AnnotationValueId) -> Self {
        self.values.push((element, value));
        self
    }
}

/// The value of an annotation element.
#[derive(Clone, Debug, PartialEq)]
pub enum AnnotationValueKind {
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
    Type(TypeId),
    EnumConstant(ElementId),
    Annotation(AnnotationMirror),
    Array(Vec<AnnotationValueId>),
}

/// A compile-time constant initializer of a field.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    Boolean(bool),
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl ConstantValue {
    /// Widen byte, char and short constants to int.
    pub fn widened(self) -> Self {
        match self {
            Self::Byte(v) => Self::Int(i32::from(v)),
            Self::Char(v) => Self::Int(v as i32),
            Self::Short(v) => Self::Int(i32::from(v)),
            other => other,
        }
    }
}
