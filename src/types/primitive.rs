use std::fmt;

use crate::host::TypeKind;

/// The primitive types, `void` and the null type. Stateless; compared by
/// value and never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
    Null,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 10] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Double,
        Self::Float,
        Self::Int,
        Self::Long,
        Self::Short,
        Self::Void,
        Self::Null,
    ];

    pub(crate) fn from_kind(kind: TypeKind) -> Option<Self> {
        Some(match kind {
            TypeKind::Boolean => Self::Boolean,
            TypeKind::Byte => Self::Byte,
            TypeKind::Char => Self::Char,
            TypeKind::Double => Self::Double,
            TypeKind::Float => Self::Float,
            TypeKind::Int => Self::Int,
            TypeKind::Long => Self::Long,
            TypeKind::Short => Self::Short,
            TypeKind::Void => Self::Void,
            TypeKind::Null => Self::Null,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Void => "void",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
