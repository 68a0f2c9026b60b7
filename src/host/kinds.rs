//! Kind tags the host attaches to elements and types.

use std::fmt;

/// Category of a declared element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Package,
    Module,
    Class,
    Interface,
    Enum,
    AnnotationType,
    Record,
    Field,
    EnumConstant,
    Method,
    Constructor,
    StaticInit,
    InstanceInit,
    Parameter,
    TypeParameter,
    LocalVariable,
}

impl ElementKind {
    /// Class, interface, enum, annotation type or record.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Interface | Self::Enum | Self::AnnotationType | Self::Record
        )
    }

    /// Class-like kinds: class, enum and record.
    pub fn is_class(self) -> bool {
        matches!(self, Self::Class | Self::Enum | Self::Record)
    }

    /// Interface-like kinds: interface and annotation type.
    pub fn is_interface(self) -> bool {
        matches!(self, Self::Interface | Self::AnnotationType)
    }

    pub fn is_field(self) -> bool {
        matches!(self, Self::Field | Self::EnumConstant)
    }

    pub fn is_executable(self) -> bool {
        matches!(
            self,
            Self::Method | Self::Constructor | Self::StaticInit | Self::InstanceInit
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Package => "PACKAGE",
            Self::Module => "MODULE",
            Self::Class => "CLASS",
            Self::Interface => "INTERFACE",
            Self::Enum => "ENUM",
            Self::AnnotationType => "ANNOTATION_TYPE",
            Self::Record => "RECORD",
            Self::Field => "FIELD",
            Self::EnumConstant => "ENUM_CONSTANT",
            Self::Method => "METHOD",
            Self::Constructor => "CONSTRUCTOR",
            Self::StaticInit => "STATIC_INIT",
            Self::InstanceInit => "INSTANCE_INIT",
            Self::Parameter => "PARAMETER",
            Self::TypeParameter => "TYPE_PARAMETER",
            Self::LocalVariable => "LOCAL_VARIABLE",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a type mirror.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
    None,
    Null,
    Array,
    Declared,
    Error,
    TypeVar,
    Wildcard,
    Package,
    Executable,
    Other,
    Union,
    Intersection,
    Module,
}

impl TypeKind {
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Byte
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::Char
                | Self::Float
                | Self::Double
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Byte => "BYTE",
            Self::Short => "SHORT",
            Self::Int => "INT",
            Self::Long => "LONG",
            Self::Char => "CHAR",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Void => "VOID",
            Self::None => "NONE",
            Self::Null => "NULL",
            Self::Array => "ARRAY",
            Self::Declared => "DECLARED",
            Self::Error => "ERROR",
            Self::TypeVar => "TYPEVAR",
            Self::Wildcard => "WILDCARD",
            Self::Package => "PACKAGE",
            Self::Executable => "EXECUTABLE",
            Self::Other => "OTHER",
            Self::Union => "UNION",
            Self::Intersection => "INTERSECTION",
            Self::Module => "MODULE",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration modifiers as the host reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Sealed,
    NonSealed,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Default => "default",
            Self::Static => "static",
            Self::Sealed => "sealed",
            Self::NonSealed => "non-sealed",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Strictfp => "strictfp",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a type element is nested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NestingKind {
    #[default]
    TopLevel,
    Member,
    Local,
    Anonymous,
}

/// Whether an element was written in source or generated by the compiler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    #[default]
    Explicit,
    Mandated,
    Synthetic,
}
