//! Interned type structures for the reference host.
//!
//! Every distinct type structure gets exactly one [`TypeId`], so two uses
//! of `java.util.List<java.lang.String>` share a handle.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::{ElementId, TypeId};
use crate::host::{AnnotationMirror, TypeKind};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum TypeData {
    /// A primitive kind or `void`.
    Primitive(TypeKind),
    None,
    Null,
    Declared {
        element: ElementId,
        args: Vec<TypeId>,
        annotations: Vec<AnnotationMirror>,
    },
    Array(TypeId),
    TypeVar(ElementId),
    Wildcard {
        extends: Option<TypeId>,
        super_bound: Option<TypeId>,
    },
    Intersection(Vec<TypeId>),
    Error(SmolStr),
}

impl TypeData {
    pub(crate) fn kind(&self) -> TypeKind {
        match self {
            Self::Primitive(kind) => *kind,
            Self::None => TypeKind::None,
            Self::Null => TypeKind::Null,
            Self::Declared { .. } => TypeKind::Declared,
            Self::Array(_) => TypeKind::Array,
            Self::TypeVar(_) => TypeKind::TypeVar,
            Self::Wildcard { .. } => TypeKind::Wildcard,
            Self::Intersection(_) => TypeKind::Intersection,
            Self::Error(_) => TypeKind::Error,
        }
    }

    pub(crate) fn is_reference(&self) -> bool {
        matches!(
            self,
            Self::Declared { .. }
                | Self::Array(_)
                | Self::TypeVar(_)
                | Self::Intersection(_)
                | Self::Error(_)
                | Self::Null
        )
    }
}

pub(crate) fn primitive_name(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Boolean => "boolean",
        TypeKind::Byte => "byte",
        TypeKind::Short => "short",
        TypeKind::Int => "int",
        TypeKind::Long => "long",
        TypeKind::Char => "char",
        TypeKind::Float => "float",
        TypeKind::Double => "double",
        TypeKind::Void => "void",
        TypeKind::Null => "null",
        _ => "none",
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct TypeTable {
    data: Vec<TypeData>,
    index: FxHashMap<TypeData, TypeId>,
    erasures: Vec<TypeId>,
}

impl TypeTable {
    pub(crate) fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&id) = self.index.get(&data) {
            return id;
        }
        let id = TypeId::new(self.data.len() as u32);
        self.data.push(data.clone());
        self.index.insert(data, id);
        id
    }

    pub(crate) fn lookup(&self, data: &TypeData) -> Option<TypeId> {
        self.index.get(data).copied()
    }

    pub(crate) fn get(&self, ty: TypeId) -> &TypeData {
        &self.data[ty.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn erasure(&self, ty: TypeId) -> TypeId {
        self.erasures.get(ty.index()).copied().unwrap_or(ty)
    }

    /// Compute the erasure of every interned type, interning erased forms
    /// as needed. `bounds` yields the declared bounds of a type parameter.
    pub(crate) fn compute_erasures(
        &mut self,
        object: TypeId,
        bounds: &impl Fn(ElementId) -> Vec<TypeId>,
    ) {
        let mut erasures = Vec::with_capacity(self.data.len());
        let mut i = 0;
        while i < self.data.len() {
            let erased = self.erase(TypeId::new(i as u32), object, bounds);
            erasures.push(erased);
            i += 1;
        }
        self.erasures = erasures;
    }

    fn erase(
        &mut self,
        ty: TypeId,
        object: TypeId,
        bounds: &impl Fn(ElementId) -> Vec<TypeId>,
    ) -> TypeId {
        match self.get(ty).clone() {
            TypeData::Declared {
                element,
                args,
                annotations,
            } => {
                if args.is_empty() && annotations.is_empty() {
                    ty
                } else {
                    self.intern(TypeData::Declared {
                        element,
                        args: Vec::new(),
                        annotations: Vec::new(),
                    })
                }
            }
            TypeData::Array(component) => {
                let erased = self.erase(component, object, bounds);
                if erased == component {
                    ty
                } else {
                    self.intern(TypeData::Array(erased))
                }
            }
            TypeData::TypeVar(param) => match bounds(param).first() {
                Some(&bound) => self.erase(bound, object, bounds),
                None => object,
            },
            TypeData::Wildcard { extends, .. } => match extends {
                Some(bound) => self.erase(bound, object, bounds),
                None => object,
            },
            TypeData::Intersection(parts) => match parts.first() {
                Some(&first) => self.erase(first, object, bounds),
                None => object,
            },
            TypeData::Primitive(_) | TypeData::None | TypeData::Null | TypeData::Error(_) => ty,
        }
    }
}
