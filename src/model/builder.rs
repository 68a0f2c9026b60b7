//! Fluent construction of a [`Program`].
//!
//! Element handles are issued immediately, so types and annotations can
//! refer to elements declared earlier. Derived facts (declared types, default
//! superclasses, erasures, comment offsets) are settled in [`ProgramBuilder::build`].

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::{AnnotationValueId, ElementId, TypeId, UnitId};
use crate::config::SelectionPolicy;
use crate::error::Result;
use crate::host::{
    AnnotationMirror, AnnotationValueKind, ConstantValue, ElementKind, Modifier, NestingKind,
    Origin, TypeKind,
};

use super::comment::{NodeArena, parse_comment};
use super::types::{TypeData, TypeTable};
use super::{Comment, ElementData, Program, Roots, UnitData, UnitSource};

/// Declares the elements, types and sources of a program.
#[derive(Debug)]
pub struct ProgramBuilder {
    elements: Vec<ElementData>,
    types: TypeTable,
    nodes: NodeArena,
    units: Vec<UnitData>,
    values: Vec<AnnotationValueKind>,
    types_by_name: IndexMap<SmolStr, ElementId>,
    packages_by_name: IndexMap<SmolStr, ElementId>,
    specified: Vec<ElementId>,
    policy: SelectionPolicy,
    roots: Roots,
}

impl Default for ProgramBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramBuilder {
    /// A builder seeded with the `java.lang` and `java.io` library roots.
    pub fn new() -> Self {
        let placeholder = ElementId::new(0);
        let mut builder = Self {
            elements: Vec::new(),
            types: TypeTable::default(),
            nodes: NodeArena::default(),
            units: Vec::new(),
            values: Vec::new(),
            types_by_name: IndexMap::new(),
            packages_by_name: IndexMap::new(),
            specified: Vec::new(),
            policy: SelectionPolicy::default(),
            roots: Roots {
                object: placeholder,
                object_type: TypeId::new(0),
                none_type: TypeId::new(0),
                void_type: TypeId::new(0),
                serializable: placeholder,
                cloneable: placeholder,
            },
        };
        builder.seed_library();
        builder
    }

    fn seed_library(&mut self) {
        self.roots.none_type = self.types.intern(TypeData::None);
        self.roots.void_type = self.types.intern(TypeData::Primitive(TypeKind::Void));

        let lang = self.package("java.lang");
        let io = self.package("java.io");
        for package in [lang, io] {
            self.elements[package.index()].from_source = false;
        }

        let object = self.library_type(lang, "Object", ElementKind::Class);
        self.roots.object = object;
        self.roots.object_type = self.declared(object);

        let serializable = self.library_type(io, "Serializable", ElementKind::Interface);
        self.roots.serializable = serializable;
        let serializable_type = self.declared(serializable);
        let externalizable = self.library_type(io, "Externalizable", ElementKind::Interface);
        self.elements[externalizable.index()].interfaces = vec![serializable_type];
        self.roots.cloneable = self.library_type(lang, "Cloneable", ElementKind::Interface);

        let throwable = self.library_type(lang, "Throwable", ElementKind::Class);
        self.elements[throwable.index()].interfaces = vec![serializable_type];
        let throwable_type = self.declared(throwable);
        let exception = self.library_subclass(lang, "Exception", throwable_type);
        let exception_type = self.declared(exception);
        self.library_subclass(lang, "RuntimeException", exception_type);
        self.library_subclass(lang, "Error", throwable_type);

        for name in ["String", "Integer"] {
            let class = self.library_type(lang, name, ElementKind::Class);
            let data = &mut self.elements[class.index()];
            data.modifiers.push(Modifier::Final);
            data.interfaces = vec![serializable_type];
        }
        self.library_type(lang, "Deprecated", ElementKind::AnnotationType);
    }

    fn library_type(&mut self, package: ElementId, name: &str, kind: ElementKind) -> ElementId {
        let id = self.declare(package, name, kind);
        let data = &mut self.elements[id.index()];
        data.from_source = false;
        data.modifiers.push(Modifier::Public);
        if kind.is_interface() {
            data.modifiers.push(Modifier::Abstract);
        }
        id
    }

    fn library_subclass(&mut self, package: ElementId, name: &str, superclass: TypeId) -> ElementId {
        let id = self.library_type(package, name, ElementKind::Class);
        self.elements[id.index()].superclass = Some(superclass);
        id
    }

    // ========================================================================
    // ELEMENTS
    // ========================================================================

    fn push(&mut self, mut data: ElementData, owner: Option<ElementId>, enclose: bool) -> ElementId {
        let id = ElementId::new(self.elements.len() as u32);
        if let Some(owner) = owner {
            let owner_data = &self.elements[owner.index()];
            data.enclosing = Some(owner);
            if owner_data.kind != ElementKind::Package {
                data.from_source &= owner_data.from_source;
            }
            if enclose {
                self.elements[owner.index()].enclosed.push(id);
            }
        }
        self.elements.push(data);
        id
    }

    /// Declare (or return the existing) package `name`. The unnamed package is `""`.
    pub fn package(&mut self, name: &str) -> ElementId {
        if let Some(&id) = self.packages_by_name.get(name) {
            return id;
        }
        let name = SmolStr::new(name);
        let data = ElementData::new(ElementKind::Package, name.clone(), name.clone());
        let id = self.push(data, None, false);
        self.packages_by_name.insert(name, id);
        id
    }

    fn declare(&mut self, owner: ElementId, name: &str, kind: ElementKind) -> ElementId {
        let owner_data = &self.elements[owner.index()];
        let qualified_name = if owner_data.qualified_name.is_empty() {
            SmolStr::new(name)
        } else {
            SmolStr::from(format!("{}.{}", owner_data.qualified_name, name))
        };
        let nested = owner_data.kind != ElementKind::Package;
        let mut data = ElementData::new(kind, SmolStr::new(name), qualified_name.clone());
        if nested {
            data.nesting = NestingKind::Member;
        }
        let id = self.push(data, Some(owner), true);
        self.types_by_name.insert(qualified_name, id);
        id
    }

    /// Declare a type element of any kind inside a package or another type.
    pub fn type_element(&mut self, owner: ElementId, name: &str, kind: ElementKind) -> ElementBuilder<'_> {
        let id = self.declare(owner, name, kind);
        if kind.is_interface() {
            self.elements[id.index()].modifiers.push(Modifier::Abstract);
        }
        ElementBuilder { builder: self, id }
    }

    pub fn class(&mut self, owner: ElementId, name: &str) -> ElementBuilder<'_> {
        self.type_element(owner, name, ElementKind::Class)
    }

    pub fn interface(&mut self, owner: ElementId, name: &str) -> ElementBuilder<'_> {
        self.type_element(owner, name, ElementKind::Interface)
    }

    pub fn enum_type(&mut self, owner: ElementId, name: &str) -> ElementBuilder<'_> {
        self.type_element(owner, name, ElementKind::Enum)
    }

    pub fn annotation_type(&mut self, owner: ElementId, name: &str) -> ElementBuilder<'_> {
        self.type_element(owner, name, ElementKind::AnnotationType)
    }

    pub fn record(&mut self, owner: ElementId, name: &str) -> ElementBuilder<'_> {
        self.type_element(owner, name, ElementKind::Record)
    }

    fn member(&mut self, owner: ElementId, name: &str, kind: ElementKind) -> ElementBuilder<'_> {
        let data = ElementData::new(kind, SmolStr::new(name), SmolStr::new(name));
        let id = self.push(data, Some(owner), true);
        ElementBuilder { builder: self, id }
    }

    pub fn field(&mut self, owner: ElementId, name: &str, ty: TypeId) -> ElementBuilder<'_> {
        let mut field = self.member(owner, name, ElementKind::Field);
        field.data().ty = Some(ty);
        field
    }

    /// An enum constant; its type is the enclosing enum.
    pub fn enum_constant(&mut self, owner: ElementId, name: &str) -> ElementBuilder<'_> {
        self.member(owner, name, ElementKind::EnumConstant)
            .modifiers(&[Modifier::Public, Modifier::Static, Modifier::Final])
    }

    /// A method returning `void` until [`ElementBuilder::returns`] says otherwise.
    pub fn method(&mut self, owner: ElementId, name: &str) -> ElementBuilder<'_> {
        self.member(owner, name, ElementKind::Method)
    }

    pub fn constructor(&mut self, owner: ElementId) -> ElementBuilder<'_> {
        self.member(owner, "<init>", ElementKind::Constructor)
    }

    /// An element of an annotation type, optionally with a default value.
    pub fn annotation_element(&mut self, owner: ElementId, name: &str, ty: TypeId) -> ElementBuilder<'_> {
        let mut element = self.member(owner, name, ElementKind::Method);
        element.data().ty = Some(ty);
        element.modifiers(&[Modifier::Public, Modifier::Abstract])
    }

    /// A parameter appended to an executable's parameter list.
    pub fn parameter(&mut self, executable: ElementId, name: &str, ty: TypeId) -> ElementBuilder<'_> {
        let mut data = ElementData::new(ElementKind::Parameter, SmolStr::new(name), SmolStr::new(name));
        data.ty = Some(ty);
        let id = self.push(data, Some(executable), false);
        self.elements[executable.index()].parameters.push(id);
        ElementBuilder { builder: self, id }
    }

    /// A type parameter of a type or executable. Returns the parameter and
    /// its type variable.
    pub fn type_parameter(&mut self, owner: ElementId, name: &str, bounds: &[TypeId]) -> (ElementId, TypeId) {
        let mut data = ElementData::new(ElementKind::TypeParameter, SmolStr::new(name), SmolStr::new(name));
        data.bounds = bounds.to_vec();
        let id = self.push(data, Some(owner), false);
        let ty = self.types.intern(TypeData::TypeVar(id));
        if bounds.len() > 1 {
            self.types.intern(TypeData::Intersection(bounds.to_vec()));
        }
        let data = &mut self.elements[id.index()];
        data.ty = Some(ty);
        self.elements[owner.index()].type_parameters.push(id);
        (id, ty)
    }

    /// Reopen a declared element, e.g. to give a generic method a return
    /// type built from its own type variable.
    pub fn edit(&mut self, element: ElementId) -> ElementBuilder<'_> {
        ElementBuilder { builder: self, id: element }
    }

    /// Handle of a previously declared type by fully-qualified name.
    pub fn lookup(&self, qualified_name: &str) -> Option<ElementId> {
        self.types_by_name.get(qualified_name).copied()
    }

    pub fn object(&self) -> ElementId {
        self.roots.object
    }

    /// Mark an element as named on the command line of the run.
    pub fn specify(&mut self, element: ElementId) -> &mut Self {
        self.specified.push(element);
        self
    }

    pub fn policy(&mut self, policy: SelectionPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    // ========================================================================
    // TYPES
    // ========================================================================

    pub fn primitive(&mut self, kind: TypeKind) -> TypeId {
        if kind.is_primitive() || kind == TypeKind::Void {
            self.types.intern(TypeData::Primitive(kind))
        } else {
            debug!(%kind, "not a primitive kind, using NONE");
            self.roots.none_type
        }
    }

    pub fn void_type(&self) -> TypeId {
        self.roots.void_type
    }

    pub fn none_type(&self) -> TypeId {
        self.roots.none_type
    }

    pub fn null_type(&mut self) -> TypeId {
        self.types.intern(TypeData::Null)
    }

    /// The raw declared type of a type element.
    pub fn declared(&mut self, element: ElementId) -> TypeId {
        self.types.intern(TypeData::Declared {
            element,
            args: Vec::new(),
            annotations: Vec::new(),
        })
    }

    /// Raw declared type by fully-qualified name.
    pub fn named_type(&mut self, qualified_name: &str) -> Option<TypeId> {
        let element = self.lookup(qualified_name)?;
        Some(self.declared(element))
    }

    pub fn object_type(&self) -> TypeId {
        self.roots.object_type
    }

    pub fn parameterized(&mut self, element: ElementId, args: &[TypeId]) -> TypeId {
        self.types.intern(TypeData::Declared {
            element,
            args: args.to_vec(),
            annotations: Vec::new(),
        })
    }

    pub fn array(&mut self, component: TypeId) -> TypeId {
        self.types.intern(TypeData::Array(component))
    }

    /// `component` wrapped in `dimensions` array levels.
    pub fn array_of(&mut self, component: TypeId, dimensions: usize) -> TypeId {
        (0..dimensions).fold(component, |ty, _| self.array(ty))
    }

    pub fn wildcard(&mut self) -> TypeId {
        self.types.intern(TypeData::Wildcard {
            extends: None,
            super_bound: None,
        })
    }

    pub fn wildcard_extends(&mut self, bound: TypeId) -> TypeId {
        self.types.intern(TypeData::Wildcard {
            extends: Some(bound),
            super_bound: None,
        })
    }

    pub fn wildcard_super(&mut self, bound: TypeId) -> TypeId {
        self.types.intern(TypeData::Wildcard {
            extends: None,
            super_bound: Some(bound),
        })
    }

    pub fn intersection(&mut self, parts: &[TypeId]) -> TypeId {
        self.types.intern(TypeData::Intersection(parts.to_vec()))
    }

    /// A use of a declared type carrying a type annotation. Other type
    /// kinds cannot carry annotations here and are returned unchanged.
    pub fn annotated(&mut self, ty: TypeId, annotation: AnnotationMirror) -> TypeId {
        match self.types.get(ty).clone() {
            TypeData::Declared {
                element,
                args,
                mut annotations,
            } => {
                annotations.push(annotation);
                self.types.intern(TypeData::Declared {
                    element,
                    args,
                    annotations,
                })
            }
            _ => {
                debug!(?ty, "type annotations are only kept on declared types");
                ty
            }
        }
    }

    /// A type that failed to resolve.
    pub fn error_type(&mut self, name: &str) -> TypeId {
        self.types.intern(TypeData::Error(SmolStr::new(name)))
    }

    // ========================================================================
    // ANNOTATIONS AND SOURCES
    // ========================================================================

    pub fn value(&mut self, value: AnnotationValueKind) -> AnnotationValueId {
        let id = AnnotationValueId::new(self.values.len() as u32);
        self.values.push(value);
        id
    }

    /// An annotation use of `annotation_type` without element values.
    pub fn annotation(&mut self, annotation_type: ElementId) -> AnnotationMirror {
        AnnotationMirror::new(self.declared(annotation_type))
    }

    /// A compilation unit whose content is held in memory.
    pub fn unit(&mut self, name: &str, content: &str) -> UnitId {
        self.push_unit(name, UnitSource::Inline(content.to_string()))
    }

    /// A compilation unit read from disk whenever its content is needed.
    pub fn unit_file(&mut self, name: &str, path: impl Into<PathBuf>) -> UnitId {
        self.push_unit(name, UnitSource::File(path.into()))
    }

    /// A compilation unit read from disk now and held in memory.
    pub fn load_unit(&mut self, name: &str, path: impl AsRef<Path>) -> Result<UnitId> {
        let content = fs::read_to_string(path.as_ref())?;
        debug!(unit = name, path = %path.as_ref().display(), "loaded compilation unit");
        Ok(self.push_unit(name, UnitSource::Inline(content)))
    }

    fn push_unit(&mut self, name: &str, source: UnitSource) -> UnitId {
        let id = UnitId::new(self.units.len() as u32);
        self.units.push(UnitData {
            name: name.to_string(),
            source,
        });
        id
    }

    // ========================================================================
    // BUILD
    // ========================================================================

    pub fn build(mut self) -> Program {
        let roots = self.roots;
        for i in 0..self.elements.len() {
            let id = ElementId::new(i as u32);
            let data = &self.elements[i];
            let kind = data.kind;
            let enclosing = data.enclosing;

            if kind.is_type() {
                let args = data
                    .type_parameters
                    .iter()
                    .filter_map(|&p| self.elements[p.index()].ty)
                    .collect();
                let ty = self.types.intern(TypeData::Declared {
                    element: id,
                    args,
                    annotations: Vec::new(),
                });
                let data = &mut self.elements[i];
                data.ty = Some(ty);
                if data.superclass.is_none() && kind.is_class() && id != roots.object {
                    data.superclass = Some(roots.object_type);
                }
            }

            if let Some(owner) = enclosing {
                let owner_data = &self.elements[owner.index()];
                let owner_ty = owner_data.ty;
                let owner_unit = owner_data.unit;
                let owner_is_package = owner_data.kind == ElementKind::Package;
                let data = &mut self.elements[i];
                if kind == ElementKind::EnumConstant && data.ty.is_none() {
                    data.ty = owner_ty;
                }
                if data.unit.is_none() && !owner_is_package {
                    data.unit = owner_unit;
                }
            }
        }

        self.locate_comments();

        let elements = &self.elements;
        self.types
            .compute_erasures(roots.object_type, &|param| elements[param.index()].bounds.clone());

        Program {
            elements: self.elements,
            types: self.types,
            nodes: self.nodes,
            units: self.units,
            values: self.values,
            types_by_name: self.types_by_name,
            packages_by_name: self.packages_by_name,
            specified: self.specified,
            policy: self.policy,
            roots,
        }
    }

    /// Find each doc comment in its in-memory unit, scanning forward in
    /// declaration order so identical comments resolve to distinct places.
    fn locate_comments(&mut self) {
        let mut cursors: FxHashMap<UnitId, usize> = FxHashMap::default();
        for data in &mut self.elements {
            let (Some(unit), Some(comment)) = (data.unit, data.comment.as_mut()) else {
                continue;
            };
            if comment.offset.is_some() {
                continue;
            }
            let UnitSource::Inline(content) = &self.units[unit.index()].source else {
                continue;
            };
            let cursor = cursors.entry(unit).or_default();
            let found = content
                .get(*cursor..)
                .and_then(|rest| rest.find(&comment.raw))
                .map(|at| at + *cursor)
                .or_else(|| content.find(&comment.raw));
            if let Some(at) = found {
                comment.offset = Some(content[..at].chars().count());
                *cursor = at + comment.raw.len();
            }
        }
    }
}

// ============================================================================
// ELEMENT BUILDER
// ============================================================================

/// Sets the properties of one freshly declared element.
#[must_use = "call `finish` to get the element handle"]
pub struct ElementBuilder<'a> {
    builder: &'a mut ProgramBuilder,
    id: ElementId,
}

impl ElementBuilder<'_> {
    fn data(&mut self) -> &mut ElementData {
        &mut self.builder.elements[self.id.index()]
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        let data = self.data();
        if !data.modifiers.contains(&modifier) {
            data.modifiers.push(modifier);
        }
        self
    }

    pub fn modifiers(self, modifiers: &[Modifier]) -> Self {
        modifiers.iter().fold(self, |b, &m| b.modifier(m))
    }

    pub fn public(self) -> Self {
        self.modifier(Modifier::Public)
    }

    pub fn protected(self) -> Self {
        self.modifier(Modifier::Protected)
    }

    pub fn private(self) -> Self {
        self.modifier(Modifier::Private)
    }

    pub fn static_(self) -> Self {
        self.modifier(Modifier::Static)
    }

    pub fn final_(self) -> Self {
        self.modifier(Modifier::Final)
    }

    pub fn abstract_(self) -> Self {
        self.modifier(Modifier::Abstract)
    }

    pub fn superclass(mut self, ty: TypeId) -> Self {
        self.data().superclass = Some(ty);
        self
    }

    pub fn implements(mut self, ty: TypeId) -> Self {
        self.data().interfaces.push(ty);
        self
    }

    pub fn returns(mut self, ty: TypeId) -> Self {
        self.data().ty = Some(ty);
        self
    }

    pub fn throws(mut self, ty: TypeId) -> Self {
        self.data().thrown.push(ty);
        self
    }

    pub fn var_args(mut self) -> Self {
        self.data().var_args = true;
        self
    }

    pub fn constant(mut self, value: ConstantValue) -> Self {
        self.data().constant = Some(value);
        self
    }

    pub fn default_value(mut self, value: AnnotationValueKind) -> Self {
        let value = self.builder.value(value);
        self.data().default_value = Some(value);
        self
    }

    pub fn annotate(mut self, annotation: AnnotationMirror) -> Self {
        self.data().annotations.push(annotation);
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.data().origin = origin;
        self
    }

    /// Mark the element as coming from a library rather than from source.
    pub fn library(mut self) -> Self {
        self.data().from_source = false;
        self
    }

    pub fn unit(mut self, unit: UnitId) -> Self {
        self.data().unit = Some(unit);
        self
    }

    /// Attach a raw `/** ... */` documentation comment.
    pub fn doc(mut self, raw: &str) -> Self {
        let tree = parse_comment(raw, &mut self.builder.nodes);
        self.data().comment = Some(Comment {
            raw: raw.to_string(),
            tree,
            offset: None,
        });
        self
    }

    /// Attach a comment whose character offset in the unit is already
    /// known. The offset is trusted as given.
    pub fn doc_at(mut self, raw: &str, offset: usize) -> Self {
        let tree = parse_comment(raw, &mut self.builder.nodes);
        self.data().comment = Some(Comment {
            raw: raw.to_string(),
            tree,
            offset: Some(offset),
        });
        self
    }

    pub fn specified(mut self) -> Self {
        self.builder.specified.push(self.id);
        self
    }

    pub fn finish(self) -> ElementId {
        self.id
    }
}
