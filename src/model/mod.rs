//! In-memory reference host.
//!
//! [`Program`] implements [`Host`] over a program declared with
//! [`ProgramBuilder`]. It is what the test suite runs against, and what an
//! embedder without a compiler front end can feed the adapter.
//!
//! ```text
//! ProgramBuilder ──build()──▶ Program ──impl Host──▶ Context
//! ```

mod builder;
mod comment;
mod selection;
mod types;

use std::io;
use std::path::PathBuf;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::{AnnotationValueId, DocTreeId, ElementId, TypeId, UnitId};
use crate::config::SelectionPolicy;
use crate::host::{
    AnnotationMirror, AnnotationValueKind, ConstantValue, DocCommentTree, DocTree, ElementKind,
    Host, Modifier, NOPOS, NestingKind, Origin, TypeKind,
};

pub use builder::{ElementBuilder, ProgramBuilder};

use comment::NodeArena;
use types::{TypeData, TypeTable, primitive_name};

// ============================================================================
// STORED DATA
// ============================================================================

#[derive(Clone, Debug)]
pub(crate) struct Comment {
    pub(crate) raw: String,
    pub(crate) tree: DocCommentTree,
    /// Character offset of the comment in its unit, when known up front.
    pub(crate) offset: Option<usize>,
}

#[derive(Clone, Debug)]
pub(crate) struct ElementData {
    pub(crate) kind: ElementKind,
    pub(crate) name: SmolStr,
    pub(crate) qualified_name: SmolStr,
    pub(crate) enclosing: Option<ElementId>,
    pub(crate) enclosed: Vec<ElementId>,
    pub(crate) nesting: NestingKind,
    pub(crate) modifiers: Vec<Modifier>,
    pub(crate) annotations: Vec<AnnotationMirror>,
    pub(crate) origin: Origin,
    pub(crate) from_source: bool,
    pub(crate) unit: Option<UnitId>,
    /// Declared type of a type element, type of a variable, return type of
    /// an executable, type variable of a type parameter.
    pub(crate) ty: Option<TypeId>,
    pub(crate) superclass: Option<TypeId>,
    pub(crate) interfaces: Vec<TypeId>,
    pub(crate) type_parameters: Vec<ElementId>,
    pub(crate) parameters: Vec<ElementId>,
    pub(crate) thrown: Vec<TypeId>,
    pub(crate) bounds: Vec<TypeId>,
    pub(crate) var_args: bool,
    pub(crate) constant: Option<ConstantValue>,
    pub(crate) default_value: Option<AnnotationValueId>,
    pub(crate) comment: Option<Comment>,
}

impl ElementData {
    pub(crate) fn new(kind: ElementKind, name: SmolStr, qualified_name: SmolStr) -> Self {
        Self {
            kind,
            name,
            qualified_name,
            enclosing: None,
            enclosed: Vec::new(),
            nesting: NestingKind::TopLevel,
            modifiers: Vec::new(),
            annotations: Vec::new(),
            origin: Origin::Explicit,
            from_source: true,
            unit: None,
            ty: None,
            superclass: None,
            interfaces: Vec::new(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            thrown: Vec::new(),
            bounds: Vec::new(),
            var_args: false,
            constant: None,
            default_value: None,
            comment: None,
        }
    }

    pub(crate) fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

#[derive(Clone, Debug)]
pub(crate) enum UnitSource {
    Inline(String),
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub(crate) struct UnitData {
    pub(crate) name: String,
    pub(crate) source: UnitSource,
}

/// Handles of the library types every program is seeded with.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Roots {
    pub(crate) object: ElementId,
    pub(crate) object_type: TypeId,
    pub(crate) none_type: TypeId,
    pub(crate) void_type: TypeId,
    pub(crate) serializable: ElementId,
    pub(crate) cloneable: ElementId,
}

// ============================================================================
// PROGRAM
// ============================================================================

/// A fully declared program, queryable through [`Host`].
#[derive(Clone, Debug)]
pub struct Program {
    pub(crate) elements: Vec<ElementData>,
    pub(crate) types: TypeTable,
    pub(crate) nodes: NodeArena,
    pub(crate) units: Vec<UnitData>,
    pub(crate) values: Vec<AnnotationValueKind>,
    pub(crate) types_by_name: IndexMap<SmolStr, ElementId>,
    pub(crate) packages_by_name: IndexMap<SmolStr, ElementId>,
    pub(crate) specified: Vec<ElementId>,
    pub(crate) policy: SelectionPolicy,
    pub(crate) roots: Roots,
}

impl Program {
    pub(crate) fn data(&self, element: ElementId) -> &ElementData {
        &self.elements[element.index()]
    }

    fn type_data(&self, ty: TypeId) -> &TypeData {
        self.types.get(ty)
    }

    /// Number of declared elements, seeded library roots included.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// Element of a declared type, looking through annotations and arguments.
    fn declared_element(&self, ty: TypeId) -> Option<ElementId> {
        match self.type_data(ty) {
            TypeData::Declared { element, .. } => Some(*element),
            _ => None,
        }
    }

    /// Direct supertypes of a type element.
    fn supertypes(&self, element: ElementId) -> impl Iterator<Item = TypeId> + '_ {
        let data = self.data(element);
        data.superclass.into_iter().chain(data.interfaces.iter().copied())
    }

    /// Whether type element `sub` is `sup` or inherits from it.
    pub(crate) fn inherits_from(&self, sub: ElementId, sup: ElementId) -> bool {
        let mut stack = vec![sub];
        let mut seen = Vec::new();
        while let Some(current) = stack.pop() {
            if current == sup {
                return true;
            }
            if seen.contains(&current) {
                continue;
            }
            seen.push(current);
            for ty in self.supertypes(current) {
                if let Some(next) = self.declared_element(ty) {
                    stack.push(next);
                }
            }
        }
        false
    }

    fn package_of(&self, element: ElementId) -> Option<ElementId> {
        let mut current = Some(element);
        while let Some(e) = current {
            if self.data(e).kind == ElementKind::Package {
                return Some(e);
            }
            current = self.data(e).enclosing;
        }
        None
    }

    fn comment_offset(&self, element: ElementId) -> Option<usize> {
        let data = self.data(element);
        let comment = data.comment.as_ref()?;
        if let Some(offset) = comment.offset {
            return Some(offset);
        }
        let content = self.unit_content(data.unit?).ok()?;
        let at = content.find(&comment.raw)?;
        Some(content[..at].chars().count())
    }
}

impl Host for Program {
    fn element_kind(&self, element: ElementId) -> ElementKind {
        self.data(element).kind
    }

    fn simple_name(&self, element: ElementId) -> SmolStr {
        self.data(element).name.clone()
    }

    fn qualified_name(&self, element: ElementId) -> SmolStr {
        self.data(element).qualified_name.clone()
    }

    fn enclosing_element(&self, element: ElementId) -> Option<ElementId> {
        self.data(element).enclosing
    }

    fn enclosed_elements(&self, element: ElementId) -> Vec<ElementId> {
        self.data(element).enclosed.clone()
    }

    fn nesting_kind(&self, element: ElementId) -> NestingKind {
        self.data(element).nesting
    }

    fn modifiers(&self, element: ElementId) -> Vec<Modifier> {
        self.data(element).modifiers.clone()
    }

    fn annotation_mirrors(&self, element: ElementId) -> Vec<AnnotationMirror> {
        self.data(element).annotations.clone()
    }

    fn origin(&self, element: ElementId) -> Origin {
        self.data(element).origin
    }

    fn as_type(&self, element: ElementId) -> TypeId {
        self.data(element).ty.unwrap_or(self.roots.none_type)
    }

    fn superclass(&self, element: ElementId) -> TypeId {
        self.data(element)
            .superclass
            .unwrap_or(self.roots.none_type)
    }

    fn interfaces(&self, element: ElementId) -> Vec<TypeId> {
        self.data(element).interfaces.clone()
    }

    fn type_parameters(&self, element: ElementId) -> Vec<ElementId> {
        self.data(element).type_parameters.clone()
    }

    fn parameters(&self, element: ElementId) -> Vec<ElementId> {
        self.data(element).parameters.clone()
    }

    fn return_type(&self, element: ElementId) -> TypeId {
        let data = self.data(element);
        match data.kind {
            ElementKind::Method => data.ty.unwrap_or(self.roots.void_type),
            _ => self.roots.void_type,
        }
    }

    fn thrown_types(&self, element: ElementId) -> Vec<TypeId> {
        self.data(element).thrown.clone()
    }

    fn is_var_args(&self, element: ElementId) -> bool {
        self.data(element).var_args
    }

    fn constant_value(&self, element: ElementId) -> Option<ConstantValue> {
        self.data(element).constant.clone()
    }

    fn default_value(&self, element: ElementId) -> Option<AnnotationValueId> {
        self.data(element).default_value
    }

    fn type_kind(&self, ty: TypeId) -> TypeKind {
        self.type_data(ty).kind()
    }

    fn type_element(&self, ty: TypeId) -> Option<ElementId> {
        match self.type_data(ty) {
            TypeData::Declared { element, .. } | TypeData::TypeVar(element) => Some(*element),
            _ => None,
        }
    }

    fn component_type(&self, ty: TypeId) -> Option<TypeId> {
        match self.type_data(ty) {
            TypeData::Array(component) => Some(*component),
            _ => None,
        }
    }

    fn type_arguments(&self, ty: TypeId) -> Vec<TypeId> {
        match self.type_data(ty) {
            TypeData::Declared { args, .. } => args.clone(),
            _ => Vec::new(),
        }
    }

    fn type_annotations(&self, ty: TypeId) -> Vec<AnnotationMirror> {
        match self.type_data(ty) {
            TypeData::Declared { annotations, .. } => annotations.clone(),
            _ => Vec::new(),
        }
    }

    fn upper_bound(&self, ty: TypeId) -> Option<TypeId> {
        let TypeData::TypeVar(param) = self.type_data(ty) else {
            return None;
        };
        let bounds = &self.data(*param).bounds;
        match bounds.as_slice() {
            [] => Some(self.roots.object_type),
            [single] => Some(*single),
            many => self
                .types
                .lookup(&TypeData::Intersection(many.to_vec())),
        }
    }

    fn intersection_bounds(&self, ty: TypeId) -> Vec<TypeId> {
        match self.type_data(ty) {
            TypeData::Intersection(parts) => parts.clone(),
            _ => Vec::new(),
        }
    }

    fn extends_bound(&self, ty: TypeId) -> Option<TypeId> {
        match self.type_data(ty) {
            TypeData::Wildcard { extends, .. } => *extends,
            _ => None,
        }
    }

    fn super_bound(&self, ty: TypeId) -> Option<TypeId> {
        match self.type_data(ty) {
            TypeData::Wildcard { super_bound, .. } => *super_bound,
            _ => None,
        }
    }

    fn erasure(&self, ty: TypeId) -> TypeId {
        self.types.erasure(ty)
    }

    fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool {
        if sub == sup {
            return true;
        }
        let sub_data = self.type_data(sub);
        let sup_data = self.type_data(sup);
        if let (TypeData::Primitive(a), TypeData::Primitive(b)) = (sub_data, sup_data) {
            return a == b;
        }
        if !sub_data.is_reference() || !sup_data.is_reference() {
            return false;
        }
        if self.declared_element(sup) == Some(self.roots.object) {
            return true;
        }
        match (sub_data, sup_data) {
            (TypeData::Null, _) => true,
            (TypeData::Array(a), TypeData::Array(b)) => {
                let (a_data, b_data) = (self.type_data(*a), self.type_data(*b));
                match (a_data, b_data) {
                    (TypeData::Primitive(x), TypeData::Primitive(y)) => x == y,
                    _ => self.is_subtype(*a, *b),
                }
            }
            (TypeData::Array(_), TypeData::Declared { element, .. }) => {
                *element == self.roots.serializable || *element == self.roots.cloneable
            }
            (TypeData::TypeVar(param), _) => {
                let bounds = &self.data(*param).bounds;
                bounds.iter().any(|&b| self.is_subtype(b, sup))
            }
            (TypeData::Intersection(parts), _) => parts.iter().any(|&p| self.is_subtype(p, sup)),
            (TypeData::Declared { element: a, .. }, TypeData::Declared { element: b, .. }) => {
                self.inherits_from(*a, *b)
            }
            _ => false,
        }
    }

    fn overrides(&self, overrider: ElementId, overridden: ElementId, owner: ElementId) -> bool {
        if overrider == overridden {
            return false;
        }
        let m1 = self.data(overrider);
        let m2 = self.data(overridden);
        if m1.kind != ElementKind::Method || m2.kind != ElementKind::Method {
            return false;
        }
        if m1.name != m2.name || m1.has_modifier(Modifier::Static) {
            return false;
        }
        if m2.has_modifier(Modifier::Static) || m2.has_modifier(Modifier::Private) {
            return false;
        }
        let Some(declaring) = m2.enclosing else {
            return false;
        };
        if declaring == owner || !self.inherits_from(owner, declaring) {
            return false;
        }
        let package_private = !m2.has_modifier(Modifier::Public)
            && !m2.has_modifier(Modifier::Protected)
            && !self.data(declaring).kind.is_interface();
        if package_private && self.package_of(declaring) != self.package_of(owner) {
            return false;
        }
        if m1.parameters.len() != m2.parameters.len() {
            return false;
        }
        let same = m1.parameters.iter().zip(&m2.parameters).all(|(&p1, &p2)| {
            let t1 = self.as_type(p1);
            let t2 = self.as_type(p2);
            self.erasure(t1) == self.erasure(t2)
        });
        trace!(
            overrider = %m1.name,
            declaring = %self.data(declaring).qualified_name,
            same,
            "override check"
        );
        same
    }

    fn type_display(&self, ty: TypeId) -> String {
        match self.type_data(ty) {
            TypeData::Primitive(kind) => primitive_name(*kind).to_string(),
            TypeData::None => "none".to_string(),
            TypeData::Null => "null".to_string(),
            TypeData::Declared {
                element,
                args,
                annotations,
            } => {
                let mut out = String::new();
                for annotation in annotations {
                    out.push('@');
                    out.push_str(&self.type_display(annotation.annotation_type));
                    out.push(' ');
                }
                out.push_str(&self.data(*element).qualified_name);
                if !args.is_empty() {
                    let args: Vec<String> = args.iter().map(|&a| self.type_display(a)).collect();
                    out.push('<');
                    out.push_str(&args.join(","));
                    out.push('>');
                }
                out
            }
            TypeData::Array(component) => format!("{}[]", self.type_display(*component)),
            TypeData::TypeVar(param) => self.data(*param).name.to_string(),
            TypeData::Wildcard {
                extends,
                super_bound,
            } => match (extends, super_bound) {
                (Some(bound), _) => format!("? extends {}", self.type_display(*bound)),
                (None, Some(bound)) => format!("? super {}", self.type_display(*bound)),
                (None, None) => "?".to_string(),
            },
            TypeData::Intersection(parts) => parts
                .iter()
                .map(|&p| self.type_display(p))
                .collect::<Vec<_>>()
                .join("&"),
            TypeData::Error(name) => name.to_string(),
        }
    }

    fn annotation_value(&self, value: AnnotationValueId) -> AnnotationValueKind {
        self.values[value.index()].clone()
    }

    fn type_element_by_name(&self, name: &str) -> Option<ElementId> {
        self.types_by_name.get(name).copied()
    }

    fn package_element_by_name(&self, name: &str) -> Option<ElementId> {
        self.packages_by_name.get(name).copied()
    }

    fn specified_elements(&self) -> Vec<ElementId> {
        self.specified.clone()
    }

    fn is_selected(&self, element: ElementId) -> bool {
        self.selected(element)
    }

    fn is_included(&self, element: ElementId) -> bool {
        self.included(element)
    }

    fn doc_comment(&self, element: ElementId) -> Option<DocCommentTree> {
        self.data(element).comment.as_ref().map(|c| c.tree.clone())
    }

    fn doc_tree(&self, node: DocTreeId) -> DocTree {
        self.nodes.get(node).cloned().unwrap_or(DocTree::Erroneous {
            body: String::new(),
        })
    }

    fn compilation_unit(&self, element: ElementId) -> Option<UnitId> {
        self.data(element).unit
    }

    fn unit_name(&self, unit: UnitId) -> String {
        self.units[unit.index()].name.clone()
    }

    fn unit_content(&self, unit: UnitId) -> io::Result<String> {
        match &self.units[unit.index()].source {
            UnitSource::Inline(text) => Ok(text.clone()),
            UnitSource::File(path) => std::fs::read_to_string(path),
        }
    }

    fn start_position(&self, element: ElementId, node: Option<DocTreeId>) -> i64 {
        let Some(start) = self.comment_offset(element) else {
            return NOPOS;
        };
        let relative = match node {
            Some(node) => {
                let Some(comment) = self.data(element).comment.as_ref() else {
                    return NOPOS;
                };
                // Node offsets are bytes into the raw comment.
                let bytes = self.nodes.offset(node).map(|o| u32::from(o) as usize);
                match bytes.and_then(|at| comment.raw.get(..at)) {
                    Some(prefix) => prefix.chars().count(),
                    None => return NOPOS,
                }
            }
            None => 0,
        };
        (start + relative) as i64
    }
}
