//! Package documentation.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;
use smol_str::SmolStr;

use crate::base::ElementId;
use crate::context::Context;
use crate::host::ElementKind;

use super::{AnnotationTypeDoc, ClassDoc, DocMemo, Documented};

#[derive(Debug)]
pub(crate) struct PackageSlot {
    element: ElementId,
    name: SmolStr,
    memo: DocMemo,
    included: OnceCell<Vec<ElementId>>,
    ordinary_classes: OnceCell<Vec<ElementId>>,
    exceptions: OnceCell<Vec<ElementId>>,
    errors: OnceCell<Vec<ElementId>>,
    enums: OnceCell<Vec<ElementId>>,
    interfaces: OnceCell<Vec<ElementId>>,
    annotation_types: OnceCell<Vec<ElementId>>,
    all_classes_filtered: OnceCell<Vec<ElementId>>,
    all_classes: OnceCell<Vec<ElementId>>,
}

impl PackageSlot {
    pub(crate) fn new(cx: &Context, element: ElementId) -> Self {
        Self {
            element,
            name: cx.host().qualified_name(element),
            memo: DocMemo::default(),
            included: OnceCell::new(),
            ordinary_classes: OnceCell::new(),
            exceptions: OnceCell::new(),
            errors: OnceCell::new(),
            enums: OnceCell::new(),
            interfaces: OnceCell::new(),
            annotation_types: OnceCell::new(),
            all_classes_filtered: OnceCell::new(),
            all_classes: OnceCell::new(),
        }
    }
}

/// A package and the classes declared in it, nested classes included.
#[derive(Clone)]
pub struct PackageDoc<'a> {
    cx: &'a Context,
    slot: Rc<PackageSlot>,
}

impl<'a> PackageDoc<'a> {
    pub(crate) fn new(cx: &'a Context, slot: Rc<PackageSlot>) -> Self {
        Self { cx, slot }
    }

    /// Every element nested in the package at any depth, breadth first.
    fn nested_elements(&self) -> Vec<ElementId> {
        let host = self.cx.host();
        let mut queue: VecDeque<ElementId> = host.enclosed_elements(self.slot.element).into();
        let mut found = Vec::new();
        while let Some(element) = queue.pop_front() {
            queue.extend(host.enclosed_elements(element));
            found.push(element);
        }
        found
    }

    fn included_elements(&self) -> &[ElementId] {
        self.slot.included.get_or_init(|| {
            let host = self.cx.host();
            self.nested_elements()
                .into_iter()
                .filter(|&e| host.is_included(e))
                .collect()
        })
    }

    fn included_where(
        &self,
        cell: &OnceCell<Vec<ElementId>>,
        accept: impl Fn(ElementId) -> bool,
    ) -> Vec<ClassDoc<'a>> {
        cell.get_or_init(|| {
            self.included_elements()
                .iter()
                .copied()
                .filter(|&e| accept(e))
                .collect()
        })
        .iter()
        .map(|&e| self.cx.class_doc(e))
        .collect()
    }

    fn kind_of(&self, element: ElementId) -> ElementKind {
        self.cx.host().element_kind(element)
    }

    /// Included classes that are neither exceptions nor errors.
    pub fn ordinary_classes(&self) -> Vec<ClassDoc<'a>> {
        let utils = self.cx.utils();
        self.included_where(&self.slot.ordinary_classes, |e| {
            self.kind_of(e) == ElementKind::Class && !utils.is_exception(e) && !utils.is_error(e)
        })
    }

    pub fn exceptions(&self) -> Vec<ClassDoc<'a>> {
        let utils = self.cx.utils();
        self.included_where(&self.slot.exceptions, |e| utils.is_exception(e))
    }

    pub fn errors(&self) -> Vec<ClassDoc<'a>> {
        let utils = self.cx.utils();
        self.included_where(&self.slot.errors, |e| utils.is_error(e))
    }

    pub fn enums(&self) -> Vec<ClassDoc<'a>> {
        self.included_where(&self.slot.enums, |e| self.kind_of(e) == ElementKind::Enum)
    }

    pub fn interfaces(&self) -> Vec<ClassDoc<'a>> {
        self.included_where(&self.slot.interfaces, |e| {
            self.kind_of(e) == ElementKind::Interface
        })
    }

    pub fn annotation_types(&self) -> Vec<AnnotationTypeDoc<'a>> {
        self.included_where(&self.slot.annotation_types, |e| {
            self.kind_of(e) == ElementKind::AnnotationType
        })
        .into_iter()
        .map(AnnotationTypeDoc::from_class)
        .collect()
    }

    /// Classes, interfaces, enums and annotation types of the package.
    /// With `filter`, only those the run selects.
    pub fn all_classes(&self, filter: bool) -> Vec<ClassDoc<'a>> {
        let cell = if filter {
            &self.slot.all_classes_filtered
        } else {
            &self.slot.all_classes
        };
        let host = self.cx.host();
        cell.get_or_init(|| {
            self.nested_elements()
                .into_iter()
                .filter(|&e| {
                    matches!(
                        host.element_kind(e),
                        ElementKind::Class
                            | ElementKind::Interface
                            | ElementKind::Enum
                            | ElementKind::AnnotationType
                    )
                })
                .filter(|&e| !filter || host.is_selected(e))
                .collect()
        })
        .iter()
        .map(|&e| self.cx.class_doc(e))
        .collect()
    }

    /// A selected class of this package by its package-relative name,
    /// e.g. `Outer.Inner`.
    pub fn find_class(&self, name: &str) -> Option<ClassDoc<'a>> {
        self.all_classes(true)
            .into_iter()
            .find(|class| class.name() == name)
    }
}

impl<'a> Documented<'a> for PackageDoc<'a> {
    fn context(&self) -> &'a Context {
        self.cx
    }

    fn element(&self) -> ElementId {
        self.slot.element
    }

    fn memo(&self) -> &DocMemo {
        &self.slot.memo
    }

    /// Packages are named by their qualified name.
    fn name(&self) -> &str {
        &self.slot.name
    }

    fn qualified_name(&self) -> &str {
        &self.slot.name
    }
}

impl PartialEq for PackageDoc<'_> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for PackageDoc<'_> {}

impl fmt::Debug for PackageDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PackageDoc").field(&self.slot.name).finish()
    }
}

impl fmt::Display for PackageDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slot.name)
    }
}
