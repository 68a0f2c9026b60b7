//! The root of one documentation run.

use tracing::debug;

use crate::base::ElementId;
use crate::context::Context;
use crate::error::{AdapterError, Result};
use crate::host::{ElementKind, NestingKind};

use super::{ClassDoc, Documented, PackageDoc};

/// Entry point of a run: the elements named on the command line and every
/// class the run has touched.
#[derive(Debug)]
pub struct RootDoc<'a> {
    cx: &'a Context,
    specified_classes: Vec<ElementId>,
    specified_packages: Vec<ElementId>,
}

impl<'a> RootDoc<'a> {
    /// Wrap the host's specified elements. Classes bring their member types
    /// with them. Records and modules are rejected.
    pub fn new(cx: &'a Context) -> Result<Self> {
        let host = cx.host();
        let mut specified_classes = Vec::new();
        let mut specified_packages = Vec::new();
        for element in host.specified_elements() {
            let kind = host.element_kind(element);
            match kind {
                ElementKind::Class
                | ElementKind::Interface
                | ElementKind::Enum
                | ElementKind::AnnotationType => {
                    add_class(cx, element);
                    specified_classes.push(element);
                }
                ElementKind::Package => {
                    cx.package_doc(element);
                    specified_packages.push(element);
                }
                ElementKind::Record | ElementKind::Module => {
                    return Err(AdapterError::unsupported_element(kind));
                }
                _ => return Err(AdapterError::invalid_argument("specified element", kind)),
            }
        }
        debug!(
            classes = specified_classes.len(),
            packages = specified_packages.len(),
            "root doc created"
        );
        Ok(Self {
            cx,
            specified_classes,
            specified_packages,
        })
    }

    pub fn context(&self) -> &'a Context {
        self.cx
    }

    /// Included classes among all wrapped so far, in creation order with
    /// annotation types last.
    pub fn classes(&self) -> Vec<ClassDoc<'a>> {
        self.cx
            .created_classes()
            .into_iter()
            .filter(|class| class.is_included())
            .collect()
    }

    pub fn specified_classes(&self) -> Vec<ClassDoc<'a>> {
        self.specified_classes
            .iter()
            .map(|&e| self.cx.class_doc(e))
            .collect()
    }

    pub fn specified_packages(&self) -> Vec<PackageDoc<'a>> {
        self.specified_packages
            .iter()
            .map(|&e| self.cx.package_doc(e))
            .collect()
    }

    /// Every package wrapped so far.
    pub fn packages(&self) -> Vec<PackageDoc<'a>> {
        self.cx.created_packages()
    }

    pub fn class_named(&self, qualified_name: &str) -> Result<Option<ClassDoc<'a>>> {
        self.cx.class_named(qualified_name)
    }

    pub fn package_named(&self, name: &str) -> Option<PackageDoc<'a>> {
        self.cx.package_named(name)
    }
}

/// Wrap a class and, recursively, its member types.
fn add_class(cx: &Context, element: ElementId) {
    cx.class_doc(element);
    let host = cx.host();
    for nested in host.enclosed_elements(element) {
        let is_member_type = host.nesting_kind(nested) == NestingKind::Member
            && matches!(
                host.element_kind(nested),
                ElementKind::Class
                    | ElementKind::Interface
                    | ElementKind::Enum
                    | ElementKind::AnnotationType
            );
        if is_member_type {
            add_class(cx, nested);
        }
    }
}
