//! Run selection for the reference host.

use crate::base::ElementId;
use crate::config::AccessLevel;
use crate::host::{DocTree, ElementKind, Modifier};

use super::Program;

impl Program {
    /// Declared access of an element. Members of interfaces without an
    /// access modifier are implicitly public.
    pub(crate) fn access_level(&self, element: ElementId) -> AccessLevel {
        let data = self.data(element);
        if data.has_modifier(Modifier::Public) {
            AccessLevel::Public
        } else if data.has_modifier(Modifier::Protected) {
            AccessLevel::Protected
        } else if data.has_modifier(Modifier::Private) {
            AccessLevel::Private
        } else if data
            .enclosing
            .is_some_and(|owner| self.data(owner).kind.is_interface())
        {
            AccessLevel::Public
        } else {
            AccessLevel::Package
        }
    }

    /// Whether the element's comment carries one of the policy's hide markers.
    pub(crate) fn is_hidden(&self, element: ElementId) -> bool {
        let Some(comment) = &self.data(element).comment else {
            return false;
        };
        comment.tree.block_tags.iter().any(|&tag| {
            self.nodes
                .get(tag)
                .and_then(DocTree::tag_name)
                .is_some_and(|name| self.policy.is_hide_marker(name))
        })
    }

    pub(crate) fn selected(&self, element: ElementId) -> bool {
        let data = self.data(element);
        match data.kind {
            ElementKind::Package | ElementKind::Module => true,
            ElementKind::Parameter | ElementKind::TypeParameter => {
                data.enclosing.is_none_or(|owner| self.selected(owner))
            }
            _ => self.policy.access().admits(self.access_level(element)) && !self.is_hidden(element),
        }
    }

    pub(crate) fn included(&self, element: ElementId) -> bool {
        let data = self.data(element);
        if data.kind == ElementKind::Package {
            return data
                .enclosed
                .iter()
                .any(|&e| self.data(e).kind.is_type() && self.included(e));
        }
        if !data.from_source || !self.selected(element) {
            return false;
        }
        match data.enclosing {
            Some(owner) if self.data(owner).kind != ElementKind::Package => self.included(owner),
            _ => true,
        }
    }
}
