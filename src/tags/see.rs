use crate::doc::{ClassDoc, PackageDoc};
use crate::error::Result;
use crate::host::DocTree;

use super::tag_subtype;

tag_subtype!(
    /// `@see reference label`.
    SeeTag
);

impl<'a> SeeTag<'a> {
    fn reference(&self) -> &[crate::base::DocTreeId] {
        match self.tree() {
            DocTree::See { reference } => reference,
            _ => &[],
        }
    }

    /// Every reference node rendered and joined by a space.
    pub fn label(&self) -> String {
        self.join_text(self.reference(), " ")
    }

    /// The raw signature of the leading reference, e.g. `java.util.List#add`.
    pub fn signature(&self) -> Option<String> {
        let &first = self.reference().first()?;
        match self.context().host().doc_tree(first) {
            DocTree::Reference { signature } => Some(signature),
            _ => None,
        }
    }

    /// The class part of the signature, as written.
    pub fn referenced_class_name(&self) -> Option<String> {
        let signature = self.signature()?;
        let class = signature
            .split_once('#')
            .map_or(signature.as_str(), |(class, _)| class);
        (!class.is_empty()).then(|| class.to_string())
    }

    /// The member part of the signature, after `#`.
    pub fn referenced_member_name(&self) -> Option<String> {
        let signature = self.signature()?;
        let (_, member) = signature.split_once('#')?;
        (!member.is_empty()).then(|| member.to_string())
    }

    /// The referenced class, looked up by fully-qualified name. `None` when
    /// the host does not know it.
    pub fn referenced_class(&self) -> Result<Option<ClassDoc<'a>>> {
        match self.referenced_class_name() {
            Some(name) => self.context().class_named(&name),
            None => Ok(None),
        }
    }

    /// The referenced package, when the whole signature names one.
    pub fn referenced_package(&self) -> Option<PackageDoc<'a>> {
        let signature = self.signature()?;
        self.context().package_named(&signature)
    }
}
