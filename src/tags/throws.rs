use crate::doc::ClassDoc;
use crate::error::Result;
use crate::host::DocTree;
use crate::types::Type;

use super::tag_subtype;

tag_subtype!(
    /// `@throws` or `@exception`.
    ThrowsTag
);

impl<'a> ThrowsTag<'a> {
    fn signature(&self) -> Option<String> {
        let DocTree::Throws {
            exception: Some(node),
            ..
        } = self.tree()
        else {
            return None;
        };
        match self.context().host().doc_tree(*node) {
            DocTree::Reference { signature } => Some(signature),
            _ => None,
        }
    }

    /// Simple name of the exception as written.
    pub fn exception_name(&self) -> Option<String> {
        let signature = self.signature()?;
        Some(match signature.rfind('.') {
            Some(dot) => signature[dot + 1..].to_string(),
            None => signature,
        })
    }

    /// The description, its parts joined by a space.
    pub fn exception_comment(&self) -> String {
        match self.tree() {
            DocTree::Throws { description, .. } => self.join_text(description, " "),
            _ => String::new(),
        }
    }

    /// The exception class, looked up by the name as written.
    pub fn exception(&self) -> Result<Option<ClassDoc<'a>>> {
        match self.signature() {
            Some(signature) => self.context().class_named(&signature),
            None => Ok(None),
        }
    }

    pub fn exception_type(&self) -> Result<Option<Type<'a>>> {
        Ok(self.exception()?.map(|class| class.as_type()))
    }
}
