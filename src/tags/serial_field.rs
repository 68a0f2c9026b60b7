use crate::host::DocTree;

use super::tag_subtype;

tag_subtype!(
    /// `@serialField name type description`.
    SerialFieldTag
);

impl SerialFieldTag<'_> {
    pub fn field_name(&self) -> &str {
        match self.tree() {
            DocTree::SerialField { name, .. } => name,
            _ => "",
        }
    }

    /// The field type as written, empty if missing.
    pub fn field_type(&self) -> String {
        match self.tree() {
            DocTree::SerialField {
                field_type: Some(node),
                ..
            } => self.context().host().doc_tree_text(*node),
            _ => String::new(),
        }
    }

    pub fn description(&self) -> String {
        match self.tree() {
            DocTree::SerialField { description, .. } => {
                self.join_text(description, "").trim().to_string()
            }
            _ => String::new(),
        }
    }
}
