use crate::host::DocTree;

use super::tag_subtype;

tag_subtype!(
    /// `@param name description`, or `@param <T> description` for a type
    /// parameter.
    ParamTag
);

impl ParamTag<'_> {
    pub fn parameter_name(&self) -> &str {
        match self.tree() {
            DocTree::Param { name, .. } => name,
            _ => "",
        }
    }

    /// The description, trimmed. Empty when none was given.
    pub fn parameter_comment(&self) -> String {
        match self.tree() {
            DocTree::Param { description, .. } => {
                self.join_text(description, "").trim().to_string()
            }
            _ => String::new(),
        }
    }

    pub fn is_type_parameter(&self) -> bool {
        matches!(
            self.tree(),
            DocTree::Param {
                type_parameter: true,
                ..
            }
        )
    }
}
