//! Run-wide configuration.
//!
//! [`ContextConfig`] names the well-known library types the adapter tests
//! against. [`SelectionPolicy`] is the visibility rule the reference host
//! applies when deciding which elements a run documents.

use smol_str::SmolStr;

/// Fully-qualified names of the library types the adapter consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextConfig {
    pub root_object: SmolStr,
    pub throwable: SmolStr,
    pub exception: SmolStr,
    pub error: SmolStr,
    pub serializable: SmolStr,
    pub externalizable: SmolStr,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            root_object: SmolStr::new_static("java.lang.Object"),
            throwable: SmolStr::new_static("java.lang.Throwable"),
            exception: SmolStr::new_static("java.lang.Exception"),
            error: SmolStr::new_static("java.lang.Error"),
            serializable: SmolStr::new_static("java.io.Serializable"),
            externalizable: SmolStr::new_static("java.io.Externalizable"),
        }
    }
}

/// Minimum access level an element needs to be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AccessLevel {
    Public,
    #[default]
    Protected,
    Package,
    Private,
}

impl AccessLevel {
    /// Whether an element declared with `declared` access passes this level.
    pub fn admits(self, declared: AccessLevel) -> bool {
        declared <= self
    }
}

/// Which elements a run documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    access: AccessLevel,
    hide_markers: Vec<SmolStr>,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            access: AccessLevel::default(),
            hide_markers: vec![SmolStr::new_static("hide")],
        }
    }
}

impl SelectionPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access(mut self, access: AccessLevel) -> Self {
        self.access = access;
        self
    }

    /// Add a block-tag name that deselects any element carrying it.
    pub fn with_hide_marker(mut self, marker: impl Into<SmolStr>) -> Self {
        self.hide_markers.push(marker.into());
        self
    }

    pub fn without_hide_markers(mut self) -> Self {
        self.hide_markers.clear();
        self
    }

    pub fn access(&self) -> AccessLevel {
        self.access
    }

    pub fn hide_markers(&self) -> &[SmolStr] {
        &self.hide_markers
    }

    pub fn is_hide_marker(&self, tag_name: &str) -> bool {
        self.hide_markers.iter().any(|m| m == tag_name)
    }
}
