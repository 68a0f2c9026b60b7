//! Documentation entity tests
//!
//! - Wrapper identity within and across contexts
//! - Class naming, members and visibility filtering
//! - Package categorization and class search
//! - Override resolution
//! - The run root, annotations and argument errors

pub mod tests_annotations;
pub mod tests_errors;
pub mod tests_identity;
pub mod tests_members;
