//! Comment tag tests.

pub mod tests_comments;
