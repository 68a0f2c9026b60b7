//! Type mapping tests: variant dispatch, names, dimensions and down-casts.

pub mod tests_dispatch;
pub mod tests_generics;
