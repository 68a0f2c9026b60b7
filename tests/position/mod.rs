//! Source position tests for inline, on-disk and unreadable units.

pub mod tests_positions;
