//! Foundation types for the doclet adapter.
//!
//! - [`ElementId`], [`TypeId`], [`DocTreeId`], [`UnitId`], [`AnnotationValueId`] - host handles
//! - [`SourcePosition`] - legacy `(file, line, column)` positions
//! - [`LineIndex`], [`LineCol`] - character offset to line/column conversion
//!
//! This module has NO dependencies on other doclet modules.

mod ids;
mod position;

pub use ids::{AnnotationValueId, DocTreeId, ElementId, TypeId, UnitId};
pub use position::{LineCol, LineIndex, POS_FAILED, SourcePosition};

pub use text_size::TextSize;
