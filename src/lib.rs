//! # doclet-bridge
//!
//! The legacy doclet documentation model, derived on demand from an
//! element/type introspection host.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! doc, types, tags → Packages/classes/members, the Type variants, comment tags
//!   ↓
//! context          → Identity caches, element classification utilities
//!   ↓
//! position         → Element/comment-node source positions
//!   ↓
//! host             → The introspection interface the adapter consumes
//!   ↓
//! base             → Primitives (ids, SourcePosition, LineIndex)
//!
//! model            → In-memory reference host (ProgramBuilder → Program)
//! ```
//!
//! ## Example
//!
//! ```
//! use doclet::{Context, Documented, ProgramBuilder};
//!
//! let mut builder = ProgramBuilder::new();
//! let pkg = builder.package("com.example");
//! let outer = builder.class(pkg, "Outer").public().finish();
//! let inner = builder.class(outer, "Inner").public().finish();
//! let cx = Context::new(builder.build());
//!
//! let class = cx.class(inner).unwrap();
//! assert_eq!(class.name(), "Outer.Inner");
//! assert_eq!(class.qualified_name(), "com.example.Outer.Inner");
//! assert_eq!(cx.class(inner).unwrap(), class);
//! ```

// ============================================================================
// MODULES (dependency order: base → host → position → context → doc/types/tags)
// ============================================================================

/// Foundation types: handles, SourcePosition, LineIndex
pub mod base;

/// Adapter error type and Result alias
pub mod error;

/// Run-wide configuration: well-known names, selection policy
pub mod config;

/// The host introspection interface
pub mod host;

/// Source position resolution
pub mod position;

/// Identity caches and element utilities
pub mod context;

/// Documentation entities: packages, classes, members, annotations
pub mod doc;

/// The legacy type variants
pub mod types;

/// Documentation comment tags
pub mod tags;

/// In-memory reference host
pub mod model;

// Re-export the query surface
pub use context::{Context, ElementUtils};
pub use doc::{
    AnnotationDesc, AnnotationElementDoc, AnnotationTypeDoc, AnnotationValue, AnnotationValueData,
    ClassDoc, ConstructorDoc, Doc, Documented, ElementValuePair, ExecutableMember, FieldConstant,
    FieldDoc, MethodDoc, Modifiers, PackageDoc, Parameter, ProgramElement, RootDoc,
};
pub use tags::{ParamTag, SeeTag, SerialFieldTag, Tag, ThrowsTag};
pub use types::{
    AnnotatedType, ArrayType, ErrorType, ParameterizedType, PrimitiveType, Type, TypeVariable,
    WildcardType,
};

// Re-export foundation types
pub use base::{ElementId, POS_FAILED, SourcePosition, TypeId};
pub use config::{AccessLevel, ContextConfig, SelectionPolicy};
pub use error::{AdapterError, Result};
pub use host::Host;
pub use model::{Program, ProgramBuilder};
