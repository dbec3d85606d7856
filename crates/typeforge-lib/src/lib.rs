//! Typeforge: canonical type identity for schema construction.
//!
//! Reconciles native runtime type descriptors, schema wrapper generics
//! (`ListType<T>`, `NonNullType<T>`, `NativeType<T>`) and parsed type
//! expressions into one equatable descriptor, [`ExtendedType`].
//!
//! # Example
//!
//! ```
//! use typeforge_core::{DynamicTypeSystem, KnownDefinition, TypeDecl};
//! use typeforge_lib::Normalizer;
//!
//! let mut types = DynamicTypeSystem::new();
//! let string = types.define(TypeDecl::class("String")).unwrap();
//! let list = types
//!     .define(TypeDecl::class("List").generic(1).known(KnownDefinition::ConcreteList))
//!     .unwrap();
//! let list_string = types.instantiate(list, &[string]).unwrap();
//!
//! let normalizer = Normalizer::new(&types);
//! let ty = normalizer.normalize(list_string);
//! assert!(ty.is_list() && ty.is_nullable());
//! assert_eq!(ty.element_type().map(|e| e.ty()), Some(string));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cache;
pub mod extended;
pub mod reference;

#[cfg(test)]
mod test_utils;

pub use cache::{TypeCache, TypeKey};
pub use extended::{
    ExtendedType, ExtendedTypeKind, NormalizeOptions, Normalizer, Shape, TypePrinter,
};
pub use reference::{
    ExtendedTypeReference, ReferenceUpdate, SyntaxTypeReference, TypeContext, TypeNode,
    TypeReference,
};

/// Errors raised by descriptor construction and reference combinators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required argument was absent.
    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),

    /// Re-derivation was requested for a descriptor that is not `Extended`.
    #[error("cannot re-derive a descriptor of kind `{0}`: kind must be extended")]
    NotExtended(ExtendedTypeKind),
}

/// Result type for typeforge operations.
pub type Result<T> = std::result::Result<T, Error>;
