//! Canonical type descriptors.
//!
//! Construction paths live in `normalize`:
//! - native path (`Unknown`): unwinds a native descriptor bottom-up
//! - schema path (`Schema`): unwinds a wrapper chain onto a stack, then folds
//! - re-derivation (`Extended`): refreshes an already canonical descriptor

mod collections;
mod normalize;
mod printer;
mod shape;

#[cfg(test)]
mod shape_tests;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use typeforge_core::{NativeType, TypeSystem};

use crate::Result;

pub use collections::{inner_list_type, is_list_type, supported_collection_argument};
pub use normalize::{NormalizeOptions, Normalizer};
pub use printer::TypePrinter;
pub use shape::{Shape, is_schema_type, strip_native};

pub(crate) use normalize::Draft;

/// Provenance of an [`ExtendedType`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ExtendedTypeKind {
    /// Derived directly from a native descriptor.
    Unknown,
    /// Already canonical; accepted by re-derivation.
    Extended,
    /// Derived from a schema wrapper chain.
    Schema,
}

impl ExtendedTypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Extended => "extended",
            Self::Schema => "schema",
        }
    }
}

impl fmt::Display for ExtendedTypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical, immutable type descriptor.
///
/// A cheap-to-clone shared handle. Equality and hashing consider only
/// `(ty, kind, is_nullable, type_arguments)`; two descriptors with different
/// provenance but the same normalized shape are equal, which makes them
/// usable as cache keys.
///
/// The interface set is computed on first access and memoized.
#[derive(Clone)]
pub struct ExtendedType(Arc<Inner>);

struct Inner {
    ty: NativeType,
    original_type: NativeType,
    definition: Option<NativeType>,
    kind: ExtendedTypeKind,
    is_nullable: bool,
    is_list: bool,
    is_array: bool,
    is_named_type: bool,
    is_generic: bool,
    is_interface: bool,
    type_arguments: Vec<ExtendedType>,
    element_type: Option<ExtendedType>,
    interfaces: OnceLock<Vec<ExtendedType>>,
}

impl ExtendedType {
    /// Canonical descriptor for a native type.
    ///
    /// Schema-classified types take the wrapper-chain path, everything
    /// else the native path.
    pub fn from_type<T: TypeSystem + ?Sized>(types: &T, ty: NativeType) -> Self {
        Normalizer::new(types).normalize(ty)
    }

    /// Fresh canonical descriptor from an `Extended` one.
    ///
    /// Fails with [`Error::NotExtended`](crate::Error::NotExtended) for any
    /// other kind.
    pub fn from_extended_type<T: TypeSystem + ?Sized>(types: &T, source: &Self) -> Result<Self> {
        Normalizer::new(types).rederive(source)
    }

    /// Host entry point for descriptors the host has already annotated,
    /// e.g. a member type with declared nullability.
    pub fn extended<T: TypeSystem + ?Sized>(
        types: &T,
        ty: NativeType,
        is_nullable: bool,
        type_arguments: Vec<ExtendedType>,
    ) -> Self {
        Normalizer::new(types).extended(ty, is_nullable, type_arguments)
    }

    pub(crate) fn from_parts(draft: Draft, facts: Facts) -> Self {
        Self(Arc::new(Inner {
            ty: draft.ty,
            original_type: draft.original_type.unwrap_or(draft.ty),
            definition: facts.definition,
            kind: draft.kind,
            is_nullable: draft.is_nullable,
            is_list: facts.is_list,
            is_array: facts.is_array,
            is_named_type: draft.kind == ExtendedTypeKind::Schema && draft.is_named_type,
            is_generic: facts.is_generic,
            is_interface: facts.is_interface,
            type_arguments: facts.type_arguments,
            element_type: facts.element_type,
            interfaces: OnceLock::new(),
        }))
    }

    /// Normalized native descriptor.
    pub fn ty(&self) -> NativeType {
        self.0.ty
    }

    /// Descriptor before normalization (e.g. `Nullable<Int32>` for `Int32?`).
    pub fn original_type(&self) -> NativeType {
        self.0.original_type
    }

    pub fn definition(&self) -> Option<NativeType> {
        self.0.definition
    }

    pub fn kind(&self) -> ExtendedTypeKind {
        self.0.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.0.is_nullable
    }

    pub fn is_list(&self) -> bool {
        self.0.is_list
    }

    pub fn is_array(&self) -> bool {
        self.0.is_array
    }

    pub fn is_array_or_list(&self) -> bool {
        self.0.is_list || self.0.is_array
    }

    pub fn is_named_type(&self) -> bool {
        self.0.is_named_type
    }

    pub fn is_generic(&self) -> bool {
        self.0.is_generic
    }

    pub fn is_interface(&self) -> bool {
        self.0.is_interface
    }

    pub fn type_arguments(&self) -> &[ExtendedType] {
        &self.0.type_arguments
    }

    /// Element descriptor. Present iff `is_array_or_list()`.
    pub fn element_type(&self) -> Option<&ExtendedType> {
        self.0.element_type.as_ref()
    }

    /// Canonical descriptors of every interface implemented by `ty()`.
    ///
    /// The set is computed with the `types` of the first call and memoized
    /// on the descriptor. Later calls return that set whatever `types` they
    /// pass, so always pass the type system that issued the descriptor.
    pub fn interfaces<T: TypeSystem + ?Sized>(&self, types: &T) -> &[ExtendedType] {
        Normalizer::new(types).interfaces(self)
    }

    /// Whether the interface set has been computed.
    pub fn has_interfaces(&self) -> bool {
        self.0.interfaces.get().is_some()
    }

    /// Compute, then store if absent. Concurrent first callers may each
    /// compute; the first stored set wins.
    pub(crate) fn interfaces_with(
        &self,
        compute: impl FnOnce() -> Vec<ExtendedType>,
    ) -> &[ExtendedType] {
        if let Some(cached) = self.0.interfaces.get() {
            return cached;
        }
        let computed = compute();
        let _ = self.0.interfaces.set(computed);
        self.0.interfaces.get().map_or(&[], Vec::as_slice)
    }

    pub fn printer<'a, T: TypeSystem + ?Sized>(&'a self, types: &'a T) -> TypePrinter<'a, T> {
        TypePrinter::new(self, types)
    }
}

/// Facts derived during construction, on top of the caller's `Draft`.
pub(crate) struct Facts {
    pub definition: Option<NativeType>,
    pub is_list: bool,
    pub is_array: bool,
    pub is_generic: bool,
    pub is_interface: bool,
    pub type_arguments: Vec<ExtendedType>,
    pub element_type: Option<ExtendedType>,
}

impl PartialEq for ExtendedType {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        let (a, b) = (&*self.0, &*other.0);
        a.ty == b.ty
            && a.kind == b.kind
            && a.is_nullable == b.is_nullable
            && a.type_arguments == b.type_arguments
    }
}

impl Eq for ExtendedType {}

impl Hash for ExtendedType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.ty.hash(state);
        self.0.kind.hash(state);
        self.0.is_nullable.hash(state);
        self.0.type_arguments.hash(state);
    }
}

impl fmt::Debug for ExtendedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedType")
            .field("ty", &self.0.ty)
            .field("kind", &self.0.kind)
            .field("is_nullable", &self.0.is_nullable)
            .field("is_list", &self.0.is_list)
            .field("is_array", &self.0.is_array)
            .field("type_arguments", &self.0.type_arguments)
            .field("element_type", &self.0.element_type)
            .finish_non_exhaustive()
    }
}
