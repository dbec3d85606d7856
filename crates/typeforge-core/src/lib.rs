#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Native type descriptor capability for typeforge.
//!
//! The normalization engine never reflects over types itself. It asks a host
//! for facts about opaque `NativeType` handles through the `TypeSystem` trait.
//!
//! Two layers:
//! - **Capability layer**: `TypeSystem` plus the vocabulary it speaks
//!   (`KnownDefinition`, `SchemaKind`)
//! - **Host layer**: `DynamicTypeSystem`, a heap-backed registry that can be
//!   populated programmatically or from a JSON description (`RawType`)

mod dynamic;
mod error;
mod interner;
mod invariants;
mod raw;

#[cfg(test)]
mod dynamic_tests;

pub use dynamic::{DynamicTypeSystem, TypeCategory, TypeDecl, TypeInfo};
pub use error::TypeSystemError;
pub use interner::{Interner, Symbol};
pub use raw::{RawType, parse_raw_types};

// ============================================================================
// Common Types
// ============================================================================

/// Opaque handle to a native type descriptor owned by a `TypeSystem`.
///
/// Handles are only meaningful for the type system that issued them.
/// Equality of handles is identity of the underlying runtime type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NativeType(u32);

impl NativeType {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a handle from a raw index. Use only in host implementations.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Generic definitions the normalization engine gives special meaning to.
///
/// A host reports these for *open* generic definitions (e.g. `List<>`),
/// never for their instantiations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownDefinition {
    /// Schema `ListType<T>`: list-of-T semantics.
    ListWrapper,
    /// Schema `NonNullType<T>`: forces non-nullable.
    NonNullWrapper,
    /// Schema `NativeType<T>`: transparent, stripped everywhere.
    NativeWrapper,
    /// The runtime's nullable value wrapper (`T?` over a value type).
    NullableValue,
    /// Bare enumerable interface.
    Enumerable,
    ReadOnlyCollection,
    ReadOnlyList,
    Collection,
    List,
    Queryable,
    AsyncEnumerable,
    Observable,
    /// Concrete growable list implementation.
    ConcreteList,
    /// Concrete collection implementation.
    ConcreteCollection,
    Stack,
    Queue,
    ConcurrentBag,
}

impl KnownDefinition {
    /// Whether this is one of the three schema wrapper shapes.
    pub fn is_schema_wrapper(self) -> bool {
        matches!(
            self,
            Self::ListWrapper | Self::NonNullWrapper | Self::NativeWrapper
        )
    }

    /// Whether a type with this definition is treated as a list.
    ///
    /// The bare enumerable interface only counts when `allow_enumerable` is set.
    pub fn is_supported_collection(self, allow_enumerable: bool) -> bool {
        match self {
            Self::ReadOnlyCollection
            | Self::ReadOnlyList
            | Self::Collection
            | Self::List
            | Self::Queryable
            | Self::AsyncEnumerable
            | Self::Observable
            | Self::ConcreteList
            | Self::ConcreteCollection
            | Self::Stack
            | Self::Queue
            | Self::ConcurrentBag => true,
            Self::Enumerable => allow_enumerable,
            Self::ListWrapper | Self::NonNullWrapper | Self::NativeWrapper | Self::NullableValue => {
                false
            }
        }
    }
}

/// Named schema leaf kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Object,
    Interface,
    Enum,
    Union,
    Scalar,
    InputObject,
}

impl SchemaKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::Scalar => "scalar",
            Self::InputObject => "input_object",
        }
    }
}

// ============================================================================
// TypeSystem Trait
// ============================================================================

/// Read-only introspection over native type descriptors.
///
/// This is the only way the normalization engine learns about runtime types.
/// Implement it once per hosting environment.
pub trait TypeSystem {
    /// Display name of the type (e.g. `List<String>`).
    fn name(&self, ty: NativeType) -> &str;

    fn is_generic(&self, ty: NativeType) -> bool;
    /// Open generic definition of a constructed generic type.
    fn generic_definition(&self, ty: NativeType) -> Option<NativeType>;
    /// Ordered generic arguments. Empty for non-generic types.
    fn generic_arguments(&self, ty: NativeType) -> &[NativeType];

    fn is_array(&self, ty: NativeType) -> bool;
    /// Element type of an array type.
    fn element_type(&self, ty: NativeType) -> Option<NativeType>;

    fn is_value_type(&self, ty: NativeType) -> bool;
    fn is_class(&self, ty: NativeType) -> bool;
    fn is_interface(&self, ty: NativeType) -> bool;

    /// All interfaces implemented by the type.
    fn interfaces(&self, ty: NativeType) -> &[NativeType];

    /// Special meaning of an open generic definition, if any.
    fn known_definition(&self, definition: NativeType) -> Option<KnownDefinition>;

    /// Named schema leaf kind of the type, if it is one.
    fn schema_kind(&self, ty: NativeType) -> Option<SchemaKind>;

    /// Whether `ty` is the nullable value wrapper over some value type.
    fn is_nullable_value_wrapper(&self, ty: NativeType) -> bool {
        self.known_definition_of(ty) == Some(KnownDefinition::NullableValue)
    }

    /// Known definition of a constructed generic type's definition.
    fn known_definition_of(&self, ty: NativeType) -> Option<KnownDefinition> {
        if !self.is_generic(ty) {
            return None;
        }
        self.generic_definition(ty)
            .and_then(|def| self.known_definition(def))
    }
}

impl<T: TypeSystem + ?Sized> TypeSystem for &T {
    fn name(&self, ty: NativeType) -> &str {
        (*self).name(ty)
    }
    fn is_generic(&self, ty: NativeType) -> bool {
        (*self).is_generic(ty)
    }
    fn generic_definition(&self, ty: NativeType) -> Option<NativeType> {
        (*self).generic_definition(ty)
    }
    fn generic_arguments(&self, ty: NativeType) -> &[NativeType] {
        (*self).generic_arguments(ty)
    }
    fn is_array(&self, ty: NativeType) -> bool {
        (*self).is_array(ty)
    }
    fn element_type(&self, ty: NativeType) -> Option<NativeType> {
        (*self).element_type(ty)
    }
    fn is_value_type(&self, ty: NativeType) -> bool {
        (*self).is_value_type(ty)
    }
    fn is_class(&self, ty: NativeType) -> bool {
        (*self).is_class(ty)
    }
    fn is_interface(&self, ty: NativeType) -> bool {
        (*self).is_interface(ty)
    }
    fn interfaces(&self, ty: NativeType) -> &[NativeType] {
        (*self).interfaces(ty)
    }
    fn known_definition(&self, definition: NativeType) -> Option<KnownDefinition> {
        (*self).known_definition(definition)
    }
    fn schema_kind(&self, ty: NativeType) -> Option<SchemaKind> {
        (*self).schema_kind(ty)
    }
    fn is_nullable_value_wrapper(&self, ty: NativeType) -> bool {
        (*self).is_nullable_value_wrapper(ty)
    }
    fn known_definition_of(&self, ty: NativeType) -> Option<KnownDefinition> {
        (*self).known_definition_of(ty)
    }
}
