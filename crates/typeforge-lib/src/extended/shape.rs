//! Wrapper classification.

use typeforge_core::{KnownDefinition, NativeType, TypeSystem};

/// Structural shape of a native descriptor with respect to the schema
/// wrapper generics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Shape {
    /// `ListType<T>`: list of `T`.
    List(NativeType),
    /// `NonNullType<T>`: non-nullable `T`.
    NonNull(NativeType),
    /// `NativeType<T>`: transparent pass-through of `T`.
    Native(NativeType),
    /// Anything that is not one of the three wrappers.
    Leaf,
}

impl Shape {
    /// Classify `ty`. A wrapper definition without a type argument (the
    /// open definition itself) is a leaf.
    pub fn of<T: TypeSystem + ?Sized>(types: &T, ty: NativeType) -> Self {
        let Some(known) = types.known_definition_of(ty) else {
            return Self::Leaf;
        };
        if !known.is_schema_wrapper() {
            return Self::Leaf;
        }
        let Some(&argument) = types.generic_arguments(ty).first() else {
            return Self::Leaf;
        };

        match known {
            KnownDefinition::ListWrapper => Self::List(argument),
            KnownDefinition::NonNullWrapper => Self::NonNull(argument),
            _ => Self::Native(argument),
        }
    }

    /// The wrapped type, if this is a wrapper.
    pub fn argument(self) -> Option<NativeType> {
        match self {
            Self::List(ty) | Self::NonNull(ty) | Self::Native(ty) => Some(ty),
            Self::Leaf => None,
        }
    }
}

/// Remove every `NativeType<..>` layer from the outside of `ty`.
pub fn strip_native<T: TypeSystem + ?Sized>(types: &T, ty: NativeType) -> NativeType {
    let mut current = ty;
    while let Shape::Native(inner) = Shape::of(types, current) {
        current = inner;
    }
    current
}

/// Whether `ty` is a named schema type, possibly under a chain of the three
/// wrappers.
pub fn is_schema_type<T: TypeSystem + ?Sized>(types: &T, ty: NativeType) -> bool {
    let mut current = ty;
    loop {
        if types.schema_kind(current).is_some() {
            return true;
        }
        match Shape::of(types, current).argument() {
            Some(inner) => current = inner,
            None => return false,
        }
    }
}
