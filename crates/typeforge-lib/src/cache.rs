//! Content-addressed interning of canonical descriptors.

use std::collections::HashMap;

use indexmap::IndexSet;
use typeforge_core::{NativeType, TypeSystem};

use crate::{ExtendedType, Normalizer};

/// Stable handle to an interned descriptor.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeKey(u32);

impl TypeKey {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Deduplicates descriptors by equality, handing out keys in first-seen
/// order.
///
/// Native lookups are memoized per `NativeType`; use one cache per type
/// system and option set.
#[derive(Debug, Clone, Default)]
pub struct TypeCache {
    descriptors: IndexSet<ExtendedType>,
    native: HashMap<NativeType, TypeKey>,
}

impl TypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `ty`, returning the key of the equal descriptor seen first.
    pub fn intern(&mut self, ty: ExtendedType) -> TypeKey {
        let (index, inserted) = self.descriptors.insert_full(ty);
        if inserted {
            tracing::debug!(key = index, "interned descriptor");
        }
        TypeKey(index as u32)
    }

    /// Normalize and intern a native type, memoized.
    pub fn from_type<T: TypeSystem + ?Sized>(
        &mut self,
        normalizer: &Normalizer<'_, T>,
        ty: NativeType,
    ) -> TypeKey {
        if let Some(&key) = self.native.get(&ty) {
            return key;
        }
        let key = self.intern(normalizer.normalize(ty));
        self.native.insert(ty, key);
        key
    }

    pub fn get(&self, key: TypeKey) -> Option<&ExtendedType> {
        self.descriptors.get_index(key.0 as usize)
    }

    pub fn key_of(&self, ty: &ExtendedType) -> Option<TypeKey> {
        self.descriptors
            .get_index_of(ty)
            .map(|index| TypeKey(index as u32))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeKey, &ExtendedType)> {
        self.descriptors
            .iter()
            .enumerate()
            .map(|(index, ty)| (TypeKey(index as u32), ty))
    }
}
