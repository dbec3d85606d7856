//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::dynamic::{DynamicTypeSystem, TypeInfo};
use crate::NativeType;

impl DynamicTypeSystem {
    pub(crate) fn ensure_type(&self, ty: NativeType) -> &TypeInfo {
        self.get(ty).unwrap_or_else(|| {
            panic!(
                "DynamicTypeSystem: type handle {} not found \
                 (handles are only valid for the registry that issued them)",
                ty.as_u32()
            )
        })
    }
}
