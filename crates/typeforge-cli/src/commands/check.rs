use std::path::PathBuf;

use typeforge_core::{DynamicTypeSystem, TypeSystem};
use typeforge_lib::{NormalizeOptions, Normalizer, TypeCache};

use super::types_loader::load_types;
use crate::error::Result;

pub struct CheckArgs {
    pub types_path: PathBuf,
    pub legacy_array_arguments: bool,
}

/// Outcome of normalizing a whole type universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Registered types, open generic definitions included.
    pub types: usize,
    /// Types that were normalized (everything but open definitions).
    pub normalized: usize,
    /// Distinct canonical descriptors among the normalized types.
    pub descriptors: usize,
    pub lists: usize,
    /// Types that are their own element, directly or through other types.
    pub cyclic: Vec<String>,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let types = load_types(&args.types_path)?;
    let options = NormalizeOptions::new().legacy_array_arguments(args.legacy_array_arguments);
    let report = check_types(&types, options);

    tracing::info!(
        types = report.types,
        normalized = report.normalized,
        descriptors = report.descriptors,
        lists = report.lists,
        "type universe is valid"
    );
    for name in &report.cyclic {
        tracing::warn!(ty = %name, "type is its own element type");
    }

    // Silent on success
    Ok(())
}

pub fn check_types(types: &DynamicTypeSystem, options: NormalizeOptions) -> CheckReport {
    let normalizer = Normalizer::new(types).with_options(options);
    let mut cache = TypeCache::new();
    let mut normalized = 0;

    for (ty, info) in types.iter() {
        if info.parameters > 0 {
            continue;
        }
        let key = cache.from_type(&normalizer, ty);
        normalized += 1;
        tracing::trace!(ty = types.name(ty), key = key.as_u32(), "normalized");
    }

    let lists = cache
        .iter()
        .filter(|(_, descriptor)| descriptor.is_array_or_list())
        .count();

    CheckReport {
        types: types.len(),
        normalized,
        descriptors: cache.len(),
        lists,
        cyclic: normalizer
            .cycles()
            .into_iter()
            .map(|ty| types.name(ty).to_owned())
            .collect(),
    }
}
