use std::fs;
use std::io::{self, Read};
use std::path::Path;

use typeforge_core::{DynamicTypeSystem, NativeType};

use crate::error::{CliError, Result};

/// Load a type universe from a JSON file, or from stdin when `path` is "-".
pub fn load_types(path: &Path) -> Result<DynamicTypeSystem> {
    let (origin, json) = if path.as_os_str() == "-" {
        ("<stdin>".to_string(), read_stdin()?)
    } else {
        let json = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        (path.display().to_string(), json)
    };

    let types = parse_types(&origin, &json)?;
    tracing::debug!(origin = %origin, count = types.len(), "loaded type universe");
    Ok(types)
}

pub fn parse_types(origin: &str, json: &str) -> Result<DynamicTypeSystem> {
    DynamicTypeSystem::from_json(json).map_err(|source| CliError::Types {
        origin: origin.to_string(),
        source,
    })
}

/// Resolve a registered, non-open type by name.
pub fn resolve_type(types: &DynamicTypeSystem, name: &str) -> Result<NativeType> {
    let ty = types
        .lookup(name)
        .ok_or_else(|| CliError::UnknownType(name.to_string()))?;

    if types.get(ty).is_some_and(|info| info.parameters > 0) {
        return Err(CliError::OpenDefinition(name.to_string()));
    }
    Ok(ty)
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CliError::Stdin)?;
    Ok(buf)
}
