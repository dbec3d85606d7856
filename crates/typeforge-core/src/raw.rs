//! JSON deserialization layer for host type universes.
//!
//! A type universe is a JSON array of entries. Each entry is exactly one of:
//! - a declaration (`name`, optional `category`, `parameters`, `known`, `schema`)
//! - an instantiation (`instance_of` + `arguments`), named `Def<A, B>`
//! - an array (`array_of`), named `Elem[]`
//!
//! Entries may list `interfaces` by name. Instantiation arguments and array
//! elements must be registered by an earlier entry; interfaces may refer to
//! any entry in the file.

use serde::Deserialize;

use crate::dynamic::{DynamicTypeSystem, TypeCategory, TypeDecl};
use crate::error::TypeSystemError;
use crate::{KnownDefinition, NativeType, SchemaKind};

/// Raw type entry, 1:1 with the JSON format.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawType {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: TypeCategory,
    #[serde(default)]
    pub parameters: usize,
    #[serde(default)]
    pub known: Option<KnownDefinition>,
    #[serde(default)]
    pub schema: Option<SchemaKind>,
    #[serde(default)]
    pub instance_of: Option<String>,
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default)]
    pub array_of: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
}

/// Parse a JSON type universe into raw entries.
pub fn parse_raw_types(json: &str) -> Result<Vec<RawType>, TypeSystemError> {
    serde_json::from_str(json).map_err(TypeSystemError::Json)
}

impl DynamicTypeSystem {
    /// Parse and register a JSON type universe.
    pub fn from_json(json: &str) -> Result<Self, TypeSystemError> {
        let raw = parse_raw_types(json)?;
        Self::from_raw(&raw)
    }

    /// Register raw entries in order, then attach interfaces.
    pub fn from_raw(raw_types: &[RawType]) -> Result<Self, TypeSystemError> {
        let mut types = Self::new();
        let mut handles = Vec::with_capacity(raw_types.len());

        for raw in raw_types {
            handles.push(types.register_raw(raw)?);
        }

        for (raw, &ty) in raw_types.iter().zip(&handles) {
            let interfaces = raw
                .interfaces
                .iter()
                .map(|name| types.resolve(name))
                .collect::<Result<Vec<_>, _>>()?;
            types.add_interfaces(ty, &interfaces);
        }

        Ok(types)
    }

    fn register_raw(&mut self, raw: &RawType) -> Result<NativeType, TypeSystemError> {
        match (&raw.name, &raw.instance_of, &raw.array_of) {
            (None, None, Some(element)) => {
                let element = self.resolve(element)?;
                self.array_of(element)
            }
            (None, Some(definition), None) => {
                let definition = self.resolve(definition)?;
                let arguments = raw
                    .arguments
                    .iter()
                    .map(|name| self.resolve(name))
                    .collect::<Result<Vec<_>, _>>()?;
                self.instantiate(definition, &arguments)
            }
            (Some(name), None, None) => {
                let mut decl =
                    TypeDecl::with_category(name.clone(), raw.category).generic(raw.parameters);
                if let Some(known) = raw.known {
                    decl = decl.known(known);
                }
                if let Some(kind) = raw.schema {
                    decl = decl.schema(kind);
                }
                self.define(decl)
            }
            _ => Err(TypeSystemError::InvalidEntry(format!(
                "expected exactly one of `name`, `instance_of`, `array_of` ({raw:?})"
            ))),
        }
    }

    fn resolve(&self, name: &str) -> Result<NativeType, TypeSystemError> {
        self.lookup(name)
            .ok_or_else(|| TypeSystemError::UnknownType(name.to_owned()))
    }
}
