use indoc::indoc;
use typeforge_core::DynamicTypeSystem;

use super::types_loader::parse_types;

pub const UNIVERSE: &str = indoc! {r#"
    [
      { "name": "Char", "category": "value" },
      { "name": "Int32", "category": "value" },
      { "name": "Nullable", "category": "value", "parameters": 1, "known": "nullable_value" },
      { "name": "IEnumerable", "category": "interface", "parameters": 1, "known": "enumerable" },
      { "name": "List", "parameters": 1, "known": "concrete_list" },
      { "name": "NativeType", "parameters": 1, "known": "native_wrapper" },
      { "name": "ListType", "parameters": 1, "known": "list_wrapper" },
      { "name": "NonNullType", "parameters": 1, "known": "non_null_wrapper" },
      { "name": "String", "interfaces": ["IEnumerable<Char>"] },
      { "name": "StringType", "schema": "scalar" },
      { "instance_of": "IEnumerable", "arguments": ["Char"] },
      { "instance_of": "IEnumerable", "arguments": ["String"] },
      { "instance_of": "List", "arguments": ["String"], "interfaces": ["IEnumerable<String>"] },
      { "array_of": "String", "interfaces": ["IEnumerable<String>"] },
      { "instance_of": "Nullable", "arguments": ["Int32"] },
      { "instance_of": "NativeType", "arguments": ["String"] },
      { "instance_of": "NonNullType", "arguments": ["StringType"] },
      { "instance_of": "ListType", "arguments": ["NonNullType<StringType>"] },
      { "instance_of": "NonNullType", "arguments": ["ListType<NonNullType<StringType>>"] }
    ]
"#};

pub fn universe() -> DynamicTypeSystem {
    parse_types("types.json", UNIVERSE).unwrap()
}
