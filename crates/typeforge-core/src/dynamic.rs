//! Heap-backed host implementation of `TypeSystem`.
//!
//! Types are registered up front (declarations, generic instantiations,
//! arrays) and then only read. Handles are indices into the registry.

use std::collections::HashMap;

use crate::error::TypeSystemError;
use crate::interner::{Interner, Symbol};
use crate::{KnownDefinition, NativeType, SchemaKind, TypeSystem};

/// Runtime category of a declared type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    #[default]
    Class,
    Interface,
    Value,
}

/// Complete information about one registered type.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    pub name: Symbol,
    pub category: TypeCategory,
    /// Number of type parameters of an open generic definition, 0 otherwise.
    pub parameters: usize,
    /// Open definition of a constructed generic type.
    pub definition: Option<NativeType>,
    pub arguments: Vec<NativeType>,
    /// Element type of an array type.
    pub element: Option<NativeType>,
    pub interfaces: Vec<NativeType>,
    pub known: Option<KnownDefinition>,
    pub schema: Option<SchemaKind>,
}

impl TypeInfo {
    pub fn is_generic(&self) -> bool {
        self.parameters > 0 || self.definition.is_some()
    }
}

/// Declaration of a non-constructed type (plain or open generic definition).
#[derive(Debug, Clone)]
pub struct TypeDecl {
    name: String,
    category: TypeCategory,
    parameters: usize,
    known: Option<KnownDefinition>,
    schema: Option<SchemaKind>,
    interfaces: Vec<NativeType>,
}

impl TypeDecl {
    fn new(name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            name: name.into(),
            category,
            parameters: 0,
            known: None,
            schema: None,
            interfaces: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeCategory::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeCategory::Interface)
    }

    pub fn value(name: impl Into<String>) -> Self {
        Self::new(name, TypeCategory::Value)
    }

    pub fn with_category(name: impl Into<String>, category: TypeCategory) -> Self {
        Self::new(name, category)
    }

    /// Make this an open generic definition with `parameters` type parameters.
    pub fn generic(mut self, parameters: usize) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn known(mut self, known: KnownDefinition) -> Self {
        self.known = Some(known);
        self
    }

    pub fn schema(mut self, kind: SchemaKind) -> Self {
        self.schema = Some(kind);
        self
    }

    pub fn implements(mut self, interfaces: impl IntoIterator<Item = NativeType>) -> Self {
        self.interfaces.extend(interfaces);
        self
    }
}

/// Type registry for a hosting environment (dynamic/heap-allocated).
#[derive(Debug, Clone, Default)]
pub struct DynamicTypeSystem {
    types: Vec<TypeInfo>,
    names: HashMap<Symbol, NativeType>,
    interner: Interner,
}

impl DynamicTypeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plain type or an open generic definition.
    pub fn define(&mut self, decl: TypeDecl) -> Result<NativeType, TypeSystemError> {
        if self.lookup(&decl.name).is_some() {
            return Err(TypeSystemError::DuplicateType(decl.name));
        }

        let name = self.interner.intern_owned(decl.name);
        Ok(self.push(TypeInfo {
            name,
            category: decl.category,
            parameters: decl.parameters,
            definition: None,
            arguments: Vec::new(),
            element: None,
            interfaces: decl.interfaces,
            known: decl.known,
            schema: decl.schema,
        }))
    }

    /// Construct `definition<arguments...>`, reusing an existing instantiation.
    ///
    /// Fails when the name is already taken by a type that is not that
    /// instantiation.
    ///
    /// The constructed type inherits category and schema kind from its
    /// definition. Interfaces are attached separately via `add_interfaces`.
    pub fn instantiate(
        &mut self,
        definition: NativeType,
        arguments: &[NativeType],
    ) -> Result<NativeType, TypeSystemError> {
        let def = self.ensure_type(definition);
        let def_name = self.interner.resolve(def.name).to_owned();

        if def.parameters == 0 {
            return Err(TypeSystemError::NotGenericDefinition(def_name));
        }
        if def.parameters != arguments.len() {
            return Err(TypeSystemError::ArityMismatch {
                definition: def_name,
                expected: def.parameters,
                actual: arguments.len(),
            });
        }

        let (category, schema) = (def.category, def.schema);
        let rendered: Vec<&str> = arguments.iter().map(|&arg| self.name(arg)).collect();
        let name = format!("{def_name}<{}>", rendered.join(", "));

        if let Some(existing) = self.lookup(&name) {
            let info = self.ensure_type(existing);
            if info.definition == Some(definition) && info.arguments == arguments {
                return Ok(existing);
            }
            return Err(TypeSystemError::DuplicateType(name));
        }

        let name = self.interner.intern_owned(name);
        Ok(self.push(TypeInfo {
            name,
            category,
            parameters: 0,
            definition: Some(definition),
            arguments: arguments.to_vec(),
            element: None,
            interfaces: Vec::new(),
            known: None,
            schema,
        }))
    }

    /// Construct the single-dimension array type `element[]`, reusing an
    /// existing one.
    ///
    /// Fails when `element[]` is already taken by a type that is not that
    /// array.
    pub fn array_of(&mut self, element: NativeType) -> Result<NativeType, TypeSystemError> {
        let name = format!("{}[]", self.name(element));
        if let Some(existing) = self.lookup(&name) {
            if self.ensure_type(existing).element == Some(element) {
                return Ok(existing);
            }
            return Err(TypeSystemError::DuplicateType(name));
        }

        let name = self.interner.intern_owned(name);
        Ok(self.push(TypeInfo {
            name,
            category: TypeCategory::Class,
            parameters: 0,
            definition: None,
            arguments: Vec::new(),
            element: Some(element),
            interfaces: Vec::new(),
            known: None,
            schema: None,
        }))
    }

    /// Attach implemented interfaces to a registered type (duplicates ignored).
    pub fn add_interfaces(&mut self, ty: NativeType, interfaces: &[NativeType]) {
        self.ensure_type(ty);
        let info = &mut self.types[ty.index()];
        for &iface in interfaces {
            if !info.interfaces.contains(&iface) {
                info.interfaces.push(iface);
            }
        }
    }

    /// Find a registered type by its display name.
    pub fn lookup(&self, name: &str) -> Option<NativeType> {
        let sym = self.interner.get(name)?;
        self.names.get(&sym).copied()
    }

    pub fn get(&self, ty: NativeType) -> Option<&TypeInfo> {
        self.types.get(ty.index())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NativeType, &TypeInfo)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, info)| (NativeType::from_raw(i as u32), info))
    }

    fn push(&mut self, info: TypeInfo) -> NativeType {
        let ty = NativeType::from_raw(self.types.len() as u32);
        self.names.insert(info.name, ty);
        self.types.push(info);
        ty
    }
}

impl TypeSystem for DynamicTypeSystem {
    fn name(&self, ty: NativeType) -> &str {
        self.interner.resolve(self.ensure_type(ty).name)
    }

    fn is_generic(&self, ty: NativeType) -> bool {
        self.ensure_type(ty).is_generic()
    }

    fn generic_definition(&self, ty: NativeType) -> Option<NativeType> {
        let info = self.ensure_type(ty);
        if info.parameters > 0 {
            return Some(ty);
        }
        info.definition
    }

    fn generic_arguments(&self, ty: NativeType) -> &[NativeType] {
        &self.ensure_type(ty).arguments
    }

    fn is_array(&self, ty: NativeType) -> bool {
        self.ensure_type(ty).element.is_some()
    }

    fn element_type(&self, ty: NativeType) -> Option<NativeType> {
        self.ensure_type(ty).element
    }

    fn is_value_type(&self, ty: NativeType) -> bool {
        self.ensure_type(ty).category == TypeCategory::Value
    }

    fn is_class(&self, ty: NativeType) -> bool {
        self.ensure_type(ty).category == TypeCategory::Class
    }

    fn is_interface(&self, ty: NativeType) -> bool {
        self.ensure_type(ty).category == TypeCategory::Interface
    }

    fn interfaces(&self, ty: NativeType) -> &[NativeType] {
        &self.ensure_type(ty).interfaces
    }

    fn known_definition(&self, definition: NativeType) -> Option<KnownDefinition> {
        self.ensure_type(definition).known
    }

    fn schema_kind(&self, ty: NativeType) -> Option<SchemaKind> {
        self.ensure_type(ty).schema
    }
}
