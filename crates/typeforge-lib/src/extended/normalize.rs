//! Descriptor construction.

use std::cell::RefCell;
use std::collections::HashSet;

use typeforge_core::{KnownDefinition, NativeType, TypeSystem};

use super::collections::{inner_list_type, supported_collection_argument};
use super::shape::{Shape, is_schema_type, strip_native};
use super::{ExtendedType, ExtendedTypeKind, Facts};
use crate::{Error, Result};

/// Construction options.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NormalizeOptions {
    /// Give `Unknown` array descriptors a single type argument equal to their
    /// element type. On by default.
    pub legacy_array_arguments: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            legacy_array_arguments: true,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn legacy_array_arguments(mut self, value: bool) -> Self {
        self.legacy_array_arguments = value;
        self
    }
}

/// Builds canonical descriptors against a host type system.
///
/// A type that is, directly or through other collections, its own element
/// (`Node : IList<Node>`) is built once as a list; the nested occurrence
/// stops at a descriptor without list detection. Such types are reported by
/// [`Normalizer::cycles`].
pub struct Normalizer<'t, T: TypeSystem + ?Sized> {
    types: &'t T,
    options: NormalizeOptions,
    /// Types whose descriptor is under construction.
    building: RefCell<HashSet<NativeType>>,
    cycles: RefCell<Vec<NativeType>>,
}

/// Constructor input: what the calling path already knows.
pub(crate) struct Draft {
    pub ty: NativeType,
    pub is_nullable: bool,
    pub kind: ExtendedTypeKind,
    pub is_list: bool,
    pub is_named_type: bool,
    pub type_arguments: Option<Vec<ExtendedType>>,
    pub original_type: Option<NativeType>,
    pub element_type: Option<ExtendedType>,
}

impl Draft {
    fn new(ty: NativeType, is_nullable: bool, kind: ExtendedTypeKind) -> Self {
        Self {
            ty,
            is_nullable,
            kind,
            is_list: false,
            is_named_type: false,
            type_arguments: None,
            original_type: None,
            element_type: None,
        }
    }

    fn named(mut self) -> Self {
        self.is_named_type = true;
        self
    }

    fn list(mut self, is_list: bool) -> Self {
        self.is_list = is_list;
        self
    }

    fn arguments(mut self, arguments: Vec<ExtendedType>) -> Self {
        self.type_arguments = Some(arguments);
        self
    }

    fn original(mut self, original: NativeType) -> Self {
        self.original_type = Some(original);
        self
    }

    fn element(mut self, element: Option<ExtendedType>) -> Self {
        self.element_type = element;
        self
    }
}

/// One structural layer of a schema wrapper chain.
struct Layer {
    ty: NativeType,
    is_list: bool,
}

impl<'t, T: TypeSystem + ?Sized> Normalizer<'t, T> {
    pub fn new(types: &'t T) -> Self {
        Self {
            types,
            options: NormalizeOptions::default(),
            building: RefCell::new(HashSet::new()),
            cycles: RefCell::new(Vec::new()),
        }
    }

    pub fn with_options(mut self, options: NormalizeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> NormalizeOptions {
        self.options
    }

    pub fn types(&self) -> &'t T {
        self.types
    }

    /// Types met again while their own descriptor was being built, in
    /// first-seen order.
    pub fn cycles(&self) -> Vec<NativeType> {
        self.cycles.borrow().clone()
    }

    /// Canonical descriptor for a native type.
    pub fn normalize(&self, ty: NativeType) -> ExtendedType {
        if is_schema_type(self.types, ty) {
            self.from_schema_type(ty)
        } else {
            self.from_system_type(ty)
        }
    }

    /// Fresh canonical descriptor from an `Extended` one.
    ///
    /// Pass-through wrappers are stripped from the descriptor and from every
    /// type argument. The result is tagged `Extended`, so re-deriving it again
    /// yields an equal descriptor.
    pub fn rederive(&self, source: &ExtendedType) -> Result<ExtendedType> {
        if source.kind() != ExtendedTypeKind::Extended {
            return Err(Error::NotExtended(source.kind()));
        }

        let source = self.strip_native_extended(source);
        let arguments = source
            .type_arguments()
            .iter()
            .map(|argument| self.rederive(argument))
            .collect::<Result<Vec<_>>>()?;

        let ty = source.ty();
        let inner = if source.is_array() {
            None
        } else {
            supported_collection_argument(self.types, ty, true)
        };

        let element = if source.is_array() {
            source.element_type().cloned()
        } else {
            inner.map(|inner| match source.type_arguments() {
                [argument] if argument.ty() == inner || argument.original_type() == inner => {
                    argument.clone()
                }
                _ => self.normalize(inner),
            })
        };

        let draft = Draft::new(ty, source.is_nullable(), ExtendedTypeKind::Extended)
            .list(inner.is_some())
            .arguments(arguments)
            .original(source.original_type())
            .element(element);
        Ok(self.build(draft))
    }

    /// Descriptor for a host-annotated type.
    pub fn extended(
        &self,
        ty: NativeType,
        is_nullable: bool,
        type_arguments: Vec<ExtendedType>,
    ) -> ExtendedType {
        self.build(Draft::new(ty, is_nullable, ExtendedTypeKind::Extended).arguments(type_arguments))
    }

    /// Interface set of `ty`, computed through the native path on first
    /// access and memoized on the descriptor.
    pub fn interfaces<'e>(&self, ty: &'e ExtendedType) -> &'e [ExtendedType] {
        ty.interfaces_with(|| {
            let interfaces = self.types.interfaces(ty.ty());
            tracing::debug!(
                ty = self.types.name(ty.ty()),
                count = interfaces.len(),
                "computing interface set"
            );
            interfaces
                .iter()
                .map(|&iface| self.from_system_type(iface))
                .collect()
        })
    }

    fn from_system_type(&self, ty: NativeType) -> ExtendedType {
        let types = self.types;
        let ty = strip_native(types, ty);

        if types.is_value_type(ty) {
            if types.is_nullable_value_wrapper(ty) {
                if let Some(&argument) = types.generic_arguments(ty).first() {
                    return self.build(
                        Draft::new(argument, true, ExtendedTypeKind::Unknown).original(ty),
                    );
                }
            }
            return self.build(Draft::new(ty, false, ExtendedTypeKind::Unknown));
        }

        if let Shape::NonNull(argument) = Shape::of(types, ty) {
            let argument = strip_native(types, argument);
            return self.build(Draft::new(argument, false, ExtendedTypeKind::Unknown));
        }

        self.build(Draft::new(ty, true, ExtendedTypeKind::Unknown))
    }

    fn from_schema_type(&self, ty: NativeType) -> ExtendedType {
        let mut layers = Vec::new();
        let mut current = ty;
        loop {
            match Shape::of(self.types, current) {
                Shape::Native(inner) => current = inner,
                Shape::List(inner) => {
                    layers.push(Layer {
                        ty: current,
                        is_list: true,
                    });
                    current = inner;
                }
                Shape::NonNull(inner) => {
                    layers.push(Layer {
                        ty: current,
                        is_list: false,
                    });
                    current = inner;
                }
                Shape::Leaf => break,
            }
        }

        let is_nullable = consume_non_null(&mut layers);
        let mut result = self.build(
            Draft::new(current, is_nullable, ExtendedTypeKind::Schema).named(),
        );

        while let Some(layer) = layers.pop() {
            let is_nullable = consume_non_null(&mut layers);
            result = self.build(
                Draft::new(layer.ty, is_nullable, ExtendedTypeKind::Schema)
                    .list(layer.is_list)
                    .arguments(vec![result]),
            );
        }

        result
    }

    fn build(&self, mut draft: Draft) -> ExtendedType {
        let types = self.types;
        let ty = draft.ty;
        let is_array = types.is_array(ty);
        let is_generic = types.is_generic(ty);

        let entered = self.building.borrow_mut().insert(ty);
        if !entered {
            self.record_cycle(ty);
        }

        let mut is_list = draft.is_list;
        let mut inner = None;
        if entered && !is_list && !is_array && draft.kind != ExtendedTypeKind::Schema {
            inner = inner_list_type(types, ty, false);
            is_list = inner.is_some();
        }

        let type_arguments = match draft.type_arguments.take() {
            Some(arguments) => arguments,
            None if draft.kind != ExtendedTypeKind::Unknown => Vec::new(),
            None if is_generic => types
                .generic_arguments(ty)
                .iter()
                .map(|&argument| self.normalize(argument))
                .collect(),
            None if is_array && self.options.legacy_array_arguments => types
                .element_type(ty)
                .map(|element| vec![self.normalize(element)])
                .unwrap_or_default(),
            None => Vec::new(),
        };

        let element_type = match draft.element_type.take() {
            Some(element) => Some(element),
            None if is_array => types.element_type(ty).map(|element| self.normalize(element)),
            None if is_list => inner
                .or_else(|| inner_list_type(types, ty, true))
                .map(|element| self.normalize(element)),
            None => None,
        };

        if entered {
            self.building.borrow_mut().remove(&ty);
        }

        let definition = if is_generic {
            types.generic_definition(ty)
        } else {
            None
        };

        tracing::trace!(
            ty = types.name(ty),
            kind = %draft.kind,
            nullable = draft.is_nullable,
            list = is_list,
            array = is_array,
            "built descriptor"
        );

        let facts = Facts {
            definition,
            is_list,
            is_array,
            is_generic,
            is_interface: types.is_interface(ty),
            type_arguments,
            element_type,
        };
        ExtendedType::from_parts(draft, facts)
    }

    fn record_cycle(&self, ty: NativeType) {
        let mut cycles = self.cycles.borrow_mut();
        if !cycles.contains(&ty) {
            tracing::debug!(ty = self.types.name(ty), "element cycle, list detection skipped");
            cycles.push(ty);
        }
    }

    fn strip_native_extended<'e>(&self, ty: &'e ExtendedType) -> &'e ExtendedType {
        let mut current = ty;
        loop {
            let is_native = current
                .definition()
                .and_then(|def| self.types.known_definition(def))
                == Some(KnownDefinition::NativeWrapper);
            match current.type_arguments().first() {
                Some(argument) if is_native => current = argument,
                _ => return current,
            }
        }
    }
}

/// Pop a non-null layer directly above the current one. Returns the
/// resulting nullability.
fn consume_non_null(layers: &mut Vec<Layer>) -> bool {
    if layers.last().is_some_and(|layer| !layer.is_list) {
        layers.pop();
        return false;
    }
    true
}
