//! List detection over native descriptors.

use typeforge_core::{NativeType, TypeSystem};

use super::shape::Shape;

/// Whether `ty` is an array or list-shaped.
///
/// The bare enumerable interface counts only with `allow_enumerable`, and
/// only when `ty` is that interface itself.
pub fn is_list_type<T: TypeSystem + ?Sized>(
    types: &T,
    ty: NativeType,
    allow_enumerable: bool,
) -> bool {
    types.is_array(ty) || inner_list_type(types, ty, allow_enumerable).is_some()
}

/// Element type of a list-shaped descriptor.
///
/// Checked in order: the list wrapper, a supported concrete collection, a
/// supported collection interface, then the implemented interfaces.
pub fn inner_list_type<T: TypeSystem + ?Sized>(
    types: &T,
    ty: NativeType,
    allow_enumerable: bool,
) -> Option<NativeType> {
    if let Shape::List(argument) = Shape::of(types, ty) {
        return Some(argument);
    }

    if types.is_class(ty) {
        if let Some(argument) = supported_collection_argument(types, ty, false) {
            return Some(argument);
        }
    }

    if types.is_interface(ty) {
        if let Some(argument) = supported_collection_argument(types, ty, allow_enumerable) {
            return Some(argument);
        }
    }

    types
        .interfaces(ty)
        .iter()
        .find_map(|&iface| supported_collection_argument(types, iface, false))
}

/// Element argument of `ty` when its generic definition is a supported
/// collection.
pub fn supported_collection_argument<T: TypeSystem + ?Sized>(
    types: &T,
    ty: NativeType,
    allow_enumerable: bool,
) -> Option<NativeType> {
    let known = types.known_definition_of(ty)?;
    if !known.is_supported_collection(allow_enumerable) {
        return None;
    }
    types.generic_arguments(ty).first().copied()
}
