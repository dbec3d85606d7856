use crate::{DynamicTypeSystem, KnownDefinition, SchemaKind, TypeDecl, TypeSystem, TypeSystemError};

fn sample() -> DynamicTypeSystem {
    let mut types = DynamicTypeSystem::new();
    types.define(TypeDecl::value("Int32")).unwrap();
    types.define(TypeDecl::class("String")).unwrap();
    types
        .define(
            TypeDecl::value("Nullable")
                .generic(1)
                .known(KnownDefinition::NullableValue),
        )
        .unwrap();
    types
        .define(
            TypeDecl::interface("IList")
                .generic(1)
                .known(KnownDefinition::List),
        )
        .unwrap();
    types
        .define(
            TypeDecl::class("List")
                .generic(1)
                .known(KnownDefinition::ConcreteList),
        )
        .unwrap();
    types
        .define(TypeDecl::class("StringType").schema(SchemaKind::Scalar))
        .unwrap();
    types
}

#[test]
fn define_and_lookup() {
    let types = sample();

    let string = types.lookup("String").unwrap();
    assert_eq!(types.name(string), "String");
    assert!(types.is_class(string));
    assert!(!types.is_value_type(string));
    assert!(!types.is_generic(string));
    assert!(types.lookup("Missing").is_none());
}

#[test]
fn define_rejects_duplicates() {
    let mut types = sample();

    let err = types.define(TypeDecl::class("String")).unwrap_err();
    assert!(matches!(err, TypeSystemError::DuplicateType(name) if name == "String"));
}

#[test]
fn instantiate_names_and_reuses() {
    let mut types = sample();
    let list = types.lookup("List").unwrap();
    let string = types.lookup("String").unwrap();

    let a = types.instantiate(list, &[string]).unwrap();
    let b = types.instantiate(list, &[string]).unwrap();

    assert_eq!(a, b);
    assert_eq!(types.name(a), "List<String>");
    assert!(types.is_generic(a));
    assert!(types.is_class(a));
    assert_eq!(types.generic_definition(a), Some(list));
    assert_eq!(types.generic_arguments(a), &[string]);
    assert_eq!(
        types.known_definition_of(a),
        Some(KnownDefinition::ConcreteList)
    );
}

#[test]
fn instantiate_checks_definition_and_arity() {
    let mut types = sample();
    let list = types.lookup("List").unwrap();
    let string = types.lookup("String").unwrap();

    let err = types.instantiate(string, &[string]).unwrap_err();
    assert!(matches!(err, TypeSystemError::NotGenericDefinition(_)));

    let err = types.instantiate(list, &[string, string]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "List expects 1 type argument(s), got 2"
    );
}

#[test]
fn open_definition_is_its_own_definition() {
    let types = sample();
    let list = types.lookup("List").unwrap();

    assert!(types.is_generic(list));
    assert_eq!(types.generic_definition(list), Some(list));
    assert!(types.generic_arguments(list).is_empty());
}

#[test]
fn nullable_value_wrapper_detection() {
    let mut types = sample();
    let nullable = types.lookup("Nullable").unwrap();
    let int32 = types.lookup("Int32").unwrap();

    let nullable_int = types.instantiate(nullable, &[int32]).unwrap();

    assert!(types.is_value_type(nullable_int));
    assert!(types.is_nullable_value_wrapper(nullable_int));
    assert!(!types.is_nullable_value_wrapper(int32));
}

#[test]
fn array_of_is_array_with_element() {
    let mut types = sample();
    let string = types.lookup("String").unwrap();

    let array = types.array_of(string).unwrap();

    assert_eq!(types.name(array), "String[]");
    assert!(types.is_array(array));
    assert!(types.is_class(array));
    assert_eq!(types.element_type(array), Some(string));
    assert_eq!(types.array_of(string).unwrap(), array);
}

#[test]
fn array_of_rejects_name_taken_by_declaration() {
    let mut types = sample();
    let string = types.lookup("String").unwrap();
    types.define(TypeDecl::class("String[]")).unwrap();

    let err = types.array_of(string).unwrap_err();

    assert_eq!(err.to_string(), "type declared twice: String[]");
}

#[test]
fn instantiate_rejects_name_taken_by_declaration() {
    let mut types = sample();
    let list = types.lookup("List").unwrap();
    let string = types.lookup("String").unwrap();
    let declared = types.define(TypeDecl::class("List<String>")).unwrap();

    let err = types.instantiate(list, &[string]).unwrap_err();

    assert_eq!(err.to_string(), "type declared twice: List<String>");
    assert_eq!(types.generic_definition(declared), None);
}

#[test]
fn add_interfaces_ignores_duplicates() {
    let mut types = sample();
    let ilist = types.lookup("IList").unwrap();
    let list = types.lookup("List").unwrap();
    let string = types.lookup("String").unwrap();
    let ilist_string = types.instantiate(ilist, &[string]).unwrap();
    let list_string = types.instantiate(list, &[string]).unwrap();

    types.add_interfaces(list_string, &[ilist_string]);
    types.add_interfaces(list_string, &[ilist_string]);

    assert_eq!(types.interfaces(list_string), &[ilist_string]);
    assert!(types.is_interface(ilist_string));
}

#[test]
fn schema_kind_is_inherited_by_instantiations() {
    let mut types = sample();
    let object = types
        .define(
            TypeDecl::class("ObjectType")
                .generic(1)
                .schema(SchemaKind::Object),
        )
        .unwrap();
    let string = types.lookup("String").unwrap();

    let object_string = types.instantiate(object, &[string]).unwrap();

    assert_eq!(types.schema_kind(object_string), Some(SchemaKind::Object));
    assert_eq!(
        types.schema_kind(types.lookup("StringType").unwrap()),
        Some(SchemaKind::Scalar)
    );
}

#[test]
fn trait_is_usable_through_reference() {
    fn count_interfaces(types: impl TypeSystem, ty: crate::NativeType) -> usize {
        types.interfaces(ty).len()
    }

    let types = sample();
    let string = types.lookup("String").unwrap();
    assert_eq!(count_interfaces(&types, string), 0);
}

#[test]
#[should_panic(expected = "not found")]
fn foreign_handle_panics() {
    let types = sample();
    types.name(crate::NativeType::from_raw(999));
}
