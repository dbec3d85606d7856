use super::{Shape, is_schema_type, strip_native};
use crate::test_utils::Fixture;

#[test]
fn classify_wrappers() {
    let f = Fixture::new();

    assert_eq!(
        Shape::of(&f.types, f.ty("ListType<StringType>")),
        Shape::List(f.ty("StringType"))
    );
    assert_eq!(
        Shape::of(&f.types, f.ty("NonNullType<String>")),
        Shape::NonNull(f.ty("String"))
    );
    assert_eq!(
        Shape::of(&f.types, f.ty("NativeType<String>")),
        Shape::Native(f.ty("String"))
    );
}

#[test]
fn classify_leaves() {
    let f = Fixture::new();

    assert_eq!(Shape::of(&f.types, f.ty("String")), Shape::Leaf);
    assert_eq!(Shape::of(&f.types, f.ty("List<String>")), Shape::Leaf);
    assert_eq!(Shape::of(&f.types, f.ty("Nullable<Int32>")), Shape::Leaf);
    assert_eq!(Shape::of(&f.types, f.ty("String[]")), Shape::Leaf);
}

#[test]
fn open_wrapper_definition_is_leaf() {
    let f = Fixture::new();

    assert_eq!(Shape::of(&f.types, f.ty("ListType")), Shape::Leaf);
    assert_eq!(Shape::of(&f.types, f.ty("NativeType")), Shape::Leaf);
}

#[test]
fn shape_argument() {
    let f = Fixture::new();
    let string = f.ty("String");

    assert_eq!(Shape::List(string).argument(), Some(string));
    assert_eq!(Shape::NonNull(string).argument(), Some(string));
    assert_eq!(Shape::Native(string).argument(), Some(string));
    assert_eq!(Shape::Leaf.argument(), None);
}

#[test]
fn strip_native_layers() {
    let f = Fixture::new();
    let string = f.ty("String");

    assert_eq!(strip_native(&f.types, f.ty("NativeType<String>")), string);
    assert_eq!(strip_native(&f.types, f.ty("NativeType<NativeType<String>>")), string);
    assert_eq!(strip_native(&f.types, string), string);
}

#[test]
fn strip_native_is_idempotent() {
    let f = Fixture::new();
    let twice = f.ty("NativeType<NativeType<String>>");

    let once = strip_native(&f.types, twice);

    assert_eq!(strip_native(&f.types, once), once);
}

#[test]
fn strip_native_keeps_inner_wrappers() {
    let f = Fixture::new();

    assert_eq!(
        strip_native(&f.types, f.ty("NonNullType<NativeType<String>>")),
        f.ty("NonNullType<NativeType<String>>")
    );
}

#[test]
fn schema_classification() {
    let f = Fixture::new();

    assert!(is_schema_type(&f.types, f.ty("StringType")));
    assert!(is_schema_type(&f.types, f.ty("ListType<StringType>")));
    assert!(is_schema_type(
        &f.types,
        f.ty("NonNullType<ListType<NonNullType<StringType>>>")
    ));
    assert!(is_schema_type(&f.types, f.ty("NativeType<StringType>")));
    assert!(is_schema_type(&f.types, f.ty("ListType<NativeType<StringType>>")));
}

#[test]
fn native_classification() {
    let f = Fixture::new();

    assert!(!is_schema_type(&f.types, f.ty("String")));
    assert!(!is_schema_type(&f.types, f.ty("NonNullType<String>")));
    assert!(!is_schema_type(&f.types, f.ty("NativeType<String>")));
    assert!(!is_schema_type(&f.types, f.ty("List<String>")));
    assert!(!is_schema_type(&f.types, f.ty("ListType")));
}
