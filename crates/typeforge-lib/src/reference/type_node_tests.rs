use super::TypeNode;

fn non_null_list_of_non_null_string() -> TypeNode {
    TypeNode::non_null(TypeNode::list(TypeNode::non_null(TypeNode::named("String"))))
}

#[test]
fn display_uses_sdl_form() {
    assert_eq!(TypeNode::named("String").to_string(), "String");
    assert_eq!(non_null_list_of_non_null_string().to_string(), "[String!]!");
    assert_eq!(
        TypeNode::list(TypeNode::list(TypeNode::named("Int"))).to_string(),
        "[[Int]]"
    );
}

#[test]
fn non_null_does_not_stack() {
    let once = TypeNode::non_null(TypeNode::named("String"));
    let twice = TypeNode::non_null(once.clone());

    assert_eq!(once, twice);
    assert_eq!(twice.to_string(), "String!");
}

#[test]
fn structural_queries() {
    let node = non_null_list_of_non_null_string();

    assert!(node.is_non_null());
    assert!(node.is_list());
    assert_eq!(node.named_type(), "String");
    assert_eq!(node.nullable_type().to_string(), "[String!]");
    assert!(!TypeNode::named("String").is_list());
}

#[test]
fn nullability_overrides_outermost_first() {
    let node = non_null_list_of_non_null_string();

    assert_eq!(node.with_nullability(&[]).to_string(), "[String!]!");
    assert_eq!(node.with_nullability(&[true]).to_string(), "[String!]");
    assert_eq!(node.with_nullability(&[true, true]).to_string(), "[String]");
    assert_eq!(node.with_nullability(&[false, true]).to_string(), "[String]!");
}

#[test]
fn nullability_overrides_can_add_non_null() {
    let node = TypeNode::list(TypeNode::list(TypeNode::named("Int")));

    let rewritten = node.with_nullability(&[false, false, false]);

    assert_eq!(rewritten.to_string(), "[[Int!]!]!");
}

#[test]
fn extra_overrides_are_ignored() {
    let node = TypeNode::named("String");

    assert_eq!(node.with_nullability(&[false, true, true]).to_string(), "String!");
}
