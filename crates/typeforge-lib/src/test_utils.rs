//! Fixture type universe shaped like a managed runtime with a schema layer.

use typeforge_core::{
    DynamicTypeSystem, KnownDefinition, NativeType, SchemaKind, TypeDecl, TypeSystem,
};

use crate::{ExtendedType, Normalizer};

pub struct Fixture {
    pub types: DynamicTypeSystem,
}

impl Fixture {
    pub fn new() -> Self {
        let mut types = DynamicTypeSystem::new();

        let int32 = types.define(TypeDecl::value("Int32")).unwrap();
        let char_ = types.define(TypeDecl::value("Char")).unwrap();
        let string = types.define(TypeDecl::class("String")).unwrap();
        types.define(TypeDecl::class("Foo")).unwrap();

        let nullable = generic(&mut types, TypeDecl::value("Nullable"), KnownDefinition::NullableValue);
        let enumerable = generic(&mut types, TypeDecl::interface("IEnumerable"), KnownDefinition::Enumerable);
        let collection = generic(&mut types, TypeDecl::interface("ICollection"), KnownDefinition::Collection);
        let read_only_list = generic(&mut types, TypeDecl::interface("IReadOnlyList"), KnownDefinition::ReadOnlyList);
        let ilist = generic(&mut types, TypeDecl::interface("IList"), KnownDefinition::List);
        let list = generic(&mut types, TypeDecl::class("List"), KnownDefinition::ConcreteList);
        let list_type = generic(&mut types, TypeDecl::class("ListType"), KnownDefinition::ListWrapper);
        let non_null_type = generic(&mut types, TypeDecl::class("NonNullType"), KnownDefinition::NonNullWrapper);
        let native_type = generic(&mut types, TypeDecl::class("NativeType"), KnownDefinition::NativeWrapper);

        let string_type = types
            .define(TypeDecl::class("StringType").schema(SchemaKind::Scalar))
            .unwrap();

        // String implements IEnumerable<Char> only.
        let enumerable_char = types.instantiate(enumerable, &[char_]).unwrap();
        types.add_interfaces(string, &[enumerable_char]);

        let enumerable_string = types.instantiate(enumerable, &[string]).unwrap();
        let collection_string = types.instantiate(collection, &[string]).unwrap();
        let read_only_list_string = types.instantiate(read_only_list, &[string]).unwrap();
        let ilist_string = types.instantiate(ilist, &[string]).unwrap();
        types.add_interfaces(collection_string, &[enumerable_string]);
        types.add_interfaces(read_only_list_string, &[enumerable_string]);
        types.add_interfaces(ilist_string, &[collection_string, enumerable_string]);

        let list_like = [ilist_string, collection_string, read_only_list_string, enumerable_string];
        let list_string = types.instantiate(list, &[string]).unwrap();
        types.add_interfaces(list_string, &list_like);
        let string_array = types.array_of(string).unwrap();
        types.add_interfaces(string_array, &list_like);

        // Custom class implementing a supported collection interface.
        let string_bag = types.define(TypeDecl::class("StringBag")).unwrap();
        types.add_interfaces(string_bag, &[collection_string, enumerable_string]);

        types.instantiate(nullable, &[int32]).unwrap();
        types.array_of(int32).unwrap();
        types.instantiate(list, &[list_string]).unwrap();

        let list_of_string_type = types.instantiate(list_type, &[string_type]).unwrap();
        let non_null_string_type = types.instantiate(non_null_type, &[string_type]).unwrap();
        let list_of_non_null = types.instantiate(list_type, &[non_null_string_type]).unwrap();
        types.instantiate(non_null_type, &[list_of_non_null]).unwrap();
        types.instantiate(non_null_type, &[list_of_string_type]).unwrap();
        let native_string_type = types.instantiate(native_type, &[string_type]).unwrap();
        types.instantiate(list_type, &[native_string_type]).unwrap();

        let native_string = types.instantiate(native_type, &[string]).unwrap();
        types.instantiate(native_type, &[native_string]).unwrap();
        types.instantiate(non_null_type, &[string]).unwrap();
        types.instantiate(non_null_type, &[native_string]).unwrap();
        types.instantiate(native_type, &[list_string]).unwrap();

        Self { types }
    }

    /// Handle for a fixture type by display name.
    pub fn ty(&self, name: &str) -> NativeType {
        self.types
            .lookup(name)
            .unwrap_or_else(|| panic!("fixture has no type `{name}`"))
    }

    pub fn normalizer(&self) -> Normalizer<'_, DynamicTypeSystem> {
        Normalizer::new(&self.types)
    }

    pub fn from_type(&self, name: &str) -> ExtendedType {
        ExtendedType::from_type(&self.types, self.ty(name))
    }

    /// Host-annotated `Extended` descriptor.
    pub fn extended(&self, name: &str, is_nullable: bool, arguments: Vec<ExtendedType>) -> ExtendedType {
        ExtendedType::extended(&self.types, self.ty(name), is_nullable, arguments)
    }

    pub fn name(&self, ty: &ExtendedType) -> &str {
        self.types.name(ty.ty())
    }

    pub fn dump(&self, ty: &ExtendedType) -> String {
        ty.printer(&self.types).dump()
    }
}

fn generic(types: &mut DynamicTypeSystem, decl: TypeDecl, known: KnownDefinition) -> NativeType {
    types.define(decl.generic(1).known(known)).unwrap()
}
