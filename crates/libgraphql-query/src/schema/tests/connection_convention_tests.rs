use crate::schema::ConnectionConvention;
use crate::schema::SchemaIndexBuildError;
use crate::schema::SchemaIndex;
use crate::test_utils::SHOP_SCHEMA_SDL;
use crate::test_utils::shop_schema;
use crate::types::TypeAnnotation;
use crate::types::TypeDescriptor;
use crate::types::TypeKind;

type Result<T> = std::result::Result<T, SchemaIndexBuildError>;

#[test]
fn default_convention_matches_connection_suffix() -> Result<()> {
    let schema = shop_schema();
    let convention = ConnectionConvention::default();

    assert!(convention.is_connection(&TypeDescriptor::leaf("ProductConnection", TypeKind::Object)));
    assert!(!convention.is_connection(&TypeDescriptor::leaf("Product", TypeKind::Object)));
    assert!(schema.is_connection_type(schema.get("CollectionConnection").unwrap()));
    assert!(!schema.is_connection_type(schema.get("PageInfo").unwrap()));

    Ok(())
}

#[test]
fn bare_suffix_is_not_a_connection() {
    let convention = ConnectionConvention::default();

    assert!(!convention.is_connection(&TypeDescriptor::leaf("Connection", TypeKind::Object)));
}

#[test]
fn non_object_types_are_never_connections() {
    let conventions = [
        ConnectionConvention::default(),
        ConnectionConvention::EdgesAndPageInfo,
        ConnectionConvention::custom(|_| true),
    ];

    for convention in conventions {
        for kind in [TypeKind::Enum, TypeKind::Interface, TypeKind::Scalar, TypeKind::Union] {
            assert!(
                !convention.is_connection(&TypeDescriptor::leaf("FooConnection", kind)),
                "{convention:?} treated a {kind} as a connection",
            );
        }
    }
}

#[test]
fn edges_and_page_info_convention_inspects_fields() -> Result<()> {
    let convention = ConnectionConvention::EdgesAndPageInfo;

    let paginated =
        TypeDescriptor::builder("ProductPage", TypeKind::Object)
            .add_field("edges", TypeAnnotation::named("ProductEdge").into_list())?
            .add_field("pageInfo", TypeAnnotation::named("PageInfo"))?
            .build();
    let edges_only =
        TypeDescriptor::builder("ProductConnection", TypeKind::Object)
            .add_field("edges", TypeAnnotation::named("ProductEdge").into_list())?
            .build();

    assert!(convention.is_connection(&paginated));
    assert!(!convention.is_connection(&edges_only));

    Ok(())
}

#[test]
fn custom_suffix_changes_field_descriptors() -> Result<()> {
    let schema =
        SchemaIndex::builder()
            .connection_convention(ConnectionConvention::TypeNameSuffix("Edge".to_string()))
            .load_sdl(SHOP_SCHEMA_SDL)?
            .build()?;

    assert!(!schema.descriptor_for_field("products", "Shop").unwrap().is_connection());
    // List-typed fields are never connections, whatever the convention says.
    assert!(!schema.descriptor_for_field("edges", "ProductConnection").unwrap().is_connection());

    Ok(())
}

#[test]
fn custom_predicate_is_consulted() -> Result<()> {
    let schema =
        SchemaIndex::builder()
            .connection_convention(ConnectionConvention::custom(|type_| {
                type_.name() == "Shop"
            }))
            .load_sdl(SHOP_SCHEMA_SDL)?
            .build()?;

    assert!(schema.descriptor_for_field("shop", "QueryRoot").unwrap().is_connection());
    assert!(!schema.descriptor_for_field("products", "Shop").unwrap().is_connection());

    Ok(())
}

#[test]
fn schema_index_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SchemaIndex>();
}
