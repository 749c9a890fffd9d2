use crate::operation::Query;
use crate::operation::SelectionSet;
use crate::schema::SchemaLookupError;
use crate::test_utils::shop_schema;

type Result<T> = std::result::Result<T, SchemaLookupError>;

#[test]
fn connection_with_arguments_and_node_selections() -> Result<()> {
    let schema = shop_schema();
    let query = Query::on_type(&schema, "Shop", |shop| {
        shop.add_connection_with("products", [("first", 10)], |node| node.add_field("id"))
    })?;

    assert_eq!(
        query.render(),
        "query { products (first: 10) { pageInfo { hasNextPage, hasPreviousPage }, \
        edges { cursor, node { id } } } }",
    );

    Ok(())
}

#[test]
fn connection_without_node_selections() -> Result<()> {
    let schema = shop_schema();
    let mut shop = SelectionSet::for_type(&schema, "Shop")?;
    shop.add_connection("products")?;

    assert_eq!(
        shop.render(),
        " { products { pageInfo { hasNextPage, hasPreviousPage }, \
        edges { cursor, node {  } } } }",
    );

    Ok(())
}

#[test]
fn connection_with_arguments_only() -> Result<()> {
    let schema = shop_schema();
    let mut shop = SelectionSet::for_type(&schema, "Shop")?;
    shop.add_connection_with_args("collections", [("first", 2)])?;

    let collections = shop.field("collections").unwrap();
    assert_eq!(collections.arguments().to_graphql_string(), " (first: 2)");
    assert_eq!(
        collections.selection_set().selections().iter()
            .filter_map(|selection| selection.as_field())
            .map(|field| field.name())
            .collect::<Vec<_>>(),
        vec!["pageInfo", "edges"],
    );

    Ok(())
}

#[test]
fn connection_shape_is_fixed_regardless_of_node_selections() -> Result<()> {
    let schema = shop_schema();
    let mut shop = SelectionSet::for_type(&schema, "Shop")?;
    shop.add_connection_selecting("products", |node| {
        node.add_field("title")?;
        node.add_field("handle")?;
        node.add_connection_with("variants", [("first", 1)], |variant| {
            variant.add_field("price")
        })
    })?;

    assert_eq!(
        shop.render(),
        " { products { pageInfo { hasNextPage, hasPreviousPage }, edges { cursor, \
        node { title, handle, variants (first: 1) { pageInfo { hasNextPage, \
        hasPreviousPage }, edges { cursor, node { price } } } } } } }",
    );

    let products = shop.field("products").unwrap().selection_set();
    let page_info = products.field("pageInfo").unwrap().selection_set();
    assert_eq!(page_info.render(), " { hasNextPage, hasPreviousPage }");
    let edges = products.field("edges").unwrap().selection_set();
    assert_eq!(edges.selections().len(), 2);
    assert!(edges.field("cursor").is_some());
    assert!(edges.field("node").is_some());

    Ok(())
}

#[test]
fn readding_a_connection_replaces_it_in_place() -> Result<()> {
    let schema = shop_schema();
    let mut shop = SelectionSet::for_type(&schema, "Shop")?;
    shop.add_connection_selecting("products", |node| node.add_field("id"))?;
    shop.add_field("name")?;
    shop.add_connection_with("products", [("first", 2)], |node| node.add_field("title"))?;

    assert_eq!(
        shop.render(),
        " { products (first: 2) { pageInfo { hasNextPage, hasPreviousPage }, \
        edges { cursor, node { title } } }, name }",
    );

    Ok(())
}

#[test]
fn failing_node_closure_inserts_nothing() -> Result<()> {
    let schema = shop_schema();
    let mut shop = SelectionSet::for_type(&schema, "Shop")?;

    let result = shop.add_connection_selecting("products", |node| node.add_field("bogus"));

    assert_eq!(result, Err(SchemaLookupError::UnknownField {
        field_name: "bogus".to_string(),
        parent_type_name: "Product".to_string(),
    }));
    assert!(shop.is_empty());

    Ok(())
}

#[test]
fn unknown_connection_field() -> Result<()> {
    let schema = shop_schema();
    let mut shop = SelectionSet::for_type(&schema, "Shop")?;

    let result = shop.add_connection("orders");

    assert_eq!(result, Err(SchemaLookupError::UnknownField {
        field_name: "orders".to_string(),
        parent_type_name: "Shop".to_string(),
    }));
    assert!(shop.is_empty());

    Ok(())
}

#[test]
fn non_connection_field_fails_on_missing_page_info() -> Result<()> {
    let schema = shop_schema();
    let mut root = SelectionSet::for_type(&schema, "QueryRoot")?;

    let result = root.add_connection("shop");

    assert_eq!(result, Err(SchemaLookupError::UnknownField {
        field_name: "pageInfo".to_string(),
        parent_type_name: "Shop".to_string(),
    }));
    assert!(root.is_empty());

    Ok(())
}
