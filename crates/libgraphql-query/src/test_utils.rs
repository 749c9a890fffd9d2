use crate::schema::SchemaIndex;

/// A small storefront schema with object, list, connection, enum, union and
/// interface fields.
pub(crate) const SHOP_SCHEMA_SDL: &str = r#"
schema {
  query: QueryRoot
}

type QueryRoot {
  collection(id: ID!): Collection
  node(id: ID!): Node
  product(id: ID!): Product
  search(query: String!): [SearchResult!]!
  shop: Shop!
}

interface Node {
  id: ID!
}

type Shop {
  collections(first: Int, after: String): CollectionConnection!
  currencyCode: CurrencyCode!
  name: String!
  products(first: Int, after: String): ProductConnection!
}

enum CurrencyCode {
  CAD
  USD
}

type Collection implements Node {
  handle: String!
  id: ID!
  products(first: Int): ProductConnection!
  title: String!
}

type CollectionConnection {
  edges: [CollectionEdge!]!
  pageInfo: PageInfo!
}

type CollectionEdge {
  cursor: String!
  node: Collection!
}

type Product implements Node {
  handle: String!
  id: ID!
  images: [Image!]!
  options: [ProductOption!]!
  tags: [String!]!
  title: String!
  variants(first: Int): ProductVariantConnection!
}

type ProductConnection {
  edges: [ProductEdge!]!
  pageInfo: PageInfo!
}

type ProductEdge {
  cursor: String!
  node: Product!
}

type ProductOption {
  id: ID!
  name: String!
  values: [String!]!
}

type ProductVariant implements Node {
  id: ID!
  price: Money!
  title: String!
}

type ProductVariantConnection {
  edges: [ProductVariantEdge!]!
  pageInfo: PageInfo!
}

type ProductVariantEdge {
  cursor: String!
  node: ProductVariant!
}

type Image {
  src: String!
}

type PageInfo {
  hasNextPage: Boolean!
  hasPreviousPage: Boolean!
}

union SearchResult = Collection | Product

scalar Money
"#;

pub(crate) fn shop_schema() -> SchemaIndex {
    SchemaIndex::builder()
        .load_sdl(SHOP_SCHEMA_SDL)
        .expect("shop schema SDL parses")
        .build()
        .expect("shop schema builds")
}
