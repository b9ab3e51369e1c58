use crate::Schema;
use crate::SchemaBuildError;
use crate::test_utils;
use crate::types::GraphQLType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn builds_schema_with_default_root_names() -> Result<()> {
    let schema = Schema::builder()
        .load_str(test_utils::FEED_SCHEMA)?
        .build()?;

    assert_eq!(schema.query_type().name(), "Query");
    assert_eq!(
        schema.mutation_type().map(|mutation_type| mutation_type.name()),
        Some("Mutation"),
    );
    Ok(())
}

#[test]
fn classifies_definitions_into_type_buckets() -> Result<()> {
    let schema = test_utils::feed_schema();

    assert!(matches!(
        schema.type_named("Article"),
        Some(GraphQLType::Object(_)),
    ));
    assert!(matches!(
        schema.type_named("ArticleState"),
        Some(GraphQLType::Enum(_)),
    ));
    assert!(matches!(
        schema.type_named("SearchResult"),
        Some(GraphQLType::Union(_)),
    ));

    let union_type = schema.type_named("SearchResult")
        .and_then(GraphQLType::as_union)
        .expect("SearchResult is a union");
    assert_eq!(union_type.member_type_names(), ["Article", "User"]);
    Ok(())
}

#[test]
fn builtin_scalars_are_implicitly_declared() -> Result<()> {
    let schema = test_utils::feed_schema();
    for name in ["Int", "Float", "String", "Boolean", "ID"] {
        assert!(
            matches!(schema.type_named(name), Some(GraphQLType::Scalar(_))),
            "`{name}` should be a built-in scalar",
        );
    }
    Ok(())
}

#[test]
fn interface_definitions_flatten_into_object_bucket() -> Result<()> {
    let schema = Schema::builder()
        .load_str("
            type Query { node: Node }
            interface Node { id: ID! }
        ")?
        .build()?;

    let node_type = schema.object_type_named("Node")
        .expect("interface lands in the object bucket");
    assert!(node_type.field("id").is_some());
    Ok(())
}

#[test]
fn schema_definition_overrides_root_type_names() -> Result<()> {
    let schema = Schema::builder()
        .load_str("
            schema { query: Root }
            type Root { ok: Boolean! }
        ")?
        .build()?;

    assert_eq!(schema.query_type().name(), "Root");
    assert_eq!(schema.mutation_type(), None);
    Ok(())
}

#[test]
fn missing_query_type_fails_schema_build() -> Result<()> {
    let result = Schema::builder()
        .load_str("type Article { id: ID! }")?
        .build();

    assert!(matches!(
        result,
        Err(SchemaBuildError::QueryTypeNotDefined { type_name }) if type_name == "Query",
    ));
    Ok(())
}

#[test]
fn duplicate_type_names_fail_schema_build() -> Result<()> {
    let result = Schema::builder()
        .load_str("
            type Query { ok: Boolean }
            type Article { id: ID! }
            type Article { title: String }
        ");

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateTypeName { type_name }) if type_name == "Article",
    ));
    Ok(())
}

#[test]
fn redeclaring_a_builtin_scalar_is_not_a_conflict() -> Result<()> {
    let schema = Schema::builder()
        .load_str("
            scalar ID
            type Query { id: ID! }
        ")?
        .build()?;

    assert!(matches!(
        schema.type_named("ID"),
        Some(GraphQLType::Scalar(_)),
    ));
    Ok(())
}

#[test]
fn input_object_definitions_are_not_modeled() -> Result<()> {
    let schema = Schema::builder()
        .load_str("
            type Query { ok: Boolean }
            input ArticleFilter { state: String }
        ")?
        .build()?;

    assert!(schema.type_named("ArticleFilter").is_none());
    Ok(())
}
