use crate::test_utils;
use crate::types::TypeAnnotation;

fn article_field_annotation(field_name: &str) -> TypeAnnotation {
    let schema = test_utils::feed_schema();
    schema.object_type_named("Article")
        .expect("Article type is defined")
        .field(field_name)
        .expect("field is defined")
        .type_annotation()
        .clone()
}

#[test]
fn nullable_list_of_nonnull_items() {
    let annot = article_field_annotation("tags");

    let list_annot = annot.as_list_annotation()
        .expect("tags is a list annotation");
    assert!(list_annot.is_nullable());

    let item_annot = list_annot.inner_type().as_named_annotation()
        .expect("tags items are named annotations");
    assert!(!item_annot.is_nullable());
    assert_eq!(item_annot.name(), "String");

    assert_eq!(annot.to_graphql_string(), "[String!]");
}

#[test]
fn nonnull_list_of_nullable_items() {
    let annot = article_field_annotation("related");

    let list_annot = annot.as_list_annotation()
        .expect("related is a list annotation");
    assert!(!list_annot.is_nullable());

    let item_annot = list_annot.inner_type().as_named_annotation()
        .expect("related items are named annotations");
    assert!(item_annot.is_nullable());
    assert_eq!(item_annot.name(), "Article");

    assert_eq!(annot.to_graphql_string(), "[Article]!");
}

#[test]
fn named_annotation_nullability() {
    let body_annot = article_field_annotation("body");
    assert!(body_annot.is_nullable());
    assert_eq!(body_annot.to_graphql_string(), "String");

    let id_annot = article_field_annotation("id");
    assert!(!id_annot.is_nullable());
    assert_eq!(id_annot.to_graphql_string(), "ID!");
}

#[test]
fn innermost_named_annotation_unwraps_all_wrappers() {
    let annot = article_field_annotation("related");
    assert_eq!(annot.innermost_named_annotation().name(), "Article");
}
