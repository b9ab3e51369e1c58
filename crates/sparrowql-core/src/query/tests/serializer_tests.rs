use crate::query::OperationKind;
use crate::query::ParamValue;
use crate::query::QueryNode;
use crate::query::QuerySpec;
use crate::query::serialize;
use crate::query::SerializeError;
use crate::query::SerializeOptions;
use crate::shape::project;
use crate::test_utils;
use indexmap::IndexMap;
use proptest::prelude::*;

fn params(entries: Vec<(&str, ParamValue)>) -> IndexMap<String, ParamValue> {
    entries.into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

fn map(entries: Vec<(&str, QuerySpec)>) -> QuerySpec {
    QuerySpec::Map(
        entries.into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect(),
    )
}

#[test]
fn pretty_query_with_literal_params() {
    let root = QueryNode::of_field("feed")
        .with_params(params(vec![
            ("a", ParamValue::Int(1)),
            ("b", ParamValue::List(vec![
                ParamValue::Bool(true),
                ParamValue::Object(params(vec![("c", ParamValue::from("x"))])),
            ])),
        ]))
        .with_query(QuerySpec::from("id"));

    let document = serialize(&root.into(), &SerializeOptions::pretty())
        .expect("serialization succeeds");
    assert_eq!(document.text(), "\
query {
  feed(a: 1, b: [true, {c: \"x\"}]) {
    id
  }
}");
    assert!(document.variables().is_empty());
}

#[test]
fn compact_mode_collapses_optional_whitespace() {
    let root = QueryNode::of_field("feed")
        .with_params(params(vec![
            ("a", ParamValue::Int(1)),
            ("b", ParamValue::List(vec![
                ParamValue::Bool(true),
                ParamValue::Object(params(vec![("c", ParamValue::from("x"))])),
            ])),
        ]))
        .with_query(QuerySpec::from("id"));

    let document = serialize(&root.into(), &SerializeOptions::default())
        .expect("serialization succeeds");
    assert_eq!(document.text(), "query{\nfeed(a:1,b:[true,{c:\"x\"}]){\nid\n}\n}");
}

#[test]
fn root_map_serializes_each_key_as_a_root_field() {
    let query = map(vec![
        ("postArticle", QuerySpec::Node(
            QueryNode::of_field("postArticle")
                .with_params(params(vec![("title", ParamValue::from("t"))]))
                .with_query(QuerySpec::from("id")),
        )),
        ("draft", QuerySpec::Node(
            QueryNode::of_field("postArticle")
                .with_params(params(vec![("body", ParamValue::from("b"))]))
                .with_query(QuerySpec::from("id")),
        )),
    ]);
    let options = SerializeOptions {
        operation: OperationKind::Mutation,
        ..SerializeOptions::pretty()
    };

    let document = serialize(&query, &options)
        .expect("multi-root serialization succeeds");
    assert_eq!(document.text(), "\
mutation {
  postArticle(title: \"t\") {
    id
  }
  draft: postArticle(body: \"b\") {
    id
  }
}");
}

#[test]
fn projection_accepted_specs_serialize_directly() {
    let schema = test_utils::feed_schema();
    let query = map(vec![
        ("feed", map(vec![
            ("id", QuerySpec::Take),
            ("author", map(vec![("name", QuerySpec::Take)])),
        ])),
        ("me", QuerySpec::from("name")),
    ]);

    project(&schema, schema.query_type(), &query)
        .expect("projection accepts the spec");
    let document = serialize(&query, &SerializeOptions::pretty())
        .expect("the same spec serializes");
    assert_eq!(document.text(), "\
query {
  feed {
    id
    author {
      name
    }
  }
  me {
    name
  }
}");
}

#[test]
fn mutation_with_variables_lifts_bindings() {
    let root = QueryNode::of_field("postArticle")
        .with_params(params(vec![("title", ParamValue::from("t"))]));
    let options = SerializeOptions {
        operation: OperationKind::Mutation,
        pretty: true,
        use_variables: true,
    };

    let document = serialize(&root.into(), &options)
        .expect("serialization succeeds");
    assert_eq!(document.text(), "\
mutation {
  postArticle(title: $title)
}");
    assert_eq!(
        document.variables(),
        &params(vec![("title", ParamValue::from("t"))]),
    );
}

#[test]
fn aliases_render_only_when_key_and_field_differ() {
    let root = QueryNode::of_field("feed")
        .with_query(map(vec![
            ("writer", QuerySpec::Node(QueryNode::of_field("author"))),
            ("title", QuerySpec::Node(QueryNode::of_field("title"))),
        ]));

    let document = serialize(&root.into(), &SerializeOptions::pretty())
        .expect("serialization succeeds");
    assert_eq!(document.text(), "\
query {
  feed {
    writer: author
    title
  }
}");
}

#[test]
fn string_and_string_array_subqueries_render_verbatim() {
    let root = QueryNode::of_field("feed")
        .with_query(QuerySpec::fields(["id", "title"]));

    let document = serialize(&root.into(), &SerializeOptions::pretty())
        .expect("serialization succeeds");
    assert_eq!(document.text(), "\
query {
  feed {
    id
    title
  }
}");
}

#[test]
fn nested_map_subqueries_nest_braces() {
    let root = QueryNode::of_field("feed")
        .with_query(map(vec![
            ("id", QuerySpec::Take),
            ("author", map(vec![("name", QuerySpec::Take)])),
        ]));

    let document = serialize(&root.into(), &SerializeOptions::pretty())
        .expect("serialization succeeds");
    assert_eq!(document.text(), "\
query {
  feed {
    id
    author {
      name
    }
  }
}");
}

#[test]
fn non_finite_floats_encode_as_null() {
    let root = QueryNode::of_field("feed")
        .with_params(params(vec![
            ("a", ParamValue::Float(f64::NAN)),
            ("b", ParamValue::Float(f64::INFINITY)),
            ("c", ParamValue::Float(1.5)),
        ]));

    let document = serialize(&root.into(), &SerializeOptions::pretty())
        .expect("serialization succeeds");
    assert_eq!(document.text(), "\
query {
  feed(a: null, b: null, c: 1.5)
}");
}

#[test]
fn invalid_param_keys_fail_fast() {
    let root = QueryNode::of_field("feed")
        .with_params(params(vec![("bad key", ParamValue::Int(1))]));

    let result = serialize(&root.into(), &SerializeOptions::pretty());
    assert_eq!(result, Err(SerializeError::InvalidParamKey {
        key: "bad key".to_owned(),
    }));
}

#[test]
fn nested_object_param_keys_are_validated_too() {
    let root = QueryNode::of_field("feed")
        .with_params(params(vec![
            ("filter", ParamValue::Object(params(vec![
                ("bad-key", ParamValue::Int(1)),
            ]))),
        ]));

    let result = serialize(&root.into(), &SerializeOptions::pretty());
    assert_eq!(result, Err(SerializeError::InvalidParamKey {
        key: "bad-key".to_owned(),
    }));
}

#[test]
fn duplicate_variable_names_are_rejected() {
    let root = QueryNode::of_field("feed")
        .with_params(params(vec![("id", ParamValue::Int(1))]))
        .with_query(map(vec![
            ("article", QuerySpec::Node(
                QueryNode::of_field("article")
                    .with_params(params(vec![("id", ParamValue::Int(2))])),
            )),
        ]));
    let options = SerializeOptions {
        use_variables: true,
        ..SerializeOptions::pretty()
    };

    let result = serialize(&root.into(), &options);
    assert_eq!(result, Err(SerializeError::DuplicateVariable {
        name: "id".to_owned(),
    }));
}

#[test]
fn roots_requesting_no_field_are_rejected() {
    for query in [
        QuerySpec::Take,
        QuerySpec::Fields(vec![]),
        map(vec![]),
        QuerySpec::Node(QueryNode::default()),
    ] {
        let result = serialize(&query, &SerializeOptions::pretty());
        assert_eq!(
            result,
            Err(SerializeError::MissingRootField),
            "field-less root {query:?} should be rejected",
        );
    }
}

fn subquery_strategy() -> impl Strategy<Value = QuerySpec> {
    let leaf = prop_oneof![
        Just(QuerySpec::Take),
        "[a-z]{1,8}".prop_map(QuerySpec::Field),
        proptest::collection::vec("[a-z]{1,8}", 1..4)
            .prop_map(QuerySpec::Fields),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        proptest::collection::vec(("[a-z]{1,8}", inner), 1..4)
            .prop_map(|entries| QuerySpec::Map(entries.into_iter().collect()))
    })
}

proptest! {
    // Any serialized specification must come out syntactically well formed:
    // braces balanced, never negative depth.
    #[test]
    fn serialized_text_has_balanced_braces(subquery in subquery_strategy()) {
        let root = QueryNode::of_field("root").with_query(subquery);
        let document = serialize(&root.into(), &SerializeOptions::pretty())
            .expect("serialization succeeds");

        let mut depth: i64 = 0;
        for c in document.text().chars() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    prop_assert!(depth >= 0);
                }
                _ => (),
            }
        }
        prop_assert_eq!(depth, 0);
    }
}
