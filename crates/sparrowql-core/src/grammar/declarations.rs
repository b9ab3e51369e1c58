//! Emits the derived query grammars as TypeScript declarations, one
//! `<TypeName>Query` declaration per schema object type, for consumption by
//! a downstream compilation step.
//!
//! The textual form here is a tooling concern; the load-bearing contract is
//! the classification carried by [`GrammarSet`] itself.

use crate::grammar::FieldGrammar;
use crate::grammar::GrammarSet;
use crate::grammar::TypeGrammar;
use crate::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

/// Render the plain data declarations for every type in `schema`: enum value
/// unions, union member unions, and per-object interfaces with field
/// nullability rendered at each level.
pub fn data_type_declarations(schema: &Schema) -> String {
    let mut code: Vec<String> = vec![];

    for graphql_type in schema.all_types().values() {
        match graphql_type {
            GraphQLType::Scalar(scalar_type) => {
                // Built-in scalars map onto TS primitives directly.
                if !is_builtin_scalar(scalar_type.name()) {
                    code.push(format!(
                        "export type {} = unknown",
                        scalar_type.name(),
                    ));
                }
            }

            GraphQLType::Enum(enum_type) => {
                let values: Vec<String> = enum_type.values().iter()
                    .map(|value| format!("{value:?}"))
                    .collect();
                code.push(format!(
                    "export type {} = {}",
                    enum_type.name(),
                    join_union(&values),
                ));
            }

            GraphQLType::Union(union_type) => {
                let members: Vec<String> = union_type.member_type_names()
                    .iter()
                    .map(|member| ts_type_name(member))
                    .collect();
                code.push(format!(
                    "export type {} = {}",
                    union_type.name(),
                    join_union(&members),
                ));
            }

            GraphQLType::Object(object_type) => {
                code.push(format!("export interface {} {{", object_type.name()));
                for field in object_type.fields().values() {
                    code.push(format!(
                        "  {}: {}",
                        field.name(),
                        ts_type(field.type_annotation()),
                    ));
                }
                code.push("}".to_owned());
            }
        }
    }

    code.join("\n")
}

/// Render the query-grammar declarations for every object type in `schema`:
/// `<TypeName>Query` plus its `StandaloneFields`/`AliasFieldQuery`/
/// `QueryBase` companions, in schema declaration order.
pub fn query_type_declarations(
    schema: &Schema,
    grammars: &GrammarSet,
) -> String {
    let mut code: Vec<String> = vec![
        "type NonAliasQuery = true | string | string[] \
         | ({ field?: undefined } & { [key: string]: any })"
            .to_owned(),
    ];

    for grammar in grammars.type_grammars().values() {
        emit_type_grammar(schema, grammar, &mut code);
    }

    code.join("\n")
}

fn emit_type_grammar(
    schema: &Schema,
    grammar: &TypeGrammar,
    code: &mut Vec<String>,
) {
    let type_name = grammar.type_name();
    let query_name = format!("{type_name}Query");
    let base_name = format!("{type_name}QueryBase");
    let alias_name = format!("{type_name}AliasFieldQuery");
    let standalone_name = format!("{type_name}StandaloneFields");

    code.push(format!(
        "export type {query_name} = {standalone_name} \
         | Readonly<{standalone_name}>[]",
    ));
    code.push("  | (".to_owned());
    code.push(format!(
        "    {{ [key in keyof {base_name}]?: \
         key extends \"*\" ? true : {base_name}[key] | {alias_name} }}",
    ));
    code.push(format!(
        "    & {{ [key: string]: {alias_name} | NonAliasQuery }}",
    ));
    code.push("  )".to_owned());

    let standalone_names: Vec<String> = grammar.standalone_field_names()
        .map(|name| format!("{name:?}"))
        .collect();
    code.push(format!(
        "export type {standalone_name} = {}",
        join_union(&standalone_names),
    ));

    let alias_alternatives: Vec<String> = grammar.fields().values()
        .filter_map(|field_grammar| {
            let field = field_of(schema, type_name, field_grammar.name())?;
            let mut attrs = vec![
                format!("field: {:?}", field_grammar.name()),
            ];
            attrs.extend(field_query_attrs(schema, field, field_grammar));
            Some(format!("  | {{ {} }}", attrs.join("; ")))
        })
        .collect();
    if alias_alternatives.is_empty() {
        code.push(format!("export type {alias_name} = never"));
    } else {
        code.push(format!("export type {alias_name} ="));
        code.extend(alias_alternatives);
    }

    code.push(format!("export interface {base_name} {{"));
    for field_grammar in grammar.fields().values() {
        let Some(field) = field_of(schema, type_name, field_grammar.name())
        else {
            continue;
        };
        let mut alternatives: Vec<String> = vec![];
        if field_grammar.is_standalone() {
            alternatives.push("true".to_owned());
            if let Some(subquery_type) = field_grammar.subquery_type() {
                alternatives.push(subquery_ts_type(schema, subquery_type));
            }
        }
        let attrs = field_query_attrs(schema, field, field_grammar);
        if !attrs.is_empty() {
            alternatives.push(format!(
                "{{ field?: never; {} }}",
                attrs.join("; "),
            ));
        }
        code.push(format!(
            "  {}: {}",
            field_grammar.name(),
            join_union(&alternatives),
        ));
    }
    if grammar.accepts_wildcard() {
        code.push("  \"*\": true".to_owned());
    }
    code.push("}".to_owned());
}

/// The `query?:`/`params:` attributes a query value for `field` may carry.
/// Empty for a leaf field with no parameters.
fn field_query_attrs(
    schema: &Schema,
    field: &Field,
    field_grammar: &FieldGrammar,
) -> Vec<String> {
    let params_fields: Vec<String> = field.parameters().iter()
        .map(|param| format!(
            "{}: {}",
            param.name(),
            ts_type(param.type_annotation()),
        ))
        .collect();
    let subquery_type = field_grammar.subquery_type()
        .map(|type_name| subquery_ts_type(schema, type_name));

    if subquery_type.is_none() && params_fields.is_empty() {
        return vec![];
    }

    let mut attrs = vec![
        format!(
            "query?: {}",
            subquery_type.unwrap_or_else(|| "never".to_owned()),
        ),
    ];
    let params_marker =
        if field.has_required_parameters() { "" } else { "?" };
    let params_type = if params_fields.is_empty() {
        "never".to_owned()
    } else {
        format!("{{ {} }}", params_fields.join("; "))
    };
    attrs.push(format!("params{params_marker}: {params_type}"));
    attrs
}

/// The TS query type a sub-query on a field of type `type_name` conforms to.
/// For a union this is the union of its members' query types.
fn subquery_ts_type(schema: &Schema, type_name: &str) -> String {
    match schema.type_named(type_name) {
        Some(GraphQLType::Union(union_type)) => {
            let members: Vec<String> = union_type.member_type_names().iter()
                .map(|member| format!("{member}Query"))
                .collect();
            join_union(&members)
        }
        _ => format!("{type_name}Query"),
    }
}

fn ts_type(annot: &TypeAnnotation) -> String {
    match annot {
        TypeAnnotation::Named(named_annot) => {
            let rendered = ts_type_name(named_annot.name());
            if named_annot.is_nullable() {
                format!("{rendered} | null")
            } else {
                rendered
            }
        }
        TypeAnnotation::List(list_annot) => {
            let rendered = format!("({})[]", ts_type(list_annot.inner_type()));
            if list_annot.is_nullable() {
                format!("{rendered} | null")
            } else {
                rendered
            }
        }
    }
}

fn ts_type_name(name: &str) -> String {
    match name {
        "Boolean" => "boolean".to_owned(),
        "Float" | "Int" => "number".to_owned(),
        "ID" | "String" => "string".to_owned(),
        other => other.to_owned(),
    }
}

fn is_builtin_scalar(name: &str) -> bool {
    matches!(name, "Boolean" | "Float" | "ID" | "Int" | "String")
}

fn join_union(alternatives: &[String]) -> String {
    if alternatives.is_empty() {
        "never".to_owned()
    } else {
        alternatives.join(" | ")
    }
}

/// Resolve a grammar field back to its schema [`Field`]. `None` when the
/// supplied [`Schema`] is not the one the [`GrammarSet`] was derived from;
/// the emitters skip such fields rather than panic.
fn field_of<'schema>(
    schema: &'schema Schema,
    type_name: &str,
    field_name: &str,
) -> Option<&'schema Field> {
    schema.object_type_named(type_name)
        .and_then(|object_type| object_type.field(field_name))
}
