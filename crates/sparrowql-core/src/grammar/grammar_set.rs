use crate::grammar::TypeGrammar;
use crate::Schema;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// The query grammars of every [`ObjectType`](crate::types::ObjectType) in a
/// [`Schema`], in schema declaration order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GrammarSet {
    pub(super) types: IndexMap<String, TypeGrammar>,
}

impl GrammarSet {
    /// Derive the grammar of every object type declared in `schema`.
    ///
    /// Driven by the finite field list of each type, never by type-graph
    /// traversal, so cyclic schemas always terminate.
    pub fn of(schema: &Schema) -> Self {
        let types: IndexMap<String, TypeGrammar> = schema.all_types().iter()
            .filter_map(|(name, graphql_type)| match graphql_type {
                GraphQLType::Object(object_type) => Some((
                    name.to_owned(),
                    TypeGrammar::of(schema, object_type),
                )),
                _ => None,
            })
            .collect();

        log::debug!("derived query grammars for {} object types", types.len());
        Self { types }
    }

    /// Look up the [`TypeGrammar`] for an object type by name.
    pub fn type_grammar(&self, type_name: &str) -> Option<&TypeGrammar> {
        self.types.get(type_name)
    }

    /// All derived [`TypeGrammar`]s, in schema declaration order.
    pub fn type_grammars(&self) -> &IndexMap<String, TypeGrammar> {
        &self.types
    }
}
