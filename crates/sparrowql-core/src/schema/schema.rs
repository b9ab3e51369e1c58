use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a fully built and immutable GraphQL schema.
///
/// A [`Schema`] is pure data: it is built once (see [`SchemaBuilder`]) and is
/// then shared read-only by the grammar generator and the result-shape
/// projector. Multiple projections may run concurrently over the same
/// [`Schema`] with no coordination.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) query_type_name: String,
    pub(crate) types: IndexMap<String, GraphQLType>,
}

impl Schema {
    /// Returns all types defined within this [`Schema`], in declaration
    /// order.
    ///
    /// This map includes both types defined while building this [`Schema`]
    /// and the implicitly-defined built-in scalars (`Int`, `Float`,
    /// `String`, `Boolean`, `ID`).
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Look up a type declared within this [`Schema`] by name.
    pub fn type_named(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Look up an [`ObjectType`] declared within this [`Schema`] by name.
    ///
    /// Returns `None` if no such type exists *or* if the name resolves to a
    /// non-object type.
    pub fn object_type_named(&self, name: &str) -> Option<&ObjectType> {
        self.types.get(name).and_then(GraphQLType::as_object)
    }

    /// Returns this [`Schema`]'s query root [`ObjectType`].
    ///
    /// [`SchemaBuilder::build()`] guarantees this type exists, factoring in
    /// any `schema { query: ... }` root-name override.
    pub fn query_type(&self) -> &ObjectType {
        self.object_type_named(self.query_type_name.as_str())
            .expect("query type is present in schema")
    }

    /// Returns this [`Schema`]'s mutation root [`ObjectType`] (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type_name.as_ref().map(|name| {
            self.object_type_named(name.as_str())
                .expect("mutation type is present in schema")
        })
    }
}
