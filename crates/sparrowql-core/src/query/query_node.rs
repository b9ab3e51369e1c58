use crate::query::ParamValue;
use crate::query::QuerySpec;
use indexmap::IndexMap;

/// An aliased and/or parameterized field request.
///
/// When a [`QueryNode`] appears as the value of a map key, a present `field`
/// means "the map key is an alias for schema field `field`"; the alias
/// always takes precedence over the key itself during field resolution.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct QueryNode {
    /// The schema field this request resolves to, when it differs from (or
    /// is independent of) the response key.
    pub field: Option<String>,

    /// The parameter block for the field, in declaration order.
    pub params: Option<IndexMap<String, ParamValue>>,

    /// The nested selection over the field's own sub-fields. Only legal when
    /// the field's resolved type is composite.
    pub query: Option<Box<QuerySpec>>,
}

impl QueryNode {
    /// A request for the schema field `field` (the usual root-query form).
    pub fn of_field(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            params: None,
            query: None,
        }
    }

    pub fn with_params(
        mut self,
        params: IndexMap<String, ParamValue>,
    ) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_query(mut self, query: QuerySpec) -> Self {
        self.query = Some(Box::new(query));
        self
    }
}
