use crate::ast;
use indexmap::IndexSet;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(super) name: String,
    pub(super) values: IndexSet<String>,
}

impl EnumType {
    /// The name of this [`EnumType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The set of legal values for this [`EnumType`], ordered as declared in
    /// the schema.
    pub fn values(&self) -> &IndexSet<String> {
        &self.values
    }

    pub(crate) fn from_ast(def: &ast::schema::EnumType) -> Self {
        Self {
            name: def.name.to_owned(),
            values: def.values.iter()
                .map(|value| value.name.to_owned())
                .collect(),
        }
    }
}
