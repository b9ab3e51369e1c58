use crate::ast;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::Schema).
///
/// Scalars are leaf types: they carry no sub-fields and terminate
/// result-shape projection.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(super) name: String,
}

impl ScalarType {
    /// The name of this [`ScalarType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(def: &ast::schema::ScalarType) -> Self {
        Self {
            name: def.name.to_owned(),
        }
    }

    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}
