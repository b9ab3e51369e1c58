use crate::ast;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(super) member_type_names: Vec<String>,
    pub(super) name: String,
}

impl UnionType {
    /// The names of this [`UnionType`]'s member types, ordered as declared in
    /// the schema.
    pub fn member_type_names(&self) -> &[String] {
        self.member_type_names.as_slice()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(def: &ast::schema::UnionType) -> Self {
        Self {
            member_type_names: def.types.to_vec(),
            name: def.name.to_owned(),
        }
    }
}
