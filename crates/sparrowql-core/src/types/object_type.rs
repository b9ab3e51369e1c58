use crate::ast;
use crate::types::Field;
use indexmap::IndexMap;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::Schema).
///
/// Interface definitions are flattened into this same representation: for
/// grammar and shape purposes they behave as plain field maps.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(super) fields: IndexMap<String, Field>,
    pub(super) name: String,
}

impl ObjectType {
    /// Look up a [`Field`] on this [`ObjectType`] by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// All [`Field`]s defined on this [`ObjectType`], ordered the same as in
    /// the schema.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether the "select every field" wildcard shorthand is legal for this
    /// type: every field must be requestable standalone, and a type with no
    /// fields accepts no wildcard at all.
    pub fn accepts_wildcard(&self) -> bool {
        !self.fields.is_empty()
            && self.fields.values().all(|field| !field.has_required_parameters())
    }

    pub(crate) fn from_ast(def: &ast::schema::ObjectType) -> Self {
        Self {
            fields: def.fields.iter()
                .map(|field| (field.name.to_owned(), Field::from_ast(field)))
                .collect(),
            name: def.name.to_owned(),
        }
    }

    pub(crate) fn from_interface_ast(def: &ast::schema::InterfaceType) -> Self {
        Self {
            fields: def.fields.iter()
                .map(|field| (field.name.to_owned(), Field::from_ast(field)))
                .collect(),
            name: def.name.to_owned(),
        }
    }
}
