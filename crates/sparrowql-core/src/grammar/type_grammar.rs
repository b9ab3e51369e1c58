use crate::grammar::FieldGrammar;
use crate::Schema;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// The derived query grammar for one [`ObjectType`]: which of its fields are
/// standalone, which admit sub-queries, and whether the wildcard shorthand
/// is legal for the type as a whole.
///
/// A type with zero fields yields an always-empty grammar: no standalone
/// fields and no wildcard.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeGrammar {
    pub(super) accepts_wildcard: bool,
    pub(super) fields: IndexMap<String, FieldGrammar>,
    pub(super) type_name: String,
}

impl TypeGrammar {
    /// Derive the query grammar of `object_type` against `schema`.
    pub fn of(schema: &Schema, object_type: &ObjectType) -> Self {
        let fields = object_type.fields().iter()
            .map(|(name, field)| (
                name.to_owned(),
                FieldGrammar::of(schema, field),
            ))
            .collect();

        Self {
            accepts_wildcard: object_type.accepts_wildcard(),
            fields,
            type_name: object_type.name().to_owned(),
        }
    }

    /// Whether the "select every field" wildcard shorthand is legal for this
    /// type.
    pub fn accepts_wildcard(&self) -> bool {
        self.accepts_wildcard
    }

    /// Look up the [`FieldGrammar`] for a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldGrammar> {
        self.fields.get(name)
    }

    /// The per-field grammars, in schema declaration order.
    pub fn fields(&self) -> &IndexMap<String, FieldGrammar> {
        &self.fields
    }

    /// The names of this type's standalone fields, in schema declaration
    /// order.
    pub fn standalone_field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.values()
            .filter(|field_grammar| field_grammar.standalone)
            .map(FieldGrammar::name)
    }

    /// The name of the [`ObjectType`] this grammar describes.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
