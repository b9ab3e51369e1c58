use crate::Schema;
use crate::types::Field;

/// The derived query grammar for a single field of an
/// [`ObjectType`](crate::types::ObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldGrammar {
    pub(super) name: String,
    pub(super) standalone: bool,
    pub(super) subquery_type: Option<String>,
}

impl FieldGrammar {
    /// The name of the field this grammar describes.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether this field may be requested by bare name or truthy
    /// membership, without an explicit parameter block. True iff every
    /// parameter of the field is optional.
    pub fn is_standalone(&self) -> bool {
        self.standalone
    }

    /// The name of the composite (object or union) type a sub-query on this
    /// field selects against, or `None` if the field resolves to a leaf
    /// (scalar/enum) type and admits no sub-query.
    pub fn subquery_type(&self) -> Option<&str> {
        self.subquery_type.as_deref()
    }

    pub(super) fn of(schema: &Schema, field: &Field) -> Self {
        let named_annot =
            field.type_annotation().innermost_named_annotation();
        let subquery_type = schema.type_named(named_annot.name())
            .filter(|graphql_type| graphql_type.is_composite())
            .map(|graphql_type| graphql_type.name().to_owned());

        Self {
            name: field.name().to_owned(),
            standalone: !field.has_required_parameters(),
            subquery_type,
        }
    }
}
