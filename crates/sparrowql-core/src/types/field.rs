use crate::ast;
use crate::types::Parameter;
use crate::types::TypeAnnotation;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(super) name: String,
    pub(super) parameters: Vec<Parameter>,
    pub(super) type_annotation: TypeAnnotation,
}

impl Field {
    /// The name of this [`Field`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The list of [`Parameter`]s declared on this [`Field`], ordered the
    /// same as in the schema.
    pub fn parameters(&self) -> &[Parameter] {
        self.parameters.as_slice()
    }

    /// The [`TypeAnnotation`] of this [`Field`]'s return type.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// Whether any [`Parameter`] on this [`Field`] is required.
    ///
    /// A field with no required parameters is "standalone": it may be
    /// requested by bare name, without an explicit parameter block. The
    /// grammar generator and the result-shape projector both rely on this
    /// single predicate so their notions of legality cannot diverge.
    pub fn has_required_parameters(&self) -> bool {
        self.parameters.iter().any(Parameter::is_required)
    }

    pub(crate) fn from_ast(field: &ast::schema::Field) -> Self {
        Self {
            name: field.name.to_owned(),
            parameters: field.arguments.iter()
                .map(Parameter::from_ast)
                .collect(),
            type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        }
    }
}
