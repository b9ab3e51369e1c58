use crate::ast;
use crate::types::TypeAnnotation;

/// Represents a parameter declared on a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}

impl Parameter {
    /// The name of this [`Parameter`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeAnnotation`] declared for this [`Parameter`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// Whether this [`Parameter`] must be supplied when its field is
    /// requested (i.e. whether the parameter's type is non-null at the
    /// outermost level).
    pub fn is_required(&self) -> bool {
        !self.type_annotation.is_nullable()
    }

    pub(crate) fn from_ast(input_val: &ast::schema::InputValue) -> Self {
        Self {
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(
                &input_val.value_type,
            ),
        }
    }
}
