use crate::types::TypeAnnotation;

/// A [`TypeAnnotation`](crate::types::TypeAnnotation) that wraps another
/// annotation in a list.
///
/// `nullable` applies to the list itself; the nullability of the items is
/// carried by `inner_type` independently.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(super) inner_type: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}

impl ListTypeAnnotation {
    /// The annotation of this list's items.
    pub fn inner_type(&self) -> &TypeAnnotation {
        &self.inner_type
    }

    /// Whether the list itself may be null.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        if self.nullable {
            format!("[{}]", self.inner_type.to_graphql_string())
        } else {
            format!("[{}]!", self.inner_type.to_graphql_string())
        }
    }
}
