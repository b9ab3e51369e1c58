use crate::types::EnumType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Represents a type declared within some [`Schema`](crate::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Enum(EnumType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}

impl GraphQLType {
    /// The name of this [`GraphQLType`].
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    /// Unwrap the [`ObjectType`] if this type is one.
    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(obj_type) = self {
            Some(obj_type)
        } else {
            None
        }
    }

    /// Unwrap the [`UnionType`] if this type is one.
    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(union_type) = self {
            Some(union_type)
        } else {
            None
        }
    }

    /// Whether this type has sub-fields to select from (and therefore admits
    /// a nested sub-query). Scalars and enums are leaves.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Union(_))
    }
}
