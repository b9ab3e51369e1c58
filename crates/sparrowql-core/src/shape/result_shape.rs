use indexmap::IndexMap;
use std::fmt;

/// The computed structural description of the response data a query
/// specification will yield.
///
/// `List` and `Nullable` wrappers compose independently at every nesting
/// level: a non-null list of nullable items is
/// `List(Nullable(...))`, a nullable list of non-null items is
/// `Nullable(List(...))`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ResultShape {
    /// A scalar or enum value, named by its schema type.
    Leaf(String),

    /// A list whose items all have the inner shape.
    List(Box<ResultShape>),

    /// A value that may be null; when present it has the inner shape.
    Nullable(Box<ResultShape>),

    /// A selection of response keys, in request order. A composite field
    /// requested without a sub-query projects to an empty object shape.
    Object(IndexMap<String, ResultShape>),

    /// One shape per union member, in schema declaration order.
    Union(Vec<ResultShape>),
}

impl ResultShape {
    /// Unwrap the object mapping if this shape is one.
    pub fn as_object(&self) -> Option<&IndexMap<String, ResultShape>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    /// Whether the outermost level of this shape admits null.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    pub(crate) fn wrap_nullable(nullable: bool, shape: Self) -> Self {
        if nullable {
            Self::Nullable(Box::new(shape))
        } else {
            shape
        }
    }
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(type_name) => write!(f, "{type_name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Nullable(inner) => write!(f, "{inner} | null"),
            Self::Object(entries) => {
                write!(f, "{{")?;
                for (index, (key, shape)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {shape}")?;
                }
                write!(f, "}}")
            }
            Self::Union(members) => {
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
        }
    }
}
