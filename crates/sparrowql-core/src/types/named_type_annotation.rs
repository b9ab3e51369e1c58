/// A [`TypeAnnotation`](crate::types::TypeAnnotation) that refers to a
/// declared type by name.
///
/// `nullable` is true when the annotation is *not* wrapped in a `!` at this
/// nesting level.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(super) name: String,
    pub(super) nullable: bool,
}

impl NamedTypeAnnotation {
    /// The name of the declared type this annotation refers to.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether a value at this nesting level may be null.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_graphql_string(&self) -> String {
        if self.nullable {
            self.name.clone()
        } else {
            format!("{}!", self.name)
        }
    }
}
