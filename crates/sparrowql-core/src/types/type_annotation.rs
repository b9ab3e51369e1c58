use crate::ast;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type of a [`Field`](crate::types::Field) or
/// [`Parameter`](crate::types::Parameter).
///
/// Nullability is the absence of a `NonNull` wrapper at a given level and
/// propagates independently at each nesting level: a non-null list of
/// nullable items and a nullable list of non-null items are distinct
/// annotations.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Whether a value at the outermost level of this annotation may be null.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable,
            Self::Named(annot) => annot.nullable,
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type, .. })
                => inner_type.innermost_named_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::List(list_annot) => list_annot.to_graphql_string(),
            Self::Named(named_annot) => named_annot.to_graphql_string(),
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ast_type: &ast::schema::Type,
        nullable: bool,
    ) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type: Box::new(Self::from_ast_type_impl(
                        inner,
                        true,
                    )),
                    nullable,
                }),

            ast::schema::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    name: name.to_owned(),
                    nullable,
                }),

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }
}
