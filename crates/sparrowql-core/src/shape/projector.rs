use crate::query::QuerySpec;
use crate::query::WILDCARD;
use crate::Schema;
use crate::shape::ProjectError;
use crate::shape::ResultShape;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, ProjectError>;

/// Compute the exact shape of the response data `query` will produce when
/// issued against `root_type`.
///
/// Pure and deterministic: the same schema and query specification always
/// project to the identical [`ResultShape`], and concurrent projections over
/// one shared [`Schema`] need no coordination.
///
/// Field resolution is strict while parameters are permissive: a missing
/// required parameter block is a serialization concern, never a shape
/// concern. Every unknown field reference anywhere in the query is
/// aggregated into one [`ProjectError::ExtraFields`] report; grammar
/// violations (a sub-query on a leaf field, an illegal wildcard) abort
/// immediately.
pub fn project(
    schema: &Schema,
    root_type: &ObjectType,
    query: &QuerySpec,
) -> Result<ResultShape> {
    let mut projector = ShapeProjector {
        extra_fields: IndexSet::new(),
        schema,
    };

    let shape = projector.object_shape(root_type, query)?;
    if projector.extra_fields.is_empty() {
        Ok(shape)
    } else {
        Err(ProjectError::ExtraFields {
            field_names: projector.extra_fields,
        })
    }
}

struct ShapeProjector<'schema> {
    extra_fields: IndexSet<String>,
    schema: &'schema Schema,
}

/// One map entry after shorthand expansion: an optional alias target plus an
/// optional sub-query. Parameters are intentionally absent — the projector
/// ignores them.
#[derive(Clone, Copy)]
struct NodeView<'query> {
    field_override: Option<&'query str>,
    subquery: Option<&'query QuerySpec>,
}

impl<'query> NodeView<'query> {
    const TAKE: Self = Self {
        field_override: None,
        subquery: None,
    };

    fn of(value: &'query QuerySpec) -> Self {
        match value {
            QuerySpec::Node(node) => Self {
                field_override: node.field.as_deref(),
                subquery: node.query.as_deref(),
            },
            QuerySpec::Take => Self::TAKE,
            nested => Self {
                field_override: None,
                subquery: Some(nested),
            },
        }
    }
}

impl<'schema> ShapeProjector<'schema> {
    /// One call frame per schema object-type level: expand shorthands, then
    /// resolve each response key against the type's fields.
    fn object_shape(
        &mut self,
        object_type: &ObjectType,
        query: &QuerySpec,
    ) -> Result<ResultShape> {
        let entries = self.selection_entries(object_type, query)?;

        let mut shape: IndexMap<String, ResultShape> = IndexMap::new();
        for (key, view) in entries {
            let target_field_name = view.field_override.unwrap_or(key);
            let Some(field) = object_type.field(target_field_name) else {
                // The response key (the alias key, when aliased) is the
                // authoritative path entry. Siblings keep resolving so the
                // whole query reports all of its illegal references at once.
                self.extra_fields.insert(key.to_owned());
                continue;
            };

            let key_shape = match view.subquery {
                None | Some(QuerySpec::Take) =>
                    self.default_shape(field.type_annotation())?,
                Some(subquery) =>
                    self.nested_shape(object_type, field, subquery)?,
            };
            shape.insert(key.to_owned(), key_shape);
        }

        Ok(ResultShape::Object(shape))
    }

    /// Expand the shorthand query forms into an ordered response-key ->
    /// request list. A bare wildcard covers every field of the type; a map
    /// carrying the `"*"` key merges every field with the explicitly listed
    /// keys, explicit keys winning.
    fn selection_entries<'query>(
        &mut self,
        object_type: &'query ObjectType,
        query: &'query QuerySpec,
    ) -> Result<Vec<(&'query str, NodeView<'query>)>> {
        let mut entries: IndexMap<&str, NodeView<'_>> = IndexMap::new();

        match query {
            QuerySpec::Take => (),

            QuerySpec::Field(name) if name == WILDCARD => {
                self.expand_wildcard(object_type, &mut entries)?;
            }

            QuerySpec::Field(name) => {
                entries.insert(name.as_str(), NodeView::TAKE);
            }

            QuerySpec::Fields(names) => {
                for name in names.iter() {
                    entries.insert(name.as_str(), NodeView::TAKE);
                }
            }

            QuerySpec::Map(map) => {
                if map.contains_key(WILDCARD) {
                    self.expand_wildcard(object_type, &mut entries)?;
                }
                for (key, value) in map.iter() {
                    if key == WILDCARD {
                        continue;
                    }
                    entries.insert(key.as_str(), NodeView::of(value));
                }
            }

            // A bare node at selection position contributes its own nested
            // selection.
            QuerySpec::Node(node) => {
                if let Some(nested) = node.query.as_deref() {
                    return self.selection_entries(object_type, nested);
                }
            }
        }

        Ok(entries.into_iter().collect())
    }

    fn expand_wildcard<'query>(
        &mut self,
        object_type: &'query ObjectType,
        entries: &mut IndexMap<&'query str, NodeView<'query>>,
    ) -> Result<()> {
        if !object_type.accepts_wildcard() {
            return Err(ProjectError::IllegalWildcard {
                type_name: object_type.name().to_owned(),
            });
        }
        for field_name in object_type.fields().keys() {
            entries.insert(field_name.as_str(), NodeView::TAKE);
        }
        Ok(())
    }

    /// The shape of a field taken as-is (`true`): its scalar/enum leaf, or
    /// an empty object shape for a composite type, wrapped per the
    /// annotation's list/nullability structure.
    fn default_shape(&self, annotation: &TypeAnnotation) -> Result<ResultShape> {
        match annotation {
            TypeAnnotation::List(list_annot) => {
                let inner = self.default_shape(list_annot.inner_type())?;
                Ok(ResultShape::wrap_nullable(
                    list_annot.is_nullable(),
                    ResultShape::List(Box::new(inner)),
                ))
            }

            TypeAnnotation::Named(named_annot) => {
                let graphql_type = self.type_named(named_annot.name())?;
                let inner = if graphql_type.is_composite() {
                    ResultShape::Object(IndexMap::new())
                } else {
                    ResultShape::Leaf(named_annot.name().to_owned())
                };
                Ok(ResultShape::wrap_nullable(named_annot.is_nullable(), inner))
            }
        }
    }

    /// The shape of a field requested with its own nested sub-query. The
    /// list/nullability wrappers attach *after* the inner shape is computed
    /// and never alter field resolution.
    fn nested_shape(
        &mut self,
        parent_type: &ObjectType,
        field: &Field,
        subquery: &QuerySpec,
    ) -> Result<ResultShape> {
        self.annotated_shape(
            field.type_annotation(),
            subquery,
            parent_type.name(),
            field.name(),
        )
    }

    fn annotated_shape(
        &mut self,
        annotation: &TypeAnnotation,
        subquery: &QuerySpec,
        parent_type_name: &str,
        field_name: &str,
    ) -> Result<ResultShape> {
        match annotation {
            TypeAnnotation::List(list_annot) => {
                let inner = self.annotated_shape(
                    list_annot.inner_type(),
                    subquery,
                    parent_type_name,
                    field_name,
                )?;
                Ok(ResultShape::wrap_nullable(
                    list_annot.is_nullable(),
                    ResultShape::List(Box::new(inner)),
                ))
            }

            TypeAnnotation::Named(named_annot) => {
                let inner = match self.type_named(named_annot.name())? {
                    GraphQLType::Object(object_type) =>
                        self.object_shape(object_type, subquery)?,

                    // A sub-query against a union projects against every
                    // member type; fields must resolve on all of them.
                    GraphQLType::Union(union_type) => {
                        let mut members: Vec<ResultShape> = vec![];
                        for member_name in union_type.member_type_names() {
                            let member_type =
                                self.object_type_named(member_name)?;
                            members.push(
                                self.object_shape(member_type, subquery)?,
                            );
                        }
                        ResultShape::Union(members)
                    }

                    GraphQLType::Scalar(_) | GraphQLType::Enum(_) => {
                        return Err(ProjectError::IllegalNestedQuery {
                            field_name: field_name.to_owned(),
                            leaf_type_name: named_annot.name().to_owned(),
                            type_name: parent_type_name.to_owned(),
                        });
                    }
                };
                Ok(ResultShape::wrap_nullable(named_annot.is_nullable(), inner))
            }
        }
    }

    fn type_named(&self, name: &str) -> Result<&'schema GraphQLType> {
        self.schema.type_named(name).ok_or_else(|| {
            ProjectError::UndefinedType {
                type_name: name.to_owned(),
            }
        })
    }

    fn object_type_named(&self, name: &str) -> Result<&'schema ObjectType> {
        self.type_named(name)?.as_object().ok_or_else(|| {
            ProjectError::UndefinedType {
                type_name: name.to_owned(),
            }
        })
    }
}
