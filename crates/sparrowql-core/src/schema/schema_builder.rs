use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

const DEFAULT_QUERY_TYPE_NAME: &str = "Query";
const DEFAULT_MUTATION_TYPE_NAME: &str = "Mutation";

/// Classifies the definitions of one or more schema documents into an
/// immutable [`Schema`].
///
/// Scalar, object, enum, and union definitions each land in their own
/// bucket; interface definitions are flattened into the object bucket.
/// Cyclic references between object types are legal and expected, so no
/// type-graph traversal happens here: [`SchemaBuilder::build()`] only
/// verifies that the query root object type exists.
#[derive(Debug)]
pub struct SchemaBuilder {
    mutation_type_name: Option<String>,
    query_type_name: Option<String>,
    types: IndexMap<String, GraphQLType>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        let types = BUILTIN_SCALAR_NAMES.iter()
            .map(|name| (
                (*name).to_owned(),
                GraphQLType::Scalar(ScalarType::builtin(name)),
            ))
            .collect();
        Self {
            mutation_type_name: None,
            query_type_name: None,
            types,
        }
    }

    /// Parse `text` as GraphQL schema source and load its definitions.
    pub fn load_str(self, text: &str) -> Result<Self> {
        let document = ast::schema::parse(text)?;
        self.load_document(&document)
    }

    /// Load the definitions of an already-parsed schema document.
    pub fn load_document(
        mut self,
        document: &ast::schema::Document,
    ) -> Result<Self> {
        for definition in document.definitions.iter() {
            match definition {
                ast::schema::Definition::SchemaDefinition(schema_def) =>
                    self.visit_schema_def(schema_def),

                ast::schema::Definition::TypeDefinition(type_def) =>
                    self.visit_type_def(type_def)?,

                // Type extensions and directive definitions are not part of
                // the schema model.
                ast::schema::Definition::TypeExtension(_)
                | ast::schema::Definition::DirectiveDefinition(_) => (),
            }
        }
        Ok(self)
    }

    pub fn build(self) -> Result<Schema> {
        let query_type_name = self.query_type_name.clone()
            .unwrap_or_else(|| DEFAULT_QUERY_TYPE_NAME.to_owned());
        if !self.is_object_type(query_type_name.as_str()) {
            return Err(SchemaBuildError::QueryTypeNotDefined {
                type_name: query_type_name,
            });
        }

        let mutation_type_name = match &self.mutation_type_name {
            Some(name) => {
                if !self.is_object_type(name.as_str()) {
                    return Err(SchemaBuildError::MutationTypeNotDefined {
                        type_name: name.to_owned(),
                    });
                }
                Some(name.to_owned())
            }

            // With no explicit override, an object type named "Mutation" is
            // picked up if present.
            None => {
                let default_name = DEFAULT_MUTATION_TYPE_NAME;
                self.is_object_type(default_name)
                    .then(|| default_name.to_owned())
            }
        };

        log::debug!(
            "built schema model: {} types, query root `{query_type_name}`",
            self.types.len(),
        );

        Ok(Schema {
            mutation_type_name,
            query_type_name,
            types: self.types,
        })
    }

    fn is_object_type(&self, name: &str) -> bool {
        matches!(self.types.get(name), Some(GraphQLType::Object(_)))
    }

    fn visit_schema_def(&mut self, schema_def: &ast::schema::SchemaDefinition) {
        if let Some(name) = &schema_def.query {
            self.query_type_name = Some(name.to_owned());
        }
        if let Some(name) = &schema_def.mutation {
            self.mutation_type_name = Some(name.to_owned());
        }
    }

    fn visit_type_def(
        &mut self,
        type_def: &ast::schema::TypeDefinition,
    ) -> Result<()> {
        match type_def {
            ast::schema::TypeDefinition::Scalar(def) =>
                self.add_type(GraphQLType::Scalar(ScalarType::from_ast(def))),

            ast::schema::TypeDefinition::Object(def) =>
                self.add_type(GraphQLType::Object(ObjectType::from_ast(def))),

            ast::schema::TypeDefinition::Interface(def) =>
                self.add_type(GraphQLType::Object(
                    ObjectType::from_interface_ast(def),
                )),

            ast::schema::TypeDefinition::Enum(def) =>
                self.add_type(GraphQLType::Enum(EnumType::from_ast(def))),

            ast::schema::TypeDefinition::Union(def) =>
                self.add_type(GraphQLType::Union(UnionType::from_ast(def))),

            // Input object types only ever appear in parameter positions and
            // are not modeled.
            ast::schema::TypeDefinition::InputObject(_) => Ok(()),
        }
    }

    fn add_type(&mut self, graphql_type: GraphQLType) -> Result<()> {
        let name = graphql_type.name().to_owned();

        // A schema may re-declare a built-in scalar (e.g. `scalar ID`); that
        // is not a conflict.
        let redeclares_builtin =
            BUILTIN_SCALAR_NAMES.contains(&name.as_str())
            && matches!(graphql_type, GraphQLType::Scalar(_));
        if self.types.contains_key(name.as_str()) && !redeclares_builtin {
            return Err(SchemaBuildError::DuplicateTypeName {
                type_name: name,
            });
        }

        self.types.insert(name, graphql_type);
        Ok(())
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
