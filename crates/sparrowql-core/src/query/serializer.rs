use crate::query::OperationKind;
use crate::query::ParamValue;
use crate::query::QueryNode;
use crate::query::QuerySpec;
use crate::query::SerializeError;
use crate::query::SerializedDocument;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SerializeError>;

/// Rendering options for [`serialize`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SerializeOptions {
    /// The top-level wrapper keyword (`query` by default).
    pub operation: OperationKind,

    /// When set, indent two spaces per nesting level and pad punctuation;
    /// otherwise each field still gets its own line but all optional
    /// whitespace collapses.
    pub pretty: bool,

    /// When set, every parameter value is replaced by a `$name` placeholder
    /// and the concrete values are returned separately as
    /// [`SerializedDocument::variables`], so one operation text can be
    /// reused across many bindings.
    pub use_variables: bool,
}

impl SerializeOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }
}

/// Render a query specification into wire-format operation text.
///
/// Each top-level entry of `query` becomes a root field of the operation, so
/// a multi-key map serializes as a multi-root operation. This is a plain
/// recursive printer over the query value: it trusts the caller to have
/// established legality against the schema (via
/// [`shape::project`](crate::shape::project)) and fails fast only on
/// syntactic problems, i.e. a parameter key that is not a
/// `[A-Za-z0-9_]+` identifier, a root that requests no field at all, or a
/// variable-name collision in use-variables mode.
pub fn serialize(
    query: &QuerySpec,
    options: &SerializeOptions,
) -> Result<SerializedDocument> {
    if !has_root_fields(query) {
        return Err(SerializeError::MissingRootField);
    }

    let mut serializer = Serializer {
        lines: vec![],
        options: *options,
        variables: IndexMap::new(),
    };

    let space = serializer.space();
    serializer.lines.push(format!(
        "{}{space}{{",
        options.operation.keyword(),
    ));
    match query {
        // A root-level node carrying a field is a single root field request;
        // its alias/params machinery applies to that field directly.
        QuerySpec::Node(node) if node.field.is_some() =>
            serializer.emit_node(None, node, 1)?,
        selection => serializer.emit_subquery(selection, 1)?,
    }
    serializer.lines.push("}".to_owned());

    Ok(SerializedDocument {
        text: serializer.lines.join("\n"),
        variables: serializer.variables,
    })
}

/// Whether `query` requests at least one root field.
fn has_root_fields(query: &QuerySpec) -> bool {
    match query {
        QuerySpec::Take => false,
        QuerySpec::Field(_) => true,
        QuerySpec::Fields(names) => !names.is_empty(),
        QuerySpec::Map(entries) => !entries.is_empty(),
        QuerySpec::Node(node) => node.field.is_some()
            || node.query.as_deref().is_some_and(has_root_fields),
    }
}

struct Serializer {
    lines: Vec<String>,
    options: SerializeOptions,
    variables: IndexMap<String, ParamValue>,
}

impl Serializer {
    fn emit_node(
        &mut self,
        name: Option<&str>,
        node: &QueryNode,
        depth: usize,
    ) -> Result<()> {
        let space = self.space();

        let mut header = match (name, node.field.as_deref()) {
            (Some(name), Some(field)) if name != field =>
                format!("{name}:{space}{field}"),
            (Some(name), _) => name.to_owned(),
            (None, Some(field)) => field.to_owned(),
            // Unreachable from the public entrypoint: a field-less root node
            // never reaches here and every nested node is keyed.
            (None, None) => return Err(SerializeError::MissingRootField),
        };

        if let Some(params) = &node.params
            && !params.is_empty()
        {
            let rendered = if self.options.use_variables {
                self.params_to_var_string(params)?
            } else {
                self.params_to_string(params)?
            };
            header.push_str(&format!("({rendered})"));
        }

        let indent = self.indent(depth);
        match node.query.as_deref() {
            // A leaf field renders as just its header line.
            None | Some(QuerySpec::Take) => {
                self.lines.push(format!("{indent}{header}"));
            }

            Some(subquery) => {
                self.lines.push(format!("{indent}{header}{space}{{"));
                self.emit_subquery(subquery, depth + 1)?;
                self.lines.push(format!("{indent}}}"));
            }
        }
        Ok(())
    }

    fn emit_subquery(
        &mut self,
        subquery: &QuerySpec,
        depth: usize,
    ) -> Result<()> {
        let indent = self.indent(depth);
        match subquery {
            QuerySpec::Take => (),

            QuerySpec::Field(name) => {
                self.lines.push(format!("{indent}{name}"));
            }

            QuerySpec::Fields(names) => {
                for name in names.iter() {
                    self.lines.push(format!("{indent}{name}"));
                }
            }

            QuerySpec::Map(entries) => {
                for (key, value) in entries.iter() {
                    self.emit_map_value(key, value, depth)?;
                }
            }

            // A bare node in subquery position contributes its own nested
            // selection (aliases/params carry no meaning without a key).
            QuerySpec::Node(node) => {
                if let Some(nested) = node.query.as_deref() {
                    self.emit_subquery(nested, depth)?;
                }
            }
        }
        Ok(())
    }

    fn emit_map_value(
        &mut self,
        key: &str,
        value: &QuerySpec,
        depth: usize,
    ) -> Result<()> {
        match value {
            QuerySpec::Node(node) => self.emit_node(Some(key), node, depth),

            QuerySpec::Take => {
                let indent = self.indent(depth);
                self.lines.push(format!("{indent}{key}"));
                Ok(())
            }

            nested => {
                let space = self.space();
                let indent = self.indent(depth);
                self.lines.push(format!("{indent}{key}{space}{{"));
                self.emit_subquery(nested, depth + 1)?;
                self.lines.push(format!("{indent}}}"));
                Ok(())
            }
        }
    }

    /// Render a parameter block's contents: `k1: v1, k2: v2` in declaration
    /// order.
    fn params_to_string(
        &self,
        params: &IndexMap<String, ParamValue>,
    ) -> Result<String> {
        let space = self.space();
        let mut fields: Vec<String> = vec![];
        for (key, value) in params.iter() {
            check_param_key(key)?;
            fields.push(format!(
                "{key}:{space}{}",
                self.param_value_to_string(value)?,
            ));
        }
        Ok(fields.join(&format!(",{space}")))
    }

    /// Render a parameter block as `$name` placeholders, lifting the
    /// concrete values into the bindings map.
    fn params_to_var_string(
        &mut self,
        params: &IndexMap<String, ParamValue>,
    ) -> Result<String> {
        let space = self.space();
        let mut fields: Vec<String> = vec![];
        for (key, value) in params.iter() {
            check_param_key(key)?;
            if self.variables.contains_key(key.as_str()) {
                return Err(SerializeError::DuplicateVariable {
                    name: key.to_owned(),
                });
            }
            self.variables.insert(key.to_owned(), value.clone());
            fields.push(format!("{key}:{space}${key}"));
        }
        Ok(fields.join(&format!(",{space}")))
    }

    fn param_value_to_string(&self, value: &ParamValue) -> Result<String> {
        let space = self.space();
        Ok(match value {
            ParamValue::Int(value) => value.to_string(),

            // NaN and the infinities have no literal form; they encode as
            // `null`, the same way JSON text encoding treats them.
            ParamValue::Float(value) if value.is_finite() => value.to_string(),
            ParamValue::Float(_) => "null".to_owned(),
            ParamValue::Bool(value) => value.to_string(),
            ParamValue::Null => "null".to_owned(),

            // Strings render as quoted JSON string literals.
            ParamValue::String(value) => serde_json::to_string(value)
                .expect("JSON string encoding cannot fail"),

            ParamValue::List(items) => {
                let mut rendered: Vec<String> = vec![];
                for item in items.iter() {
                    rendered.push(self.param_value_to_string(item)?);
                }
                format!("[{}]", rendered.join(&format!(",{space}")))
            }

            // GraphQL input-object syntax: keys are never quoted.
            ParamValue::Object(entries) => {
                let mut rendered: Vec<String> = vec![];
                for (key, item) in entries.iter() {
                    check_param_key(key)?;
                    rendered.push(format!(
                        "{key}:{space}{}",
                        self.param_value_to_string(item)?,
                    ));
                }
                format!("{{{}}}", rendered.join(&format!(",{space}")))
            }
        })
    }

    fn space(&self) -> &'static str {
        if self.options.pretty { " " } else { "" }
    }

    fn indent(&self, depth: usize) -> String {
        if self.options.pretty {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    }
}

fn check_param_key(key: &str) -> Result<()> {
    let is_identifier = !key.is_empty()
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if is_identifier {
        Ok(())
    } else {
        Err(SerializeError::InvalidParamKey {
            key: key.to_owned(),
        })
    }
}
