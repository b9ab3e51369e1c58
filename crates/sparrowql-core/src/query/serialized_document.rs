use crate::query::ParamValue;
use indexmap::IndexMap;

/// The output of [`serialize`](crate::query::serialize): wire-format
/// operation text plus, in use-variables mode, the parameter bindings that
/// were lifted out of it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SerializedDocument {
    pub(super) text: String,
    pub(super) variables: IndexMap<String, ParamValue>,
}

impl SerializedDocument {
    /// The serialized operation text.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// The extracted `$name -> value` bindings. Empty unless the document
    /// was serialized with
    /// [`SerializeOptions::use_variables`](crate::query::SerializeOptions).
    pub fn variables(&self) -> &IndexMap<String, ParamValue> {
        &self.variables
    }

    pub fn into_parts(self) -> (String, IndexMap<String, ParamValue>) {
        (self.text, self.variables)
    }
}
