use indexmap::IndexMap;

/// A JSON-like literal supplied as a field parameter value.
///
/// Object keys are ordered and must match `[A-Za-z0-9_]+`; the serializer
/// rejects any other key at encoding time.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    List(Vec<ParamValue>),
    Object(IndexMap<String, ParamValue>),
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(values: Vec<ParamValue>) -> Self {
        Self::List(values)
    }
}

impl From<IndexMap<String, ParamValue>> for ParamValue {
    fn from(entries: IndexMap<String, ParamValue>) -> Self {
        Self::Object(entries)
    }
}
