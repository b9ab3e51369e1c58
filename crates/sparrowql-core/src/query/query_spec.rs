use crate::query::QueryNode;
use indexmap::IndexMap;

/// The wildcard marker: "select every field of this type".
///
/// Only legal against an object type where every field is standalone (see
/// [`TypeGrammar::accepts_wildcard`](crate::grammar::TypeGrammar::accepts_wildcard)).
pub const WILDCARD: &str = "*";

/// A caller-authored, recursive description of which fields to fetch.
///
/// The result-shape projector ([`shape::project`](crate::shape::project))
/// and the wire-text serializer ([`query::serialize`](crate::query::serialize))
/// are two independent views over this same value; neither calls the other.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum QuerySpec {
    /// `true` — take the field as-is, with no sub-selection.
    Take,

    /// A single sub-field taken verbatim (or [`WILDCARD`]).
    Field(String),

    /// Several sibling sub-fields taken verbatim.
    Fields(Vec<String>),

    /// An explicit per-key selection. Each key is the response key; its
    /// value describes the sub-request, possibly aliased via
    /// [`QueryNode::field`].
    Map(IndexMap<String, QuerySpec>),

    /// An aliased/parameterized request.
    Node(QueryNode),
}

impl QuerySpec {
    /// The "select every field" shorthand.
    pub fn wildcard() -> Self {
        Self::Field(WILDCARD.to_owned())
    }

    /// A selection of several sibling fields taken verbatim.
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Fields(names.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for QuerySpec {
    fn from(name: &str) -> Self {
        Self::Field(name.to_owned())
    }
}

impl From<QueryNode> for QuerySpec {
    fn from(node: QueryNode) -> Self {
        Self::Node(node)
    }
}

impl From<IndexMap<String, QuerySpec>> for QuerySpec {
    fn from(entries: IndexMap<String, QuerySpec>) -> Self {
        Self::Map(entries)
    }
}
