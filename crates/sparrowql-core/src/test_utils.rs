use crate::Schema;

/// A small feed/author schema exercising optional and required parameters,
/// every list/nullability combination, an enum, and a union.
pub(crate) const FEED_SCHEMA: &str = "
    type Query {
      feed(limit: Int): [Article!]!
      article(id: ID!): Article
      me: User!
      search(text: String!): [SearchResult!]
    }

    type Mutation {
      postArticle(title: String!, body: String): Article!
    }

    type Article {
      id: ID!
      title: String!
      body: String
      state: ArticleState!
      author: User!
      tags: [String!]
      related: [Article]!
    }

    type User {
      id: ID!
      name: String!
      articles: [Article!]!
    }

    enum ArticleState {
      DRAFT
      PUBLISHED
    }

    union SearchResult = Article | User
";

pub(crate) fn feed_schema() -> Schema {
    Schema::builder()
        .load_str(FEED_SCHEMA)
        .expect("feed schema parses")
        .build()
        .expect("feed schema builds")
}
