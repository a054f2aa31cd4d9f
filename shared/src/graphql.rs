//! GraphQL wire types for the two sidebar queries.

use serde::{Deserialize, Serialize};

use crate::{query::QueryError, Tag, User};

/// Document for the tag list. Takes no variables.
pub const GET_ALL_TAGS: &str = "query GetAllTags {
  getAllTags {
    tagName
    count
  }
}";

/// Document for the leaderboard. `$limit` caps the number of users returned.
pub const GET_TOP_USERS: &str = "query GetTopUsers($limit: Int!) {
  topUsers(limit: $limit) {
    id
    username
    avatarUrl
    reputation
    totalQuestions
    totalAnswers
  }
}";

/// Body of a GraphQL POST request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<V> {
    /// Query document.
    pub query: &'static str,
    /// Operation to run inside the document.
    pub operation_name: &'static str,
    /// Query variables.
    pub variables: V,
}

/// Variables of a query that takes none; serializes to `{}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NoVariables {}

/// Variables of [`GET_TOP_USERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopUsersVariables {
    /// Maximum number of users to return.
    pub limit: i32,
}

impl GraphQlRequest<NoVariables> {
    /// Request for every tag.
    pub fn all_tags() -> Self {
        Self {
            query: GET_ALL_TAGS,
            operation_name: "GetAllTags",
            variables: NoVariables {},
        }
    }
}

impl GraphQlRequest<TopUsersVariables> {
    /// Request for the first `limit` users of the leaderboard.
    pub fn top_users(limit: i32) -> Self {
        Self {
            query: GET_TOP_USERS,
            operation_name: "GetTopUsers",
            variables: TopUsersVariables {
                limit,
            },
        }
    }
}

/// One entry of the `errors` array of a GraphQL response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    /// Human readable message set by the server.
    pub message: String,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Payload, absent when execution failed before producing data.
    pub data: Option<T>,
    /// Execution errors.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Any reported error fails the whole query, even with partial data.
    pub fn into_result(self) -> Result<T, QueryError> {
        if !self.errors.is_empty() {
            return Err(QueryError::GraphQl(self.errors));
        }
        self.data.ok_or(QueryError::MissingData)
    }
}

/// `data` payload of [`GET_ALL_TAGS`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AllTagsData {
    /// Every tag, in server order.
    #[serde(rename = "getAllTags")]
    pub get_all_tags: Vec<Tag>,
}

/// `data` payload of [`GET_TOP_USERS`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopUsersData {
    /// Leaderboard, best first.
    #[serde(rename = "topUsers")]
    pub top_users: Vec<User>,
}
