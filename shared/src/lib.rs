//! Data model and view rules shared by the QA Board frontend.
//!
//! Everything here is target independent so it can be unit tested natively
//! while the frontend itself is compiled to wasm32.

use serde::{Deserialize, Serialize};

pub mod graphql;
pub mod panel;
pub mod query;

pub use graphql::{GraphQlError, GraphQlRequest, GraphQlResponse};
pub use query::{QueryError, QueryState, Severity};

/// A topic label with the number of questions it is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique tag name, also the key of the tag detail route.
    #[serde(rename = "tagName")]
    pub name: String,
    /// How many questions carry this tag.
    #[serde(rename = "count")]
    pub usage_count: u64,
}

/// Leaderboard entry. The order of a `Vec<User>` is the server's ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier.
    pub id: String,
    /// Display name, also the key of the profile route.
    pub username: String,
    /// Profile picture; `None` falls back to the default avatar asset.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Reputation score, may be negative.
    pub reputation: i64,
    /// Number of questions asked.
    pub total_questions: u64,
    /// Number of answers posted.
    pub total_answers: u64,
}
