//! Query lifecycle and the errors a query can end with.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graphql::GraphQlError;

/// Why a sidebar query produced no data.
///
/// `Display` is the message shown to the user: the first GraphQL error when
/// the server reported one, the transport failure otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The request never got a response.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// The body was not a GraphQL response of the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The server answered with an `errors` array.
    #[error("{}", .0.first().map(|e| e.message.as_str()).unwrap_or("Unknown GraphQL error"))]
    GraphQl(Vec<GraphQlError>),
    /// Neither `data` nor `errors` were present.
    #[error("Response contained no data")]
    MissingData,
}

/// Level passed along with every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Operation succeeded.
    Success,
    /// Neutral information.
    Info,
    /// Something degraded but usable.
    Warning,
    /// Operation failed.
    Error,
}

impl Severity {
    /// Lowercase name, also used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// `{ data, loading }` pair exposed by each query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    /// Result payload. `None` while loading and after a failure.
    pub data: Option<T>,
    /// `true` until the query settles either way.
    pub loading: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<T> QueryState<T> {
    /// State of a query that has been issued but not answered.
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
        }
    }

    /// State of a query that answered with `data`.
    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
        }
    }

    /// Final state for `result`.
    ///
    /// A failure is reported through `notify` exactly once with
    /// [`Severity::Error`] and leaves the state empty but no longer loading,
    /// so sibling sections keep rendering.
    pub fn settle<F>(result: Result<T, QueryError>, notify: F) -> Self
    where
        F: FnOnce(String, Severity),
    {
        match result {
            Ok(data) => Self::ready(data),
            Err(err) => {
                tracing::warn!(error = ?err, "sidebar query failed");
                notify(err.to_string(), Severity::Error);
                Self {
                    data: None,
                    loading: false,
                }
            },
        }
    }
}

impl<T: Clone> QueryState<Vec<T>> {
    /// The payload, or an empty list while loading or after a failure.
    pub fn items(&self) -> Vec<T> {
        self.data.clone().unwrap_or_default()
    }
}
