/// Configuration for the frontend application

/// GraphQL endpoint, overridable at build time through
/// `QA_BOARD_GRAPHQL_ENDPOINT`.
#[cfg(not(feature = "mock"))]
pub const GRAPHQL_ENDPOINT: &str = match option_env!("QA_BOARD_GRAPHQL_ENDPOINT") {
    Some(url) => url,
    None => "http://localhost:4000/graphql",
};

/// Base URL for static assets
/// - For local development: "/"
/// - For a sub-path deployment: set `QA_BOARD_BASE_URL`, e.g. "/qa/"
pub const BASE_URL: &str = match option_env!("QA_BOARD_BASE_URL") {
    Some(base) => base,
    None => "/",
};

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
