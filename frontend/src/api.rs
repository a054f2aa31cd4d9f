#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use qa_board_shared::graphql::{AllTagsData, GraphQlRequest, GraphQlResponse, TopUsersData};
use qa_board_shared::{QueryError, Tag, User};
#[cfg(not(feature = "mock"))]
use serde::{de::DeserializeOwned, Serialize};

#[cfg(feature = "mock")]
use crate::models;
#[cfg(not(feature = "mock"))]
use crate::config::GRAPHQL_ENDPOINT;

/// POST one GraphQL operation and unwrap its `data` payload.
#[cfg(not(feature = "mock"))]
async fn post_graphql<V, T>(request: &GraphQlRequest<V>) -> Result<T, QueryError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(GRAPHQL_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| QueryError::Parse(format!("Serialize error: {:?}", e)))?
        .send()
        .await
        .map_err(|e| {
            web_sys::console::error_1(
                &format!("{} request failed: {:?}", request.operation_name, e).into(),
            );
            QueryError::Network(e.to_string())
        })?;

    if !response.ok() {
        return Err(QueryError::Http(response.status()));
    }

    let envelope: GraphQlResponse<T> = response
        .json()
        .await
        .map_err(|e| QueryError::Parse(e.to_string()))?;

    envelope.into_result()
}

/// 获取全部标签
pub async fn fetch_all_tags() -> Result<Vec<Tag>, QueryError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::get_mock_tags());
    }

    #[cfg(not(feature = "mock"))]
    {
        let data: AllTagsData = post_graphql(&GraphQlRequest::all_tags()).await?;
        Ok(data.get_all_tags)
    }
}

/// 获取排行榜前 `limit` 名用户
pub async fn fetch_top_users(limit: i32) -> Result<Vec<User>, QueryError> {
    #[cfg(feature = "mock")]
    {
        let users = models::get_mock_users();
        let limit = usize::try_from(limit).unwrap_or(0);
        return Ok(users.into_iter().take(limit).collect());
    }

    #[cfg(not(feature = "mock"))]
    {
        let data: TopUsersData = post_graphql(&GraphQlRequest::top_users(limit)).await?;
        Ok(data.top_users)
    }
}
