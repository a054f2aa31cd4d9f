use std::future::Future;

use qa_board_shared::{QueryError, QueryState, Severity};
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;

/// Await `fetch` and settle it, reporting a failure through `on_error`.
pub async fn run_query<T, F, Fut>(fetch: F, on_error: Callback<(String, Severity)>) -> QueryState<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, QueryError>>,
{
    let result = fetch().await;
    QueryState::settle(result, |message, severity| on_error.emit((message, severity)))
}

/// Run `fetch` once on mount and expose its `{ data, loading }` state.
///
/// Failures are logged to the browser console and handed to `on_error` as a
/// display message with [`Severity::Error`]; the returned state then stops
/// loading with no data.
///
/// # Example
/// ```rust
/// use crate::hooks::use_query;
/// use crate::notification::use_notify;
///
/// #[function_component(TagCount)]
/// fn tag_count() -> Html {
///     let notify = use_notify();
///     let tags = use_query(crate::api::fetch_all_tags, notify);
///     html! { <span>{ tags.items().len() }</span> }
/// }
/// ```
#[hook]
pub fn use_query<T, F, Fut>(fetch: F, on_error: Callback<(String, Severity)>) -> QueryState<T>
where
    T: Clone + PartialEq + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, QueryError>> + 'static,
{
    let state = use_state(QueryState::<T>::pending);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let on_error = on_error.reform(|(message, severity): (String, Severity)| {
                web_sys::console::error_1(&format!("Query failed: {}", message).into());
                (message, severity)
            });
            wasm_bindgen_futures::spawn_local(async move {
                state.set(run_query(fetch, on_error).await);
            });
            || ()
        });
    }

    (*state).clone()
}

/// Current `window.innerWidth`, kept up to date through `resize` events.
#[hook]
pub fn use_viewport_width() -> f64 {
    use_window_size().0
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use qa_board_shared::Tag;

    use super::*;

    fn recording_notify() -> (Callback<(String, Severity)>, Rc<RefCell<Vec<(String, Severity)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (Callback::from(move |call: (String, Severity)| sink.borrow_mut().push(call)), calls)
    }

    #[tokio::test]
    async fn failed_fetch_notifies_exactly_once() {
        let (notify, calls) = recording_notify();

        let state: QueryState<Vec<Tag>> = run_query(
            || async { Err(QueryError::Network("connection refused".to_string())) },
            notify,
        )
        .await;

        assert_eq!(
            calls.borrow().as_slice(),
            &[("Network error: connection refused".to_string(), Severity::Error)]
        );
        assert!(!state.loading);
        assert!(state.items().is_empty());
    }

    #[tokio::test]
    async fn graphql_failure_reports_server_message() {
        let (notify, calls) = recording_notify();

        let _: QueryState<Vec<Tag>> = run_query(
            || async {
                Err(QueryError::GraphQl(vec![qa_board_shared::GraphQlError {
                    message: "limit must be positive".to_string(),
                }]))
            },
            notify,
        )
        .await;

        assert_eq!(
            calls.borrow().as_slice(),
            &[("limit must be positive".to_string(), Severity::Error)]
        );
    }

    #[tokio::test]
    async fn successful_fetch_stays_silent() {
        let (notify, calls) = recording_notify();

        let state = run_query(
            || async {
                Ok(vec![Tag {
                    name: "rust".to_string(),
                    usage_count: 3,
                }])
            },
            notify,
        )
        .await;

        assert!(calls.borrow().is_empty());
        assert!(!state.loading);
        assert_eq!(state.items().len(), 1);
    }
}
