//! QA Board web frontend: a Yew single page app whose sidebar shows the top
//! tags and the user leaderboard.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
#[cfg(feature = "mock")]
mod models;
mod notification;
mod pages;
mod router;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
