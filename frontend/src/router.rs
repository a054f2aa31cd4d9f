use yew::prelude::*;
use yew_router::prelude::*;

use crate::{notification::NotificationProvider, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/tags/:name")]
    TagDetail { name: String },

    #[at("/user/:username")]
    UserProfile { username: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::TagDetail {
            name,
        } => {
            html! { <pages::tag_detail::TagDetailPage name={name} /> }
        },
        Route::UserProfile {
            username,
        } => {
            html! { <pages::user_profile::UserProfilePage username={username} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <NotificationProvider>
                <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                    <Switch<Route> render={switch} />
                </div>
            </NotificationProvider>
        </BrowserRouter>
    }
}
