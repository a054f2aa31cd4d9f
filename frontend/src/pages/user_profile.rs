use yew::prelude::*;

use crate::i18n::{current::pages as t, fill_one};

#[derive(Properties, Clone, PartialEq)]
pub struct UserProfileProps {
    pub username: String,
}

#[function_component(UserProfilePage)]
pub fn user_profile_page(props: &UserProfileProps) -> Html {
    html! {
        <main class={classes!("container", "py-6")}>
            <h1 class={classes!("text-2xl", "font-bold")}>
                { fill_one(t::USER_PROFILE_TEMPLATE, &props.username) }
            </h1>
        </main>
    }
}
