use yew::prelude::*;

use crate::{components::right_side_panel::RightSidePanel, i18n::current::pages as t};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class={classes!("container", "flex", "gap-6", "items-start")}>
            <main class={classes!("flex-1", "min-w-0", "py-6")}>
                <h1 class={classes!("text-2xl", "font-bold", "mb-4")}>{ t::HOME_TITLE }</h1>
                <p class={classes!("text-[var(--muted)]")}>{ t::HOME_EMPTY }</p>
            </main>
            <RightSidePanel />
        </div>
    }
}
