use yew::prelude::*;

use crate::i18n::current::pages as t;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main>
            <h2>{ t::NOT_FOUND_TITLE }</h2>
            <p>{ t::NOT_FOUND_BODY }</p>
        </main>
    }
}
