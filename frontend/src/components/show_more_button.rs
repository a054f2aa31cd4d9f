use yew::prelude::*;

use crate::i18n::current::show_more_button as t;

#[derive(Properties, PartialEq)]
pub struct ShowMoreButtonProps {
    pub expanded: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(ShowMoreButton)]
pub fn show_more_button(props: &ShowMoreButtonProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let label = if props.expanded { t::SHOW_LESS } else { t::SHOW_MORE };

    html! {
        <button
            type="button"
            class={classes!(
                "show-more-btn",
                "mt-2",
                "px-3",
                "py-1",
                "text-xs",
                "font-semibold",
                "uppercase",
                "tracking-wide",
                "text-[var(--primary)]",
                "rounded-md",
                "transition-colors",
                "hover:bg-[var(--primary)]/10"
            )}
            aria-expanded={props.expanded.to_string()}
            {onclick}
        >
            { label }
        </button>
    }
}
