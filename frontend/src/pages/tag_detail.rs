use yew::prelude::*;

use crate::{
    components::right_side_panel::RightSidePanel,
    i18n::{current::pages as t, fill_one},
};

#[derive(Properties, Clone, PartialEq)]
pub struct TagDetailProps {
    pub name: String,
}

#[function_component(TagDetailPage)]
pub fn tag_detail_page(props: &TagDetailProps) -> Html {
    html! {
        <div class={classes!("container", "flex", "gap-6", "items-start")}>
            <main class={classes!("flex-1", "min-w-0", "py-6")}>
                <h1 class={classes!("text-2xl", "font-bold")}>
                    { fill_one(t::TAG_DETAIL_TEMPLATE, props.name.trim()) }
                </h1>
            </main>
            <RightSidePanel />
        </div>
    }
}
