use qa_board_shared::{
    panel::{
        avatar_src, is_top_rank, needs_toggle, rank_marker, stats_line, visible_items,
        DEFAULT_AVATAR,
    },
    User,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{loading_spinner::LoadingSpinner, show_more_button::ShowMoreButton},
    config::asset_path,
    i18n::current::users_section as t,
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct UsersSectionProps {
    pub users: Vec<User>,
    pub loading: bool,
    pub expanded: bool,
    pub on_toggle: Callback<()>,
}

fn render_user_row(index: usize, user: &User) -> Html {
    let row_classes = classes!(
        "user-item",
        "flex",
        "items-center",
        "gap-3",
        "px-3",
        "py-2",
        "rounded-xl",
        "border",
        "border-[var(--border)]",
        is_top_rank(index).then_some(classes!(
            "top-user",
            "bg-gradient-to-r",
            "from-amber-400/15",
            "to-transparent",
            "border-amber-400/40"
        ))
    );

    let avatar = match avatar_src(user) {
        DEFAULT_AVATAR => asset_path(DEFAULT_AVATAR),
        url => url.to_string(),
    };

    html! {
        <div key={user.id.clone()} class={row_classes} role="listitem">
            <div class={classes!("rank-badge", "w-8", "text-center", "text-lg", "font-bold")}>
                { rank_marker(index).into_owned() }
            </div>
            <img
                class={classes!("avatar", "w-9", "h-9", "rounded-full", "object-cover")}
                src={avatar}
                alt={user.username.clone()}
                loading="lazy"
            />
            <div class={classes!("user-details", "flex", "flex-col", "min-w-0")}>
                <Link<Route>
                    to={Route::UserProfile { username: user.username.clone() }}
                    classes={classes!("user-link", "font-semibold", "truncate", "hover:text-[var(--primary)]")}
                >
                    { user.username.clone() }
                </Link<Route>>
                <div class={classes!("user-stats", "text-xs", "text-[var(--muted)]")}>
                    { stats_line(user) }
                </div>
            </div>
        </div>
    }
}

#[function_component(UsersSection)]
pub fn users_section(props: &UsersSectionProps) -> Html {
    let content = if props.loading {
        html! { <LoadingSpinner /> }
    } else {
        html! {
            <div class={classes!("leaderboard", "flex", "flex-col", "gap-2")} role="list" aria-label={t::ARIA_LIST}>
                { for visible_items(&props.users, props.expanded)
                    .iter()
                    .enumerate()
                    .map(|(index, user)| render_user_row(index, user)) }
            </div>
        }
    };

    html! {
        <section class={classes!("sidebar-section", "users-section", "space-y-3")}>
            <h2 class={classes!("section-title", "text-lg", "font-semibold", "text-[var(--secondary)]")}>
                { t::TITLE }
            </h2>
            { content }
            if needs_toggle(props.users.len()) {
                <ShowMoreButton expanded={props.expanded} on_toggle={props.on_toggle.clone()} />
            }
        </section>
    }
}
