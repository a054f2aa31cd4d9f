use qa_board_shared::{
    panel::{is_hidden_at, PanelState, Section, TOP_USERS_LIMIT},
    QueryState, Tag, User,
};
use yew::prelude::*;

use crate::{
    api,
    components::{tags_section::TagsSection, users_section::UsersSection},
    hooks::{use_query, use_viewport_width},
    notification::use_notify,
};

/// Sidebar with the top tags and the leaderboard.
///
/// Both queries start on mount and settle independently; a failure goes to
/// `notify` and leaves that section empty. Below the desktop breakpoint
/// nothing is rendered.
#[function_component(RightSidePanel)]
pub fn right_side_panel() -> Html {
    let notify = use_notify();
    let hidden = is_hidden_at(use_viewport_width());

    let panel = use_state(PanelState::default);

    let tags = use_query(api::fetch_all_tags, notify.clone());
    let users = use_query(|| api::fetch_top_users(TOP_USERS_LIMIT), notify);

    let apply = {
        let panel = panel.clone();
        Callback::from(move |next: PanelState| panel.set(next))
    };

    html! {
        <SidePanelView
            {hidden}
            {tags}
            {users}
            panel={*panel}
            on_toggle_tags={section_toggle(*panel, Section::Tags, apply.clone())}
            on_toggle_users={section_toggle(*panel, Section::Users, apply)}
        />
    }
}

/// Toggle button callback of `section`: hands the flipped state to `apply`.
fn section_toggle(
    current: PanelState,
    section: Section,
    apply: Callback<PanelState>,
) -> Callback<()> {
    Callback::from(move |_: ()| apply.emit(current.toggled(section)))
}

#[derive(Properties, PartialEq)]
pub struct SidePanelViewProps {
    pub hidden: bool,
    pub tags: QueryState<Vec<Tag>>,
    pub users: QueryState<Vec<User>>,
    pub panel: PanelState,
    pub on_toggle_tags: Callback<()>,
    pub on_toggle_users: Callback<()>,
}

/// Stateless markup of [`RightSidePanel`].
#[function_component(SidePanelView)]
pub fn side_panel_view(props: &SidePanelViewProps) -> Html {
    if props.hidden {
        return Html::default();
    }

    html! {
        <aside
            class={classes!(
                "right-side-panel",
                "sticky",
                "top-[var(--header-height-desktop)]",
                "w-72",
                "shrink-0",
                "p-4",
                "space-y-6",
                "bg-[var(--surface)]",
                "border-l",
                "border-[var(--border)]"
            )}
        >
            <TagsSection
                tags={props.tags.items()}
                loading={props.tags.loading}
                expanded={props.panel.tags_expanded}
                on_toggle={props.on_toggle_tags.clone()}
            />
            <UsersSection
                users={props.users.items()}
                loading={props.users.loading}
                expanded={props.panel.users_expanded}
                on_toggle={props.on_toggle_users.clone()}
            />
        </aside>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use qa_board_shared::QueryError;
    use yew::ServerRenderer;
    use yew_router::{
        history::{AnyHistory, MemoryHistory},
        Router,
    };

    use super::*;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        hidden: bool,
        tags: QueryState<Vec<Tag>>,
        users: QueryState<Vec<User>>,
        panel: PanelState,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <SidePanelView
                    hidden={props.hidden}
                    tags={props.tags.clone()}
                    users={props.users.clone()}
                    panel={props.panel}
                    on_toggle_tags={Callback::noop()}
                    on_toggle_users={Callback::noop()}
                />
            </Router>
        }
    }

    fn sample_tags() -> Vec<Tag> {
        vec![Tag {
            name: "rust".to_string(),
            usage_count: 7,
        }]
    }

    fn sample_users() -> Vec<User> {
        vec![User {
            id: "1".to_string(),
            username: "ferris".to_string(),
            avatar_url: None,
            reputation: 10,
            total_questions: 1,
            total_answers: 2,
        }]
    }

    async fn render(props: HarnessProps) -> String {
        ServerRenderer::<Harness>::with_props(move || props)
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn narrow_viewport_renders_nothing() {
        let html = render(HarnessProps {
            hidden: true,
            tags: QueryState::ready(sample_tags()),
            users: QueryState::ready(sample_users()),
            panel: PanelState::default(),
        })
        .await;

        assert!(html.trim().is_empty(), "expected no markup, got {html}");
    }

    #[tokio::test]
    async fn failed_tags_query_does_not_block_leaderboard() {
        let mut notified = Vec::new();
        let tags = QueryState::settle(Err(QueryError::Http(500)), |message, severity| {
            notified.push((message, severity))
        });
        assert_eq!(notified.len(), 1);

        let html = render(HarnessProps {
            hidden: false,
            tags,
            users: QueryState::ready(sample_users()),
            panel: PanelState::default(),
        })
        .await;

        assert!(html.contains("right-side-panel"));
        assert!(!html.contains("tag-chip"));
        assert!(html.contains(r#"href="/user/ferris""#));
    }

    #[tokio::test]
    async fn sections_load_independently() {
        let html = render(HarnessProps {
            hidden: false,
            tags: QueryState::ready(sample_tags()),
            users: QueryState::pending(),
            panel: PanelState::default(),
        })
        .await;

        assert!(html.contains(r#"href="/tags/rust""#));
        assert_eq!(html.matches("loading-spinner").count(), 1);
        assert!(!html.contains("user-link"));
    }

    fn many_tags(len: usize) -> Vec<Tag> {
        (0..len)
            .map(|i| Tag {
                name: format!("tag{i}"),
                usage_count: i as u64,
            })
            .collect()
    }

    fn recording_apply() -> (Callback<PanelState>, Rc<RefCell<Vec<PanelState>>>) {
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = applied.clone();
        (Callback::from(move |next: PanelState| sink.borrow_mut().push(next)), applied)
    }

    #[test]
    fn tags_toggle_expands_only_tags() {
        let (apply, applied) = recording_apply();
        section_toggle(PanelState::default(), Section::Tags, apply).emit(());

        assert_eq!(
            applied.borrow().as_slice(),
            &[PanelState {
                tags_expanded: true,
                users_expanded: false,
            }]
        );
    }

    #[test]
    fn users_toggle_collapses_expanded_leaderboard() {
        let (apply, applied) = recording_apply();
        let current = PanelState::default().toggled(Section::Users);
        section_toggle(current, Section::Users, apply).emit(());

        assert_eq!(applied.borrow().as_slice(), &[PanelState::default()]);
    }

    #[tokio::test]
    async fn one_toggle_click_shows_every_tag_and_back() {
        let (apply, applied) = recording_apply();
        let tags = many_tags(6);

        let collapsed = render(HarnessProps {
            hidden: false,
            tags: QueryState::ready(tags.clone()),
            users: QueryState::ready(sample_users()),
            panel: PanelState::default(),
        })
        .await;
        assert_eq!(collapsed.matches("tag-chip").count(), 3);
        assert!(collapsed.contains("Show More"));

        section_toggle(PanelState::default(), Section::Tags, apply.clone()).emit(());
        let expanded_state = applied.borrow()[0];
        let expanded = render(HarnessProps {
            hidden: false,
            tags: QueryState::ready(tags.clone()),
            users: QueryState::ready(sample_users()),
            panel: expanded_state,
        })
        .await;
        assert_eq!(expanded.matches("tag-chip").count(), 6);
        assert!(expanded.contains("Show Less"));

        section_toggle(expanded_state, Section::Tags, apply).emit(());
        let collapsed_state = applied.borrow()[1];
        let collapsed_again = render(HarnessProps {
            hidden: false,
            tags: QueryState::ready(tags),
            users: QueryState::ready(sample_users()),
            panel: collapsed_state,
        })
        .await;
        assert_eq!(collapsed_again.matches("tag-chip").count(), 3);
    }
}
