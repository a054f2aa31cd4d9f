use qa_board_shared::{
    panel::{needs_toggle, tag_label, usage_suffix, visible_items},
    Tag,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{loading_spinner::LoadingSpinner, show_more_button::ShowMoreButton},
    i18n::current::tags_section as t,
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct TagsSectionProps {
    pub tags: Vec<Tag>,
    pub loading: bool,
    pub expanded: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(TagsSection)]
pub fn tags_section(props: &TagsSectionProps) -> Html {
    let content = if props.loading {
        html! { <LoadingSpinner /> }
    } else {
        html! {
            <div class={classes!("tags-grid", "flex", "flex-wrap", "gap-2")} role="list" aria-label={t::ARIA_LIST}>
                { for visible_items(&props.tags, props.expanded).iter().map(|tag| html! {
                    <div key={tag.name.clone()} class={classes!("tag-container", "inline-flex", "items-center")} role="listitem">
                        <Link<Route>
                            to={Route::TagDetail { name: tag.name.clone() }}
                            classes={classes!(
                                "tag-chip",
                                "inline-flex",
                                "items-center",
                                "px-2",
                                "py-0.5",
                                "text-xs",
                                "border",
                                "border-[var(--primary)]",
                                "rounded-full",
                                "text-[var(--primary)]",
                                "transition-colors",
                                "hover:bg-[var(--primary)]/10"
                            )}
                        >
                            { tag_label(&tag.name).into_owned() }
                        </Link<Route>>
                        <span class={classes!("tag-count", "text-xs", "text-[var(--muted)]")}>
                            { usage_suffix(tag.usage_count) }
                        </span>
                    </div>
                }) }
            </div>
        }
    };

    html! {
        <section class={classes!("sidebar-section", "tags-section", "space-y-3")}>
            <h2 class={classes!("section-title", "text-lg", "font-semibold", "text-[var(--secondary)]")}>
                { t::TITLE }
            </h2>
            { content }
            if needs_toggle(props.tags.len()) {
                <ShowMoreButton expanded={props.expanded} on_toggle={props.on_toggle.clone()} />
            }
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use yew::ServerRenderer;
    use yew_router::{
        history::{AnyHistory, MemoryHistory},
        Router,
    };

    use super::*;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        tags: Vec<Tag>,
        loading: bool,
        expanded: bool,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <TagsSection
                    tags={props.tags.clone()}
                    loading={props.loading}
                    expanded={props.expanded}
                    on_toggle={Callback::noop()}
                />
            </Router>
        }
    }

    fn tags(names: &[&str]) -> Vec<Tag> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Tag {
                name: name.to_string(),
                usage_count: (i as u64 + 1) * 10,
            })
            .collect()
    }

    async fn render(tags: Vec<Tag>, loading: bool, expanded: bool) -> String {
        ServerRenderer::<Harness>::with_props(move || HarnessProps {
            tags,
            loading,
            expanded,
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn long_name_is_truncated_but_links_full_name() {
        let html = render(
            vec![Tag {
                name: "javascript-framework-x".to_string(),
                usage_count: 42,
            }],
            false,
            false,
        )
        .await;

        assert!(html.contains("javascript-fr..."));
        assert!(!html.contains(">javascript-framework-x<"));
        assert!(html.contains(r#"href="/tags/javascript-framework-x""#));
        assert!(html.contains(" × 42"));
        assert!(!html.contains("show-more-btn"));
    }

    #[tokio::test]
    async fn collapsed_shows_three_and_a_toggle() {
        let html = render(tags(&["a1", "b2", "c3", "d4", "e5"]), false, false).await;

        assert_eq!(html.matches("tag-chip").count(), 3);
        assert!(html.contains("/tags/c3"));
        assert!(!html.contains("/tags/d4"));
        assert!(html.contains("Show More"));
    }

    #[tokio::test]
    async fn expanded_shows_everything() {
        let html = render(tags(&["a1", "b2", "c3", "d4", "e5"]), false, true).await;

        assert_eq!(html.matches("tag-chip").count(), 5);
        assert!(html.contains("/tags/e5"));
        assert!(html.contains("Show Less"));
    }

    #[tokio::test]
    async fn exactly_three_has_no_toggle() {
        let html = render(tags(&["a1", "b2", "c3"]), false, false).await;

        assert_eq!(html.matches("tag-chip").count(), 3);
        assert!(!html.contains("show-more-btn"));
    }

    #[tokio::test]
    async fn loading_replaces_the_grid() {
        let html = render(tags(&["a1"]), true, false).await;

        assert!(html.contains("loading-spinner"));
        assert!(!html.contains("tag-chip"));
    }

    #[tokio::test]
    async fn empty_list_renders_title_only() {
        let html = render(Vec::new(), false, false).await;

        assert!(html.contains("Top Tags"));
        assert!(!html.contains("tag-chip"));
        assert!(!html.contains("show-more-btn"));
    }
}
