use qa_board_shared::Severity;
use yew::prelude::*;
use yew::use_effect_with;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::notification_banner as t;

const AUTO_DISMISS_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub message: String,
    pub severity: Severity,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

fn title_and_icon(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Success => (t::TITLE_SUCCESS, "✅"),
        Severity::Info => (t::TITLE_INFO, "ℹ️"),
        Severity::Warning => (t::TITLE_WARNING, "⚠️"),
        Severity::Error => (t::TITLE_ERROR, "⛔"),
    }
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { AUTO_DISMISS_MS } else { 0 })
    };

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with((*is_open, props.auto_dismiss), move |(visible, auto_dismiss)| {
            if *auto_dismiss && *visible {
                auto_timeout.reset();
            } else {
                auto_timeout.cancel();
            }
        });
    }

    if props.message.trim().is_empty() {
        return Html::default();
    }

    let (title, icon) = title_and_icon(props.severity);

    let mut wrapper_classes = classes!(
        "notification-banner",
        format!("notification-banner--{}", props.severity.as_str()),
        "flex",
        "items-start",
        "gap-3",
        "rounded-2xl",
        "px-5",
        "py-4",
        "text-sm",
        "shadow-xl",
        "transition-all",
        "duration-300",
        "ease-out",
        "overflow-hidden",
        "w-full",
        "max-w-xl"
    );

    if *is_open {
        wrapper_classes.push("opacity-100");
        wrapper_classes.push("translate-y-0");
    } else {
        wrapper_classes.push("opacity-0");
        wrapper_classes.push("translate-y-2");
        wrapper_classes.push("pointer-events-none");
    }

    let role = if props.severity == Severity::Error { "alert" } else { "status" };

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };

    html! {
        <div class={wrapper_classes} role={role} aria-live="assertive">
            <span class="text-2xl" aria-hidden="true">{ icon }</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ title }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class={classes!(
                    "ml-4",
                    "inline-flex",
                    "h-8",
                    "w-8",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "bg-transparent",
                    "text-lg",
                    "transition",
                    "duration-200",
                    "hover:bg-black/10",
                    "dark:hover:bg-white/15"
                )}
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
