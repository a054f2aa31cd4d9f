use qa_board_shared::Severity;
use yew::prelude::*;

use crate::components::notification_banner::NotificationBanner;

/// The latest message pushed through `notify`.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// Bumped on every notification so a repeated message re-opens the banner.
    pub seq: u32,
}

/// Process-wide `notify(message, severity)` channel.
#[derive(Clone, PartialEq)]
pub struct NotificationContext {
    pub notify: Callback<(String, Severity)>,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Html,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let current = use_state(|| Option::<Notification>::None);
    let seq = use_mut_ref(|| 0u32);

    let notify = {
        let current = current.clone();
        use_callback((), move |(message, severity): (String, Severity), _| {
            let next = {
                let mut seq = seq.borrow_mut();
                *seq = seq.wrapping_add(1);
                *seq
            };
            current.set(Some(Notification {
                message,
                severity,
                seq: next,
            }));
        })
    };
    let context = NotificationContext {
        notify,
    };

    let on_close = {
        let current = current.clone();
        Callback::from(move |_: ()| current.set(None))
    };

    html! {
        <ContextProvider<NotificationContext> context={context}>
            {props.children.clone()}
            if let Some(notification) = (*current).clone() {
                <div class="notification-host fixed bottom-6 left-1/2 z-50 -translate-x-1/2">
                    <NotificationBanner
                        key={notification.seq}
                        message={notification.message}
                        severity={notification.severity}
                        on_close={on_close}
                    />
                </div>
            }
        </ContextProvider<NotificationContext>>
    }
}

/// The `notify` callback of the nearest [`NotificationProvider`].
///
/// Outside a provider messages only reach the browser console.
#[hook]
pub fn use_notify() -> Callback<(String, Severity)> {
    match use_context::<NotificationContext>() {
        Some(ctx) => ctx.notify,
        None => Callback::from(|(message, severity): (String, Severity)| {
            web_sys::console::warn_1(&format!("[{}] {}", severity.as_str(), message).into());
        }),
    }
}
