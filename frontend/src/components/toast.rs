use gloo_timers::callback::Timeout;
use leptos::*;

use crate::state::notify::{use_toasts, Toast, ToastKind};

const DISMISS_AFTER_MS: u32 = 3_000;

fn toast_classes(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "bg-status-success-bg border border-status-success-border text-status-success-text"
        }
        ToastKind::Failure => {
            "bg-status-error-bg border border-status-error-border text-status-error-text"
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let role = match toast.kind {
        ToastKind::Success => "status",
        ToastKind::Failure => "alert",
    };
    view! {
        <div
            role=role
            class=format!(
                "pointer-events-auto rounded-md px-4 py-3 text-sm font-medium shadow-lg {}",
                toast_classes(toast.kind),
            )
        >
            {toast.message}
        </div>
    }
}

/// Shows the most recent notification and hides it after a few seconds.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let current = toasts.current();

    // Replacing the stored timeout drops, and so cancels, the previous one.
    let timer = store_value(None::<Timeout>);
    create_effect(move |_| {
        let Some(toast) = current.get() else {
            return;
        };
        let id = toast.id;
        timer.set_value(Some(Timeout::new(DISMISS_AFTER_MS, move || toasts.dismiss(id))));
    });

    view! {
        <div class="pointer-events-none fixed bottom-4 right-4 z-[80] flex flex-col gap-2">
            {move || current.get().map(|toast| view! { <ToastCard toast=toast/> })}
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::notify::Notifier;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn host_renders_latest_message() {
        let html = render_to_string(|| {
            let toasts = use_toasts();
            toasts.notify_success("Post created!");
            toasts.notify_failure("Failed to load posts");
            view! { <ToastHost/> }
        });
        assert!(html.contains("Failed to load posts"));
        assert!(!html.contains("Post created!"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn host_is_empty_without_notifications() {
        let html = render_to_string(|| view! { <ToastHost/> });
        assert!(!html.contains("role=\"status\""));
        assert!(!html.contains("role=\"alert\""));
    }
}
