use leptos::*;

/// Transient user-facing messages. Fire-and-forget; only the most recent
/// message is guaranteed to be visible.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_failure(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastState {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: store_value(0),
        }
    }

    pub fn current(&self) -> Signal<Option<Toast>> {
        self.current.into()
    }

    fn push(&self, kind: ToastKind, message: &str) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.current.set(Some(Toast {
            id,
            kind,
            message: message.to_string(),
        }));
    }

    /// Hide the toast with `id` unless a newer one replaced it already.
    pub fn dismiss(&self, id: u64) {
        self.current.update(|current| {
            if current.as_ref().map(|toast| toast.id) == Some(id) {
                *current = None;
            }
        });
    }
}

impl Notifier for ToastState {
    fn notify_success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn notify_failure(&self, message: &str) {
        self.push(ToastKind::Failure, message);
    }
}

pub fn use_toasts() -> ToastState {
    match use_context::<ToastState>() {
        Some(state) => state,
        None => {
            let state = ToastState::new();
            provide_context(state);
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn latest_notification_wins() {
        with_runtime(|| {
            let toasts = ToastState::new();
            toasts.notify_success("Post created!");
            toasts.notify_failure("Failed to load posts");
            let current = toasts.current().get_untracked().expect("toast");
            assert_eq!(current.kind, ToastKind::Failure);
            assert_eq!(current.message, "Failed to load posts");
        });
    }

    #[test]
    fn stale_dismiss_keeps_newer_toast() {
        with_runtime(|| {
            let toasts = ToastState::new();
            toasts.notify_success("first");
            let first = toasts.current().get_untracked().expect("first").id;
            toasts.notify_success("second");

            toasts.dismiss(first);
            assert_eq!(
                toasts.current().get_untracked().map(|t| t.message),
                Some("second".to_string())
            );

            let second = toasts.current().get_untracked().expect("second").id;
            toasts.dismiss(second);
            assert!(toasts.current().get_untracked().is_none());
        });
    }

    #[test]
    fn use_toasts_provides_shared_state() {
        with_runtime(|| {
            let first = use_toasts();
            first.notify_success("shared");
            let second = use_toasts();
            assert_eq!(
                second.current().get_untracked().map(|t| t.message),
                Some("shared".to_string())
            );
        });
    }
}
