use leptos::*;

/// Upper-cased first letter of `username`, or `?` when there is none.
pub fn avatar_initial(username: &str) -> String {
    match username.trim().chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => "?".to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AvatarSize {
    #[default]
    Small,
    Large,
}

impl AvatarSize {
    fn classes(self) -> &'static str {
        match self {
            AvatarSize::Small => "h-10 w-10 text-sm",
            AvatarSize::Large => "h-24 w-24 text-3xl",
        }
    }
}

#[component]
pub fn Avatar(
    #[prop(into)] username: MaybeSignal<String>,
    #[prop(optional, into)] image_url: MaybeSignal<Option<String>>,
    #[prop(optional)] size: AvatarSize,
) -> impl IntoView {
    let frame = format!(
        "inline-flex shrink-0 items-center justify-center overflow-hidden rounded-full bg-action-primary-bg text-action-primary-text font-semibold {}",
        size.classes()
    );
    view! {
        <span class=frame>
            {move || match image_url.get().filter(|url| !url.is_empty()) {
                Some(url) => view! {
                    <img src=url alt=username.get() class="h-full w-full object-cover"/>
                }
                .into_view(),
                None => avatar_initial(&username.get()).into_view(),
            }}
        </span>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_image_when_url_present() {
        let html = render_to_string(|| {
            view! {
                <Avatar
                    username="alice".to_string()
                    image_url=Some("https://cdn.example/a.png".to_string())
                />
            }
        });
        assert!(html.contains("https://cdn.example/a.png"));
    }

    #[test]
    fn renders_initial_without_image() {
        let html = render_to_string(|| view! { <Avatar username="zed".to_string()/> });
        assert!(html.contains('Z'));
        assert!(!html.contains("<img"));
    }
}
