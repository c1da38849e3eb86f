use leptos::*;

use crate::components::common::{Button, ButtonVariant};

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" aria-busy="true">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

/// Whole-screen variant used while a screen's first load is in flight.
#[component]
pub fn FullPageLoader() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface">
            <LoadingSpinner/>
        </div>
    }
}

#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <span class="text-2xl font-bold tracking-tight text-fg">"Ronin"</span>
    }
}

/// Sticky header of the signed-in screens.
#[component]
pub fn AppHeader(
    on_profile: Callback<()>,
    on_sign_out: Callback<()>,
    #[prop(optional, into)] signing_out: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 bg-surface-elevated/80 backdrop-blur border-b border-border">
            <div class="max-w-2xl mx-auto px-4 h-16 flex items-center justify-between">
                <Brand/>
                <nav class="flex items-center gap-2">
                    <Button
                        variant=ButtonVariant::Ghost
                        on:click=move |_| on_profile.call(())
                    >
                        "Profile"
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        loading=signing_out
                        on:click=move |_| on_sign_out.call(())
                    >
                        "Sign Out"
                    </Button>
                </nav>
            </div>
        </header>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_offers_profile_and_sign_out() {
        let html = render_to_string(|| {
            view! {
                <AppHeader
                    on_profile=Callback::new(|_| {})
                    on_sign_out=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Ronin"));
        assert!(html.contains("Profile"));
        assert!(html.contains("Sign Out"));
    }

    #[test]
    fn loaders_render_spinner() {
        let html = render_to_string(|| view! { <FullPageLoader/> });
        assert!(html.contains("animate-spin"));
    }
}
