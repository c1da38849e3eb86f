use leptos::*;

use super::{
    components::{composer::Composer, post_list::PostList},
    view_model::FeedViewModel,
};
use crate::{
    components::{guard::use_session_gate, layout::AppHeader},
    state::auth::use_services,
};

#[component]
pub fn FeedPanel() -> impl IntoView {
    let vm = FeedViewModel::new(use_services());
    {
        let vm = vm.clone();
        use_session_gate(&vm.gate(), vm.identity, move || async move { vm.open().await });
    }

    let on_share = {
        let vm = vm.clone();
        Callback::new(move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.create_post().await;
            });
        })
    };
    let on_profile = {
        let vm = vm.clone();
        Callback::new(move |_| vm.go_to_profile())
    };
    let on_sign_out = {
        let vm = vm.clone();
        Callback::new(move |_| {
            let vm = vm.clone();
            spawn_local(async move { vm.sign_out().await });
        })
    };

    view! {
        <div class="min-h-screen bg-surface">
            <AppHeader
                on_profile=on_profile
                on_sign_out=on_sign_out
                signing_out=vm.signing_out
            />
            <main class="max-w-2xl mx-auto px-4 pt-8 pb-12">
                <Composer draft=vm.draft on_share=on_share/>
                <PostList loading=vm.loading posts=vm.posts/>
            </main>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::provide_services;
    use crate::test_support::{fakes::FakeBackend, ssr::render_to_string};

    #[test]
    fn panel_renders_composer_and_loading_feed() {
        let backend = FakeBackend::signed_in("u1");
        let services = backend.services();
        let html = render_to_string(move || {
            provide_services(services);
            view! { <FeedPanel/> }
        });
        assert!(html.contains("What&#x27;s on your mind?") || html.contains("What's on your mind?"));
        assert!(html.contains("Loading posts..."));
        assert!(html.contains("Sign Out"));
        assert!(backend.data.calls().is_empty());
    }
}
