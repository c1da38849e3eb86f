use leptos::*;

use super::{components::form::ProfileForm, view_model::ProfileViewModel};
use crate::{
    components::{
        common::{Button, ButtonVariant},
        guard::use_session_gate,
        layout::{Brand, FullPageLoader},
    },
    state::auth::use_services,
};

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = ProfileViewModel::new(use_services());
    {
        let vm = vm.clone();
        use_session_gate(&vm.gate(), vm.identity, move || async move { vm.open().await });
    }

    let fields = vm.fields();
    let can_save = vm.can_save();
    let saving = vm.saving;
    let loading = vm.loading;

    let on_full_name = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_full_name(value))
    };
    let on_bio = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_bio(value))
    };
    let on_save = {
        let vm = vm.clone();
        Callback::new(move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.update_profile().await;
            });
        })
    };
    let back = vm.clone();

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <FullPageLoader/> }>
            <div class="min-h-screen bg-surface">
                <header class="sticky top-0 z-40 bg-surface-elevated/80 backdrop-blur border-b border-border">
                    <div class="max-w-2xl mx-auto px-4 h-16 flex items-center justify-between">
                        <Brand/>
                        <Button
                            variant=ButtonVariant::Ghost
                            on:click={
                                let back = back.clone();
                                move |_| back.back_to_feed()
                            }
                        >
                            "← Back to Feed"
                        </Button>
                    </div>
                </header>
                <main class="max-w-2xl mx-auto px-4 pt-8 pb-12">
                    <ProfileForm
                        fields=fields
                        can_save=can_save
                        saving=saving
                        on_full_name=on_full_name
                        on_bio=on_bio
                        on_save=on_save
                    />
                </main>
            </div>
        </Show>
    }
}
