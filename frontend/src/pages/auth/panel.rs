use leptos::*;

use super::{components::form::AuthForm, view_model::AuthViewModel};
use crate::{components::layout::Brand, state::auth::use_services};

#[component]
pub fn AuthPanel() -> impl IntoView {
    let vm = AuthViewModel::new(use_services());
    {
        let vm = vm.clone();
        create_effect(move |_| {
            let vm = vm.clone();
            spawn_local(async move { vm.open().await });
        });
    }

    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.submit().await;
            });
        })
    };
    let on_toggle = {
        let vm = vm.clone();
        Callback::new(move |_| vm.toggle_mode())
    };

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-surface px-4">
            <div class="mb-8"><Brand/></div>
            <div class="w-full max-w-md rounded-lg border border-border bg-surface-elevated p-8 shadow-sm">
                <AuthForm
                    mode=vm.mode
                    email=vm.email
                    password=vm.password
                    username=vm.username
                    can_submit=vm.can_submit()
                    pending=vm.pending
                    on_submit=on_submit
                    on_toggle=on_toggle
                />
            </div>
        </div>
    }
}
