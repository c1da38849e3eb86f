use leptos::{ev::SubmitEvent, *};

use crate::{components::common::ButtonVariant, pages::auth::view_model::AuthMode};

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                type=input_type
                class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn AuthForm(
    mode: RwSignal<AuthMode>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    username: RwSignal<String>,
    #[prop(into)] can_submit: MaybeSignal<bool>,
    #[prop(into)] pending: MaybeSignal<bool>,
    on_submit: Callback<()>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <h1 class="text-2xl font-bold text-fg text-center">{move || mode.get().title()}</h1>
            <Show when=move || mode.get() == AuthMode::SignUp>
                <Field id="username" label="Username" input_type="text" value=username/>
            </Show>
            <Field id="email" label="Email" input_type="email" value=email/>
            <Field id="password" label="Password" input_type="password" value=password/>
            <button
                type="submit"
                class=format!(
                    "w-full inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                    ButtonVariant::Primary.classes(),
                )
                disabled=move || !can_submit.get()
            >
                {move || if pending.get() { "Please wait..." } else { mode.get().submit_label() }}
            </button>
            <button
                type="button"
                class="w-full text-sm text-fg-muted hover:text-fg"
                on:click=move |_| on_toggle.call(())
            >
                {move || match mode.get() {
                    AuthMode::SignIn => "Don't have an account? Sign up",
                    AuthMode::SignUp => "Already have an account? Sign in",
                }}
            </button>
        </form>
    }
}
