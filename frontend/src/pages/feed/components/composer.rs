use leptos::*;

use crate::{components::common::Button, pages::feed::view_model::can_share};

#[component]
pub fn Composer(draft: RwSignal<String>, on_share: Callback<()>) -> impl IntoView {
    view! {
        <section class="rounded-lg border border-border bg-surface-elevated p-6 mb-8 shadow-sm">
            <textarea
                class="w-full min-h-[100px] mb-4 rounded-md border border-border bg-surface p-3 text-fg"
                placeholder="What's on your mind?"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            ></textarea>
            <Button
                class="w-full"
                disabled=Signal::derive(move || !can_share(&draft.get()))
                on:click=move |_| on_share.call(())
            >
                "Share Post"
            </Button>
        </section>
    }
}
