use leptos::*;

use crate::{
    components::{
        avatar::{Avatar, AvatarSize},
        common::Button,
    },
    pages::profile::view_model::ProfileFields,
};

#[component]
pub fn ProfileForm(
    #[prop(into)] fields: MaybeSignal<ProfileFields>,
    #[prop(into)] can_save: MaybeSignal<bool>,
    #[prop(into)] saving: MaybeSignal<bool>,
    on_full_name: Callback<String>,
    on_bio: Callback<String>,
    on_save: Callback<()>,
) -> impl IntoView {
    let username = {
        let fields = fields.clone();
        Signal::derive(move || fields.with(|f| f.username.clone()))
    };
    let avatar_url = {
        let fields = fields.clone();
        Signal::derive(move || fields.with(|f| f.avatar_url.clone()))
    };
    let full_name_fields = fields.clone();

    view! {
        <section class="rounded-lg border border-border bg-surface-elevated p-8 shadow-sm">
            <div class="flex flex-col items-center mb-8 gap-4">
                <Avatar username=username image_url=avatar_url size=AvatarSize::Large/>
                <h1 class="text-2xl font-bold text-fg">{move || format!("@{}", username.get())}</h1>
            </div>
            <div class="space-y-4">
                <div class="space-y-2">
                    <label for="username" class="text-sm font-medium text-fg">"Username"</label>
                    <input
                        id="username"
                        class="w-full rounded-md border border-border bg-surface-muted px-3 py-2 text-fg-muted"
                        prop:value=move || username.get()
                        disabled=true
                    />
                    <p class="text-xs text-fg-muted">"Username cannot be changed"</p>
                </div>
                <div class="space-y-2">
                    <label for="full-name" class="text-sm font-medium text-fg">"Full Name"</label>
                    <input
                        id="full-name"
                        class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=move || full_name_fields.with(|f| f.full_name.clone())
                        on:input=move |ev| on_full_name.call(event_target_value(&ev))
                    />
                </div>
                <div class="space-y-2">
                    <label for="bio" class="text-sm font-medium text-fg">"Bio"</label>
                    <textarea
                        id="bio"
                        class="w-full min-h-[100px] rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        placeholder="Tell us about yourself..."
                        prop:value=move || fields.with(|f| f.bio.clone())
                        on:input=move |ev| on_bio.call(event_target_value(&ev))
                    ></textarea>
                </div>
                <Button
                    class="w-full"
                    disabled=Signal::derive(move || !can_save.get())
                    on:click=move |_| on_save.call(())
                >
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </Button>
            </div>
        </section>
    }
}
