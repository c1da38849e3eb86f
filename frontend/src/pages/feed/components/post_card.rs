use leptos::*;

use crate::{
    api::{AuthorSummary, Post},
    components::avatar::Avatar,
    utils::time::format_relative_now,
};

fn author_of(post: &Post) -> AuthorSummary {
    post.author.clone().unwrap_or_else(|| AuthorSummary {
        username: String::new(),
        full_name: None,
        avatar_url: None,
    })
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let author = author_of(&post);
    let display_name = author.display_name().to_string();
    let handle = format!("@{}", author.username);
    let posted = format_relative_now(post.created_at);
    let likes = post.like_count();
    let comments = post.comment_count();

    view! {
        <article class="rounded-lg border border-border bg-surface-elevated p-6 shadow-sm">
            <div class="flex items-start gap-4">
                <Avatar username=author.username.clone() image_url=author.avatar_url.clone()/>
                <div class="flex-1 min-w-0">
                    <div class="flex items-center gap-2 mb-2">
                        <span class="font-semibold text-fg">{display_name}</span>
                        <span class="text-sm text-fg-muted">{handle}</span>
                        <span class="text-sm text-fg-muted">"· "{posted}</span>
                    </div>
                    <p class="text-fg mb-4 whitespace-pre-wrap break-words">{post.content}</p>
                    {post.image_url.filter(|url| !url.is_empty()).map(|url| view! {
                        <img src=url alt="" class="mb-4 rounded-md max-h-96 w-full object-cover"/>
                    })}
                    <div class="flex items-center gap-6 text-fg-muted text-sm">
                        <span class="flex items-center gap-2" aria-label=format!("{} likes", likes)>
                            <span aria-hidden="true">"♥"</span>
                            {likes}
                        </span>
                        <span class="flex items-center gap-2" aria-label=format!("{} comments", comments)>
                            <span aria-hidden="true">"💬"</span>
                            {comments}
                        </span>
                    </div>
                </div>
            </div>
        </article>
    }
}
