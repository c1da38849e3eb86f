use leptos::*;

use super::post_card::PostCard;
use crate::{
    api::Post,
    components::empty_state::EmptyState,
    pages::feed::view_model::{feed_view, FeedView},
};

#[component]
pub fn PostList(
    #[prop(into)] loading: MaybeSignal<bool>,
    #[prop(into)] posts: MaybeSignal<Vec<Post>>,
) -> impl IntoView {
    move || {
        let current = posts.get();
        match feed_view(loading.get(), &current) {
            FeedView::Loading => view! {
                <div class="text-center text-fg-muted py-8">"Loading posts..."</div>
            }
            .into_view(),
            FeedView::Empty => view! {
                <EmptyState title="No posts yet. Be the first to share!"/>
            }
            .into_view(),
            FeedView::Populated(_) => view! {
                <div class="space-y-6">
                    {current
                        .into_iter()
                        .map(|post| view! { <PostCard post=post/> })
                        .collect_view()}
                </div>
            }
            .into_view(),
        }
    }
}
