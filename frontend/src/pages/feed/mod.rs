use leptos::*;
use leptos_meta::Title;

use crate::router::AppRoute;

pub mod components;
pub mod repository;
pub mod view_model;

mod panel;

pub use panel::FeedPanel;

#[component]
pub fn FeedPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Feed.title()/>
        <FeedPanel />
    }
}
