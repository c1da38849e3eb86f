use leptos::*;
use leptos_meta::Title;

use crate::router::AppRoute;

pub mod components;
pub mod repository;
pub mod view_model;

mod panel;

pub use panel::ProfilePanel;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Profile.title()/>
        <ProfilePanel />
    }
}
