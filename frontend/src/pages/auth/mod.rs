use leptos::*;
use leptos_meta::Title;

use crate::router::AppRoute;

pub mod components;
pub mod view_model;

mod panel;

pub use panel::AuthPanel;

#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Auth.title()/>
        <AuthPanel />
    }
}
