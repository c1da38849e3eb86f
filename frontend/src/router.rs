use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use std::rc::Rc;

use crate::{
    components::toast::ToastHost,
    pages::{auth::AuthPage, feed::FeedPage, home::HomePage, profile::ProfilePage},
    state::{
        auth::{provide_services, use_services, AuthProvider},
        notify::use_toasts,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Auth,
    Feed,
    Profile,
}

impl AppRoute {
    pub const ALL: [AppRoute; 4] = [
        AppRoute::Landing,
        AppRoute::Auth,
        AppRoute::Feed,
        AppRoute::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Auth => "/auth",
            AppRoute::Feed => "/feed",
            AppRoute::Profile => "/profile",
        }
    }

    /// Browser tab title for the screen.
    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Landing => "Ronin - Connect Without Limits",
            AppRoute::Auth => "Sign In | Ronin",
            AppRoute::Feed => "Feed | Ronin",
            AppRoute::Profile => "Profile | Ronin",
        }
    }
}

pub trait Navigator {
    fn redirect(&self, route: AppRoute);
}

/// Full page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn redirect(&self, route: AppRoute) {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if location.pathname().ok().as_deref() == Some(route.path()) {
                return;
            }
            let _ = location.set_href(route.path());
        }
    }
}

/// Client-side navigation through the router's history integration.
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self {
            navigate: Rc::new(navigate),
        }
    }
}

impl Navigator for RouterNavigator {
    fn redirect(&self, route: AppRoute) {
        log::debug!("Navigating to {}", route.path());
        (self.navigate)(route.path(), NavigateOptions::default());
    }
}

/// Swaps the page-reload navigator for the router-backed one for everything
/// rendered inside the router.
#[component]
fn NavigationScope(children: Children) -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();
    provide_services(services.with_navigator(Rc::new(RouterNavigator::new(navigate))));
    children()
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    use_toasts();
    view! {
        <AuthProvider>
            <Router>
                <NavigationScope>
                    <Routes>
                        <Route path=AppRoute::Landing.path() view=HomePage/>
                        <Route path=AppRoute::Auth.path() view=AuthPage/>
                        <Route path=AppRoute::Feed.path() view=FeedPage/>
                        <Route path=AppRoute::Profile.path() view=ProfilePage/>
                    </Routes>
                </NavigationScope>
            </Router>
            <ToastHost/>
        </AuthProvider>
    }
}
