use crate::{
    api::{ApiClient, AuthService, DataService},
    router::{LocationNavigator, Navigator},
    state::{
        notify::{use_toasts, Notifier, ToastState},
        session::SessionManager,
    },
    utils::storage::LocalSessionStore,
};
use leptos::*;
use std::rc::Rc;

/// Collaborators shared by every screen, handed out through context.
#[derive(Clone)]
pub struct Services {
    pub auth: Rc<dyn AuthService>,
    pub data: Rc<dyn DataService>,
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<dyn Navigator>,
}

impl Services {
    pub fn browser(toasts: ToastState) -> Self {
        let api = ApiClient::new();
        let session = SessionManager::new(api.clone(), Rc::new(LocalSessionStore));
        Self {
            auth: Rc::new(session),
            data: Rc::new(api),
            notifier: Rc::new(toasts),
            navigator: Rc::new(LocationNavigator),
        }
    }

    pub fn with_navigator(&self, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            navigator,
            ..self.clone()
        }
    }
}

pub fn provide_services(services: Services) {
    provide_context(services);
}

pub fn use_services() -> Services {
    match use_context::<Services>() {
        Some(services) => services,
        None => {
            let services = Services::browser(use_toasts());
            provide_services(services.clone());
            services
        }
    }
}

/// Sets up the app-wide session context and restores any stored session
/// before the first screen asks for it.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let services = use_services();
    create_effect(move |_| {
        let auth = Rc::clone(&services.auth);
        spawn_local(async move {
            match auth.current_session().await {
                Some(session) => log::info!("Restored session for {}", session.identity()),
                None => log::info!("No active session"),
            }
        });
    });
    view! { <>{children()}</> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::AppRoute;
    use crate::test_support::fakes::FakeBackend;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn use_services_returns_provided_services() {
        with_runtime(|| {
            let backend = FakeBackend::signed_in("u1");
            provide_services(backend.services());
            let services = use_services();
            services.navigator.redirect(AppRoute::Feed);
            assert_eq!(backend.redirects(), vec![AppRoute::Feed]);
        });
    }
}
