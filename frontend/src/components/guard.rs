use crate::{
    api::{AuthService, Subscription, UserId},
    router::{AppRoute, Navigator},
    state::auth::Services,
};
use leptos::*;
use std::{cell::RefCell, future::Future, rc::Rc};

/// Keeps a screen behind a signed-in session.
///
/// An absent session, whether found on mount or reported later by the auth
/// collaborator, sends the user to the sign-in screen and is never shown as
/// an error.
#[derive(Clone)]
pub struct SessionGate {
    auth: Rc<dyn AuthService>,
    navigator: Rc<dyn Navigator>,
}

impl SessionGate {
    pub fn new(services: &Services) -> Self {
        Self {
            auth: Rc::clone(&services.auth),
            navigator: Rc::clone(&services.navigator),
        }
    }

    /// Checks the current session once. Stores the identity when present,
    /// redirects otherwise.
    pub async fn admit(&self, identity: RwSignal<Option<UserId>>) -> Option<UserId> {
        match self.auth.current_session().await {
            Some(session) => {
                let id = session.identity().clone();
                identity.set(Some(id.clone()));
                Some(id)
            }
            None => {
                log::info!("No session; redirecting to sign-in");
                identity.set(None);
                self.navigator.redirect(AppRoute::Auth);
                None
            }
        }
    }

    /// Follows session changes until the returned handle is dropped.
    pub fn watch(&self, identity: RwSignal<Option<UserId>>) -> Subscription {
        let navigator = Rc::clone(&self.navigator);
        self.auth
            .on_session_change(Rc::new(move |session| match session {
                Some(session) => identity.set(Some(session.identity().clone())),
                None => {
                    identity.set(None);
                    navigator.redirect(AppRoute::Auth);
                }
            }))
    }
}

/// Binds a gated screen to the calling component: sign-out notifications
/// redirect for as long as the component lives, and `open` runs once after
/// mount. `open` is expected to start with [`SessionGate::admit`].
pub fn use_session_gate<F, Fut>(gate: &SessionGate, identity: RwSignal<Option<UserId>>, open: F)
where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let subscription = gate.watch(identity);
    on_cleanup(move || drop(subscription));

    let pending = Rc::new(RefCell::new(Some(open)));
    create_effect(move |_| {
        if let Some(open) = pending.borrow_mut().take() {
            spawn_local(open());
        }
    });
}
