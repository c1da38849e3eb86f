//! The process-wide authentication context.
//!
//! [`SessionManager`] owns the signed-in session for the whole app: it
//! restores it from storage, refreshes it once when expired, keeps the data
//! client's bearer token in step and tells listeners about every change.

use async_trait::async_trait;
use chrono::Utc;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::{cell::RefCell, rc::Rc};

use crate::{
    api::{ApiClient, AuthError, AuthService, Session, SessionListener, SessionListeners, Subscription},
    utils::storage::SessionStore,
};

type PendingRefresh = Shared<LocalBoxFuture<'static, Option<Session>>>;

pub struct SessionManager {
    api: ApiClient,
    store: Rc<dyn SessionStore>,
    current: RefCell<Option<Session>>,
    listeners: Rc<SessionListeners>,
    refreshing: RefCell<Option<PendingRefresh>>,
}

impl SessionManager {
    pub fn new(api: ApiClient, store: Rc<dyn SessionStore>) -> Self {
        Self {
            api,
            store,
            current: RefCell::new(None),
            listeners: SessionListeners::new(),
            refreshing: RefCell::new(None),
        }
    }

    fn install(&self, session: Option<Session>) {
        self.api
            .set_access_token(session.as_ref().map(|s| s.access_token.clone()));
        *self.current.borrow_mut() = session;
    }

    /// Install, persist and broadcast a new session state.
    fn replace_session(&self, session: Option<Session>) {
        let persisted = match &session {
            Some(session) => self.store.save(session),
            None => self.store.clear(),
        };
        if let Err(err) = persisted {
            log::warn!("Session storage not updated: {}", err);
        }
        self.install(session.clone());
        self.listeners.notify(session.as_ref());
    }

    /// Exchanges the refresh token. Callers arriving while an exchange is in
    /// flight wait for that exchange instead of sending the token again.
    async fn refresh(&self, refresh_token: String) -> Option<Session> {
        let pending = self.refreshing.borrow().clone();
        if let Some(pending) = pending {
            return pending.await;
        }

        let api = self.api.clone();
        let pending = async move {
            match api.refresh_session(&refresh_token).await {
                Ok(fresh) => {
                    log::debug!("Refreshed session for {}", fresh.identity());
                    Some(fresh)
                }
                Err(err) => {
                    log::warn!("Session refresh failed: {}", err);
                    None
                }
            }
        }
        .boxed_local()
        .shared();
        *self.refreshing.borrow_mut() = Some(pending.clone());

        let fresh = pending.await;
        self.replace_session(fresh.clone());
        self.refreshing.borrow_mut().take();
        fresh
    }

    fn stored_session(&self) -> Option<Session> {
        if let Some(session) = self.current.borrow().clone() {
            return Some(session);
        }
        match self.store.load() {
            Ok(session) => session,
            Err(err) => {
                log::warn!("Stored session unavailable: {}", err);
                None
            }
        }
    }
}

#[async_trait(?Send)]
impl AuthService for SessionManager {
    async fn current_session(&self) -> Option<Session> {
        let session = self.stored_session()?;
        if !session.is_expired_at(Utc::now()) {
            self.install(Some(session.clone()));
            return Some(session);
        }

        let Some(refresh_token) = session.refresh_token.clone() else {
            log::info!("Stored session expired without a refresh token");
            self.replace_session(None);
            return None;
        };
        self.refresh(refresh_token).await
    }

    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let session = self.current.borrow().clone();
        if let Some(session) = session {
            if let Err(err) = self.api.revoke(&session.access_token).await {
                log::warn!("Token revocation failed, signing out locally: {}", err);
            }
        }
        self.replace_session(None);
        Ok(())
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let session = self.api.sign_in_with_password(email, password).await?;
        log::info!("Signed in as {}", session.identity());
        self.replace_session(Some(session.clone()));
        Ok(session)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<Option<Session>, AuthError> {
        let session = self.api.sign_up(email, password, username).await?;
        if let Some(session) = &session {
            self.replace_session(Some(session.clone()));
        }
        Ok(session)
    }
}
