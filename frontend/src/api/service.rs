//! Contracts the screens need from the managed backend.

use async_trait::async_trait;
use serde_json::Value;
use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use super::{AuthError, Filter, Query, QueryError, Session};

pub type SessionListener = Rc<dyn Fn(Option<Session>)>;

#[async_trait(?Send)]
pub trait AuthService {
    /// The active session, or `None` when signed out or when the session
    /// could not be confirmed.
    async fn current_session(&self) -> Option<Session>;

    /// Register a listener for sign-in, sign-out and refresh events. The
    /// listener stays registered until the returned handle is dropped.
    fn on_session_change(&self, listener: SessionListener) -> Subscription;

    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> Result<Session, AuthError>;

    /// Returns `None` when the account still awaits email confirmation.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<Option<Session>, AuthError>;
}

#[async_trait(?Send)]
pub trait DataService {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, QueryError>;

    async fn insert(&self, collection: &str, record: Value) -> Result<(), QueryError>;

    async fn update(
        &self,
        collection: &str,
        patch: Value,
        filters: &[Filter],
    ) -> Result<(), QueryError>;
}

/// Unregisters a listener when dropped.
#[must_use = "dropping a subscription unregisters its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Listener registry shared by auth implementations.
#[derive(Default)]
pub struct SessionListeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, SessionListener)>>,
}

impl SessionListeners {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn subscribe(self: &Rc<Self>, listener: SessionListener) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, listener));

        let registry: Weak<Self> = Rc::downgrade(self);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.entries.borrow_mut().retain(|(entry, _)| *entry != id);
            }
        })
    }

    pub fn notify(&self, session: Option<&Session>) {
        // Listeners may subscribe or unsubscribe while being called.
        let listeners: Vec<SessionListener> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(session.cloned());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
