use std::cell::RefCell;
use web_sys::{Storage, Window};

use crate::api::{AuthError, Session};

pub const SESSION_STORAGE_KEY: &str = "ronin.auth.session";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Where the signed-in session survives page reloads.
pub trait SessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError>;
    fn save(&self, session: &Session) -> Result<(), AuthError>;
    fn clear(&self) -> Result<(), AuthError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        let storage = local_storage().map_err(AuthError::Storage)?;
        let raw = storage
            .get_item(SESSION_STORAGE_KEY)
            .map_err(|_| AuthError::Storage("Failed to read session".into()))?;
        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(session) => Ok(Some(session)),
                Err(err) => {
                    log::warn!("Discarding unreadable stored session: {}", err);
                    let _ = storage.remove_item(SESSION_STORAGE_KEY);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        let storage = local_storage().map_err(AuthError::Storage)?;
        let raw =
            serde_json::to_string(session).map_err(|err| AuthError::Storage(err.to_string()))?;
        storage
            .set_item(SESSION_STORAGE_KEY, &raw)
            .map_err(|_| AuthError::Storage("Failed to persist session".into()))
    }

    fn clear(&self) -> Result<(), AuthError> {
        let storage = local_storage().map_err(AuthError::Storage)?;
        storage
            .remove_item(SESSION_STORAGE_KEY)
            .map_err(|_| AuthError::Storage("Failed to clear session".into()))
    }
}

/// Keeps the session for the lifetime of the page only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RefCell<Option<Session>>,
}

impl MemorySessionStore {
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RefCell::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.session.borrow().clone())
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        *self.session.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        self.session.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::session_for;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemorySessionStore::default();
        assert_eq!(store.load(), Ok(None));

        let session = session_for("u1");
        store.save(&session).expect("save");
        assert_eq!(store.load(), Ok(Some(session)));

        store.clear().expect("clear");
        assert_eq!(store.load(), Ok(None));
    }
}
