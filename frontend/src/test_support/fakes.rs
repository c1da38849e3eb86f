//! In-memory collaborators for driving view models without a browser.

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;
use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use crate::{
    api::{
        AuthError, AuthService, DataService, Filter, Query, QueryError, Session, SessionListener,
        SessionListeners, Subscription,
    },
    router::{AppRoute, Navigator},
    state::{
        auth::Services,
        notify::{Notifier, ToastKind},
    },
};

use super::helpers::session_for;

type SelectResult = Result<Vec<Value>, QueryError>;

#[derive(Default)]
pub struct FakeAuth {
    session: RefCell<Option<Session>>,
    listeners: Rc<SessionListeners>,
    sign_in_result: RefCell<Option<Result<Session, AuthError>>>,
    sign_up_result: RefCell<Option<Result<Option<Session>, AuthError>>>,
    sign_out_calls: Cell<usize>,
}

impl FakeAuth {
    /// Simulate a change reported by the auth backend.
    pub fn emit(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session.clone();
        self.listeners.notify(session.as_ref());
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.get()
    }

    pub fn respond_to_sign_in(&self, result: Result<Session, AuthError>) {
        *self.sign_in_result.borrow_mut() = Some(result);
    }

    pub fn respond_to_sign_up(&self, result: Result<Option<Session>, AuthError>) {
        *self.sign_up_result.borrow_mut() = Some(result);
    }
}

#[async_trait(?Send)]
impl AuthService for FakeAuth {
    async fn current_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        self.emit(None);
        Ok(())
    }

    async fn sign_in_with_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Session, AuthError> {
        let result = self.sign_in_result.borrow_mut().take().unwrap_or_else(|| {
            Err(AuthError::Rejected {
                status: 400,
                message: "Invalid login credentials".into(),
            })
        });
        if let Ok(session) = &result {
            self.emit(Some(session.clone()));
        }
        result
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _username: &str,
    ) -> Result<Option<Session>, AuthError> {
        let result = self.sign_up_result.borrow_mut().take().unwrap_or(Ok(None));
        if let Ok(Some(session)) = &result {
            self.emit(Some(session.clone()));
        }
        result
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataCall {
    Select(Query),
    Insert {
        collection: String,
        record: Value,
    },
    Update {
        collection: String,
        patch: Value,
        filters: Vec<Filter>,
    },
}

enum Scripted {
    Ready(SelectResult),
    Deferred(oneshot::Receiver<SelectResult>),
}

/// Collections backed by plain JSON rows. Selects can also be scripted or
/// held open to control completion order.
#[derive(Default)]
pub struct FakeData {
    tables: RefCell<HashMap<String, Vec<Value>>>,
    scripted: RefCell<VecDeque<Scripted>>,
    write_failures: RefCell<VecDeque<QueryError>>,
    calls: RefCell<Vec<DataCall>>,
}

fn matches_filters(row: &Value, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| match row.get(&filter.column) {
        Some(Value::String(value)) => *value == filter.value,
        Some(other) => other.to_string() == filter.value,
        None => false,
    })
}

impl FakeData {
    pub fn seed(&self, collection: &str, rows: Vec<Value>) {
        self.tables
            .borrow_mut()
            .insert(collection.to_string(), rows);
    }

    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.tables
            .borrow()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// The next select returns `result` instead of reading the tables.
    pub fn respond_with(&self, result: SelectResult) {
        self.scripted
            .borrow_mut()
            .push_back(Scripted::Ready(result));
    }

    /// The next select stays pending until the returned sender fires.
    pub fn defer_select(&self) -> oneshot::Sender<SelectResult> {
        let (tx, rx) = oneshot::channel();
        self.scripted
            .borrow_mut()
            .push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn fail_next_write(&self, error: QueryError) {
        self.write_failures.borrow_mut().push_back(error);
    }

    pub fn calls(&self) -> Vec<DataCall> {
        self.calls.borrow().clone()
    }

    pub fn select_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, DataCall::Select(_)))
            .count()
    }

    pub fn write_count(&self) -> usize {
        self.calls.borrow().len() - self.select_count()
    }

    fn take_write_failure(&self) -> Option<QueryError> {
        self.write_failures.borrow_mut().pop_front()
    }
}

#[async_trait(?Send)]
impl DataService for FakeData {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, QueryError> {
        self.calls
            .borrow_mut()
            .push(DataCall::Select(query.clone()));
        let scripted = self.scripted.borrow_mut().pop_front();
        match scripted {
            Some(Scripted::Ready(result)) => return result,
            Some(Scripted::Deferred(rx)) => {
                return rx
                    .await
                    .unwrap_or_else(|_| Err(QueryError::Network("request dropped".into())))
            }
            None => {}
        }

        let rows: Vec<Value> = self
            .rows(query.collection())
            .into_iter()
            .filter(|row| matches_filters(row, query.filters()))
            .collect();
        if query.is_single() {
            return match rows.into_iter().next() {
                Some(row) => Ok(vec![row]),
                None => Err(QueryError::NotFound(query.collection().to_string())),
            };
        }
        Ok(rows)
    }

    async fn insert(&self, collection: &str, record: Value) -> Result<(), QueryError> {
        self.calls.borrow_mut().push(DataCall::Insert {
            collection: collection.to_string(),
            record: record.clone(),
        });
        if let Some(error) = self.take_write_failure() {
            return Err(error);
        }
        self.tables
            .borrow_mut()
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn update(
        &self,
        collection: &str,
        patch: Value,
        filters: &[Filter],
    ) -> Result<(), QueryError> {
        self.calls.borrow_mut().push(DataCall::Update {
            collection: collection.to_string(),
            patch: patch.clone(),
            filters: filters.to_vec(),
        });
        if let Some(error) = self.take_write_failure() {
            return Err(error);
        }
        let Value::Object(changes) = patch else {
            return Err(QueryError::decode(collection, "patch must be an object"));
        };
        if let Some(rows) = self.tables.borrow_mut().get_mut(collection) {
            for row in rows.iter_mut().filter(|row| matches_filters(row, filters)) {
                if let Value::Object(fields) = row {
                    for (key, value) in &changes {
                        fields.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: RefCell<Vec<AppRoute>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: AppRoute) {
        self.redirects.borrow_mut().push(route);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(ToastKind, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push((ToastKind::Success, message.to_string()));
    }

    fn notify_failure(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push((ToastKind::Failure, message.to_string()));
    }
}

/// All four collaborators, with handles kept for assertions.
#[derive(Clone, Default)]
pub struct FakeBackend {
    pub auth: Rc<FakeAuth>,
    pub data: Rc<FakeData>,
    pub notifier: Rc<RecordingNotifier>,
    pub navigator: Rc<RecordingNavigator>,
}

impl FakeBackend {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: &str) -> Self {
        let backend = Self::default();
        *backend.auth.session.borrow_mut() = Some(session_for(user_id));
        backend
    }

    pub fn services(&self) -> Services {
        Services {
            auth: self.auth.clone(),
            data: self.data.clone(),
            notifier: self.notifier.clone(),
            navigator: self.navigator.clone(),
        }
    }

    pub fn redirects(&self) -> Vec<AppRoute> {
        self.navigator.redirects.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<(ToastKind, String)> {
        self.notifier.messages.borrow().clone()
    }
}
