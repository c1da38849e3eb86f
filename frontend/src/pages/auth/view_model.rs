use leptos::*;
use std::rc::Rc;

use crate::{
    api::{AuthError, AuthService},
    router::{AppRoute, Navigator},
    state::{auth::Services, notify::Notifier, outcome::SubmitOutcome},
};

pub const ACCOUNT_CREATED: &str = "Account created!";
pub const CONFIRM_EMAIL: &str = "Check your email to confirm your account";
pub const WELCOME_BACK: &str = "Welcome back!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome back",
            AuthMode::SignUp => "Join Ronin",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

/// Trimmed credentials ready to send, or `None` when a required field is
/// blank.
pub fn credentials_for(
    mode: AuthMode,
    email: &str,
    password: &str,
    username: &str,
) -> Option<(String, String, String)> {
    let email = email.trim();
    let username = username.trim();
    if email.is_empty() || password.is_empty() {
        return None;
    }
    if mode == AuthMode::SignUp && username.is_empty() {
        return None;
    }
    Some((email.to_string(), password.to_string(), username.to_string()))
}

fn failure_message(err: &AuthError) -> String {
    match err {
        AuthError::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => "Authentication failed".to_string(),
    }
}

#[derive(Clone)]
pub struct AuthViewModel {
    auth: Rc<dyn AuthService>,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
    pub mode: RwSignal<AuthMode>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub username: RwSignal<String>,
    pub pending: RwSignal<bool>,
}

impl AuthViewModel {
    pub fn new(services: Services) -> Self {
        Self {
            auth: services.auth,
            notifier: services.notifier,
            navigator: services.navigator,
            mode: create_rw_signal(AuthMode::SignIn),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            username: create_rw_signal(String::new()),
            pending: create_rw_signal(false),
        }
    }

    /// Signed-in visitors skip straight to the feed.
    pub async fn open(&self) {
        if self.auth.current_session().await.is_some() {
            self.navigator.redirect(AppRoute::Feed);
        }
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let vm = self.clone();
        Signal::derive(move || {
            !vm.pending.get()
                && credentials_for(
                    vm.mode.get(),
                    &vm.email.get(),
                    &vm.password.get(),
                    &vm.username.get(),
                )
                .is_some()
        })
    }

    pub fn toggle_mode(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let mode = self.mode.get_untracked();
        let Some((email, password, username)) = credentials_for(
            mode,
            &self.email.get_untracked(),
            &self.password.get_untracked(),
            &self.username.get_untracked(),
        ) else {
            return SubmitOutcome::Skipped;
        };

        self.pending.set(true);
        let outcome = match mode {
            AuthMode::SignIn => self.sign_in(&email, &password).await,
            AuthMode::SignUp => self.sign_up(&email, &password, &username).await,
        };
        self.pending.set(false);
        outcome
    }

    async fn sign_in(&self, email: &str, password: &str) -> SubmitOutcome {
        match self.auth.sign_in_with_password(email, password).await {
            Ok(session) => {
                log::info!("Signed in as {}", session.identity());
                self.password.set(String::new());
                self.notifier.notify_success(WELCOME_BACK);
                self.navigator.redirect(AppRoute::Feed);
                SubmitOutcome::Succeeded
            }
            Err(err) => self.fail(err),
        }
    }

    async fn sign_up(&self, email: &str, password: &str, username: &str) -> SubmitOutcome {
        match self.auth.sign_up(email, password, username).await {
            Ok(Some(session)) => {
                log::info!("Signed up as {}", session.identity());
                self.password.set(String::new());
                self.notifier.notify_success(ACCOUNT_CREATED);
                self.navigator.redirect(AppRoute::Feed);
                SubmitOutcome::Succeeded
            }
            Ok(None) => {
                self.password.set(String::new());
                self.mode.set(AuthMode::SignIn);
                self.notifier.notify_success(CONFIRM_EMAIL);
                SubmitOutcome::Succeeded
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&self, err: AuthError) -> SubmitOutcome {
        log::warn!("Authentication failed: {}", err);
        self.notifier.notify_failure(&failure_message(&err));
        SubmitOutcome::Failed
    }
}
