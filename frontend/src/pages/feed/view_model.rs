use leptos::*;

use super::repository::FeedRepository;
use crate::{
    api::{Post, UserId},
    components::guard::SessionGate,
    router::AppRoute,
    state::{auth::Services, outcome::SubmitOutcome},
};

pub const LOAD_FAILED: &str = "Failed to load posts";
pub const POST_CREATED: &str = "Post created!";
pub const CREATE_FAILED: &str = "Failed to create post";

/// What the post list shows for a given loading flag and list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedView {
    Loading,
    Empty,
    Populated(usize),
}

pub fn feed_view(loading: bool, posts: &[Post]) -> FeedView {
    if loading {
        FeedView::Loading
    } else if posts.is_empty() {
        FeedView::Empty
    } else {
        FeedView::Populated(posts.len())
    }
}

pub fn can_share(draft: &str) -> bool {
    !draft.trim().is_empty()
}

#[derive(Clone)]
pub struct FeedViewModel {
    services: Services,
    repository: FeedRepository,
    pub identity: RwSignal<Option<UserId>>,
    pub posts: RwSignal<Vec<Post>>,
    pub loading: RwSignal<bool>,
    pub draft: RwSignal<String>,
    pub signing_out: RwSignal<bool>,
}

impl FeedViewModel {
    pub fn new(services: Services) -> Self {
        let repository = FeedRepository::new(services.data.clone());
        Self {
            services,
            repository,
            identity: create_rw_signal(None),
            posts: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
            draft: create_rw_signal(String::new()),
            signing_out: create_rw_signal(false),
        }
    }

    pub fn gate(&self) -> SessionGate {
        SessionGate::new(&self.services)
    }

    /// Admits the session and loads the feed; redirects without loading
    /// when signed out.
    pub async fn open(&self) {
        if self.gate().admit(self.identity).await.is_some() {
            self.load_posts().await;
        }
    }

    pub async fn load_posts(&self) {
        self.loading.set(true);
        match self.repository.fetch_posts().await {
            Ok(posts) => {
                log::debug!("Loaded {} posts", posts.len());
                self.posts.set(posts);
            }
            Err(err) => {
                log::error!("Failed to load posts: {}", err);
                self.services.notifier.notify_failure(LOAD_FAILED);
            }
        }
        self.loading.set(false);
    }

    pub async fn create_post(&self) -> SubmitOutcome {
        let content = self.draft.get_untracked();
        let Some(user_id) = self.identity.get_untracked() else {
            return SubmitOutcome::Skipped;
        };
        if !can_share(&content) {
            return SubmitOutcome::Skipped;
        }

        match self.repository.create_post(&user_id, &content).await {
            Ok(()) => {
                self.draft.set(String::new());
                self.services.notifier.notify_success(POST_CREATED);
                self.load_posts().await;
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                log::error!("Failed to create post: {}", err);
                self.services.notifier.notify_failure(CREATE_FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn go_to_profile(&self) {
        self.services.navigator.redirect(AppRoute::Profile);
    }

    /// Signs out and returns to the landing page even when the backend
    /// rejects the revocation.
    pub async fn sign_out(&self) {
        self.signing_out.set(true);
        if let Err(err) = self.services.auth.sign_out().await {
            log::warn!("Sign-out failed: {}", err);
        }
        self.signing_out.set(false);
        self.services.navigator.redirect(AppRoute::Landing);
    }
}
