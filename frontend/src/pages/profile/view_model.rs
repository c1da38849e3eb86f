use leptos::*;

use super::repository::ProfileRepository;
use crate::{
    api::{Profile, ProfilePatch, UserId},
    components::guard::SessionGate,
    router::AppRoute,
    state::{auth::Services, outcome::SubmitOutcome},
};

pub const LOAD_FAILED: &str = "Failed to load profile";
pub const PROFILE_UPDATED: &str = "Profile updated!";
pub const UPDATE_FAILED: &str = "Failed to update profile";

/// Field values shown by the form. An absent profile renders as blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub username: String,
    pub full_name: String,
    pub bio: String,
    pub avatar_url: Option<String>,
}

impl From<Option<&Profile>> for ProfileFields {
    fn from(profile: Option<&Profile>) -> Self {
        match profile {
            Some(profile) => Self {
                username: profile.username.clone(),
                full_name: profile.full_name.clone().unwrap_or_default(),
                bio: profile.bio.clone().unwrap_or_default(),
                avatar_url: profile.avatar_url.clone(),
            },
            None => Self::default(),
        }
    }
}

#[derive(Clone)]
pub struct ProfileViewModel {
    services: Services,
    repository: ProfileRepository,
    pub identity: RwSignal<Option<UserId>>,
    pub profile: RwSignal<Option<Profile>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl ProfileViewModel {
    pub fn new(services: Services) -> Self {
        let repository = ProfileRepository::new(services.data.clone());
        Self {
            services,
            repository,
            identity: create_rw_signal(None),
            profile: create_rw_signal(None),
            loading: create_rw_signal(true),
            saving: create_rw_signal(false),
        }
    }

    pub fn gate(&self) -> SessionGate {
        SessionGate::new(&self.services)
    }

    pub async fn open(&self) {
        if let Some(id) = self.gate().admit(self.identity).await {
            self.load_profile(&id).await;
        }
    }

    pub async fn load_profile(&self, id: &UserId) {
        self.loading.set(true);
        match self.repository.fetch_profile(id).await {
            Ok(profile) => self.profile.set(Some(profile)),
            Err(err) => {
                log::error!("Failed to load profile {}: {}", id, err);
                self.services.notifier.notify_failure(LOAD_FAILED);
            }
        }
        self.loading.set(false);
    }

    pub fn fields(&self) -> Signal<ProfileFields> {
        let profile = self.profile;
        Signal::derive(move || profile.with(|profile| ProfileFields::from(profile.as_ref())))
    }

    pub fn set_full_name(&self, value: String) {
        self.profile.update(|profile| {
            if let Some(profile) = profile {
                profile.full_name = Some(value);
            }
        });
    }

    pub fn set_bio(&self, value: String) {
        self.profile.update(|profile| {
            if let Some(profile) = profile {
                profile.bio = Some(value);
            }
        });
    }

    /// Saving needs a loaded profile and no save in flight.
    pub fn can_save(&self) -> Signal<bool> {
        let profile = self.profile;
        let saving = self.saving;
        Signal::derive(move || profile.with(Option::is_some) && !saving.get())
    }

    pub async fn update_profile(&self) -> SubmitOutcome {
        let Some(id) = self.identity.get_untracked() else {
            return SubmitOutcome::Skipped;
        };
        let Some(patch) = self
            .profile
            .with_untracked(|profile| profile.as_ref().map(ProfilePatch::from))
        else {
            return SubmitOutcome::Skipped;
        };

        self.saving.set(true);
        let outcome = match self.repository.save_profile(&id, &patch).await {
            Ok(()) => {
                self.services.notifier.notify_success(PROFILE_UPDATED);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                log::error!("Failed to update profile {}: {}", id, err);
                self.services.notifier.notify_failure(UPDATE_FAILED);
                SubmitOutcome::Failed
            }
        };
        self.saving.set(false);
        outcome
    }

    pub fn back_to_feed(&self) {
        self.services.navigator.redirect(AppRoute::Feed);
    }
}
