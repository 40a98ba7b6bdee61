//! Profile View Controller
//!
//! On entry the profile and the user's own complaints load through two
//! independent channels; the blocking loading/error state is keyed to the
//! profile fetch only, a posts failure degrades to an empty list with a
//! log record. Editing snapshots the profile into a separate copy that
//! only overwrites the displayed profile once the server accepted it.

use std::sync::mpsc::{channel, Receiver};

use crate::app::api::{auth, posts, ApiClient, ApiError};
use crate::app::notify::Notifier;
use crate::shared::models::{Post, Profile};

const PROFILE_FETCH_FAILED: &str = "Failed to fetch profile.";
const PROFILE_SAVE_FAILED: &str = "Failed to save profile.";

/// State of the profile view.
#[derive(Default)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
    pub posts: Vec<Post>,
    /// Editable copy while in edit mode
    pub editing: Option<Profile>,
    pub saving: bool,
    profile_rx: Option<Receiver<Result<Profile, ApiError>>>,
    posts_rx: Option<Receiver<Result<Vec<Post>, ApiError>>>,
    save_rx: Option<Receiver<Result<(), ApiError>>>,
}

impl ProfileState {
    /// Kick off the two fetches. Each runs on its own thread with its own
    /// channel; one failing does not block the other.
    pub fn load(&mut self, api: &ApiClient) {
        self.loading = true;
        self.error = None;

        let api_profile = api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(auth::get_profile(&api_profile));
        });
        self.profile_rx = Some(rx);

        let api_posts = api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(posts::get_mine(&api_posts));
        });
        self.posts_rx = Some(rx);
    }

    /// Snapshot the displayed profile into the editable copy.
    pub fn begin_edit(&mut self) {
        if let Some(profile) = &self.profile {
            self.editing = Some(profile.clone());
        }
    }

    /// Discard the editable copy. No network call.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Persist the edited copy. The displayed profile is only replaced
    /// once the update call succeeds.
    pub fn save(&mut self, api: &ApiClient) {
        let Some(edited) = self.editing.clone() else {
            return;
        };
        self.saving = true;

        let api = api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(auth::update_profile(&api, &edited));
        });
        self.save_rx = Some(rx);
    }

    /// Drain all three channels.
    pub fn check_results(&mut self, notifier: &mut Notifier) {
        self.check_profile_result();
        self.check_posts_result();
        self.check_save_result(notifier);
    }

    fn check_profile_result(&mut self) {
        let Some(ref rx) = self.profile_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.profile_rx = None;
        self.loading = false;

        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => {
                tracing::error!(error = %e, "profile fetch failed");
                self.error = Some(PROFILE_FETCH_FAILED.to_string());
            }
        }
    }

    fn check_posts_result(&mut self) {
        let Some(ref rx) = self.posts_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.posts_rx = None;

        match result {
            Ok(posts) => self.posts = posts,
            Err(e) => {
                // the blocking error state is keyed to the profile fetch;
                // a posts failure degrades to an empty list
                tracing::warn!(error = %e, "own complaints fetch failed");
            }
        }
    }

    fn check_save_result(&mut self, notifier: &mut Notifier) {
        let Some(ref rx) = self.save_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.save_rx = None;
        self.saving = false;

        match result {
            Ok(()) => self.profile = self.editing.take(),
            Err(e) => {
                tracing::error!(error = %e, "profile save failed");
                notifier.error(PROFILE_SAVE_FAILED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::SessionStore;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn test_client(server: &mockito::Server, dir: &tempfile::TempDir) -> ApiClient {
        let session = SessionStore::with_path(dir.path().join("session.token"));
        ApiClient::new(server.url(), session)
    }

    fn wait_until(mut done: impl FnMut() -> bool) {
        for _ in 0..300 {
            if done() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("timed out waiting for background work");
    }

    fn sample_profile() -> Profile {
        Profile {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            avatar: "https://img.example/asha.png".to_string(),
            bio: "Cyclist".to_string(),
            location: Some("Riverside".to_string()),
            joined_date: Some("2024-03-18".to_string()),
        }
    }

    #[test]
    fn test_load_fetches_profile_and_posts() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        server
            .mock("GET", "/api/profile")
            .with_status(200)
            .with_body(r#"{"name": "Asha", "email": "asha@example.com"}"#)
            .create();
        server
            .mock("GET", "/api/user/posts")
            .with_status(200)
            .with_body(r#"[{"id": 1, "content": "Overflowing bins"}]"#)
            .create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = ProfileState::default();
        state.load(&api);
        assert!(state.loading);

        wait_until(|| {
            state.check_results(&mut notifier);
            !state.loading && state.posts_rx.is_none()
        });

        assert_eq!(state.profile.as_ref().unwrap().name, "Asha");
        assert_eq!(state.posts.len(), 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_posts_failure_degrades_silently() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        server
            .mock("GET", "/api/profile")
            .with_status(200)
            .with_body(r#"{"name": "Asha", "email": "asha@example.com"}"#)
            .create();
        server
            .mock("GET", "/api/user/posts")
            .with_status(500)
            .with_body("boom")
            .create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = ProfileState::default();
        state.load(&api);

        wait_until(|| {
            state.check_results(&mut notifier);
            !state.loading && state.posts_rx.is_none()
        });

        assert!(state.profile.is_some());
        assert!(state.posts.is_empty());
        assert!(state.error.is_none());
        assert_eq!(notifier.iter().count(), 0);
    }

    #[test]
    fn test_profile_failure_sets_blocking_error() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        server
            .mock("GET", "/api/profile")
            .with_status(500)
            .with_body("boom")
            .create();
        server
            .mock("GET", "/api/user/posts")
            .with_status(200)
            .with_body("[]")
            .create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = ProfileState::default();
        state.load(&api);

        wait_until(|| {
            state.check_results(&mut notifier);
            !state.loading
        });

        assert_eq!(state.error.as_deref(), Some(PROFILE_FETCH_FAILED));
        assert!(state.profile.is_none());
    }

    #[test]
    fn test_cancel_leaves_profile_untouched() {
        let mut state = ProfileState {
            profile: Some(sample_profile()),
            ..Default::default()
        };

        state.begin_edit();
        state.editing.as_mut().unwrap().name = "Someone Else".to_string();
        state.editing.as_mut().unwrap().bio = "Changed".to_string();
        state.cancel_edit();

        assert_eq!(state.profile, Some(sample_profile()));
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_save_promotes_edit_only_on_success() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        server.mock("PUT", "/api/profile").with_status(200).create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = ProfileState {
            profile: Some(sample_profile()),
            ..Default::default()
        };

        state.begin_edit();
        state.editing.as_mut().unwrap().name = "Asha K.".to_string();
        state.save(&api);
        assert!(state.saving);

        wait_until(|| {
            state.check_results(&mut notifier);
            !state.saving
        });

        assert_eq!(state.profile.as_ref().unwrap().name, "Asha K.");
        assert!(state.editing.is_none());
        assert_eq!(notifier.iter().count(), 0);
    }

    #[test]
    fn test_save_failure_keeps_displayed_profile_and_edit_mode() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        server
            .mock("PUT", "/api/profile")
            .with_status(500)
            .with_body("boom")
            .create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = ProfileState {
            profile: Some(sample_profile()),
            ..Default::default()
        };

        state.begin_edit();
        state.editing.as_mut().unwrap().name = "Asha K.".to_string();
        state.save(&api);

        wait_until(|| {
            state.check_results(&mut notifier);
            !state.saving
        });

        assert_eq!(state.profile, Some(sample_profile()));
        assert_eq!(state.editing.as_ref().unwrap().name, "Asha K.");
        assert!(notifier.iter().any(|t| t.message == PROFILE_SAVE_FAILED));
    }
}
