//! Create-Post Form Controller
//!
//! Owns the complaint form: title, content, optional attachment paths,
//! and the location opt-in with its Idle → Loading → Success/Error
//! acquisition machine. Submission encodes attachments and sends exactly
//! one create request per attempt on a worker thread; the form only
//! resets after a confirmed success.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

use thiserror::Error;

use crate::app::api::{posts, ApiClient, ApiError};
use crate::app::geo::{GeoError, GeoSample, LocationSource};
use crate::app::media::{self, MediaError};
use crate::app::notify::Notifier;
use crate::shared::models::{CreatePostRequest, Post};

const EMPTY_CONTENT_MESSAGE: &str = "Please describe your complaint.";
const GEO_UNSUPPORTED_MESSAGE: &str = "Location is not available on this device.";
const LOCATION_OK_MESSAGE: &str = "Location fetched successfully!";
const SUBMIT_OK_MESSAGE: &str = "Complaint posted successfully!";
const SUBMIT_FAILED_MESSAGE: &str = "Failed to post complaint. Please try again.";

/// Why a submission failed. Users see one generic message either way;
/// the split only matters for the diagnostic log.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Location acquisition state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeoStatus {
    #[default]
    Idle,
    Loading,
    Failed(GeoError),
}

/// State of the complaint form.
#[derive(Default)]
pub struct CreatePostState {
    pub title: String,
    pub content: String,
    pub image_path: String,
    pub video_path: String,
    pub use_location: bool,
    pub location: Option<GeoSample>,
    pub geo: GeoStatus,
    pub submitting: bool,
    geo_rx: Option<Receiver<Result<GeoSample, GeoError>>>,
    submit_rx: Option<Receiver<Result<Post, SubmitError>>>,
}

impl CreatePostState {
    /// React to the opt-in checkbox. Enabling starts one acquisition; if
    /// no location source exists at all, the flag is forced back off and
    /// an error surfaces immediately without entering Loading.
    pub fn set_use_location(
        &mut self,
        enabled: bool,
        source: Option<&Arc<dyn LocationSource>>,
        notifier: &mut Notifier,
    ) {
        self.use_location = enabled;
        if !enabled {
            return;
        }
        match source {
            Some(source) => self.start_location_fetch(Arc::clone(source)),
            None => {
                self.use_location = false;
                notifier.error(GEO_UNSUPPORTED_MESSAGE);
            }
        }
    }

    /// Manual retry after a failed acquisition.
    pub fn retry_location(&mut self, source: Option<&Arc<dyn LocationSource>>) {
        if let Some(source) = source {
            self.start_location_fetch(Arc::clone(source));
        }
    }

    fn start_location_fetch(&mut self, source: Arc<dyn LocationSource>) {
        self.geo = GeoStatus::Loading;
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(source.current_position());
        });
        self.geo_rx = Some(rx);
    }

    /// Submit the form. An empty (or whitespace-only) description aborts
    /// with a validation toast and issues no network call.
    pub fn handle_submit(&mut self, api: &ApiClient, notifier: &mut Notifier) {
        if self.content.trim().is_empty() {
            notifier.error(EMPTY_CONTENT_MESSAGE);
            return;
        }

        self.submitting = true;

        let api = api.clone();
        let title = self.title.clone();
        let content = self.content.clone();
        let image_path = selected_path(&self.image_path);
        let video_path = selected_path(&self.video_path);
        let location = self.attached_location();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(submit(&api, title, content, image_path, video_path, location));
        });
        self.submit_rx = Some(rx);
    }

    /// Coordinates to attach: only when the user opted in AND a sample
    /// actually resolved. A sample carries both fields or none.
    fn attached_location(&self) -> Option<GeoSample> {
        if self.use_location {
            self.location
        } else {
            None
        }
    }

    /// Drain in-flight work. Returns true when a submission succeeded and
    /// the caller should navigate to the dashboard.
    pub fn check_results(&mut self, notifier: &mut Notifier) -> bool {
        self.check_location_result(notifier);
        self.check_submit_result(notifier)
    }

    fn check_location_result(&mut self, notifier: &mut Notifier) {
        let Some(ref rx) = self.geo_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.geo_rx = None;

        match result {
            Ok(sample) => {
                self.location = Some(sample);
                self.geo = GeoStatus::Idle;
                notifier.success(LOCATION_OK_MESSAGE);
            }
            Err(cause) => {
                tracing::warn!(%cause, "geolocation failed");
                self.geo = GeoStatus::Failed(cause);
                notifier.error(cause.user_message());
            }
        }
    }

    fn check_submit_result(&mut self, notifier: &mut Notifier) -> bool {
        let Some(ref rx) = self.submit_rx else {
            return false;
        };
        let Ok(result) = rx.try_recv() else {
            return false;
        };
        self.submit_rx = None;
        self.submitting = false;

        match result {
            Ok(post) => {
                tracing::info!(id = post.id, "complaint posted");
                notifier.success(SUBMIT_OK_MESSAGE);
                *self = Self::default();
                true
            }
            Err(e) => {
                // form state stays untouched; the user may retry by hand
                tracing::error!(error = %e, "complaint submission failed");
                notifier.error(SUBMIT_FAILED_MESSAGE);
                false
            }
        }
    }
}

fn selected_path(input: &str) -> Option<PathBuf> {
    match input.trim() {
        "" => None,
        path => Some(path.into()),
    }
}

/// Worker-thread half of a submission: encode each selected attachment
/// independently, assemble the body, send one create request.
fn submit(
    api: &ApiClient,
    title: String,
    content: String,
    image_path: Option<PathBuf>,
    video_path: Option<PathBuf>,
    location: Option<GeoSample>,
) -> Result<Post, SubmitError> {
    let image = image_path
        .as_deref()
        .map(media::encode_for_transport)
        .transpose()?;
    let video = video_path
        .as_deref()
        .map(media::encode_for_transport)
        .transpose()?;

    let request = build_request(title, content, image, video, location);
    Ok(posts::create(api, &request)?)
}

fn build_request(
    title: String,
    content: String,
    image: Option<String>,
    video: Option<String>,
    location: Option<GeoSample>,
) -> CreatePostRequest {
    CreatePostRequest {
        title,
        content,
        image,
        video,
        latitude: location.map(|s| s.latitude),
        longitude: location.map(|s| s.longitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::SessionStore;
    use std::time::Duration;

    struct StubSource(Result<GeoSample, GeoError>);

    impl LocationSource for StubSource {
        fn current_position(&self) -> Result<GeoSample, GeoError> {
            self.0
        }
    }

    fn stub_source(result: Result<GeoSample, GeoError>) -> Arc<dyn LocationSource> {
        Arc::new(StubSource(result))
    }

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

    #[test]
    fn test_empty_content_blocks_submission() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        let mock = server.mock("POST", "/api/posts").expect(0).create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = CreatePostState {
            content: "   \n\t".to_string(),
            ..Default::default()
        };

        state.handle_submit(&api, &mut notifier);

        assert!(!state.submitting);
        assert!(state.submit_rx.is_none());
        assert!(notifier.iter().any(|t| t.message == EMPTY_CONTENT_MESSAGE));
        mock.assert();
    }

    #[test]
    fn test_successful_submission_navigates_and_resets() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        let mock = server
            .mock("POST", "/api/posts")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "title": "Pothole",
                "content": "Deep pothole near the school entrance",
            })))
            .with_status(201)
            .with_body(r#"{"id": 3, "content": "Deep pothole near the school entrance"}"#)
            .create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = CreatePostState {
            title: "Pothole".to_string(),
            content: "Deep pothole near the school entrance".to_string(),
            ..Default::default()
        };

        state.handle_submit(&api, &mut notifier);
        assert!(state.submitting);

        let mut navigated = false;
        wait_until(|| {
            navigated |= state.check_results(&mut notifier);
            !state.submitting
        });

        mock.assert();
        assert!(navigated);
        assert!(state.content.is_empty());
        assert!(notifier.iter().any(|t| t.message == SUBMIT_OK_MESSAGE));
    }

    #[test]
    fn test_failed_submission_keeps_form_and_stays() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        server
            .mock("POST", "/api/posts")
            .with_status(500)
            .with_body("boom")
            .create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = CreatePostState {
            title: "Pothole".to_string(),
            content: "Deep pothole near the school entrance".to_string(),
            ..Default::default()
        };

        state.handle_submit(&api, &mut notifier);

        let mut navigated = false;
        wait_until(|| {
            navigated |= state.check_results(&mut notifier);
            !state.submitting
        });

        assert!(!navigated);
        assert_eq!(state.content, "Deep pothole near the school entrance");
        assert!(notifier.iter().any(|t| t.message == SUBMIT_FAILED_MESSAGE));
    }

    #[test]
    fn test_opted_in_submission_includes_coordinates() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        let mock = server
            .mock("POST", "/api/posts")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "title": "",
                "content": "Flooded underpass",
                "latitude": 48.1371,
                "longitude": 11.5754,
            })))
            .with_status(201)
            .with_body(r#"{"id": 4, "content": "Flooded underpass"}"#)
            .create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = CreatePostState {
            content: "Flooded underpass".to_string(),
            use_location: true,
            location: Some(GeoSample {
                latitude: 48.1371,
                longitude: 11.5754,
            }),
            ..Default::default()
        };

        state.handle_submit(&api, &mut notifier);
        wait_until(|| {
            state.check_results(&mut notifier);
            !state.submitting
        });

        mock.assert();
    }

    #[test]
    fn test_unresolved_location_is_never_attached() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        // Opt-in is on but acquisition failed; the body must not carry
        // either coordinate field.
        let mock = server
            .mock("POST", "/api/posts")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "title": "",
                "content": "Flooded underpass",
            })))
            .with_status(201)
            .with_body(r#"{"id": 5, "content": "Flooded underpass"}"#)
            .create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = CreatePostState {
            content: "Flooded underpass".to_string(),
            use_location: true,
            location: None,
            geo: GeoStatus::Failed(GeoError::Timeout),
            ..Default::default()
        };

        state.handle_submit(&api, &mut notifier);
        wait_until(|| {
            state.check_results(&mut notifier);
            !state.submitting
        });

        mock.assert();
    }

    #[test]
    fn test_submission_encodes_selected_image() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("evidence.png");
        std::fs::write(&image, [0x89u8, 0x50, 0x4E, 0x47]).unwrap();

        let mock = server
            .mock("POST", "/api/posts")
            .match_body(mockito::Matcher::Regex(
                "\"image\":\"data:image/png;base64,".to_string(),
            ))
            .with_status(201)
            .with_body(r#"{"id": 6, "content": "Overflowing bins"}"#)
            .create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = CreatePostState {
            content: "Overflowing bins".to_string(),
            image_path: image.display().to_string(),
            ..Default::default()
        };

        state.handle_submit(&api, &mut notifier);
        wait_until(|| {
            state.check_results(&mut notifier);
            !state.submitting
        });

        mock.assert();
    }

    #[test]
    fn test_unreadable_attachment_fails_submission_without_request() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        let mock = server.mock("POST", "/api/posts").expect(0).create();

        let api = test_client(&server, &dir);
        let mut notifier = Notifier::new();
        let mut state = CreatePostState {
            content: "Overflowing bins".to_string(),
            image_path: dir.path().join("missing.png").display().to_string(),
            ..Default::default()
        };

        state.handle_submit(&api, &mut notifier);

        let mut navigated = false;
        wait_until(|| {
            navigated |= state.check_results(&mut notifier);
            !state.submitting
        });

        mock.assert();
        assert!(!navigated);
        assert_eq!(state.content, "Overflowing bins");
        assert!(notifier.iter().any(|t| t.message == SUBMIT_FAILED_MESSAGE));
    }

    #[test]
    fn test_opt_out_discards_resolved_coordinates() {
        let sample = GeoSample {
            latitude: 48.1371,
            longitude: 11.5754,
        };
        let state = CreatePostState {
            use_location: false,
            location: Some(sample),
            ..Default::default()
        };
        assert_eq!(state.attached_location(), None);

        let state = CreatePostState {
            use_location: true,
            location: Some(sample),
            ..Default::default()
        };
        assert_eq!(state.attached_location(), Some(sample));
    }

    #[test]
    fn test_opt_in_without_source_is_forced_off() {
        let mut notifier = Notifier::new();
        let mut state = CreatePostState::default();

        state.set_use_location(true, None, &mut notifier);

        assert!(!state.use_location);
        assert_eq!(state.geo, GeoStatus::Idle);
        assert!(state.geo_rx.is_none());
        assert!(notifier.iter().any(|t| t.message == GEO_UNSUPPORTED_MESSAGE));
    }

    #[test]
    fn test_opt_in_success_stores_sample() {
        let mut notifier = Notifier::new();
        let mut state = CreatePostState::default();
        let source = stub_source(Ok(GeoSample {
            latitude: 48.1371,
            longitude: 11.5754,
        }));

        state.set_use_location(true, Some(&source), &mut notifier);
        assert_eq!(state.geo, GeoStatus::Loading);

        wait_until(|| {
            state.check_results(&mut notifier);
            state.geo != GeoStatus::Loading
        });

        assert!(state.use_location);
        assert_eq!(
            state.location,
            Some(GeoSample {
                latitude: 48.1371,
                longitude: 11.5754,
            })
        );
        assert!(notifier.iter().any(|t| t.message == LOCATION_OK_MESSAGE));
    }

    #[test]
    fn test_opt_in_failure_offers_retry() {
        let mut notifier = Notifier::new();
        let mut state = CreatePostState::default();
        let failing = stub_source(Err(GeoError::PermissionDenied));

        state.set_use_location(true, Some(&failing), &mut notifier);
        wait_until(|| {
            state.check_results(&mut notifier);
            state.geo != GeoStatus::Loading
        });

        assert_eq!(state.geo, GeoStatus::Failed(GeoError::PermissionDenied));
        assert!(state.location.is_none());
        assert!(notifier
            .iter()
            .any(|t| t.message == GeoError::PermissionDenied.user_message()));

        // Retry re-enters Loading and can succeed.
        let recovering = stub_source(Ok(GeoSample {
            latitude: 52.52,
            longitude: 13.405,
        }));
        state.retry_location(Some(&recovering));
        assert_eq!(state.geo, GeoStatus::Loading);

        wait_until(|| {
            state.check_results(&mut notifier);
            state.geo != GeoStatus::Loading
        });
        assert_eq!(state.geo, GeoStatus::Idle);
        assert!(state.location.is_some());
    }
}
