//! Central Application State
//!
//! `AppState` owns everything the views render from: configuration, the
//! API client, the session store, the location source, toast
//! notifications, and the per-view controllers. Handlers spawn worker
//! threads for network work and report back over `mpsc` channels that
//! [`AppState::poll`] drains once per frame.

use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

use crate::app::api::{auth, posts, ApiClient, ApiError};
use crate::app::config::Config;
use crate::app::geo::{HttpLocationSource, LocationSource};
use crate::app::notify::Notifier;
use crate::app::session::SessionStore;
use crate::shared::models::{AuthResponse, Post, RegisterForm};

pub mod create_post;
pub mod profile;

pub use create_post::CreatePostState;
pub use profile::ProfileState;

const DASHBOARD_FETCH_FAILED: &str = "Failed to load complaints.";

/// Current app view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login/register landing screen
    Auth,
    /// All complaints plus entry points to the other views
    Dashboard,
    /// Complaint form
    CreatePost,
    /// Profile and the user's own complaints
    Profile,
}

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }
}

/// The dashboard's complaint feed
#[derive(Default)]
pub struct DashboardState {
    pub posts: Vec<Post>,
    pub loading: bool,
    rx: Option<Receiver<Result<Vec<Post>, ApiError>>>,
}

/// Central application state shared across views.
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub location: Option<Arc<dyn LocationSource>>,
    pub notifier: Notifier,
    pub current_view: AppView,
    pub auth_state: AuthState,
    pub email_input: String,
    pub password_input: String,
    pub username_input: String,
    pub bio_input: String,
    pub profile_image_input: String,
    pub is_register_mode: bool,
    pub dashboard: DashboardState,
    pub create_post: CreatePostState,
    pub profile: ProfileState,
    auth_rx: Option<Receiver<Result<AuthResponse, ApiError>>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid configuration, falling back to defaults");
                Config::new()
            }
        };
        Self::with_parts(config, SessionStore::open())
    }

    /// Build state from explicit parts. Used by tests to point the client
    /// at a mock server and a temporary session file.
    pub fn with_parts(config: Config, session: SessionStore) -> Self {
        let api = ApiClient::new(config.server_url(), session);
        let location: Option<Arc<dyn LocationSource>> = config
            .location_url()
            .map(|url| Arc::new(HttpLocationSource::new(url)) as Arc<dyn LocationSource>);

        let authenticated = api.session().token().is_some();
        let mut state = Self {
            config,
            api,
            location,
            notifier: Notifier::new(),
            current_view: if authenticated {
                AppView::Dashboard
            } else {
                AppView::Auth
            },
            auth_state: AuthState {
                authenticated,
                ..Default::default()
            },
            email_input: String::new(),
            password_input: String::new(),
            username_input: String::new(),
            bio_input: String::new(),
            profile_image_input: String::new(),
            is_register_mode: false,
            dashboard: DashboardState::default(),
            create_post: CreatePostState::default(),
            profile: ProfileState::default(),
            auth_rx: None,
        };
        if authenticated {
            state.load_dashboard();
        }
        state
    }

    /// Drain every in-flight channel. Called once per frame.
    pub fn poll(&mut self) {
        self.check_auth_result();
        self.check_dashboard_result();
        if self.create_post.check_results(&mut self.notifier) {
            // a successful submission lands back on the dashboard
            self.current_view = AppView::Dashboard;
            self.load_dashboard();
        }
        self.profile.check_results(&mut self.notifier);
    }

    pub fn handle_login(&mut self) {
        if self.email_input.is_empty() || self.password_input.is_empty() {
            self.auth_state.set_error("Email and password are required");
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let api = self.api.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(auth::login(&api, email, password));
        });
        self.auth_rx = Some(rx);
    }

    pub fn handle_register(&mut self) {
        if self.username_input.is_empty() {
            self.auth_state.set_error("Username is required");
            return;
        }
        if self.email_input.is_empty() || self.password_input.is_empty() {
            self.auth_state.set_error("Email and password are required");
            return;
        }
        if !self.email_input.contains('@') || !self.email_input.contains('.') {
            self.auth_state.set_error("Please enter a valid email address");
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let api = self.api.clone();
        let form = RegisterForm {
            username: self.username_input.clone(),
            email: self.email_input.clone(),
            password: self.password_input.clone(),
            bio: self.bio_input.clone(),
            profile_image: match self.profile_image_input.trim() {
                "" => None,
                path => Some(path.into()),
            },
        };

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(auth::register(&api, form));
        });
        self.auth_rx = Some(rx);
    }

    pub fn check_auth_result(&mut self) {
        let Some(ref rx) = self.auth_rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.auth_rx = None;
        self.auth_state.loading = false;

        match result {
            Ok(response) => {
                if let Err(e) = self.api.session().set_token(&response.token) {
                    tracing::error!(error = %e, "could not persist session token");
                    self.auth_state.set_error("Could not save your session. Please try again.");
                    return;
                }
                tracing::info!("authenticated");
                self.auth_state.authenticated = true;
                self.auth_state.error = None;
                self.password_input.clear();
                self.is_register_mode = false;
                self.current_view = AppView::Dashboard;
                self.load_dashboard();
            }
            Err(e) => {
                tracing::error!(error = %e, "authentication failed");
                self.auth_state.set_error(auth_error_message(&e));
            }
        }
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_register_mode = !self.is_register_mode;
        self.auth_state.clear_error();
        self.password_input.clear();
    }

    /// Destroy the session and return to the landing screen. Safe to call
    /// repeatedly; a second logout leaves the same end state as the first.
    pub fn logout(&mut self) {
        self.api.session().clear();
        self.auth_state = AuthState::default();
        self.email_input.clear();
        self.password_input.clear();
        self.username_input.clear();
        self.bio_input.clear();
        self.profile_image_input.clear();
        self.is_register_mode = false;
        self.dashboard = DashboardState::default();
        self.create_post = CreatePostState::default();
        self.profile = ProfileState::default();
        self.current_view = AppView::Auth;
    }

    pub fn open_dashboard(&mut self) {
        self.current_view = AppView::Dashboard;
        self.load_dashboard();
    }

    pub fn open_create_post(&mut self) {
        // fresh form on every entry
        self.create_post = CreatePostState::default();
        self.current_view = AppView::CreatePost;
    }

    pub fn open_profile(&mut self) {
        self.profile = ProfileState::default();
        self.profile.load(&self.api);
        self.current_view = AppView::Profile;
    }

    pub fn load_dashboard(&mut self) {
        self.dashboard.loading = true;

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(posts::get_all(&api));
        });
        self.dashboard.rx = Some(rx);
    }

    fn check_dashboard_result(&mut self) {
        let Some(ref rx) = self.dashboard.rx else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.dashboard.rx = None;
        self.dashboard.loading = false;

        match result {
            Ok(posts) => self.dashboard.posts = posts,
            Err(e) => {
                tracing::error!(error = %e, "complaint feed fetch failed");
                self.notifier.error(DASHBOARD_FETCH_FAILED);
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn auth_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Status { status, .. } if status.as_u16() == 401 => "Invalid email or password",
        ApiError::Status { .. } => "The server rejected the request. Please try again.",
        _ => "Could not reach the server. Please try again.",
    }
}
