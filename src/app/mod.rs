//! Native Desktop App Module
//!
//! The egui/eframe client for the complaint platform. Views render from a
//! central [`state::AppState`]; network and location work runs on worker
//! threads and reports back over `mpsc` channels polled each frame.
//!
//! # Module Structure
//!
//! - **`config`** - App-side configuration wrapper (origin, location probe)
//! - **`session`** - Persisted session token store
//! - **`api`** - HTTP client wrapper and per-entity resource clients
//! - **`geo`** - Geolocation acquisition behind a trait seam
//! - **`media`** - File-to-transport encoding for attachments
//! - **`notify`** - Toast notifications
//! - **`state`** - Central app state and per-view controllers
//! - **`views`** - egui render functions
//! - **`theme`** - Color palette

pub mod api;
pub mod config;
pub mod geo;
pub mod media;
pub mod notify;
pub mod session;
pub mod state;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use notify::{Notifier, ToastKind};
pub use session::SessionStore;
pub use state::{AppState, AppView};
