//! CiviPost - Main Library
//!
//! CiviPost is a native desktop client for a civic-complaint posting
//! platform. Users authenticate against a REST backend, file complaint
//! posts with optional photo/video attachments and an optional geotag,
//! and manage their profile and their own posts.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared across the client
//!   - Application configuration with builder and validation
//!   - Wire models for the REST API (profile, posts, auth)
//!
//! - **`app`** - Native desktop app (egui/eframe)
//!   - HTTP client wrapper and per-entity resource clients
//!   - Session token storage
//!   - Geolocation acquisition and media transport encoding
//!   - Views, state machines, and toast notifications
//!
//! # Concurrency
//!
//! The UI runs single-threaded in egui's immediate mode loop. Network and
//! location work runs on short-lived worker threads that report back over
//! `std::sync::mpsc` channels, drained once per frame by `AppState::poll`.
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, E>` with custom error types per
//! module (`ApiError`, `GeoError`, `MediaError`, `ConfigError`). Failures
//! surface to the user as toasts; full detail goes to the `tracing` log.

/// Shared configuration and wire models
pub mod shared;

/// Native desktop app (egui/eframe)
pub mod app;
