//! Shared Module
//!
//! Types used across the client that do not depend on the UI framework:
//! application configuration and the wire models exchanged with the
//! complaint platform's REST API. All wire types are serde-serializable.

/// Application configuration
pub mod config;

/// REST API wire models
pub mod models;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use models::{AuthResponse, CreatePostRequest, Post, PostStatus, Profile};
