//! REST API Wire Models
//!
//! Request and response shapes exchanged with the complaint platform.
//! Field names follow the backend's JSON (camelCase where the two differ).
//! Optional fields of outgoing bodies are omitted entirely rather than
//! sent as null.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration form, sent as multipart form data
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
    /// Path of a profile image to upload, if any
    pub profile_image: Option<PathBuf>,
}

/// Authentication response from the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// A user profile. Saved edits overwrite the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Avatar URL
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "joinedDate")]
    pub joined_date: Option<String>,
}

impl Profile {
    /// Human-readable join date, e.g. "Joined March 2024". `None` when the
    /// server sent no date or one we cannot parse.
    pub fn joined_display(&self) -> Option<String> {
        let raw = self.joined_date.as_deref()?;
        let date = chrono::DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()?;
        Some(date.format("Joined %B %Y").to_string())
    }
}

/// Server-assigned complaint status. Anything the client does not know
/// about lands in [`PostStatus::Open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum PostStatus {
    Completed,
    InProgress,
    #[default]
    Open,
}

impl From<String> for PostStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Completed" => PostStatus::Completed,
            "In Progress" => PostStatus::InProgress,
            _ => PostStatus::Open,
        }
    }
}

impl From<PostStatus> for String {
    fn from(status: PostStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStatus::Completed => write!(f, "Completed"),
            PostStatus::InProgress => write!(f, "In Progress"),
            PostStatus::Open => write!(f, "Open"),
        }
    }
}

/// A complaint post. Read-only from the client once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub content: String,
    /// Transport-encoded image, if attached
    #[serde(default)]
    pub image: Option<String>,
    /// Transport-encoded video, if attached
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
}

/// Body of `POST /api/posts`. Unset optional fields are omitted from the
/// JSON; latitude/longitude are only ever set together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
