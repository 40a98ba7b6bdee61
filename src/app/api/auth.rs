//! Auth Resource Client
//!
//! Login, registration, and profile operations. Registration is the one
//! multipart call the client makes; everything else is JSON.

use reqwest::blocking::multipart;

use super::{ApiClient, ApiError};
use crate::shared::models::{AuthResponse, LoginRequest, Profile, RegisterForm};

/// Log in with email and password
pub fn login(api: &ApiClient, email: String, password: String) -> Result<AuthResponse, ApiError> {
    api.post_json("/api/login", &LoginRequest { email, password })
}

/// Register a new account. The profile image, when present, is uploaded
/// from disk as a multipart file part.
pub fn register(api: &ApiClient, form: RegisterForm) -> Result<AuthResponse, ApiError> {
    let mut parts = multipart::Form::new()
        .text("username", form.username)
        .text("email", form.email)
        .text("password", form.password)
        .text("bio", form.bio);

    if let Some(path) = form.profile_image {
        parts = parts
            .file("profileImage", &path)
            .map_err(|source| ApiError::Attachment {
                path: path.display().to_string(),
                source,
            })?;
    }

    api.post_multipart("/api/register", parts)
}

/// Fetch the caller's profile
pub fn get_profile(api: &ApiClient) -> Result<Profile, ApiError> {
    api.get_json("/api/profile")
}

/// Overwrite the caller's profile with the full edited copy. The response
/// body is ignored; the caller keeps its local copy on success.
pub fn update_profile(api: &ApiClient, profile: &Profile) -> Result<(), ApiError> {
    api.put_unit("/api/profile", profile)
}
