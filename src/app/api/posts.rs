//! Posts Resource Client

use super::{ApiClient, ApiError};
use crate::shared::models::{CreatePostRequest, Post};

/// File a new complaint
pub fn create(api: &ApiClient, request: &CreatePostRequest) -> Result<Post, ApiError> {
    api.post_json("/api/posts", request)
}

/// List every complaint on the platform
pub fn get_all(api: &ApiClient) -> Result<Vec<Post>, ApiError> {
    api.get_json("/api/posts")
}

/// List the caller's own complaints
pub fn get_mine(api: &ApiClient) -> Result<Vec<Post>, ApiError> {
    api.get_json("/api/user/posts")
}
