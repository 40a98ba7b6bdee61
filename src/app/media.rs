//! Media Transport Encoding
//!
//! Attachments travel inside the JSON create-post body as self-describing
//! `data:<mime>;base64,<payload>` strings. Encoding reads the file from
//! disk and is independent of the UI; the submit worker calls it once per
//! selected attachment.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Errors from transport encoding
#[derive(Debug, Error)]
pub enum MediaError {
    /// The selected file could not be read
    #[error("could not read media file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Encode a file for JSON transport.
pub fn encode_for_transport(path: &Path) -> Result<String, MediaError> {
    let bytes = std::fs::read(path).map_err(|source| MediaError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(format!(
        "data:{};base64,{}",
        mime_for_path(path),
        STANDARD.encode(bytes)
    ))
}

/// Mime type guessed from the file extension. Unknown extensions fall back
/// to the generic byte-stream type; the server treats the prefix as opaque.
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",
        _ => "application/octet-stream",
    }
}
