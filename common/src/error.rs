//! Error type definitions
//!
//! Every failure in the capture/classify flow maps onto one variant here,
//! and the `Display` string is the message shown to the user. Provider
//! error text goes through `rewrite_api_message` before it is surfaced.

use thiserror::Error;

/// Flow error taxonomy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// A selected or dropped file is not an image.
    #[error("Please upload a valid image file.")]
    InvalidImageType,

    /// The image could not be read, decoded or re-encoded.
    /// The payload holds the underlying detail for the console.
    #[error("Could not process the selected image file.")]
    ImageDecode(String),

    /// Camera permission denied or no camera hardware present.
    #[error("Could not access the camera. Please ensure you have given permission.")]
    CameraAccess(String),

    /// Classification was requested with no image payload stored.
    #[error("Please provide an image first.")]
    MissingImage,

    /// Transport failure, non-2xx response, or a malformed/invalid
    /// classification payload. The message carries the full story.
    #[error("{0}")]
    Classification(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, ClassifyError>;

/// Stable message shown for provider authentication failures.
pub const AUTH_FAILED_MESSAGE: &str =
    "Authentication Failed: The provided API key may be invalid or restricted.";

/// Fallback when an error response carries no message at all.
pub const UNKNOWN_API_ERROR: &str = "API request failed with an unknown status.";

/// Message for a 2xx response without the expected candidate text.
pub const INVALID_RESPONSE_STRUCTURE: &str =
    "Invalid response structure or empty result from the API.";

// Best-effort matching against provider error text, which may change
// format without notice. First match wins.
const API_MESSAGE_REWRITES: &[(&str, &str)] = &[
    ("unregistered callers", AUTH_FAILED_MESSAGE),
    ("API key not valid", AUTH_FAILED_MESSAGE),
];

/// Map a raw provider error message to its user-facing form.
///
/// Recognized authentication failures are rewritten to a stable message;
/// everything else passes through verbatim.
pub fn rewrite_api_message(raw: &str) -> String {
    for (needle, stable) in API_MESSAGE_REWRITES {
        if raw.contains(needle) {
            return (*stable).to_string();
        }
    }
    raw.to_string()
}
