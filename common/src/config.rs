//! Tuning constants
//!
//! Everything an operator may want to retune lives here, not inline in the
//! flow logic: payload bounds, encoding quality and the endpoint address.

/// Longest edge of an image sent for classification, in pixels.
///
/// Uploads are downscaled to this bound before transmission to cap request
/// payload size and latency. Camera captures keep their native resolution.
pub const MAX_IMAGE_DIMENSION: u32 = 512;

/// JPEG encoder quality for normalized payloads.
pub const JPEG_QUALITY: f64 = 0.9;

/// Gemini model used for classification.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Base URL of the Gemini generateContent API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Camera selection hint: prefer the rear-facing camera on mobile devices.
pub const CAMERA_FACING_MODE: &str = "environment";

/// Full generateContent endpoint URL for the configured model.
pub fn gemini_endpoint() -> String {
    format!("{}/{}:generateContent", GEMINI_API_BASE, GEMINI_MODEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_endpoint_contains_model() {
        let url = gemini_endpoint();
        assert!(url.starts_with("https://generativelanguage.googleapis.com/"));
        assert!(url.contains(GEMINI_MODEL));
        assert!(url.ends_with(":generateContent"));
    }
}
