//! Image payload helpers
//!
//! Pure arithmetic and string handling around the normalized payload:
//! MIME validation, proportional downscale dimensions, and Data URL
//! splitting. The actual decode/encode happens in the front end.

/// A file qualifies for classification if its MIME type is any image type.
pub fn is_supported_image_type(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Scale dimensions proportionally so neither edge exceeds its bound.
///
/// Landscape images scale by width, portrait and square images by height;
/// images already inside the bounds are returned unchanged. Aspect ratio is
/// preserved within rounding and neither dimension collapses below 1.
///
/// # Arguments
/// * `width`, `height` - source dimensions in pixels
/// * `max_width`, `max_height` - per-edge bounds
///
/// # Returns
/// Target `(width, height)` for the normalized payload
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let mut w = width as f64;
    let mut h = height as f64;

    if width > height {
        if w > max_width as f64 {
            h *= max_width as f64 / w;
            w = max_width as f64;
        }
    } else if h > max_height as f64 {
        w *= max_height as f64 / h;
        h = max_height as f64;
    }

    (w.round().max(1.0) as u32, h.round().max(1.0) as u32)
}

/// Extract the base64 body from a Data URL.
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." style Data URL
///
/// # Returns
/// The base64-encoded body, or `None` if the URL has no comma separator
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Extract the MIME type from a Data URL.
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." style Data URL
///
/// # Returns
/// The MIME type (e.g. "image/jpeg"); defaults to "image/jpeg" when the
/// URL does not carry one
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_IMAGE_DIMENSION;

    // =============================================
    // MIME validation
    // =============================================

    #[test]
    fn test_supported_image_types() {
        assert!(is_supported_image_type("image/jpeg"));
        assert!(is_supported_image_type("image/png"));
        assert!(is_supported_image_type("image/webp"));
    }

    #[test]
    fn test_unsupported_types() {
        assert!(!is_supported_image_type("application/pdf"));
        assert!(!is_supported_image_type("text/plain"));
        assert!(!is_supported_image_type("video/mp4"));
        assert!(!is_supported_image_type(""));
    }

    // =============================================
    // fit_within
    // =============================================

    #[test]
    fn test_fit_within_landscape() {
        let (w, h) = fit_within(4000, 2000, MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION);
        assert_eq!((w, h), (512, 256));
    }

    #[test]
    fn test_fit_within_portrait() {
        let (w, h) = fit_within(1000, 2000, 512, 512);
        assert_eq!((w, h), (256, 512));
    }

    #[test]
    fn test_fit_within_square() {
        let (w, h) = fit_within(1024, 1024, 512, 512);
        assert_eq!((w, h), (512, 512));
    }

    #[test]
    fn test_fit_within_no_upscale() {
        assert_eq!(fit_within(300, 200, 512, 512), (300, 200));
        assert_eq!(fit_within(512, 512, 512, 512), (512, 512));
    }

    #[test]
    fn test_fit_within_preserves_aspect_ratio() {
        let (w, h) = fit_within(3023, 1711, 512, 512);
        assert!(w <= 512 && h <= 512);
        let src_ratio = 3023.0 / 1711.0;
        let dst_ratio = w as f64 / h as f64;
        assert!((src_ratio - dst_ratio).abs() < 0.01);
    }

    #[test]
    fn test_fit_within_extreme_ratio_keeps_min_edge() {
        let (w, h) = fit_within(10000, 1, 512, 512);
        assert_eq!(w, 512);
        assert_eq!(h, 1);
    }

    // =============================================
    // Data URL splitting
    // =============================================

    #[test]
    fn test_extract_base64_from_data_url_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(extract_base64_from_data_url(data_url), Some("/9j/4AAQSkZJRg=="));
    }

    #[test]
    fn test_extract_base64_from_data_url_invalid() {
        assert_eq!(extract_base64_from_data_url("not a data url"), None);
        assert_eq!(extract_base64_from_data_url(""), None);
    }

    #[test]
    fn test_extract_mime_type_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(extract_mime_type_from_data_url(data_url), "image/png");
    }

    #[test]
    fn test_extract_mime_type_default() {
        assert_eq!(extract_mime_type_from_data_url("invalid"), "image/jpeg");
    }
}
