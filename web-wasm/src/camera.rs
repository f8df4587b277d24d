//! Device camera handling
//!
//! Acquires the rear-facing camera through `getUserMedia`, grabs single
//! frames off the live video surface, and releases the stream. The stream
//! must be released on every path out of the camera view; `stop_stream`
//! is safe to call any number of times.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use neurobin_common::config::{CAMERA_FACING_MODE, JPEG_QUALITY};
use neurobin_common::{ClassifyError, Result};

use crate::app::CapturedImage;
use crate::image::{canvas_context, create_canvas, js_value_message};

/// Request a rear-facing camera stream.
///
/// Permission denial and missing hardware both surface as camera-access
/// errors; the caller stays in the upload view in that case.
pub async fn start_rear_camera() -> Result<MediaStream> {
    let window = web_sys::window()
        .ok_or_else(|| ClassifyError::CameraAccess("no window".to_string()))?;
    let media_devices = window
        .navigator()
        .media_devices()
        .map_err(access_error)?;

    let video = js_sys::Object::new();
    js_sys::Reflect::set(
        &video,
        &JsValue::from_str("facingMode"),
        &JsValue::from_str(CAMERA_FACING_MODE),
    )
    .map_err(access_error)?;

    let mut constraints = MediaStreamConstraints::new();
    constraints.video(&video.into());

    let promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(access_error)?;
    let stream = JsFuture::from(promise).await.map_err(access_error)?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| ClassifyError::CameraAccess("unexpected stream type".to_string()))
}

/// Grab the current video frame at its native resolution.
///
/// The frame is re-encoded as JPEG at the configured quality with no
/// additional downscale and joins the same success path as file uploads.
pub fn capture_frame(video: &HtmlVideoElement) -> Result<CapturedImage> {
    let width = video.video_width();
    let height = video.video_height();
    if width == 0 || height == 0 {
        return Err(ClassifyError::ImageDecode("camera frame not ready".to_string()));
    }

    let canvas = create_canvas(width, height)?;
    let ctx = canvas_context(&canvas)?;
    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(|e| ClassifyError::ImageDecode(js_value_message(&e)))?;

    let data_url = canvas
        .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(JPEG_QUALITY))
        .map_err(|e| ClassifyError::ImageDecode(js_value_message(&e)))?;

    CapturedImage::from_data_url(data_url)
}

/// Stop every track of the stream. Idempotent: stopping an already
/// stopped track is a no-op in the browser.
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

fn access_error(value: JsValue) -> ClassifyError {
    ClassifyError::CameraAccess(js_value_message(&value))
}
