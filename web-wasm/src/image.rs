//! Image acquisition and normalization
//!
//! Reads a selected file into a Data URL, decodes it through an
//! `HtmlImageElement`, downscales it onto a canvas so neither edge exceeds
//! the configured bound, and re-encodes it as JPEG at the configured
//! quality. All failures surface as image-processing errors and leave the
//! caller's view unchanged.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, FileReader, HtmlCanvasElement, HtmlImageElement};

use neurobin_common::config::{JPEG_QUALITY, MAX_IMAGE_DIMENSION};
use neurobin_common::{fit_within, ClassifyError, Result};

use crate::app::CapturedImage;

/// Read, decode and normalize an uploaded file.
///
/// The caller validates the MIME type first; this function assumes an
/// image and reports decode failures.
pub async fn normalize_file(file: web_sys::File) -> Result<CapturedImage> {
    let data_url = read_file_as_data_url(&file).await?;
    normalize_data_url(&data_url).await
}

/// Read a file into a Data URL, suspending until the reader finishes.
async fn read_file_as_data_url(file: &web_sys::File) -> Result<String> {
    let reader = FileReader::new()
        .map_err(|e| ClassifyError::ImageDecode(js_value_message(&e)))?;

    let (tx, rx) = oneshot::channel::<Option<String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = tx.clone();
        let reader = reader.clone();
        Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            let data_url = reader.result().ok().and_then(|v| v.as_string());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(data_url);
            }
        }) as Box<dyn FnMut(_)>)
    };
    let onerror = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(None);
            }
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| ClassifyError::ImageDecode(js_value_message(&e)))?;

    let data_url = rx.await.unwrap_or(None);
    reader.set_onload(None);
    reader.set_onerror(None);

    data_url.ok_or_else(|| ClassifyError::ImageDecode("file could not be read".to_string()))
}

/// Downscale a Data URL image to the configured bound and re-encode it.
pub async fn normalize_data_url(data_url: &str) -> Result<CapturedImage> {
    let img = load_image(data_url).await?;

    let (width, height) = fit_within(
        img.natural_width(),
        img.natural_height(),
        MAX_IMAGE_DIMENSION,
        MAX_IMAGE_DIMENSION,
    );

    let canvas = create_canvas(width, height)?;
    let ctx = canvas_context(&canvas)?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &img,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )
    .map_err(|e| ClassifyError::ImageDecode(js_value_message(&e)))?;

    let jpeg_url = canvas
        .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(JPEG_QUALITY))
        .map_err(|e| ClassifyError::ImageDecode(js_value_message(&e)))?;

    CapturedImage::from_data_url(jpeg_url)
}

/// Decode a Data URL through an image element, suspending until the
/// browser resolves the load.
async fn load_image(src: &str) -> Result<HtmlImageElement> {
    let img = HtmlImageElement::new()
        .map_err(|e| ClassifyError::ImageDecode(js_value_message(&e)))?;

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        }) as Box<dyn FnMut(_)>)
    };
    let onerror = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(false);
            }
        }) as Box<dyn FnMut(_)>)
    };

    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    img.set_src(src);

    let loaded = rx.await.unwrap_or(false);
    img.set_onload(None);
    img.set_onerror(None);

    if loaded {
        Ok(img)
    } else {
        Err(ClassifyError::ImageDecode("image failed to decode".to_string()))
    }
}

pub(crate) fn create_canvas(width: u32, height: u32) -> Result<HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ClassifyError::ImageDecode("no document".to_string()))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| ClassifyError::ImageDecode(js_value_message(&e)))?
        .dyn_into()
        .map_err(|_| ClassifyError::ImageDecode("canvas element expected".to_string()))?;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(canvas)
}

pub(crate) fn canvas_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| ClassifyError::ImageDecode(js_value_message(&e)))?
        .ok_or_else(|| ClassifyError::ImageDecode("no 2d context".to_string()))?
        .dyn_into()
        .map_err(|_| ClassifyError::ImageDecode("2d context expected".to_string()))
}

pub(crate) fn js_value_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
