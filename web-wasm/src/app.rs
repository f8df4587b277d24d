//! Main application component
//!
//! The capture/classify flow is a strict linear state machine with one
//! branch point (image source) and one reset edge. The view is a tagged
//! union so each state carries only the data that belongs to it: the
//! camera state owns the stream, the result state owns the classification,
//! and contradictory combinations cannot be represented.

use leptos::html::Video;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MediaStream;

use neurobin_common::{
    extract_base64_from_data_url, extract_mime_type_from_data_url, is_supported_image_type,
    Classification, ClassifyError, Result,
};

use crate::api::gemini::classify_waste;
use crate::camera;
use crate::components::{
    camera_view::CameraView, category_grid::CategoryGrid, error_banner::ErrorBanner,
    header::Header, preview_panel::PreviewPanel, result_card::ResultCard,
    settings_panel::{load_stored_api_key, SettingsPanel},
    upload_area::UploadArea,
};
use crate::image::normalize_file;

/// A normalized image payload ready for preview and classification.
#[derive(Clone, PartialEq)]
pub struct CapturedImage {
    pub data_url: String,
    pub base64: String,
    pub mime_type: String,
}

impl CapturedImage {
    pub fn from_data_url(data_url: String) -> Result<Self> {
        let base64 = extract_base64_from_data_url(&data_url)
            .ok_or_else(|| ClassifyError::ImageDecode("payload is not a data URL".to_string()))?
            .to_string();
        let mime_type = extract_mime_type_from_data_url(&data_url).to_string();
        Ok(Self {
            data_url,
            base64,
            mime_type,
        })
    }
}

/// What the classifier screen is currently showing.
#[derive(Clone)]
pub enum CaptureView {
    Upload,
    Camera { stream: MediaStream },
    Preview { image: CapturedImage },
    Result {
        image: CapturedImage,
        classification: Classification,
    },
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // The stream handle is a JS object, so the view lives in a
    // thread-local signal.
    let current_view = RwSignal::new_local(CaptureView::Upload);
    let (error, set_error) = signal(None::<String>);
    let (is_classifying, set_is_classifying) = signal(false);
    let (api_key, set_api_key) = signal(load_stored_api_key());

    let video_ref = NodeRef::<Video>::new();

    // Release the camera if the current view holds it. Safe to call on
    // every exit path; stopping an already stopped stream is a no-op.
    let release_camera = move || {
        if let CaptureView::Camera { stream } = current_view.get_untracked() {
            camera::stop_stream(&stream);
        }
    };

    // Reset edge: any state back to upload with an empty session.
    let reset = move |_: ()| {
        release_camera();
        current_view.set(CaptureView::Upload);
        set_error.set(None);
        set_is_classifying.set(false);
    };

    // Bind the live stream to the video surface once both exist.
    Effect::new(move |_| {
        if let Some(video) = video_ref.get() {
            if let CaptureView::Camera { stream } = current_view.get() {
                video.set_src_object(Some(&stream));
                let _ = video.play();
            }
        }
    });

    let handle_file = move |file: web_sys::File| {
        if !is_supported_image_type(&file.type_()) {
            set_error.set(Some(ClassifyError::InvalidImageType.to_string()));
            return;
        }
        spawn_local(async move {
            match normalize_file(file).await {
                Ok(image) => {
                    set_error.set(None);
                    current_view.set(CaptureView::Preview { image });
                }
                Err(err) => {
                    gloo::console::error!(format!("image processing failed: {:?}", err));
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    };

    let start_camera = move |_: ()| {
        spawn_local(async move {
            match camera::start_rear_camera().await {
                Ok(stream) => {
                    set_error.set(None);
                    current_view.set(CaptureView::Camera { stream });
                }
                Err(err) => {
                    gloo::console::error!(format!("camera access failed: {:?}", err));
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    };

    let capture_photo = move |_: ()| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        let captured = camera::capture_frame(&video);
        release_camera();
        match captured {
            Ok(image) => {
                set_error.set(None);
                current_view.set(CaptureView::Preview { image });
            }
            Err(err) => {
                set_error.set(Some(err.to_string()));
                current_view.set(CaptureView::Upload);
            }
        }
    };

    let cancel_camera = move |_: ()| {
        release_camera();
        current_view.set(CaptureView::Upload);
    };

    let classify = move |_: ()| {
        // one call in flight at a time; a second attempt is a no-op
        if is_classifying.get_untracked() {
            return;
        }
        let CaptureView::Preview { image } = current_view.get_untracked() else {
            set_error.set(Some(ClassifyError::MissingImage.to_string()));
            return;
        };

        set_is_classifying.set(true);
        set_error.set(None);
        let key = api_key.get_untracked();

        spawn_local(async move {
            match classify_waste(&key, &image.base64, &image.mime_type).await {
                Ok(classification) => {
                    gloo::console::log!(format!(
                        "classification complete: {}",
                        classification.waste_type
                    ));
                    current_view.set(CaptureView::Result {
                        image,
                        classification,
                    });
                }
                Err(err) => {
                    gloo::console::error!(format!("classification failed: {}", err));
                    set_error.set(Some(err.to_string()));
                }
            }
            set_is_classifying.set(false);
        });
    };

    // The stream must not outlive the screen.
    on_cleanup(release_camera);

    view! {
        <div class="container">
            <Header />

            <CategoryGrid />

            <SettingsPanel api_key=api_key set_api_key=set_api_key />

            <div class="classifier-card">
                {move || match current_view.get() {
                    CaptureView::Upload => view! {
                        <UploadArea
                            on_file=handle_file.clone()
                            on_use_camera=start_camera.clone()
                        />
                    }
                    .into_any(),
                    CaptureView::Camera { .. } => view! {
                        <CameraView
                            video_ref=video_ref
                            on_capture=capture_photo.clone()
                            on_cancel=cancel_camera.clone()
                        />
                    }
                    .into_any(),
                    CaptureView::Preview { image } => view! {
                        <PreviewPanel
                            data_url=image.data_url.clone()
                            is_classifying=is_classifying
                            on_classify=classify.clone()
                            on_reset=reset.clone()
                        />
                    }
                    .into_any(),
                    CaptureView::Result { classification, .. } => view! {
                        <ResultCard
                            classification=classification.clone()
                            on_reset=reset.clone()
                        />
                    }
                    .into_any(),
                }}

                <ErrorBanner error=error />
            </div>
        </div>
    }
}
