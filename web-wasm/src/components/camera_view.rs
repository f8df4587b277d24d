//! Camera view component

use leptos::html::Video;
use leptos::prelude::*;

#[component]
pub fn CameraView<FC, FX>(
    video_ref: NodeRef<Video>,
    on_capture: FC,
    on_cancel: FX,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
    FX: Fn(()) + 'static + Clone,
{
    view! {
        <div class="camera-section">
            <div class="section-intro">
                <h3>"Camera View"</h3>
                <p class="text-muted">"Position the waste item in the camera view and take a photo."</p>
            </div>

            <video
                node_ref=video_ref
                class="camera-feed"
                autoplay=true
                playsinline=true
            ></video>

            <div class="button-row">
                <button
                    class="btn btn-primary"
                    on:click=move |_| on_capture(())
                >
                    "Take Photo"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel(())
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
