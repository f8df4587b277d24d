//! Upload area component

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn UploadArea<F, C>(on_file: F, on_use_camera: C) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
    C: Fn(()) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_file = on_file.clone();
        move |_| {
            // open the file picker dialog
            let document = web_sys::window().unwrap().document().unwrap();
            let input: HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let picker = input.clone();
            let on_file = on_file.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(file) = picker.files().and_then(|files| files.get(0)) {
                    on_file(file);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div class="upload-section">
            <div class="section-intro">
                <h3>"Classify Waste"</h3>
                <p class="text-muted">"Upload a photo or use your camera to start classification."</p>
            </div>

            <div
                class=move || {
                    if is_dragover.get() { "drop-zone dragover" } else { "drop-zone" }
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <div class="upload-icon">"📷"</div>
                <p class="drop-hint">"Drag & drop an image here"</p>
                <p class="text-muted">"or"</p>
                <p class="select-link">"Click to Select File"</p>
            </div>

            <div class="camera-cta">
                <button
                    class="btn btn-primary"
                    on:click=move |_| on_use_camera(())
                >
                    "Use Camera"
                </button>
            </div>
        </div>
    }
}
