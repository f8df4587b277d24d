//! Settings panel component
//!
//! The Gemini API key is user-supplied and remembered in browser local
//! storage so it survives a reload. Nothing else is configurable from the
//! page.

use gloo::storage::{LocalStorage, Storage};
use leptos::prelude::*;

const API_KEY_STORAGE_KEY: &str = "neurobin.gemini-api-key";

/// Key remembered from a previous visit, if any.
pub fn load_stored_api_key() -> String {
    LocalStorage::get(API_KEY_STORAGE_KEY).unwrap_or_default()
}

#[component]
pub fn SettingsPanel(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="api-key">"Gemini API Key"</label>
                <input
                    type="password"
                    id="api-key"
                    placeholder="Enter API key..."
                    prop:value=move || api_key.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        if let Err(err) = LocalStorage::set(API_KEY_STORAGE_KEY, &value) {
                            gloo::console::warn!(format!("could not persist API key: {}", err));
                        }
                        set_api_key.set(value);
                    }
                />
                <a
                    href="https://aistudio.google.com/app/apikey"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="api-key-link"
                >
                    "Get an API key"
                </a>
            </div>
        </div>
    }
}
