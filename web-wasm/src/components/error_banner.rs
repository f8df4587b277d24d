//! Error banner component

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner">
                <span class="error-label">"Error:"</span>
                <span class="error-message">{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
