//! Page header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>"NeuroBin AI Classifier"</h1>
            <p class="text-muted">
                "Advanced AI-powered waste classification system. Upload a photo or use your camera to identify waste types and get proper disposal recommendations."
            </p>
        </header>
    }
}
