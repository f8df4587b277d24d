//! Image preview component

use leptos::prelude::*;

#[component]
pub fn PreviewPanel<FC, FR>(
    data_url: String,
    is_classifying: ReadSignal<bool>,
    on_classify: FC,
    on_reset: FR,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
{
    view! {
        <div class="preview-section">
            <div class="section-intro">
                <h3>"Image Preview"</h3>
                <p class="text-muted">"Review your image and click classify to analyze the waste type."</p>
            </div>

            <img src=data_url alt="Preview" class="preview-image" />

            <div class="button-row">
                <button
                    class="btn btn-primary"
                    disabled=move || is_classifying.get()
                    on:click=move |_| on_classify(())
                >
                    {move || if is_classifying.get() { "Classifying..." } else { "Classify Waste" }}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_reset(())
                >
                    "Change Image"
                </button>
            </div>
        </div>
    }
}
