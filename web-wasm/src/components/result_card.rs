//! Classification result component

use leptos::prelude::*;
use neurobin_common::Classification;

#[component]
pub fn ResultCard<F>(classification: Classification, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    // styling falls back to Non-Recyclable for labels outside the
    // taxonomy; the returned strings are shown verbatim
    let category = classification.category();

    view! {
        <div class="result-section">
            <h3>"Classification Result"</h3>

            <div class=format!("result-card {}", category.css_class())>
                <div class="result-heading">
                    <span class=format!(
                        "category-badge large {}",
                        category.css_class(),
                    )>{category.number()}</span>
                    <div class="result-title">
                        <h4>{format!("{}. {}", category.number(), classification.waste_type)}</h4>
                        <p class="confidence">
                            "Confidence: "
                            <span class="confidence-value">{classification.confidence_percent()}</span>
                        </p>
                    </div>
                </div>

                <div class="disposal-box">
                    <p class="disposal-label">"Optimal Disposal Method:"</p>
                    <p class="disposal-method">{classification.disposal_method.clone()}</p>
                </div>

                <p class="reasoning">
                    <span class="reasoning-label">"Reasoning: "</span>
                    {format!("\"{}\"", classification.reasoning)}
                </p>
            </div>

            <button
                class="btn btn-primary"
                on:click=move |_| on_reset(())
            >
                "Classify Another Item"
            </button>
        </div>
    }
}
