//! Category overview component

use leptos::prelude::*;
use neurobin_common::WasteCategory;

#[component]
pub fn CategoryGrid() -> impl IntoView {
    view! {
        <section class="category-overview">
            <h2>"6 Waste Categories"</h2>
            <div class="category-grid">
                {WasteCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <div class="category-item">
                                <span class=format!(
                                    "category-badge {}",
                                    category.css_class(),
                                )>{category.number()}</span>
                                <span class="category-name">{category.label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
