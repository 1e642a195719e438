//! Classification result panel.

use leptos::*;

use crate::types::{capitalize_label, Classification};

#[component]
pub fn ResultSection(classification: ReadSignal<Classification>) -> impl IntoView {
    view! {
        <Show
            when=move || classification.get().prediction().is_some()
            fallback=|| view! { }
        >
            <section class="result-section">
                <h2 class="result-title">"Classification Result"</h2>
                <div class="result-card">
                    <div class="result-icon">"🔬"</div>
                    <div>
                        <p class="result-label">"Detected Waste Type:"</p>
                        <p class="prediction-text">
                            {move || {
                                classification
                                    .get()
                                    .prediction()
                                    .map(capitalize_label)
                                    .unwrap_or_default()
                            }}
                        </p>
                    </div>
                </div>
            </section>
        </Show>
    }
}
