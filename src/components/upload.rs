//! Image selection and submission component.
//!
//! Handles file selection, local preview derivation, and submission of the
//! image to the classification endpoint.

use leptos::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::{BACKEND_URL, NO_FILE_MESSAGE};
use crate::services::{classify_image, read_as_data_url};
use crate::types::{AppError, Classification};

#[component]
pub fn UploadSection(
    selected_file: ReadSignal<Option<File>>,
    set_selected_file: WriteSignal<Option<File>>,
    preview: ReadSignal<Option<String>>,
    set_preview: WriteSignal<Option<String>>,
    classification: ReadSignal<Classification>,
    set_classification: WriteSignal<Classification>,
) -> impl IntoView {
    // Handler for file selection
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        // A new selection always discards the previous cycle's outcome.
        set_classification.set(Classification::Idle);

        let file = input.files().and_then(|files| files.get(0));
        match file {
            Some(file) => {
                set_selected_file.set(Some(file.clone()));
                // Nothing renders in the preview slot until the read settles.
                set_preview.set(None);

                let started = read_as_data_url(&file, move |data_url| {
                    // try_set discards the result if the view is already gone.
                    _ = set_preview.try_set(data_url);
                });
                if let Err(e) = started {
                    log::error!("{}", e);
                }
            }
            None => {
                // Selection cancelled
                set_selected_file.set(None);
                set_preview.set(None);
            }
        }
    };

    // Handler for the classify button
    let on_submit = move |_| {
        let Some(file) = selected_file.get_untracked() else {
            // Local validation, never reaches the network.
            let err = AppError::Validation(NO_FILE_MESSAGE.to_string());
            set_classification.set(Classification::Failed(err.user_message().to_string()));
            return;
        };

        set_classification.set(Classification::Loading);

        spawn_local(async move {
            match classify_image(file, BACKEND_URL).await {
                Ok(response) => {
                    log::info!("Prediction received: {}", response.prediction);
                    _ = set_classification.try_set(Classification::Succeeded(response.prediction));
                }
                Err(e) => {
                    // Diagnostic detail stays in the console; the user sees
                    // the generic message.
                    log::error!("Classification failed: {}", e);
                    _ = set_classification
                        .try_set(Classification::Failed(e.user_message().to_string()));
                }
            }
        });
    };

    view! {
        <section class="upload-section">
            <div class="file-input-container">
                <label class="file-input-label" for="fileInput">
                    {move || if preview.get().is_some() {
                        "Change Image"
                    } else {
                        "Select Waste Image"
                    }}
                </label>
                <input
                    type="file"
                    id="fileInput"
                    accept="image/*"
                    class="file-input"
                    on:change=on_file_change
                />

                <Show
                    when=move || selected_file.get().is_some()
                    fallback=|| view! { }
                >
                    <p class="file-name">
                        {move || selected_file.get().map(|f| f.name()).unwrap_or_default()}
                    </p>
                </Show>
            </div>

            <Show
                when=move || preview.get().is_some()
                fallback=|| view! { }
            >
                <div class="preview-container">
                    <img
                        class="preview"
                        alt="Preview"
                        src=move || preview.get().unwrap_or_default()
                    />
                </div>
            </Show>

            <button
                class="classify-button"
                disabled=move || classification.get().is_loading()
                on:click=on_submit
            >
                <Show
                    when=move || classification.get().is_loading()
                    fallback=|| view! { "Classify Waste" }
                >
                    <span class="spinner"></span>
                    " Analyzing..."
                </Show>
            </button>

            <Show
                when=move || classification.get().error().is_some()
                fallback=|| view! { }
            >
                <div class="error-container">
                    <p class="error-text">
                        "⚠️ "
                        {move || classification.get().error().map(str::to_string).unwrap_or_default()}
                    </p>
                </div>
            </Show>
        </section>
    }
}
