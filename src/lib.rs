//! CleanTech Waste Classifier - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for submitting waste images to a remote
//! classification service and displaying the predicted category.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title, tagline)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── UploadSection (file picker, preview, classify button)  │
//! │  └── ResultSection (when a prediction arrived)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Classification, PredictResponse, errors)
//! - [`components`] - UI components (Header, Upload, Result, Footer)
//! - [`services`] - Backend communication and preview derivation

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{capitalize_label, AppError, AppResult, Classification, PredictResponse};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

/// Root component, mounted once by the binary entry point.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Component-local state for one classification cycle. The selected file
    // and its preview live alongside the tagged classification state, so a
    // prediction and an error can never be active at the same time.
    let (selected_file, set_selected_file) = create_signal(None::<web_sys::File>);
    let (preview, set_preview) = create_signal(None::<String>);
    let (classification, set_classification) = create_signal(Classification::Idle);

    view! {
        <Header/>

        <div class="container">
            <UploadSection
                selected_file=selected_file
                set_selected_file=set_selected_file
                preview=preview
                set_preview=set_preview
                classification=classification
                set_classification=set_classification
            />

            <ResultSection classification=classification/>
        </div>

        <Footer/>
    }
}
