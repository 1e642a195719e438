//! Header component

use leptos::*;

use crate::config::{APP_NAME, APP_TAGLINE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="logo-container">
                <div class="logo">"♻️"</div>
                <h1>{APP_NAME}</h1>
            </div>
            <p class="subtitle">{APP_TAGLINE}</p>
        </header>
    }
}
