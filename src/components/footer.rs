//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer>
            <div>{format!("© {} CleanTech AI. All rights reserved.", year)}</div>
            <div class="footer-links">
                <a href="#privacy" class="footer-link">"Privacy Policy"</a>
                " | "
                <a href="#terms" class="footer-link">"Terms of Service"</a>
                " | "
                <a href="#contact" class="footer-link">"Contact Us"</a>
            </div>
        </footer>
    }
}
