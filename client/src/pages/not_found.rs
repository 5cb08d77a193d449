//! Router fallback for unknown paths.

#[cfg(test)]
#[path = "not_found_test.rs"]
mod not_found_test;

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page not found"/>
        <section class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"This page could not be found."</p>
            <a class="btn btn--primary" href="/">
                "Go back home"
            </a>
        </section>
    }
}
