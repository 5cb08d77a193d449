use leptos::prelude::*;

use crate::util::images::is_allowed_image_url;

/// `<img>` for allow-listed hosts; a sized placeholder for anything else.
#[component]
pub fn RemoteImage(
    src: Option<String>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    match src.filter(|s| is_allowed_image_url(s)) {
        Some(src) => view! { <img class=class src=src alt=alt loading="lazy"/> }.into_any(),
        None => {
            let class = format!("{class} image-placeholder");
            view! { <div class=class role="img" aria-label=alt></div> }.into_any()
        }
    }
}
