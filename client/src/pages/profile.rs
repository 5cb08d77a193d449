//! Signed-in member's profile summary.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::state::auth::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Title text="Profile"/>
        <section class="profile">
            {move || {
                let state = auth.snapshot();
                if state.loading {
                    view! { <p class="profile__status">"Loading profile..."</p> }.into_any()
                } else if let Some(err) = state.error {
                    view! { <p class="profile__status profile__status--error">{format!("Could not load your profile: {err}")}</p> }
                        .into_any()
                } else if let Some(user) = state.user {
                    let name = user.display_name().to_owned();
                    view! {
                        <h1 class="profile__name">{name}</h1>
                        <dl class="profile__details">
                            <dt>"Email"</dt>
                            <dd>{user.email.unwrap_or_else(|| "-".to_owned())}</dd>
                            <dt>"Role"</dt>
                            <dd>{user.role}</dd>
                        </dl>
                    }
                        .into_any()
                } else {
                    view! { <p class="profile__status">"Sign in to view your profile."</p> }.into_any()
                }
            }}
        </section>
    }
}
