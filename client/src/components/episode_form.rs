//! Episode creation form.
//!
//! DESIGN
//! ======
//! The series options are resolved by the page before rendering; the form only
//! owns the draft, validation, and submission feedback through toasts.

#[cfg(test)]
#[path = "episode_form_test.rs"]
mod episode_form_test;

use leptos::prelude::*;

use crate::net::types::{NewEpisode, SeriesOption};
use crate::state::toast::use_toaster;

/// Raw form input, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EpisodeDraft {
    pub series_id: String,
    pub title: String,
    pub episode_number: String,
    pub video_url: String,
    pub thumbnail_url: String,
}

impl EpisodeDraft {
    /// Fresh draft that keeps the chosen series for the next entry.
    #[must_use]
    pub fn next_for_series(&self) -> Self {
        Self { series_id: self.series_id.clone(), ..Self::default() }
    }
}

/// Validate a draft and convert it into an insert payload.
///
/// # Errors
///
/// Returns the user-facing message for the first invalid field, in form order.
pub fn validate_episode_draft(draft: &EpisodeDraft) -> Result<NewEpisode, &'static str> {
    if draft.series_id.trim().is_empty() {
        return Err("Choose a series.");
    }
    if draft.title.trim().is_empty() {
        return Err("Enter a title.");
    }
    let episode_number = draft
        .episode_number
        .trim()
        .parse::<u32>()
        .map_err(|_| "Episode number must be a whole number.")?;
    let thumbnail = draft.thumbnail_url.trim();

    let episode = NewEpisode {
        series_id: draft.series_id.trim().to_owned(),
        title: draft.title.trim().to_owned(),
        episode_number,
        video_url: draft.video_url.trim().to_owned(),
        thumbnail_url: (!thumbnail.is_empty()).then(|| thumbnail.to_owned()),
    };
    episode.check()?;
    Ok(episode)
}

pub(crate) fn series_placeholder(has_series: bool) -> &'static str {
    if has_series { "Select a series" } else { "No series available" }
}

#[component]
pub fn EpisodeForm(series: Vec<SeriesOption>) -> impl IntoView {
    let toaster = use_toaster();
    let draft = RwSignal::new(EpisodeDraft::default());
    let busy = RwSignal::new(false);
    let placeholder = series_placeholder(!series.is_empty());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let episode = match validate_episode_draft(&draft.get_untracked()) {
            Ok(episode) => episode,
            Err(msg) => {
                toaster.error(msg);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::catalog::create_episode(episode).await {
                Ok(()) => {
                    toaster.success("Episode created.");
                    draft.update(|d| *d = d.next_for_series());
                }
                Err(e) => toaster.error(format!("Could not create episode: {e}")),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = episode;
            busy.set(false);
        }
    };

    view! {
        <form class="episode-form" on:submit=on_submit>
            <label class="episode-form__label">
                "Series"
                <select
                    class="episode-form__input"
                    name="series_id"
                    prop:value=move || draft.get().series_id
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.series_id = value);
                    }
                >
                    <option value="">{placeholder}</option>
                    {series
                        .into_iter()
                        .map(|s| view! { <option value=s.id>{s.title}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="episode-form__label">
                "Title"
                <input
                    class="episode-form__input"
                    type="text"
                    name="title"
                    prop:value=move || draft.get().title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.title = value);
                    }
                />
            </label>
            <label class="episode-form__label">
                "Episode number"
                <input
                    class="episode-form__input"
                    type="number"
                    min="1"
                    name="episode_number"
                    prop:value=move || draft.get().episode_number
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.episode_number = value);
                    }
                />
            </label>
            <label class="episode-form__label">
                "Video URL"
                <input
                    class="episode-form__input"
                    type="url"
                    name="video_url"
                    placeholder="https://"
                    prop:value=move || draft.get().video_url
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.video_url = value);
                    }
                />
            </label>
            <label class="episode-form__label">
                "Thumbnail URL (optional)"
                <input
                    class="episode-form__input"
                    type="url"
                    name="thumbnail_url"
                    placeholder="https://"
                    prop:value=move || draft.get().thumbnail_url
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.thumbnail_url = value);
                    }
                />
            </label>
            <div class="episode-form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Create episode" }}
                </button>
            </div>
        </form>
    }
}
