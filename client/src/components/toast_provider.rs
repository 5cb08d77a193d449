//! Installs the global toast capability for a subtree.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState, Toaster};

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toaster = Toaster::new(RwSignal::new(ToastState::default()));
    provide_context(toaster);

    view! {
        {children()}
        <ToastViewport toaster=toaster/>
    }
}

#[component]
fn ToastViewport(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <For
                each=move || toaster.items()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.css_modifier());
                    view! {
                        <div class=class on:click=move |_| toaster.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
