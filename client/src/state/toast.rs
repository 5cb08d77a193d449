//! Transient notification queue.
//!
//! DESIGN
//! ======
//! `ToastState` is plain data so queue rules stay testable; `Toaster` is the
//! copyable handle components pull from context to enqueue messages.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Milliseconds before a toast dismisses itself in the browser.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Enqueue a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message: message.into(), kind });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Global "show message" capability.
#[derive(Clone, Copy, Debug)]
pub struct Toaster {
    state: RwSignal<ToastState>,
}

impl Toaster {
    #[must_use]
    pub fn new(state: RwSignal<ToastState>) -> Self {
        Self { state }
    }

    /// Enqueue a message and return its toast id.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let message = message.into();
        let id = self.state.try_update(|s| s.push(message, kind)).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                state.update(|s| s.dismiss(id));
            });
        }

        id
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }

    #[must_use]
    pub fn items(&self) -> Vec<Toast> {
        self.state.get().items
    }
}

/// The toaster installed by `ToastProvider`.
///
/// # Panics
///
/// Panics when called outside a `ToastProvider`.
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}
