//! Toast notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reports mutation outcomes and fetch failures here. The queue is
//! provided as a context signal by `App` and rendered by `ToastHost`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::net::error::ApiError;

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: u32 = 4_000;

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    /// Set when a request came back 401; `App` ends the session.
    pub session_expired: bool,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    /// Log a failed request and queue its error toast.
    pub fn push_error(&mut self, context: &str, err: &ApiError) -> u64 {
        log::error!("{context}: {err}");
        if err.is_unauthorized() {
            self.session_expired = true;
        }
        self.push(ToastKind::Error, error_message(context, err))
    }

    /// Unwrap a request outcome. A failure queues an error toast and yields
    /// the toast id instead of a value.
    pub fn settle<T>(&mut self, context: &str, result: Result<T, ApiError>) -> Result<T, u64> {
        result.map_err(|err| self.push_error(context, &err))
    }
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(_toasts: RwSignal<ToastState>, _id: u64) {}

/// Show a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    if let Some(id) = toasts.try_update(|t| t.push(kind, message)) {
        schedule_dismiss(toasts, id);
    }
}

pub fn notify_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

/// Log a failed request and surface it as an error toast.
pub fn notify_error(toasts: RwSignal<ToastState>, context: &str, err: &ApiError) {
    if let Some(id) = toasts.try_update(|t| t.push_error(context, err)) {
        schedule_dismiss(toasts, id);
    }
}

/// Signal-side [`ToastState::settle`]: `Some(value)` on success, otherwise
/// `None` with the error toast queued.
pub fn settle<T>(toasts: RwSignal<ToastState>, context: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            notify_error(toasts, context, &err);
            None
        }
    }
}

/// Toast text for a failed request.
pub fn error_message(context: &str, err: &ApiError) -> String {
    format!("{context}: {err}")
}
