//! Global application state

use crate::types::{Skill, UserDetails};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen, in milliseconds.
const TOAST_DURATION_MS: u32 = 4_000;

/// Visual style of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

/// A transient user notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// User profile, fetched on dashboard mount
    pub user: RwSignal<Option<UserDetails>>,
    /// Skills generated from the user's dream
    pub skills: RwSignal<Vec<Skill>>,
    /// Active toast notifications
    pub toasts: RwSignal<Vec<Toast>>,
    /// Identifies the user to the service
    pub user_id: RwSignal<String>,
    /// API base URL
    pub api_base: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            skills: RwSignal::new(vec![]),
            toasts: RwSignal::new(vec![]),
            user_id: RwSignal::new("demo-user".to_string()),
            api_base: RwSignal::new("http://127.0.0.1:8000".to_string()),
        }
    }

    /// Queue a toast and schedule its dismissal.
    pub fn push_toast(&self, title: impl Into<String>, message: impl Into<String>, variant: ToastVariant) {
        let toast = Toast {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            message: message.into(),
            variant,
        };
        let id = toast.id.clone();
        self.toasts.update(|list| list.push(toast));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn toast_success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push_toast(title, message, ToastVariant::Success);
    }

    pub fn toast_error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push_toast(title, message, ToastVariant::Destructive);
    }

    pub fn dismiss_toast(&self, id: &str) {
        let id = id.to_string();
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
