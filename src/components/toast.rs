//! Toast notification overlay

use crate::state::{AppState, ToastVariant};
use leptos::prelude::*;

/// Renders the active toast queue in the corner of the viewport
#[component]
pub fn ToastHost() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]">
            {
                let state = state.clone();
                move || {
                    let state = state.clone();
                    state.toasts.get().into_iter().map(|toast| {
                        let state = state.clone();
                        let id = toast.id.clone();
                        let accent = match toast.variant {
                            ToastVariant::Success => "border-neon-green/60",
                            ToastVariant::Destructive => "border-red-500/60",
                        };
                        view! {
                            <div class=format!(
                                "glass p-4 rounded-lg border {} shadow-lg animate-fade-in-up",
                                accent
                            )>
                                <div class="flex items-start justify-between gap-2">
                                    <div class="min-w-0">
                                        <p class="font-semibold text-sm">{toast.title.clone()}</p>
                                        <p class="text-xs text-gray-300 mt-1">{toast.message.clone()}</p>
                                    </div>
                                    <button
                                        on:click=move |_| state.dismiss_toast(&id)
                                        class="text-gray-400 hover:text-white text-sm leading-none"
                                    >
                                        "✕"
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()
                }
            }
        </div>
    }
}
