//! Task card with proof requirement and submission button

use crate::components::LoadingSpinner;
use leptos::prelude::*;

/// One task within an expanded stage
#[component]
pub fn TaskCard(
    name: String,
    description: String,
    proof: String,
    completed: bool,
    submitting: bool,
    on_submit: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <div class=format!(
            "glass p-5 rounded-lg {}",
            if completed { "border border-neon-green/40" } else { "" }
        )>
            <div class="flex items-start justify-between gap-4">
                <div class="min-w-0">
                    <h4 class="text-lg font-bold mb-1">
                        {completed.then(|| view! {
                            <span class="text-neon-green mr-2">"✓"</span>
                        })}
                        {name}
                    </h4>
                    <p class="text-gray-300 text-sm mb-3">{description}</p>
                    <div class="bg-white/5 p-3 rounded-lg">
                        <h5 class="text-xs font-semibold uppercase tracking-wider text-gray-400 mb-1">
                            "Proof Required"
                        </h5>
                        <p class="text-gray-300 text-sm">{proof}</p>
                    </div>
                </div>

                <div class="shrink-0">
                    {if completed {
                        view! {
                            <span class="text-sm font-semibold text-neon-green px-4 py-2">
                                "Completed"
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <button
                                on:click=on_submit
                                disabled=submitting
                                class="px-4 py-2 rounded-lg border border-neon-cyan text-sm font-semibold
                                       bg-gradient-to-r from-neon-cyan/20 to-neon-magenta/20
                                       hover:from-neon-cyan/30 hover:to-neon-magenta/30
                                       disabled:opacity-50 disabled:cursor-wait
                                       transition-all duration-300 flex items-center gap-2"
                            >
                                {submitting.then(|| view! { <LoadingSpinner size="w-4 h-4" /> })}
                                {if submitting { "Uploading..." } else { "Submit Proof" }}
                            </button>
                        }.into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
