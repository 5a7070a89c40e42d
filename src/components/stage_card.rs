//! Roadmap stage card

use leptos::prelude::*;

/// Header card for one roadmap stage.
///
/// Shows a lock glyph while the stage is gated, a check once completed, and
/// an expansion chevron otherwise. The click handler decides whether the
/// selection is honored.
#[component]
pub fn StageCard(
    name: String,
    description: String,
    index: usize,
    locked: bool,
    completed: bool,
    expanded: bool,
    on_select: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    let status_glyph = if completed {
        "✓"
    } else if locked {
        "🔒"
    } else if expanded {
        "▾"
    } else {
        "▸"
    };

    view! {
        <div
            on:click=on_select
            class=format!(
                "glass p-6 rounded-lg transition-all duration-300 {}",
                if locked {
                    "opacity-60 cursor-not-allowed"
                } else {
                    "cursor-pointer hover:border-neon-cyan"
                }
            )
        >
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-4 min-w-0">
                    <div class=format!(
                        "w-10 h-10 rounded-full flex items-center justify-center font-bold shrink-0 {}",
                        if completed {
                            "bg-neon-green/20 text-neon-green"
                        } else if locked {
                            "bg-white/10 text-gray-400"
                        } else {
                            "bg-cyan-400/20 text-cyan-300"
                        }
                    )>
                        {index + 1}
                    </div>
                    <div class="min-w-0">
                        <h3 class="text-2xl font-bold mb-1 truncate">{name}</h3>
                        <p class="text-gray-300 text-sm">{description}</p>
                    </div>
                </div>
                <span class="text-xl text-gray-300 shrink-0 ml-4">{status_glyph}</span>
            </div>
        </div>
    }
}
