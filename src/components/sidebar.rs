//! Sidebar navigation component

use leptos::prelude::*;

/// Fixed navigation sidebar shown on every page
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar fixed inset-y-0 left-0 w-[240px] flex flex-col glass border-r border-white/10 z-30">
            // Branding
            <div class="p-6 border-b border-white/10">
                <a href="/" class="block">
                    <h1 class="text-2xl font-bold neon-text-cyan">"SkillForge"</h1>
                    <p class="text-xs text-gray-400 mt-1">"Forge your dream"</p>
                </a>
            </div>

            // Navigation
            <nav class="flex-1 p-4 space-y-1">
                <NavItem href="/" icon="📊" label="Dashboard" />
            </nav>

            // Footer
            <div class="p-4 border-t border-white/10 text-xs text-gray-500 text-center">
                "SkillForge v0.1.0"
            </div>
        </aside>
    }
}

/// Single navigation entry
#[component]
fn NavItem(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="sidebar-item flex items-center gap-3 px-3 py-2 rounded-lg text-sm font-medium
                   text-gray-300 hover:bg-cyan-400/10 hover:text-cyan-300 transition-colors"
        >
            <span class="text-lg">{icon}</span>
            <span>{label}</span>
        </a>
    }
}
