//! SkillForge UI - gamified skill mastery tracker
//!
//! Leptos frontend over the skill generation service: a dashboard of
//! AI-generated skills and a per-skill roadmap with gated stages and tasks.

pub mod api;
pub mod components;
pub mod pages;
pub mod progression;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::ToastHost;
use pages::{dashboard::DashboardPage, roadmap::RoadmapPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <main class="min-h-screen bg-slate-950 text-slate-100 starscape">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/skill-roadmap/:skill") view=RoadmapPage />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 border border-neon-cyan rounded-lg font-medium
                           bg-cyan-400/10 hover:bg-cyan-400/20 transition-colors"
                >
                    "Back to Dashboard"
                </a>
            </div>
        </div>
    }
}
