//! Dashboard page - user stats, generated skills and achievements

use crate::api::{fetch_user_details, generate_skills};
use crate::components::{LoadingDots, Sidebar};
use crate::state::AppState;
use crate::types::Skill;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Dashboard page
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let is_loading = RwSignal::new(true);

    // Fetch user details, then generate skills from the user's dream
    let state_for_load = state.clone();
    Effect::new(move |_| {
        let state = state_for_load.clone();
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let user_id = state.user_id.get_untracked();

            match fetch_user_details(&base, &user_id).await {
                Ok(Some(details)) => {
                    let dream = details.dream.clone();
                    state.user.set(Some(details));
                    match dream {
                        Some(dream) => match generate_skills(&base, &dream).await {
                            Ok(skills) => state.skills.set(skills),
                            Err(e) => {
                                tracing::error!("Failed to generate skills: {}", e);
                                state.toast_error("Error", "Failed to fetch skills");
                            }
                        },
                        None => {
                            state.toast_error(
                                "No Dream Set",
                                "Please set your dream in the dream selection page",
                            );
                        }
                    }
                }
                Ok(None) => {
                    state.toast_error(
                        "No Dream Set",
                        "Please set your dream in the dream selection page",
                    );
                }
                Err(e) => {
                    tracing::error!("Failed to fetch user details: {}", e);
                    state.toast_error("Error", "An error occurred while fetching skills");
                }
            }
            is_loading.set(false);
        });
    });

    // Sample data
    let stats = [
        ("⚡", "Learning Streaks", "12 days"),
        ("📈", "XP Gained", "4,780"),
        ("⏱", "Time Invested", "27 hours"),
    ];

    let achievements = [
        ("First Step", "Complete your first mission", true),
        ("Consistency", "Maintain a 7-day streak", true),
        ("Quick Learner", "Complete 10 missions", true),
        ("Expert", "Reach Level 10", false),
        ("Mastery", "Complete your dream roadmap", false),
    ];

    view! {
        <div class="min-h-screen flex">
            <Sidebar />
            <div class="flex-1 pl-[240px] p-8">
                <header class="mb-8">
                    <h1 class="text-5xl font-bold neon-text-cyan mb-4">"Dashboard"</h1>
                    <p class="text-2xl text-gray-400">"Track your learning progress"</p>
                    {
                        let state = state.clone();
                        move || state.user.get().and_then(|u| u.dream).map(|dream| view! {
                            <p class="text-xl text-neon-magenta mt-2">
                                "Your Dream: " <span class="font-bold">{dream}</span>
                            </p>
                        })
                    }
                </header>

                // Stats grid
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                    {stats.iter().map(|(icon, label, value)| view! {
                        <div class="glass p-6 rounded-lg">
                            <div class="flex items-center space-x-4">
                                <div class="p-3 rounded-lg bg-cyan-400/20 text-2xl">{*icon}</div>
                                <div>
                                    <h3 class="text-2xl font-bold">{*value}</h3>
                                    <p class="text-xl text-gray-300">{*label}</p>
                                </div>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                // Generated skills
                <div class="mb-8">
                    <h2 class="text-4xl font-bold neon-text-magenta mb-6">"Divine Skills"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {
                            let state = state.clone();
                            let navigate = navigate.clone();
                            move || {
                                let skills = state.skills.get();
                                if skills.is_empty() {
                                    if is_loading.get() {
                                        view! {
                                            <div class="col-span-full flex items-center gap-3 text-gray-400">
                                                <LoadingDots />
                                                <span>"Generating skills from your dream..."</span>
                                            </div>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <p class="col-span-full text-gray-400">
                                                "No skills yet. Set your dream to generate them."
                                            </p>
                                        }.into_any()
                                    }
                                } else {
                                    let navigate = navigate.clone();
                                    skills.into_iter().map(|skill| {
                                        let navigate = navigate.clone();
                                        view! { <SkillCard skill=skill navigate=navigate /> }
                                    }).collect::<Vec<_>>().into_any()
                                }
                            }
                        }
                    </div>
                </div>

                // Achievements
                <div>
                    <h2 class="text-4xl font-bold neon-text-purple mb-6">"Achievements"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {achievements.iter().map(|(name, description, unlocked)| view! {
                            <div class="glass p-6 rounded-lg">
                                <div class="flex items-center space-x-4">
                                    <div class=format!(
                                        "p-3 rounded-lg text-2xl {}",
                                        if *unlocked { "bg-neon-green/20" } else { "bg-white/10 grayscale" }
                                    )>
                                        "🏆"
                                    </div>
                                    <div>
                                        <h3 class="text-2xl font-bold">{*name}</h3>
                                        <p class="text-xl text-gray-300">{*description}</p>
                                    </div>
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Skill card with an activation button routing to the roadmap
#[component]
fn SkillCard(
    skill: Skill,
    navigate: impl Fn(&str, leptos_router::NavigateOptions) + Clone + 'static,
) -> impl IntoView {
    let name = skill.name.clone();
    let activate = move |_| {
        let encoded: String = js_sys::encode_uri_component(&name).into();
        navigate(&format!("/skill-roadmap/{}", encoded), Default::default());
    };

    view! {
        <div class="glass p-6 rounded-lg hover:border-neon-cyan transition-all duration-300 group">
            <div class="flex items-center justify-between mb-2">
                <h3 class="text-2xl font-bold truncate">{skill.name.clone()}</h3>
                <div class="flex items-center space-x-2 shrink-0">
                    <span class="text-neon-cyan">"⚡"</span>
                    <span class="text-neon-cyan text-sm">{skill.power.clone()}</span>
                </div>
            </div>
            <p class="text-gray-300 text-sm mb-4">{skill.description.clone()}</p>
            <button
                on:click=activate
                class="w-full py-3 bg-gradient-to-r from-neon-cyan/20 to-neon-magenta/20
                       hover:from-neon-cyan/30 hover:to-neon-magenta/30 border border-neon-cyan
                       rounded-lg transition-all duration-300 group-hover:scale-105"
            >
                <span class="flex items-center justify-center space-x-2">
                    <span>"⚡"</span>
                    <span class="font-bold">"Activate Skill"</span>
                </span>
            </button>
        </div>
    }
}
