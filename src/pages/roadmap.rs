//! Skill roadmap page - stage list with inline task expansion
//!
//! Owns the `Progression` for one skill. Stages expand in place: clicking an
//! unlocked stage fetches its tasks on first expansion, submitting proof for
//! the last task completes the stage and unlocks the next one.

use crate::api::{generate_roadmap, generate_tasks};
use crate::components::{LoadingDots, Sidebar, StageCard, TaskCard};
use crate::progression::{Progression, SelectOutcome};
use crate::state::AppState;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

/// Simulated proof upload latency, in milliseconds.
const UPLOAD_DELAY_MS: u32 = 1_500;

/// Roadmap page for one skill
#[component]
pub fn RoadmapPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let params = use_params_map();

    let skill_name = Signal::derive(move || params.get().get("skill").unwrap_or_default());

    // Page-local: discarded on unmount, nothing persists across visits.
    let progression = RwSignal::new(Progression::new());
    let is_loading = RwSignal::new(true);

    // Fetch the roadmap for the routed skill
    let state_for_load = state.clone();
    Effect::new(move |_| {
        let skill = skill_name.get();
        if skill.is_empty() {
            return;
        }
        let state = state_for_load.clone();
        is_loading.set(true);
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            match generate_roadmap(&base, &skill).await {
                Ok(stage_list) => {
                    let stages = stage_list
                        .into_iter()
                        .map(|s| (s.stage, s.description))
                        .collect();
                    // try_update: the signal is gone if the user navigated
                    // away while the request was in flight.
                    let _ = progression.try_update(|p| p.initialize(stages));
                }
                Err(e) => {
                    tracing::error!("Failed to fetch roadmap for '{}': {}", skill, e);
                    state.toast_error("Error", "Failed to fetch roadmap");
                }
            }
            let _ = is_loading.try_set(false);
        });
    });

    // Stage click: toggle expansion, fetch tasks on first open, reject locked
    let state_for_select = state.clone();
    let on_select = move |index: usize| {
        let outcome = progression.write().select_stage(index);
        match outcome {
            SelectOutcome::Locked => {
                state_for_select.toast_error(
                    "Stage Locked",
                    "Complete the previous stage to unlock this one",
                );
            }
            SelectOutcome::ExpandedNeedsTasks => {
                let (generation, stage, description) = {
                    let p = progression.read_untracked();
                    let s = &p.stages()[index];
                    (p.generation(), s.name.clone(), s.description.clone())
                };
                let state = state_for_select.clone();
                let skill = skill_name.get_untracked();
                spawn_local(async move {
                    let base = state.api_base.get_untracked();
                    match generate_tasks(&base, &skill, &stage, &description).await {
                        Ok(tasks) => {
                            let tasks = tasks
                                .into_iter()
                                .map(|t| (t.task, t.description, t.proof))
                                .collect();
                            // Tagged with the generation the request was
                            // issued under; a stale response is dropped.
                            let _ = progression
                                .try_update(|p| p.load_tasks(generation, index, tasks));
                        }
                        Err(e) => {
                            tracing::error!("Failed to fetch tasks for stage '{}': {}", stage, e);
                            state.toast_error("Error", "An error occurred while fetching tasks");
                        }
                    }
                });
            }
            SelectOutcome::Expanded | SelectOutcome::Collapsed => {}
        }
    };

    // Proof submission simulator: fixed delay, then complete the task once
    let state_for_submit = state.clone();
    let on_submit = move |stage_index: usize, task_index: usize| {
        {
            let p = progression.read_untracked();
            let Some(task) = p.stage(stage_index).and_then(|s| s.tasks.get(task_index)) else {
                return;
            };
            if task.completed || task.submitting {
                return;
            }
        }
        progression.update(|p| p.set_submitting(stage_index, task_index, true));

        let state = state_for_submit.clone();
        spawn_local(async move {
            TimeoutFuture::new(UPLOAD_DELAY_MS).await;
            let Some(outcome) =
                progression.try_update(|p| p.complete_task(stage_index, task_index))
            else {
                return;
            };
            if outcome.task_completed {
                state.toast_success("Proof Accepted", "Task marked as complete");
            }
            if outcome.stage_completed {
                let message = if outcome.unlocked_stage.is_some() {
                    "The next stage is now unlocked"
                } else {
                    "You have mastered every stage of this skill"
                };
                state.toast_success("Stage Complete", message);
            }
        });
    };

    let back = move |_| navigate("/", Default::default());

    view! {
        <div class="min-h-screen flex">
            <Sidebar />
            <div class="flex-1 pl-[240px] p-8">
                <div class="flex items-center mb-2">
                    <button
                        on:click=back
                        class="mr-4 p-2 rounded-lg glass hover:bg-cyan-400/20 transition-all duration-300"
                    >
                        "←"
                    </button>
                    <h1 class="text-5xl font-bold neon-text-cyan">"Skill Roadmap"</h1>
                </div>
                <p class="text-2xl text-neon-magenta mb-8 ml-14">
                    {move || skill_name.get()}
                </p>

                <div class="space-y-6">
                    {
                        let on_select = on_select.clone();
                        let on_submit = on_submit.clone();
                        move || {
                            if is_loading.get() && progression.read().is_empty() {
                                return view! {
                                    <div class="flex items-center gap-3 text-gray-400">
                                        <LoadingDots />
                                        <span>"Charting your mastery roadmap..."</span>
                                    </div>
                                }
                                .into_any();
                            }

                            let p = progression.get();
                            let expanded = p.expanded();
                            let on_select = on_select.clone();
                            let on_submit = on_submit.clone();
                            p.stages()
                                .iter()
                                .enumerate()
                                .map(|(i, stage)| {
                                    let is_expanded = expanded == Some(i);
                                    let on_select = on_select.clone();
                                    let tasks_area = is_expanded.then(|| {
                                        if !stage.tasks_loaded {
                                            view! {
                                                <div class="mt-3 ml-8 flex items-center gap-2 text-gray-400">
                                                    <LoadingDots />
                                                    <span>"Generating tasks..."</span>
                                                </div>
                                            }
                                            .into_any()
                                        } else if stage.tasks.is_empty() {
                                            view! {
                                                <p class="mt-3 ml-8 text-gray-400">
                                                    "No tasks for this stage."
                                                </p>
                                            }
                                            .into_any()
                                        } else {
                                            let on_submit = on_submit.clone();
                                            view! {
                                                <div class="mt-3 ml-8 space-y-3 animate-fade-in-up">
                                                    {stage.tasks.iter().enumerate().map(|(j, task)| {
                                                        let on_submit = on_submit.clone();
                                                        view! {
                                                            <TaskCard
                                                                name=task.name.clone()
                                                                description=task.description.clone()
                                                                proof=task.proof.clone()
                                                                completed=task.completed
                                                                submitting=task.submitting
                                                                on_submit=move |_| on_submit(i, j)
                                                            />
                                                        }
                                                    }).collect::<Vec<_>>()}
                                                </div>
                                            }
                                            .into_any()
                                        }
                                    });

                                    view! {
                                        <div>
                                            <StageCard
                                                name=stage.name.clone()
                                                description=stage.description.clone()
                                                index=i
                                                locked=stage.locked
                                                completed=stage.completed
                                                expanded=is_expanded
                                                on_select=move |_| on_select(i)
                                            />
                                            {tasks_area}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }
                </div>
            </div>
        </div>
    }
}
