//! Stage/task progression model for one skill's roadmap
//!
//! Pure in-memory state, no I/O. The owning view feeds it fetch results and
//! click events; every mutation goes through one of the four transitions
//! below so the lock/unlock rules live in exactly one place.

/// A single unit of work within a stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub name: String,
    pub description: String,
    /// What the user must submit to mark this task done.
    pub proof: String,
    pub completed: bool,
    /// A simulated proof upload is in flight for this task.
    pub submitting: bool,
}

/// An ordered phase within the roadmap. Gates access to the next stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub locked: bool,
    /// Populated lazily on first expansion; empty until then.
    pub tasks: Vec<Task>,
    /// Tasks have been loaded at least once (distinguishes "no tasks yet"
    /// from "stage genuinely has zero tasks").
    pub tasks_loaded: bool,
}

/// Outcome of [`Progression::select_stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Stage is now expanded and its tasks still need fetching.
    ExpandedNeedsTasks,
    /// Stage is now expanded and tasks are already present.
    Expanded,
    /// Stage was the expanded one; it is now collapsed.
    Collapsed,
    /// Stage is locked; nothing changed.
    Locked,
}

/// Outcome of [`Progression::complete_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionOutcome {
    /// The task flipped from incomplete to complete on this call.
    pub task_completed: bool,
    /// This call completed the stage (its last open task closed).
    pub stage_completed: bool,
    /// Index of the stage this call unlocked, if any.
    pub unlocked_stage: Option<usize>,
}

/// Progression state for exactly one skill, owned by the active roadmap view.
///
/// Created empty, populated once per successful roadmap fetch, discarded when
/// the view unmounts. The generation counter tags in-flight task fetches so a
/// response that outlives the stage list it was issued against is dropped
/// instead of applied (see [`Progression::load_tasks`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progression {
    stages: Vec<Stage>,
    expanded: Option<usize>,
    generation: u64,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Currently expanded stage index, if any.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Generation token to attach to task fetches issued against the current
    /// stage list.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Replace the stage list with a freshly fetched roadmap.
    ///
    /// Stage 0 starts unlocked, every later stage locked, everything
    /// incomplete with no tasks. An empty list is accepted and simply renders
    /// nothing. Any outstanding task fetch from a previous roadmap is
    /// invalidated by the generation bump.
    pub fn initialize(&mut self, stage_list: Vec<(String, String)>) {
        self.stages = stage_list
            .into_iter()
            .enumerate()
            .map(|(i, (name, description))| Stage {
                name,
                description,
                completed: false,
                locked: i != 0,
                tasks: Vec::new(),
                tasks_loaded: false,
            })
            .collect();
        self.expanded = None;
        self.generation += 1;
    }

    /// Install fetched tasks for a stage, all incomplete.
    ///
    /// `generation` must match the value captured when the fetch was issued;
    /// a stale response (roadmap re-initialized underneath it) is dropped.
    /// Out-of-range indices are likewise a no-op. If two fetches race for the
    /// same stage the later response overwrites the earlier one.
    pub fn load_tasks(
        &mut self,
        generation: u64,
        stage_index: usize,
        task_list: Vec<(String, String, String)>,
    ) {
        if generation != self.generation {
            return;
        }
        let Some(stage) = self.stages.get_mut(stage_index) else {
            return;
        };
        stage.tasks = task_list
            .into_iter()
            .map(|(name, description, proof)| Task {
                name,
                description,
                proof,
                completed: false,
                submitting: false,
            })
            .collect();
        stage.tasks_loaded = true;
    }

    /// Mark a task complete and propagate stage completion / unlocking.
    ///
    /// Idempotent: completing an already-completed task changes nothing.
    /// When the last open task of a stage closes, the stage completes and the
    /// next stage (if any) unlocks. This is the only path that unlocks a
    /// stage.
    pub fn complete_task(&mut self, stage_index: usize, task_index: usize) -> CompletionOutcome {
        let mut outcome = CompletionOutcome::default();
        let Some(stage) = self.stages.get_mut(stage_index) else {
            return outcome;
        };
        let Some(task) = stage.tasks.get_mut(task_index) else {
            return outcome;
        };
        if task.completed {
            return outcome;
        }
        task.completed = true;
        task.submitting = false;
        outcome.task_completed = true;

        if !stage.completed && stage.tasks.iter().all(|t| t.completed) {
            stage.completed = true;
            outcome.stage_completed = true;
            let next = stage_index + 1;
            if let Some(next_stage) = self.stages.get_mut(next) {
                if next_stage.locked {
                    next_stage.locked = false;
                    outcome.unlocked_stage = Some(next);
                }
            }
        }
        outcome
    }

    /// Toggle which single stage is expanded for task display.
    ///
    /// Locked stages reject the selection without changing state; the caller
    /// surfaces the rejection to the user.
    pub fn select_stage(&mut self, stage_index: usize) -> SelectOutcome {
        let Some(stage) = self.stages.get(stage_index) else {
            return SelectOutcome::Locked;
        };
        if stage.locked {
            return SelectOutcome::Locked;
        }
        if self.expanded == Some(stage_index) {
            self.expanded = None;
            return SelectOutcome::Collapsed;
        }
        self.expanded = Some(stage_index);
        if stage.tasks_loaded {
            SelectOutcome::Expanded
        } else {
            SelectOutcome::ExpandedNeedsTasks
        }
    }

    /// Flag a task's proof upload as in flight so the view can disable its
    /// submit button. Cleared by `complete_task`.
    pub fn set_submitting(&mut self, stage_index: usize, task_index: usize, submitting: bool) {
        if let Some(task) = self
            .stages
            .get_mut(stage_index)
            .and_then(|s| s.tasks.get_mut(task_index))
        {
            if !task.completed {
                task.submitting = submitting;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages(names: &[&str]) -> Vec<(String, String)> {
        names
            .iter()
            .map(|n| (n.to_string(), format!("{n} description")))
            .collect()
    }

    fn tasks(names: &[&str]) -> Vec<(String, String, String)> {
        names
            .iter()
            .map(|n| (n.to_string(), format!("{n} desc"), format!("{n} proof")))
            .collect()
    }

    #[test]
    fn initialize_unlocks_only_first_stage() {
        let mut p = Progression::new();
        p.initialize(stages(&["Foundations", "Practice", "Mastery"]));
        assert!(!p.stage(0).unwrap().locked);
        assert!(p.stage(1).unwrap().locked);
        assert!(p.stage(2).unwrap().locked);
        assert!(p.stages().iter().all(|s| !s.completed && s.tasks.is_empty()));
        assert_eq!(p.expanded(), None);
    }

    #[test]
    fn initialize_accepts_empty_list() {
        let mut p = Progression::new();
        p.initialize(vec![]);
        assert!(p.is_empty());
    }

    #[test]
    fn load_tasks_defaults_to_incomplete() {
        let mut p = Progression::new();
        p.initialize(stages(&["A"]));
        let gen = p.generation();
        p.load_tasks(gen, 0, tasks(&["t1", "t2"]));
        let stage = p.stage(0).unwrap();
        assert!(stage.tasks_loaded);
        assert_eq!(stage.tasks.len(), 2);
        assert!(stage.tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn load_tasks_ignores_stale_generation() {
        let mut p = Progression::new();
        p.initialize(stages(&["A", "B"]));
        let old_gen = p.generation();
        // Roadmap refetched while the task request was in flight.
        p.initialize(stages(&["A"]));
        p.load_tasks(old_gen, 0, tasks(&["t1"]));
        assert!(!p.stage(0).unwrap().tasks_loaded);
    }

    #[test]
    fn load_tasks_out_of_range_is_noop() {
        let mut p = Progression::new();
        p.initialize(stages(&["A"]));
        let gen = p.generation();
        p.load_tasks(gen, 5, tasks(&["t1"]));
        assert!(!p.stage(0).unwrap().tasks_loaded);
    }

    #[test]
    fn later_task_response_overwrites_earlier() {
        let mut p = Progression::new();
        p.initialize(stages(&["A"]));
        let gen = p.generation();
        p.load_tasks(gen, 0, tasks(&["t1", "t2"]));
        p.load_tasks(gen, 0, tasks(&["t3"]));
        let stage = p.stage(0).unwrap();
        assert_eq!(stage.tasks.len(), 1);
        assert_eq!(stage.tasks[0].name, "t3");
    }

    #[test]
    fn complete_task_is_idempotent() {
        let mut p = Progression::new();
        p.initialize(stages(&["A"]));
        let gen = p.generation();
        p.load_tasks(gen, 0, tasks(&["t1", "t2"]));
        let first = p.complete_task(0, 0);
        assert!(first.task_completed);
        let snapshot = p.clone();
        let second = p.complete_task(0, 0);
        assert!(!second.task_completed);
        assert_eq!(p, snapshot);
    }

    #[test]
    fn stage_completes_only_on_last_task() {
        let mut p = Progression::new();
        p.initialize(stages(&["A", "B"]));
        let gen = p.generation();
        p.load_tasks(gen, 0, tasks(&["t1", "t2", "t3"]));

        let out = p.complete_task(0, 0);
        assert!(!out.stage_completed);
        let out = p.complete_task(0, 2);
        assert!(!out.stage_completed);
        assert!(p.stage(1).unwrap().locked);

        let out = p.complete_task(0, 1);
        assert!(out.stage_completed);
        assert_eq!(out.unlocked_stage, Some(1));
        assert!(p.stage(0).unwrap().completed);
        assert!(!p.stage(1).unwrap().locked);
    }

    #[test]
    fn unlocking_is_strictly_sequential() {
        let mut p = Progression::new();
        p.initialize(stages(&["A", "B", "C"]));
        let gen = p.generation();
        p.load_tasks(gen, 0, tasks(&["t1"]));
        p.complete_task(0, 0);
        // B unlocked, C must stay locked until B completes.
        assert!(!p.stage(1).unwrap().locked);
        assert!(p.stage(2).unwrap().locked);

        p.load_tasks(gen, 1, tasks(&["t1", "t2"]));
        p.complete_task(1, 0);
        assert!(p.stage(2).unwrap().locked);
        let out = p.complete_task(1, 1);
        assert_eq!(out.unlocked_stage, Some(2));
        assert!(!p.stage(2).unwrap().locked);
    }

    #[test]
    fn two_stage_walkthrough() {
        let mut p = Progression::new();
        p.initialize(stages(&["A", "B"]));
        assert!(!p.stage(0).unwrap().locked);
        assert!(p.stage(1).unwrap().locked);

        let gen = p.generation();
        p.load_tasks(gen, 0, tasks(&["t1", "t2"]));
        assert_eq!(p.stage(0).unwrap().tasks.len(), 2);

        p.complete_task(0, 0);
        assert!(!p.stage(0).unwrap().completed);
        assert!(p.stage(1).unwrap().locked);

        p.complete_task(0, 1);
        assert!(p.stage(0).unwrap().completed);
        assert!(!p.stage(1).unwrap().locked);
    }

    #[test]
    fn select_locked_stage_is_rejected() {
        let mut p = Progression::new();
        p.initialize(stages(&["A", "B"]));
        assert_eq!(p.select_stage(1), SelectOutcome::Locked);
        assert_eq!(p.expanded(), None);
    }

    #[test]
    fn select_toggles_expansion() {
        let mut p = Progression::new();
        p.initialize(stages(&["A", "B"]));
        assert_eq!(p.select_stage(0), SelectOutcome::ExpandedNeedsTasks);
        assert_eq!(p.expanded(), Some(0));
        assert_eq!(p.select_stage(0), SelectOutcome::Collapsed);
        assert_eq!(p.expanded(), None);

        let gen = p.generation();
        p.load_tasks(gen, 0, tasks(&["t1"]));
        assert_eq!(p.select_stage(0), SelectOutcome::Expanded);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut p = Progression::new();
        p.initialize(stages(&["A"]));
        assert_eq!(p.select_stage(7), SelectOutcome::Locked);
        assert_eq!(p.expanded(), None);
    }

    #[test]
    fn submitting_flag_cleared_on_completion() {
        let mut p = Progression::new();
        p.initialize(stages(&["A"]));
        let gen = p.generation();
        p.load_tasks(gen, 0, tasks(&["t1"]));
        p.set_submitting(0, 0, true);
        assert!(p.stage(0).unwrap().tasks[0].submitting);
        p.complete_task(0, 0);
        assert!(!p.stage(0).unwrap().tasks[0].submitting);
        // Completed tasks never re-enter the submitting state.
        p.set_submitting(0, 0, true);
        assert!(!p.stage(0).unwrap().tasks[0].submitting);
    }
}
