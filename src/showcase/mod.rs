//! Showcase interaction controller
//!
//! Owns the tab, the project and skill selections, the transient card
//! highlight and every pending delayed task for one showcase instance.
//! UI components never mutate this state directly: they return a
//! [`ShowcaseAction`] which the owner feeds to [`Showcase::dispatch`].

mod bridge;
pub mod selection;
pub mod tabs;
pub mod timer;

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::constants::timing;
use crate::content::{ContentRepository, Project, Skill};

#[cfg(test)]
pub use selection::Phase;
pub use selection::{SelectedSkill, Selection};
pub use tabs::{Tab, TabController};
use timer::DelayedTasks;

/// Transition timings, normally taken from the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Close → entity cleared
    pub clear_delay: Duration,
    /// Tab switch → card highlight; never shorter than `clear_delay`
    pub settle_delay: Duration,
    pub highlight: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            clear_delay: Duration::from_millis(timing::CLEAR_DELAY_MS),
            settle_delay: Duration::from_millis(timing::SETTLE_DELAY_MS),
            highlight: Duration::from_millis(timing::HIGHLIGHT_MS),
        }
    }
}

/// Requests emitted by the grid, the tab bar and the detail presenters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseAction {
    SwitchTab(Tab),
    OpenProject(String),
    CloseProject,
    OpenSkill(SelectedSkill),
    CloseSkill,
    NavigateToProject(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskSlot {
    ClearProject,
    ClearSkill,
    Settle,
    EndHighlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Task {
    ClearProject,
    ClearSkill,
    Highlight(String),
    EndHighlight,
}

#[derive(Debug, Clone)]
struct Highlight {
    project_id: String,
    scroll_pending: bool,
}

pub struct Showcase {
    content: Arc<ContentRepository>,
    timings: Timings,
    tabs: TabController,
    project: Selection<Project>,
    skill: Selection<SelectedSkill>,
    highlight: Option<Highlight>,
    tasks: DelayedTasks<TaskSlot, Task>,
    mounted: bool,
}

impl Showcase {
    pub fn new(content: Arc<ContentRepository>, timings: Timings) -> Self {
        debug!(?timings, "Mounting showcase");
        Self {
            content,
            timings,
            tabs: TabController::new(),
            project: Selection::new(),
            skill: Selection::new(),
            highlight: None,
            tasks: DelayedTasks::new(),
            mounted: true,
        }
    }

    pub fn content(&self) -> &ContentRepository {
        &self.content
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn project_selection(&self) -> &Selection<Project> {
        &self.project
    }

    pub fn skill_selection(&self) -> &Selection<SelectedSkill> {
        &self.skill
    }

    /// Project card currently carrying the highlight indicator
    pub fn highlighted_project(&self) -> Option<&str> {
        self.highlight.as_ref().map(|h| h.project_id.as_str())
    }

    /// Card the view should scroll into sight, reported once per highlight
    pub fn take_scroll_target(&mut self) -> Option<String> {
        let highlight = self.highlight.as_mut()?;
        std::mem::take(&mut highlight.scroll_pending).then(|| highlight.project_id.clone())
    }

    /// Whether `skill` is the open skill (drives the active orb marker)
    pub fn is_skill_active(&self, skill: &Skill) -> bool {
        self.skill
            .current()
            .is_some_and(|selected| selected.skill.same_as(skill))
    }

    pub fn dispatch(&mut self, action: ShowcaseAction, now: Instant) {
        if !self.mounted {
            debug!(?action, "Ignoring action on unmounted showcase");
            return;
        }
        match action {
            ShowcaseAction::SwitchTab(tab) => {
                self.switch_to(tab);
            }
            ShowcaseAction::OpenProject(id) => {
                self.select_project_by_id(&id);
            }
            ShowcaseAction::CloseProject => self.close_project(now),
            ShowcaseAction::OpenSkill(selected) => {
                self.select_skill(selected.skill, selected.accent)
            }
            ShowcaseAction::CloseSkill => self.close_skill(now),
            ShowcaseAction::NavigateToProject(id) => self.navigate_to_related_project(&id, now),
        }
    }

    /// Idempotent; returns true if the tab changed
    pub fn switch_to(&mut self, tab: Tab) -> bool {
        self.tabs.switch_to(tab)
    }

    /// Open the case study of `project`. Projects without a case study are
    /// ignored. Returns whether the selection changed.
    pub fn select_project(&mut self, project: &Project) -> bool {
        if !project.has_case_study() {
            debug!(project = %project.id, "Project has no case study, ignoring selection");
            return false;
        }
        if self.tasks.cancel(TaskSlot::ClearProject) {
            debug!(project = %project.id, "Cancelled pending clear of previous project");
        }
        self.project.open(project.clone());
        info!(project = %project.id, "Opened project case study");
        true
    }

    pub fn select_project_by_id(&mut self, id: &str) -> bool {
        match self.content.project(id).cloned() {
            Some(project) => self.select_project(&project),
            None => {
                debug!(project = %id, "Unknown project id, ignoring selection");
                false
            }
        }
    }

    /// Lower the open flag and clear the project after the clear delay
    pub fn close_project(&mut self, now: Instant) {
        if !self.project.close() {
            return;
        }
        self.tasks
            .schedule(TaskSlot::ClearProject, now, self.timings.clear_delay, Task::ClearProject);
        debug!("Closing project case study");
    }

    /// Open the detail panel for `skill`, tinted with the accent of the
    /// category it was picked from
    pub fn select_skill(&mut self, skill: Skill, accent: impl Into<String>) {
        if self.tasks.cancel(TaskSlot::ClearSkill) {
            debug!(skill = %skill.name(), "Cancelled pending clear of previous skill");
        }
        info!(skill = %skill.name(), "Opened skill detail");
        self.skill.open(SelectedSkill {
            skill,
            accent: accent.into(),
        });
    }

    pub fn close_skill(&mut self, now: Instant) {
        if !self.skill.close() {
            return;
        }
        self.tasks
            .schedule(TaskSlot::ClearSkill, now, self.timings.clear_delay, Task::ClearSkill);
        debug!("Closing skill detail");
    }

    /// Run every task due at `now`
    pub fn advance(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        for task in self.tasks.take_due(now) {
            match task {
                Task::ClearProject => {
                    if self.project.clear() {
                        debug!("Cleared closed project selection");
                    }
                }
                Task::ClearSkill => {
                    if self.skill.clear() {
                        debug!("Cleared closed skill selection");
                    }
                }
                Task::Highlight(project_id) => self.apply_highlight(project_id, now),
                Task::EndHighlight => self.end_highlight(),
            }
        }
    }

    /// When the next pending task falls due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.next_deadline()
    }

    /// Cancel every pending task; later actions and ticks are ignored
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        let cancelled = self.tasks.cancel_all();
        debug!(cancelled, "Unmounted showcase");
    }
}

impl Drop for Showcase {
    fn drop(&mut self) {
        self.unmount();
    }
}
