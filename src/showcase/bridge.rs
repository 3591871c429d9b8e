//! Jumping from a skill's related project to its card on the Projects tab

use std::time::Instant;
use tracing::{debug, info};

use super::{Highlight, Showcase, Tab, Task, TaskSlot};

impl Showcase {
    /// Close the skill panel, switch to Projects, and once the settle delay
    /// has passed pulse the card of `project_id` for the highlight duration.
    ///
    /// Unknown ids still close the panel and switch the tab; only the
    /// highlight is skipped.
    pub fn navigate_to_related_project(&mut self, project_id: &str, now: Instant) {
        if !self.mounted {
            return;
        }
        info!(project = %project_id, "Navigating to related project");

        self.close_skill(now);
        self.switch_to(Tab::Projects);
        self.tasks.schedule(
            TaskSlot::Settle,
            now,
            self.timings.settle_delay,
            Task::Highlight(project_id.to_string()),
        );
    }

    pub(super) fn apply_highlight(&mut self, project_id: String, now: Instant) {
        if self.active_tab() != Tab::Projects {
            debug!(project = %project_id, "Projects grid no longer visible, skipping highlight");
            return;
        }
        if self.content.project(&project_id).is_none() {
            debug!(project = %project_id, "No card for related project, skipping highlight");
            return;
        }

        debug!(project = %project_id, "Highlighting project card");
        self.highlight = Some(Highlight {
            project_id,
            scroll_pending: true,
        });
        self.tasks.schedule(
            TaskSlot::EndHighlight,
            now,
            self.timings.highlight,
            Task::EndHighlight,
        );
    }

    pub(super) fn end_highlight(&mut self) {
        if let Some(highlight) = self.highlight.take() {
            debug!(project = %highlight.project_id, "Highlight expired");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{ai_ml, ms, showcase};
    use super::*;
    use crate::showcase::Phase;

    fn on_skill_panel(sc: &mut Showcase) {
        sc.switch_to(Tab::Skills);
        let skill = ai_ml(sc);
        sc.select_skill(skill, "#C4A77D");
        assert!(sc.skill_selection().is_open());
    }

    #[test]
    fn test_navigate_closes_panel_switches_tab_then_highlights() {
        let t0 = Instant::now();
        let mut sc = showcase();
        on_skill_panel(&mut sc);

        sc.navigate_to_related_project("bwsc25", t0);
        assert!(!sc.skill_selection().is_open());
        assert_eq!(sc.active_tab(), Tab::Projects);
        assert_eq!(sc.highlighted_project(), None);

        // panel entity clears before the settle step
        sc.advance(t0 + ms(300));
        assert_eq!(sc.skill_selection().phase(), Phase::Closed);
        assert_eq!(sc.highlighted_project(), None);

        sc.advance(t0 + ms(500));
        assert_eq!(sc.highlighted_project(), Some("bwsc25"));
        assert_eq!(sc.take_scroll_target(), Some("bwsc25".to_string()));
        assert_eq!(sc.take_scroll_target(), None);

        sc.advance(t0 + ms(2499));
        assert_eq!(sc.highlighted_project(), Some("bwsc25"));
        sc.advance(t0 + ms(2500));
        assert_eq!(sc.highlighted_project(), None);
        assert_eq!(sc.next_deadline(), None);
    }

    #[test]
    fn test_navigate_to_unknown_project_skips_highlight() {
        let t0 = Instant::now();
        let mut sc = showcase();
        on_skill_panel(&mut sc);

        sc.navigate_to_related_project("nonexistent-id", t0);
        assert!(!sc.skill_selection().is_open());
        assert_eq!(sc.active_tab(), Tab::Projects);

        sc.advance(t0 + ms(5000));
        assert_eq!(sc.highlighted_project(), None);
    }

    #[test]
    fn test_navigate_with_panel_already_closed() {
        let t0 = Instant::now();
        let mut sc = showcase();
        sc.switch_to(Tab::Skills);

        sc.navigate_to_related_project("bwsc23", t0);
        assert_eq!(sc.active_tab(), Tab::Projects);
        assert_eq!(sc.skill_selection().phase(), Phase::Closed);

        sc.advance(t0 + ms(500));
        assert_eq!(sc.highlighted_project(), Some("bwsc23"));
    }

    #[test]
    fn test_navigate_while_on_projects_still_highlights() {
        let t0 = Instant::now();
        let mut sc = showcase();

        sc.navigate_to_related_project("bwsc25", t0);
        assert_eq!(sc.active_tab(), Tab::Projects);
        sc.advance(t0 + ms(500));
        assert_eq!(sc.highlighted_project(), Some("bwsc25"));
    }

    #[test]
    fn test_leaving_projects_tab_before_settle_skips_highlight() {
        let t0 = Instant::now();
        let mut sc = showcase();
        on_skill_panel(&mut sc);

        sc.navigate_to_related_project("bwsc25", t0);
        sc.switch_to(Tab::Skills);
        sc.advance(t0 + ms(500));
        assert_eq!(sc.highlighted_project(), None);
    }

    #[test]
    fn test_second_navigation_supersedes_first() {
        let t0 = Instant::now();
        let mut sc = showcase();

        sc.navigate_to_related_project("bwsc25", t0);
        sc.navigate_to_related_project("bwsc23", t0 + ms(200));

        sc.advance(t0 + ms(500));
        assert_eq!(sc.highlighted_project(), None);
        sc.advance(t0 + ms(700));
        assert_eq!(sc.highlighted_project(), Some("bwsc23"));
    }

    #[test]
    fn test_unmount_cancels_pending_highlight() {
        let t0 = Instant::now();
        let mut sc = showcase();
        sc.navigate_to_related_project("bwsc25", t0);
        sc.unmount();

        sc.advance(t0 + ms(500));
        assert_eq!(sc.highlighted_project(), None);
    }
}
