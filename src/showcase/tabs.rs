use serde::Serialize;
use tracing::debug;

/// Which collection the showcase grid shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Projects,
    Skills,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Projects, Tab::Skills];

    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Projects => "works.tabs.projects",
            Tab::Skills => "works.tabs.skills",
        }
    }
}

#[derive(Debug, Default)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    /// Starts on [`Tab::Projects`]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Idempotent. Returns true if the active tab changed.
    pub fn switch_to(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        debug!(from = ?self.active, to = ?tab, "Switching tab");
        self.active = tab;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_projects() {
        assert_eq!(TabController::new().active(), Tab::Projects);
    }

    #[test]
    fn test_switch_to_active_tab_is_noop() {
        let mut tabs = TabController::new();
        assert!(!tabs.switch_to(Tab::Projects));
        assert_eq!(tabs.active(), Tab::Projects);

        assert!(tabs.switch_to(Tab::Skills));
        assert!(!tabs.switch_to(Tab::Skills));
        assert_eq!(tabs.active(), Tab::Skills);
    }
}
