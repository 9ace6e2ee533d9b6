//! Tab selection for the portfolio page.
//!
//! Three mutually exclusive views, one of them active at any time. The
//! controller is a plain value; the frontend keeps it inside a reactive
//! signal so every `select` re-renders the content region.

use serde::Serialize;
use std::fmt;

/// The views the page can show.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioTab {
    #[default]
    Home,
    About,
    Projects,
}

impl PortfolioTab {
    /// Navigation order.
    pub const ALL: [PortfolioTab; 3] = [PortfolioTab::Home, PortfolioTab::About, PortfolioTab::Projects];

    /// Lowercase key, also the label of the navigation control.
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioTab::Home => "home",
            PortfolioTab::About => "about",
            PortfolioTab::Projects => "projects",
        }
    }

    /// Icon name shown next to the label.
    pub fn icon(&self) -> &'static str {
        match self {
            PortfolioTab::Home => "home",
            PortfolioTab::About => "user",
            PortfolioTab::Projects => "layers",
        }
    }

    /// Identifier of the content block rendered for this tab.
    pub fn block_id(&self) -> &'static str {
        match self {
            PortfolioTab::Home => "home-view",
            PortfolioTab::About => "about-view",
            PortfolioTab::Projects => "projects-view",
        }
    }
}

impl fmt::Display for PortfolioTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the active tab. Starts on [`PortfolioTab::Home`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TabController {
    current: PortfolioTab,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, tab: PortfolioTab) {
        if self.current != tab {
            log::debug!("tab: {} -> {}", self.current, tab);
        }
        self.current = tab;
    }

    pub fn current(&self) -> PortfolioTab {
        self.current
    }

    pub fn is_active(&self, tab: PortfolioTab) -> bool {
        self.current == tab
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_initial_is_home() {
        assert_eq!(TabController::new().current(), PortfolioTab::Home);
        assert_eq!(TabController::default().current(), PortfolioTab::Home);
    }

    #[test]
    fn test_select_then_current() {
        for tab in PortfolioTab::ALL {
            let mut controller = TabController::new();
            controller.select(tab);
            assert_eq!(controller.current(), tab);
        }
    }

    #[test]
    fn test_every_transition_reachable() {
        for from in PortfolioTab::ALL {
            for to in PortfolioTab::ALL {
                let mut controller = TabController::new();
                controller.select(from);
                controller.select(to);
                assert_eq!(controller.current(), to);
                assert!(controller.is_active(to));
                assert_eq!(
                    PortfolioTab::ALL.iter().filter(|t| controller.is_active(**t)).count(),
                    1
                );
            }
        }
    }

    #[test]
    fn test_scenario() {
        let mut controller = TabController::new();
        assert_eq!(controller.current(), PortfolioTab::Home);
        controller.select(PortfolioTab::Projects);
        assert_eq!(controller.current(), PortfolioTab::Projects);
        controller.select(PortfolioTab::About);
        assert_eq!(controller.current(), PortfolioTab::About);
        controller.select(PortfolioTab::Home);
        assert_eq!(controller.current(), PortfolioTab::Home);
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut controller = TabController::new();
        controller.select(PortfolioTab::About);
        let before = controller;
        controller.select(PortfolioTab::About);
        assert_eq!(controller, before);
    }

    #[test]
    fn test_labels_and_blocks() {
        let labels: Vec<&str> = PortfolioTab::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(labels, vec!["home", "about", "projects"]);

        let blocks: HashSet<&str> = PortfolioTab::ALL.iter().map(|t| t.block_id()).collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(PortfolioTab::Projects.block_id(), "projects-view");
        assert_eq!(PortfolioTab::About.to_string(), "about");
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&PortfolioTab::Projects).unwrap(),
            "\"projects\""
        );
    }
}
