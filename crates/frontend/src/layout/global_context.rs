use contracts::domain::portfolio::{PortfolioRecord, PORTFOLIO};
use contracts::shared::{PortfolioTab, SiteConfig, TabController};
use leptos::prelude::*;

/// Page-wide state: the active tab plus read-only content and settings.
///
/// `Copy`, so components capture it freely in event handlers.
#[derive(Clone, Copy)]
pub struct PortfolioContext {
    pub tabs: RwSignal<TabController>,
    pub record: &'static PortfolioRecord,
    pub config: SiteConfig,
}

impl PortfolioContext {
    pub fn new() -> Self {
        Self::with_config(SiteConfig::default())
    }

    pub fn with_config(config: SiteConfig) -> Self {
        Self {
            tabs: RwSignal::new(TabController::new()),
            record: &PORTFOLIO,
            config,
        }
    }

    /// Switch the content region to `tab`. Tab controls and home shortcuts
    /// both go through here.
    pub fn select(&self, tab: PortfolioTab) {
        leptos::logging::log!("🔶 select: '{}'", tab);
        self.tabs.update(|controller| controller.select(tab));
    }

    /// Active tab; reactive when read inside a tracking scope.
    pub fn current(&self) -> PortfolioTab {
        self.tabs.with(|controller| controller.current())
    }

    pub fn is_active(&self, tab: PortfolioTab) -> bool {
        self.tabs.with(|controller| controller.is_active(tab))
    }
}

impl Default for PortfolioContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_portfolio() -> PortfolioContext {
    use_context::<PortfolioContext>().expect("PortfolioContext context not found")
}
