//! Tab content registry - the only place mapping a tab to its view.

use crate::domain::portfolio::ui::{AboutView, HomeView, ProjectsView};
use contracts::shared::PortfolioTab;
use leptos::prelude::*;

/// Content block for `tab`.
///
/// The match is exhaustive: adding a tab without a view does not compile.
pub fn render_tab_content(tab: PortfolioTab) -> AnyView {
    match tab {
        PortfolioTab::Home => view! { <HomeView /> }.into_any(),
        PortfolioTab::About => view! { <AboutView /> }.into_any(),
        PortfolioTab::Projects => view! { <ProjectsView /> }.into_any(),
    }
}
