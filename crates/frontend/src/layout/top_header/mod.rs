//! TopHeader component - sticky navigation bar with the three tab controls.

use crate::layout::center::tabs::Tab;
use contracts::shared::PortfolioTab;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header class="top-header">
            <nav class="top-header__nav" aria-label="Sections">
                {PortfolioTab::ALL
                    .into_iter()
                    .map(|tab| view! { <Tab tab=tab /> })
                    .collect_view()}
            </nav>
        </header>
    }
}
