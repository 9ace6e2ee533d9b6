//! TabPage component - wrapper around the content of one tab.

use super::registry::render_tab_content;
use contracts::shared::PortfolioTab;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the block for `tab` through the registry and tags it with the
/// block id so the active block can be identified in the DOM.
#[component]
pub fn TabPage(tab: PortfolioTab) -> impl IntoView {
    log!("🔨 TabPage CREATED for: '{}'", tab);

    on_cleanup(move || {
        log!("💥 TabPage DESTROYED for: '{}'", tab);
    });

    view! {
        <section
            class="tabs__item fade-in"
            data-tab-key=tab.as_str()
            data-block=tab.block_id()
        >
            {render_tab_content(tab)}
        </section>
    }
}
