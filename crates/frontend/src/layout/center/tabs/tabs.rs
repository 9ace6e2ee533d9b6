use crate::layout::global_context::use_portfolio;
use crate::layout::tabs::TabPage;
use leptos::prelude::*;

/// Content region. Exactly one page is mounted: the one for the active tab.
#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_portfolio();
    let active = Memo::new(move |_| ctx.current());

    view! {
        <div class="tabs">
            {move || view! { <TabPage tab=active.get() /> }}
        </div>
    }
}
