use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::PortfolioContext;
use crate::layout::Shell;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};

#[component]
pub fn App() -> impl IntoView {
    // Tab state, content and settings for the whole page.
    provide_context(PortfolioContext::new());

    let theme = RwSignal::new(Theme::dark());

    view! {
        <ConfigProvider theme=theme>
            <Shell center=|| view! { <Tabs /> }.into_any() />
        </ConfigProvider>
    }
}
