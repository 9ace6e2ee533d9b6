use crate::layout::global_context::use_portfolio;
use crate::shared::components::ui::Button;
use crate::shared::components::ContactItem;
use crate::shared::icons::icon_sized;
use contracts::shared::{contact_links, PortfolioTab};
use leptos::prelude::*;

/// Home block: hero card with shortcuts, then the contact grid.
#[component]
pub fn HomeView() -> impl IntoView {
    let ctx = use_portfolio();
    let personal = ctx.record.personal;

    // Same transition as the tab controls.
    let to_projects = Callback::new(move |_| ctx.select(PortfolioTab::Projects));
    let to_about = Callback::new(move |_| ctx.select(PortfolioTab::About));

    view! {
        <div class="home">
            <div class="hero">
                <div class="hero__backdrop">{icon_sized("code", 200)}</div>
                <div class="hero__content">
                    <div class="hero__pill">{ctx.config.welcome}</div>
                    <h1 class="hero__name">{personal.name}</h1>
                    <p class="hero__title">{personal.title}</p>
                    <p class="hero__intro">{personal.short_intro}</p>
                    <div class="hero__actions">
                        <Button on_click=to_projects>"View My Projects"</Button>
                        <Button variant="secondary".to_string() on_click=to_about>
                            "More About Me"
                        </Button>
                    </div>
                </div>
            </div>

            <div class="contact-grid">
                {contact_links(&personal)
                    .into_iter()
                    .map(|link| view! { <ContactItem link=link /> })
                    .collect_view()}
            </div>
        </div>
    }
}
