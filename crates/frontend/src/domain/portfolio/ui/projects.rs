use crate::layout::global_context::use_portfolio;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::TechBadges;
use crate::shared::components::{CardAnimated, ProjectIcon, SectionTitle};
use contracts::domain::portfolio::Project;
use leptos::prelude::*;

/// Projects block: counter plus one card per project, in configured order.
#[component]
pub fn ProjectsView() -> impl IntoView {
    let ctx = use_portfolio();
    let record = ctx.record;
    let asset_base = ctx.config.asset_base;

    view! {
        <div class="projects">
            <SectionTitle title="Featured Projects" aside=record.projects_listed_label() />
            <div class="stack">
                {record
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(idx, project)| view! {
                        <ProjectCard project=project asset_base=asset_base index=idx />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, asset_base: &'static str, index: usize) -> impl IntoView {
    view! {
        <CardAnimated class="project" delay_ms=stagger_delay(index)>
            <div class="project__layout" data-project-id=project.id>
                <ProjectIcon project=project asset_base=asset_base />
                <div class="project__content">
                    <h3 class="project__title">{project.title}</h3>
                    <p class="project__description">{project.description}</p>
                    <TechBadges labels=project.tech_stack />
                </div>
            </div>
        </CardAnimated>
    }
}
