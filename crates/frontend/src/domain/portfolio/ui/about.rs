use crate::layout::global_context::use_portfolio;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::Badge;
use crate::shared::components::{CardAnimated, SectionTitle};
use crate::shared::icons::icon_sized;
use contracts::domain::portfolio::{Education, Experience, Organization};
use leptos::prelude::*;

/// About block: summary, work experience, education, skills, organizations.
#[component]
pub fn AboutView() -> impl IntoView {
    let ctx = use_portfolio();
    let record = ctx.record;

    view! {
        <div class="about">
            <CardAnimated class="about__intro">
                <SectionTitle title="About Me" />
                <p class="about__summary">{record.personal.full_summary}</p>
            </CardAnimated>

            <div>
                <SectionTitle title="Work Experience" />
                <div class="stack">
                    {record
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(idx, exp)| view! { <ExperienceCard exp=exp index=idx /> })
                        .collect_view()}
                </div>
            </div>

            <div class="about__columns">
                <div>
                    <SectionTitle title="Education" />
                    <EducationCard education=record.education />
                </div>
                <div>
                    <SectionTitle title="Technical Skills" />
                    <CardAnimated class="card--fill">
                        <div class="badge-list">
                            {record
                                .skills
                                .iter()
                                .map(|skill| view! {
                                    <Badge variant="skill".to_string()>{*skill}</Badge>
                                })
                                .collect_view()}
                        </div>
                    </CardAnimated>
                </div>
            </div>

            <div class="spacer" aria-hidden="true"></div>

            <div>
                <SectionTitle title="Organizations" />
                <div class="stack">
                    {record
                        .organization
                        .iter()
                        .enumerate()
                        .map(|(idx, org)| view! { <OrganizationCard org=org index=idx /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExperienceCard(exp: &'static Experience, index: usize) -> impl IntoView {
    view! {
        <CardAnimated class="experience" delay_ms=stagger_delay(index)>
            <div class="experience__head">
                <div>
                    <h3 class="experience__role">{exp.role}</h3>
                    <div class="experience__company">
                        {icon_sized("briefcase", 16)}
                        {exp.company}
                    </div>
                </div>
                <Badge variant="period".to_string()>{exp.period}</Badge>
            </div>
            <ul class="bullet-list">
                {exp
                    .details
                    .iter()
                    .map(|detail| view! {
                        <li class="bullet-list__item">
                            <span class="bullet-list__dot"></span>
                            <span>{*detail}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </CardAnimated>
    }
}

#[component]
fn EducationCard(education: Education) -> impl IntoView {
    view! {
        <CardAnimated class="education card--fill">
            <div class="education__head">
                <div class="education__icon">{icon_sized("graduation-cap", 24)}</div>
                <div>
                    <h3 class="education__school">{education.school}</h3>
                    <p class="education__major">{education.major}</p>
                </div>
            </div>
            <dl class="education__facts">
                <div class="education__row">
                    <dt>"Degree"</dt>
                    <dd>{education.degree}</dd>
                </div>
                <div class="education__row">
                    <dt>"Period"</dt>
                    <dd>{education.period}</dd>
                </div>
                <div class="education__row">
                    <dt>"GPA"</dt>
                    <dd class="education__gpa">{education.gpa}</dd>
                </div>
            </dl>
        </CardAnimated>
    }
}

#[component]
fn OrganizationCard(org: &'static Organization, index: usize) -> impl IntoView {
    view! {
        <CardAnimated class="organization" delay_ms=stagger_delay(index)>
            <div class="organization__head">
                <div class="organization__icon">{icon_sized("users", 20)}</div>
                <div>
                    <h3 class="organization__name">{org.name}</h3>
                    <p class="organization__subtitle">{org.subtitle()}</p>
                </div>
            </div>
            <ul class="organization__list">
                {org
                    .description
                    .iter()
                    .map(|line| view! { <li>{*line}</li> })
                    .collect_view()}
            </ul>
        </CardAnimated>
    }
}
