use contracts::domain::portfolio::Project;
use leptos::prelude::*;

/// Project artwork.
///
/// Falls back to an initials tile when the reference does not resolve or the
/// browser fails to load the image; the rest of the card renders either way.
#[component]
pub fn ProjectIcon(project: &'static Project, asset_base: &'static str) -> impl IntoView {
    let src = match project.icon.resolve(asset_base) {
        Ok(url) => Some(url),
        Err(err) => {
            log::warn!("project {} icon: {}", project.id, err);
            None
        }
    };
    let load_failed = RwSignal::new(false);

    let on_error = move |_| {
        log::warn!("project {} icon: failed to load {}", project.id, project.icon);
        load_failed.set(true);
    };

    view! {
        <div class="project-icon">
            {move || match src.clone().filter(|_| !load_failed.get()) {
                Some(url) => view! {
                    <img
                        class="project-icon__image"
                        src=url
                        alt=project.title
                        loading="lazy"
                        on:error=on_error
                    />
                }.into_any(),
                None => view! {
                    <div class="project-icon__placeholder" role="img" aria-label=project.title>
                        {project.initials()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
