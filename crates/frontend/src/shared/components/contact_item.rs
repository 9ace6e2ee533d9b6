use crate::shared::icons::{icon, icon_sized};
use contracts::shared::ContactLink;
use leptos::prelude::*;

/// Contact card: icon, label, value. External links open in a new tab.
#[component]
pub fn ContactItem(link: ContactLink) -> impl IntoView {
    let external = link.is_external();

    view! {
        <a
            class="contact-item"
            href=link.href
            target=external.then_some("_blank")
            rel="noopener noreferrer"
        >
            <div class="contact-item__icon">{icon(link.kind.icon())}</div>
            <div class="contact-item__body">
                <span class="contact-item__label">{link.label}</span>
                <span class="contact-item__text">{link.text}</span>
            </div>
            {external.then(|| view! {
                <span class="contact-item__external">{icon_sized("external-link", 16)}</span>
            })}
        </a>
    }
}
