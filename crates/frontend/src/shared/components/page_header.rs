use leptos::prelude::*;

/// Section heading with the accent bar, used by every block on the page.
#[component]
pub fn SectionTitle(
    /// Heading text
    #[prop(into)]
    title: String,
    /// Optional note aligned to the right (e.g. a counter)
    #[prop(optional, into)]
    aside: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="section-title">
            <h2 class="section-title__text">
                <span class="section-title__bar"></span>
                {title}
            </h2>
            {move || aside.get().map(|note| view! {
                <span class="section-title__aside">{note}</span>
            })}
        </div>
    }
}
