use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "tech" (rounded pill), "skill" (chip), "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "tech" => "badge--tech",
        "skill" => "badge--skill",
        "period" => "badge--period",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// One badge per technology label, in the given order.
#[component]
pub fn TechBadges(labels: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="badge-list">
            {labels
                .iter()
                .map(|label| view! { <Badge variant="tech".to_string()>{*label}</Badge> })
                .collect_view()}
        </div>
    }
}
