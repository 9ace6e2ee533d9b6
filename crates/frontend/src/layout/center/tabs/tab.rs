use crate::layout::global_context::use_portfolio;
use crate::shared::icons::icon;
use contracts::shared::PortfolioTab;
use leptos::prelude::*;

/// CSS classes of a navigation control.
pub fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab--active"
    } else {
        "tab"
    }
}

/// Navigation control for one tab.
#[component]
pub fn Tab(tab: PortfolioTab) -> impl IntoView {
    let ctx = use_portfolio();

    let is_active = Memo::new(move |_| ctx.is_active(tab));
    let on_click = move |_| ctx.select(tab);

    view! {
        <button
            type="button"
            class=move || tab_class(is_active.get())
            aria-current=move || is_active.get().then_some("page")
            data-tab-key=tab.as_str()
            on:click=on_click
        >
            {icon(tab.icon())}
            <span>{tab.as_str()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_class() {
        assert_eq!(tab_class(true), "tab tab--active");
        assert_eq!(tab_class(false), "tab");
    }
}
