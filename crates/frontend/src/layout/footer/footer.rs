use crate::layout::global_context::use_portfolio;
use leptos::prelude::*;

/// Current calendar year from the browser clock.
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_portfolio();

    view! {
        <footer data-zone="footer" class="app-footer">
            <p>{ctx.record.copyright(current_year())}</p>
        </footer>
    }
}
