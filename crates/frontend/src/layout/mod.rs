pub mod center;
pub mod footer;
pub mod global_context;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Page shell.
///
/// ```text
/// +------------------------------+
/// |   TopHeader (tab controls)   |
/// +------------------------------+
/// |   Center (active content)    |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-frame">
                <TopHeader />

                <center::Center>
                    {center()}
                </center::Center>

                <footer::Footer />
            </div>
        </div>
    }
}
