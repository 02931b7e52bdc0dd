use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::sidebar::Sidebar;
use crate::config::AppConfig;
use crate::routes::resolve;

/// Sidebar plus the content slot the router fills.
#[component]
pub fn Layout() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let location = use_location();

    // Keep the tab title in step with the routed page
    Effect::new(move |_| {
        let pathname = location.pathname.get();
        let resolution = resolve(&pathname);
        log::debug!("navigated to {} ({:?})", pathname, resolution);
        set_document_title(&resolution.title(&config.title));
    });

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="content">
                <Outlet />
            </main>
        </div>
    }
}

fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}
