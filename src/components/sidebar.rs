use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icon::NavIcon;
use crate::config::AppConfig;
use crate::routes::{resolve, ROUTES};

#[component]
pub fn Sidebar() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let location = use_location();
    let current = Memo::new(move |_| resolve(&location.pathname.get()));
    let icon_size = config.icon_size;

    let items = ROUTES.map(|page| {
        let is_active = move || current.get().is(page);
        view! {
            <a
                href=page.path()
                class=move || if is_active() { "nav-item active" } else { "nav-item" }
                title=page.label()
                aria-current=move || is_active().then_some("page")
            >
                <NavIcon icon=page.icon() size=icon_size />
            </a>
        }
    });

    view! {
        <nav class="sidebar">
            <img src=config.logo.src alt=config.logo.alt class="sidebar-logo" />
            <div class="nav-menu">{items}</div>
        </nav>
    }
}
