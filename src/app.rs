use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::{path, MatchNestedRoutes, StaticSegment};

use crate::components::layout::Layout;
use crate::config::AppConfig;
use crate::pages::board::BoardPage;
use crate::pages::calendar::CalendarPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::data_grid::DataGridPage;
use crate::pages::not_found::NotFoundPage;
use crate::routes::Page;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <div id="dashboard">
            <Router>
                <Routes fallback=NotFoundPage>
                    <ShellRoutes />
                </Routes>
            </Router>
        </div>
    }
}

/// The layout root and the pages mounted in its content slot.
///
/// Segments come from the route table so the sidebar and router agree. The
/// wildcard must stay last or it would shadow every page.
#[component(transparent)]
pub fn ShellRoutes() -> impl MatchNestedRoutes + Clone {
    view! {
        <ParentRoute path=path!("") view=Layout>
            <Route path=StaticSegment(Page::Dashboard.segment()) view=DashboardPage />
            <Route path=StaticSegment(Page::Calendar.segment()) view=CalendarPage />
            <Route path=StaticSegment(Page::Board.segment()) view=BoardPage />
            <Route path=StaticSegment(Page::Users.segment()) view=DataGridPage />
            <Route path=path!("") view=|| () />
            <Route path=path!("*any") view=NotFoundPage />
        </ParentRoute>
    }
    .into_inner()
}
