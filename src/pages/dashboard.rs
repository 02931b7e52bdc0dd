use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard"</h2>
            <p class="page-description">"Overview of activity across the workspace."</p>
        </div>
    }
}
