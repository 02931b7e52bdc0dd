use leptos::prelude::*;

/// Mounted at `/users`.
#[component]
pub fn DataGridPage() -> impl IntoView {
    view! {
        <div class="page data-grid-page">
            <h2>"Users"</h2>
            <p class="page-description">"Tabular listing of user records."</p>
        </div>
    }
}
