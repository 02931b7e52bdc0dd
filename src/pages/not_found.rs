use leptos::prelude::*;

use crate::routes::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h2>"Page not found"</h2>
            <p class="page-description">"Nothing is mounted at this address."</p>
            <a href=Page::Dashboard.path() class="btn btn-primary">"Back to Dashboard"</a>
        </div>
    }
}
