use leptos::prelude::*;

#[component]
pub fn BoardPage() -> impl IntoView {
    view! {
        <div class="page board-page">
            <h2>"Board"</h2>
            <p class="page-description">"Cards grouped into columns by status."</p>
        </div>
    }
}
