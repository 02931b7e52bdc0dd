use leptos::prelude::*;

#[component]
pub fn CalendarPage() -> impl IntoView {
    view! {
        <div class="page calendar-page">
            <h2>"Calendar"</h2>
            <p class="page-description">"Upcoming events and schedules."</p>
        </div>
    }
}
