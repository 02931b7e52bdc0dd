use leptos::prelude::*;

/// Sidebar glyphs, drawn on a 24x24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Dashboard,
    Calendar,
    Tasks,
    Table,
}

impl Icon {
    pub const fn path_data(self) -> &'static str {
        match self {
            Icon::Dashboard => "M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z",
            Icon::Calendar => "M19 4h-1V2h-2v2H8V2H6v2H5c-1.11 0-1.99.9-1.99 2L3 20a2 2 0 0 0 2 2h14c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 16H5V10h14v10zM7 12h5v5H7z",
            Icon::Tasks => "M19 3h-4.18C14.4 1.84 13.3 1 12 1s-2.4.84-2.82 2H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm-7 0c.55 0 1 .45 1 1s-.45 1-1 1-1-.45-1-1 .45-1 1-1zm2 14H7v-2h7v2zm3-4H7v-2h10v2zm0-4H7V7h10v2z",
            Icon::Table => "M10 10.02h5V21h-5zM17 21h3c1.1 0 2-.9 2-2v-9h-5v11zm3-18H5c-1.1 0-2 .9-2 2v3h19V5c0-1.1-.9-2-2-2zM3 19c0 1.1.9 2 2 2h3V10H3v9z",
        }
    }
}

#[component]
pub fn NavIcon(
    icon: Icon,
    /// Width and height in pixels
    #[prop(default = 30)]
    size: u32,
) -> impl IntoView {
    let size = size.to_string();

    view! {
        <svg
            class="nav-icon"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=icon.path_data() />
        </svg>
    }
}
