//! Static route table shared by the router and the sidebar.
//!
//! Every page sits one segment below the layout root, so matching a path is a
//! lookup of its single segment in [`ROUTES`].

use crate::components::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Calendar,
    Board,
    /// Rendered by the data grid page.
    Users,
}

/// Pages in declaration order. The sidebar renders its links in this order.
pub const ROUTES: [Page; 4] = [Page::Dashboard, Page::Calendar, Page::Board, Page::Users];

impl Page {
    pub const fn segment(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Calendar => "calendar",
            Page::Board => "board",
            Page::Users => "users",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::Calendar => "/calendar",
            Page::Board => "/board",
            Page::Users => "/users",
        }
    }

    /// Tooltip shown on the sidebar link.
    pub const fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Calendar => "Calendar",
            Page::Board => "Trello Board",
            Page::Users => "Users",
        }
    }

    pub const fn icon(self) -> Icon {
        match self {
            Page::Dashboard => Icon::Dashboard,
            Page::Calendar => Icon::Calendar,
            Page::Board => Icon::Tasks,
            Page::Users => Icon::Table,
        }
    }

    pub fn from_segment(segment: &str) -> Option<Page> {
        ROUTES.into_iter().find(|page| page.segment() == segment)
    }
}

/// Outcome of matching a location against the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The layout root with an empty content slot.
    Index,
    Page(Page),
    NotFound,
}

impl Resolution {
    pub fn page(self) -> Option<Page> {
        match self {
            Resolution::Page(page) => Some(page),
            _ => None,
        }
    }

    /// Whether this location mounts `page`, which marks its sidebar link active.
    pub fn is(self, page: Page) -> bool {
        self == Resolution::Page(page)
    }

    pub fn title(self, app_title: &str) -> String {
        match self {
            Resolution::Index => app_title.to_string(),
            Resolution::Page(page) => format!("{} | {}", page.label(), app_title),
            Resolution::NotFound => format!("Not Found | {}", app_title),
        }
    }
}

/// Match a location path the same way the router does.
///
/// Query strings and fragments are ignored, as is a single trailing slash.
/// Segments are case-sensitive.
pub fn resolve(location: &str) -> Resolution {
    let path = location.split(['?', '#']).next().unwrap_or("");
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);

    if path.is_empty() {
        return Resolution::Index;
    }
    if path.contains('/') {
        return Resolution::NotFound;
    }

    Page::from_segment(path).map_or(Resolution::NotFound, Resolution::Page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_slash_plus_segment() {
        for page in ROUTES {
            assert_eq!(page.path(), format!("/{}", page.segment()));
        }
    }

    #[test]
    fn test_segments_are_unique_and_not_prefixes() {
        for a in ROUTES {
            for b in ROUTES {
                if a == b {
                    continue;
                }
                assert_ne!(a.segment(), b.segment());
                assert!(
                    !a.segment().starts_with(b.segment()),
                    "{:?} segment is prefixed by {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_root_resolves_to_index() {
        assert_eq!(resolve("/"), Resolution::Index);
        assert_eq!(resolve(""), Resolution::Index);
        assert_eq!(resolve("/?tab=1"), Resolution::Index);
    }

    #[test]
    fn test_trailing_slash_query_and_fragment_ignored() {
        assert_eq!(resolve("/calendar/"), Resolution::Page(Page::Calendar));
        assert_eq!(resolve("/board?card=7"), Resolution::Page(Page::Board));
        assert_eq!(resolve("/users#top"), Resolution::Page(Page::Users));
    }

    #[test]
    fn test_unmatched_paths_are_not_found() {
        assert_eq!(resolve("/settings"), Resolution::NotFound);
        assert_eq!(resolve("/Dashboard"), Resolution::NotFound);
        assert_eq!(resolve("/dashboard/extra"), Resolution::NotFound);
        assert_eq!(resolve("/dash"), Resolution::NotFound);
    }

    #[test]
    fn test_only_the_resolved_page_is_active() {
        let current = resolve("/calendar");
        let active: Vec<Page> = ROUTES.into_iter().filter(|&p| current.is(p)).collect();
        assert_eq!(active, vec![Page::Calendar]);

        for path in ["/", "/settings", "/calendar/2024"] {
            let current = resolve(path);
            assert!(
                ROUTES.iter().all(|&p| !current.is(p)),
                "{} should leave every link inactive",
                path
            );
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(Resolution::Index.title("Camp"), "Camp");
        assert_eq!(
            Resolution::Page(Page::Board).title("Camp"),
            "Trello Board | Camp"
        );
        assert_eq!(Resolution::NotFound.title("Camp"), "Not Found | Camp");
    }

    #[test]
    fn test_each_page_has_distinct_icon() {
        let icons: Vec<Icon> = ROUTES.iter().map(|p| p.icon()).collect();
        for (i, icon) in icons.iter().enumerate() {
            assert!(!icons[i + 1..].contains(icon), "{:?} reused", icon);
        }
    }
}
