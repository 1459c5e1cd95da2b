use super::section::Section;

/// Admin sub-pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminPage {
    Dashboard,
    Posts,
    Projects,
    Messages,
}

impl AdminPage {
    pub const ALL: [AdminPage; 4] = [
        AdminPage::Dashboard,
        AdminPage::Posts,
        AdminPage::Projects,
        AdminPage::Messages,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminPage::Dashboard => "Dashboard",
            AdminPage::Posts => "Blog Posts",
            AdminPage::Projects => "Projects",
            AdminPage::Messages => "Messages",
        }
    }
}

/// Top-level routes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Blog,
    Post(String),
    Login,
    Admin(AdminPage),
}

impl Route {
    /// Only the home page hosts the anchored section column
    pub fn hosts_sections(&self) -> bool {
        matches!(self, Route::Home)
    }

    /// Public routes carry the section nav bar; the admin surface does not
    pub fn is_public(&self) -> bool {
        !matches!(self, Route::Login | Route::Admin(_))
    }
}

/// Route state plus the one-shot section payload a cross-page section link
/// attaches to its navigation. The payload is deliberately not persisted
/// anywhere; whoever consumes it first clears it.
pub struct Router {
    route: Route,
    pending_section: Option<Section>,
}

impl Router {
    pub fn new() -> Self {
        Router {
            route: Route::Home,
            pending_section: None,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Plain navigation. Drops any unconsumed section payload so a stale
    /// request cannot fire on a later visit.
    pub fn go(&mut self, route: Route) {
        self.route = route;
        self.pending_section = None;
    }

    /// Navigate to the hosting page carrying a section target
    pub fn go_with_section(&mut self, section: Section) {
        self.route = Route::Home;
        self.pending_section = Some(section);
    }

    /// Consume-and-clear; yields the payload at most once
    pub fn take_pending_section(&mut self) -> Option<Section> {
        self.pending_section.take()
    }

    pub fn has_pending_section(&self) -> bool {
        self.pending_section.is_some()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_payload_is_consumed_once() {
        let mut router = Router::new();
        router.go(Route::Blog);
        router.go_with_section(Section::Projects);

        assert_eq!(*router.route(), Route::Home);
        assert_eq!(router.take_pending_section(), Some(Section::Projects));
        assert_eq!(router.take_pending_section(), None);
    }

    #[test]
    fn test_plain_navigation_drops_payload() {
        let mut router = Router::new();
        router.go_with_section(Section::Contact);
        router.go(Route::Blog);

        assert!(!router.has_pending_section());
        router.go(Route::Home);
        assert_eq!(router.take_pending_section(), None);
    }

    #[test]
    fn test_route_surface_flags() {
        assert!(Route::Home.hosts_sections());
        assert!(!Route::Blog.hosts_sections());
        assert!(Route::Post("a".to_string()).is_public());
        assert!(!Route::Login.is_public());
        assert!(!Route::Admin(AdminPage::Posts).is_public());
    }
}
