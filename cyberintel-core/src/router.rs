//! View routing: exactly one analysis panel is active at a time.
//!
//! The observed front-end kept "which view is visible" as a CSS class
//! scattered over the DOM, where an unknown target id silently left *no*
//! view active. Here the active view is a single enum field, so that
//! failure mode is unrepresentable: every transition goes through
//! [`ViewRouter::switch_to`] and the single-active invariant holds by
//! construction.

/// Panel identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewId {
    /// Overview with counters, gauge, and activity feed
    #[default]
    Dashboard,
    /// URL reputation scanner
    UrlScanner,
    /// Live password strength analyzer
    PasswordLab,
    /// Phishing-text detector
    PhishingDetector,
    /// Breach-database lookup
    BreachChecker,
    /// Chat assistant
    Assistant,
}

impl ViewId {
    /// Panel title shown in the content header.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::UrlScanner => "URL Scanner",
            ViewId::PasswordLab => "Password Lab",
            ViewId::PhishingDetector => "Phishing Detector",
            ViewId::BreachChecker => "Breach Checker",
            ViewId::Assistant => "Sentinel AI",
        }
    }

    /// All panels in navigation order.
    #[must_use]
    pub fn all() -> &'static [ViewId] {
        &[
            ViewId::Dashboard,
            ViewId::UrlScanner,
            ViewId::PasswordLab,
            ViewId::PhishingDetector,
            ViewId::BreachChecker,
            ViewId::Assistant,
        ]
    }

    /// Position in the navigation list.
    #[must_use]
    pub fn nav_index(self) -> usize {
        Self::all()
            .iter()
            .position(|v| *v == self)
            .unwrap_or_default()
    }
}

/// Single-active-view router.
///
/// Also owns the transient profile-menu overlay flag: any navigation closes
/// the overlay as a side effect, matching the shell's behavior.
#[derive(Debug, Default)]
pub struct ViewRouter {
    active: ViewId,
    profile_menu_open: bool,
}

impl ViewRouter {
    /// Router with the default view (dashboard) active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active view.
    #[must_use]
    pub fn active(&self) -> ViewId {
        self.active
    }

    /// Activate `view`, deactivating whatever was active and closing any
    /// open transient overlay.
    pub fn switch_to(&mut self, view: ViewId) {
        self.active = view;
        self.profile_menu_open = false;
    }

    /// Whether the profile-menu overlay is open.
    #[must_use]
    pub fn profile_menu_open(&self) -> bool {
        self.profile_menu_open
    }

    /// Toggle the profile-menu overlay.
    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }

    /// Close the profile-menu overlay.
    pub fn close_profile_menu(&mut self) {
        self.profile_menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_dashboard() {
        let router = ViewRouter::new();
        assert_eq!(router.active(), ViewId::Dashboard);
    }

    #[test]
    fn switch_activates_exactly_one_view() {
        let mut router = ViewRouter::new();
        router.switch_to(ViewId::BreachChecker);
        assert_eq!(router.active(), ViewId::BreachChecker);
        router.switch_to(ViewId::Assistant);
        assert_eq!(router.active(), ViewId::Assistant);
    }

    #[test]
    fn switch_closes_profile_menu() {
        let mut router = ViewRouter::new();
        router.toggle_profile_menu();
        assert!(router.profile_menu_open());
        router.switch_to(ViewId::UrlScanner);
        assert!(!router.profile_menu_open());
    }

    #[test]
    fn nav_index_round_trips_through_all() {
        for (i, view) in ViewId::all().iter().enumerate() {
            assert_eq!(view.nav_index(), i);
        }
    }
}
