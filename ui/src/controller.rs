//! The view controller: which page is shown and how the last backend probe
//! went.
//!
//! Page state is never written directly. `navigate` writes the fragment, and
//! the page is re-derived when the fragment-change notification comes back
//! around, so the fragment stays the single source of truth even when the
//! change originated outside the app (back button, hand-edited URL).

use std::fmt;
use std::rc::Rc;

use crate::nav::NavigationState;

/// The fragment token reserved for the main menu.
pub const MAIN_MENU_FRAGMENT: &str = "/main-menu";

/// The two pages of the shell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Home,
    MainMenu,
}

impl Page {
    /// Derives the page from a fragment. Anything other than the reserved
    /// main-menu token (including the empty string) is the home page.
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment == MAIN_MENU_FRAGMENT {
            Self::MainMenu
        } else {
            Self::Home
        }
    }

    /// The fragment that selects this page.
    pub fn fragment(&self) -> &'static str {
        match self {
            Self::Home => "",
            Self::MainMenu => MAIN_MENU_FRAGMENT,
        }
    }
}

/// Outcome of the backend connectivity probe, as shown to the user.
#[derive(Clone, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum ConnectionStatus {
    #[default]
    NotTested,
    Checking,
    Connected,
    Failed(String),
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotTested => write!(f, "Not tested"),
            Self::Checking => write!(f, "Checking..."),
            Self::Connected => write!(f, "Connected to backend!"),
            Self::Failed(message) => write!(f, "Failed: {message}"),
        }
    }
}

/// Owns the two pieces of client-side state and their transition rules.
pub struct ViewController {
    nav: Rc<dyn NavigationState>,
    page: Page,
    status: ConnectionStatus,
    probe_in_flight: bool,
}

impl ViewController {
    /// Reads the fragment once to derive the initial page. The caller is
    /// responsible for wiring fragment-change notifications to
    /// [`Self::on_fragment_changed`].
    pub fn new(nav: Rc<dyn NavigationState>) -> Self {
        let page = Page::from_fragment(&nav.fragment());
        Self {
            nav,
            page,
            status: ConnectionStatus::NotTested,
            probe_in_flight: false,
        }
    }

    pub fn current_page(&self) -> Page {
        self.page
    }

    pub fn connection_status(&self) -> &ConnectionStatus {
        &self.status
    }

    pub fn probe_in_flight(&self) -> bool {
        self.probe_in_flight
    }

    /// Re-derives the page from the current fragment. Idempotent: returns
    /// `false` when the fragment maps to the page already shown, so the
    /// render layer can skip work on repeated notifications.
    pub fn on_fragment_changed(&mut self) -> bool {
        let next = Page::from_fragment(&self.nav.fragment());
        if next == self.page {
            return false;
        }
        self.page = next;
        true
    }

    /// Writes the fragment for `target` and nothing else. The page itself
    /// only changes once the fragment-change notification is processed.
    pub fn navigate(&self, target: Page) {
        self.nav.set_fragment(target.fragment());
    }

    /// Marks a probe as started. A probe that is already in flight is not
    /// cancelled or awaited; each call is one independent attempt.
    pub fn begin_probe(&mut self) {
        self.status = ConnectionStatus::Checking;
        self.probe_in_flight = true;
    }

    /// Records the settled outcome of a probe and clears the in-flight
    /// indicator, whatever the outcome was.
    pub fn finish_probe(&mut self, result: Result<(), String>) {
        self.status = match result {
            Ok(()) => ConnectionStatus::Connected,
            Err(message) => ConnectionStatus::Failed(message),
        };
        self.probe_in_flight = false;
    }

    pub fn probe_button_label(&self) -> &'static str {
        if self.probe_in_flight {
            "Checking..."
        } else {
            "Test Backend Connection"
        }
    }

    pub fn status_line(&self) -> String {
        format!("Status: {}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::MemoryNavigation;

    fn controller() -> (MemoryNavigation, ViewController) {
        let nav = MemoryNavigation::new();
        let vc = ViewController::new(Rc::new(nav.clone()));
        (nav, vc)
    }

    #[test]
    fn starts_on_home_with_untested_status() {
        let (_nav, vc) = controller();
        assert_eq!(vc.current_page(), Page::Home);
        assert!(vc.connection_status().is_not_tested());
        assert_eq!(vc.probe_button_label(), "Test Backend Connection");
        assert!(!vc.probe_in_flight());
        assert_eq!(vc.status_line(), "Status: Not tested");
    }

    #[test]
    fn probe_in_flight_relabels_and_disables_the_button() {
        let (_nav, mut vc) = controller();
        vc.begin_probe();
        assert!(vc.connection_status().is_checking());
        assert!(vc.probe_in_flight());
        assert_eq!(vc.probe_button_label(), "Checking...");
    }

    #[test]
    fn successful_probe_reports_connected() {
        let (_nav, mut vc) = controller();
        vc.begin_probe();
        vc.finish_probe(Ok(()));
        assert!(vc.connection_status().is_connected());
        assert!(!vc.probe_in_flight());
        assert_eq!(vc.status_line(), "Status: Connected to backend!");
    }

    #[test]
    fn failed_probe_surfaces_the_message() {
        let (_nav, mut vc) = controller();
        vc.begin_probe();
        vc.finish_probe(Err("Network Error".to_owned()));
        assert!(vc.connection_status().is_failed());
        assert!(!vc.probe_in_flight());
        assert_eq!(vc.status_line(), "Status: Failed: Network Error");
    }

    #[test]
    fn probe_is_reenterable_after_settling() {
        let (_nav, mut vc) = controller();
        vc.begin_probe();
        vc.finish_probe(Err("Network Error".to_owned()));
        vc.begin_probe();
        assert!(vc.connection_status().is_checking());
        vc.finish_probe(Ok(()));
        assert!(vc.connection_status().is_connected());
    }

    #[test]
    fn navigate_writes_the_fragment_but_not_the_page() {
        let (nav, vc) = controller();
        vc.navigate(Page::MainMenu);
        assert_eq!(nav.fragment(), "/main-menu");
        // Unchanged until the notification is processed.
        assert_eq!(vc.current_page(), Page::Home);
    }

    #[test]
    fn fragment_notification_moves_to_the_main_menu() {
        let (nav, mut vc) = controller();
        vc.navigate(Page::MainMenu);
        assert!(vc.on_fragment_changed());
        assert_eq!(vc.current_page(), Page::MainMenu);
        assert_eq!(nav.fragment(), "/main-menu");
    }

    #[test]
    fn navigating_back_clears_the_fragment() {
        let nav = MemoryNavigation::with_fragment("/main-menu");
        let mut vc = ViewController::new(Rc::new(nav.clone()));
        assert_eq!(vc.current_page(), Page::MainMenu);

        vc.navigate(Page::Home);
        assert_eq!(nav.fragment(), "");
        assert!(vc.on_fragment_changed());
        assert_eq!(vc.current_page(), Page::Home);
    }

    #[test]
    fn repeated_notifications_are_idempotent() {
        let (_nav, mut vc) = controller();
        vc.navigate(Page::MainMenu);
        assert!(vc.on_fragment_changed());
        assert!(!vc.on_fragment_changed());
        assert_eq!(vc.current_page(), Page::MainMenu);
    }

    #[test]
    fn deep_link_lands_on_the_main_menu() {
        let nav = MemoryNavigation::with_fragment("/main-menu");
        let vc = ViewController::new(Rc::new(nav));
        assert_eq!(vc.current_page(), Page::MainMenu);
    }

    #[test]
    fn unknown_fragments_fall_back_to_home() {
        let nav = MemoryNavigation::with_fragment("/not-a-route");
        let vc = ViewController::new(Rc::new(nav));
        assert_eq!(vc.current_page(), Page::Home);
    }
}
