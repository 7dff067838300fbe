//! Screen-controller actions
//!
//! Each action takes the session state it needs as an argument and performs
//! its side effects through the injected capabilities.

use crate::core::capabilities::{Navigator, Notifier, ShareSheet, UrlOpener};
use crate::core::catalog::{ABOUT_TEXT, EMERGENCY_TEXT, INSTITUTION_NAME, SECURITY_PHONE_URL};
use crate::core::models::{
    Contact, MenuAction, MenuItem, NewsArticle, QuickAction, Route, Service, SessionRecord,
};
use crate::core::session::SessionStore;
use crate::core::{auth::CredentialVerifier, storage::KeyValueStore};
use crate::{error, info};

/// Result of opening a service tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceOutcome {
    /// The service needs a session and none exists
    LoginRequired {
        /// The user accepted the offer to log in
        login_offered: bool,
    },
    /// The service's notice was shown
    Opened,
}

/// Open a service, blocking guests from gated ones
///
/// Gating happens before anything else, so a blocked call has no effect
/// beyond the prompt (and navigation to the login screen if accepted).
pub fn open_service(
    service: &Service,
    session: Option<&SessionRecord>,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> ServiceOutcome {
    if service.requires_auth && session.is_none() {
        let accepted = notifier.confirm(
            "Login Required",
            "Please login to access this service",
            "Login",
        );
        if accepted {
            navigator.navigate(Route::Login);
        }
        return ServiceOutcome::LoginRequired {
            login_offered: accepted,
        };
    }
    notifier.alert(&service.notice_title, &service.notice_message);
    ServiceOutcome::Opened
}

/// Follow a home-screen shortcut
pub fn run_quick_action(action: &QuickAction, navigator: &dyn Navigator) {
    navigator.navigate(action.route);
}

/// Open a contact channel; failures are reported as a notice
pub fn open_contact(contact: &Contact, opener: &dyn UrlOpener, notifier: &dyn Notifier) -> bool {
    match opener.open_url(&contact.url) {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to open {} contact: {e}", contact.kind);
            notifier.alert("Error", &e.to_string());
            false
        }
    }
}

/// Share a news article; failures are logged only
pub fn share_article(article: &NewsArticle, sheet: &dyn ShareSheet) -> bool {
    let message = article.share_message(INSTITUTION_NAME);
    match sheet.share(&article.title, &message) {
        Ok(()) => true,
        Err(e) => {
            error!("Error sharing article {}: {e}", article.id);
            false
        }
    }
}

/// Perform a "More" menu entry
pub fn open_menu_item(item: &MenuItem, notifier: &dyn Notifier, opener: &dyn UrlOpener) {
    match &item.action {
        MenuAction::Notice(message) => notifier.alert(&item.title, message),
        MenuAction::About => {
            notifier.alert(&format!("About {INSTITUTION_NAME}"), ABOUT_TEXT);
        }
        MenuAction::OpenUrl(url) => {
            if let Err(e) = opener.open_url(url) {
                error!("Failed to open {}: {e}", item.title);
                notifier.alert("Error", &e.to_string());
            }
        }
        MenuAction::EmergencyContacts => {
            if notifier.confirm("Emergency Contacts", EMERGENCY_TEXT, "Call Security") {
                if let Err(e) = opener.open_url(SECURITY_PHONE_URL) {
                    error!("Failed to call security: {e}");
                    notifier.alert("Error", &e.to_string());
                }
            }
        }
    }
}

/// Ask for confirmation, then clear the session
///
/// Returns `true` when the session was cleared.
pub fn confirm_logout<S: KeyValueStore, V: CredentialVerifier>(
    sessions: &SessionStore<S, V>,
    notifier: &dyn Notifier,
) -> bool {
    if !notifier.confirm("Logout", "Are you sure you want to logout?", "Logout") {
        info!("Logout cancelled");
        return false;
    }
    match sessions.logout() {
        Ok(()) => true,
        Err(e) => {
            error!("Logout failed: {e}");
            notifier.alert("Error", &e.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::DemoVerifier;
    use crate::core::capabilities::CapabilityError;
    use crate::core::catalog;
    use crate::core::models::Credentials;
    use crate::core::storage::MemoryStore;
    use std::cell::RefCell;

    /// Records every capability call; `confirm` answers with `accept`
    #[derive(Default)]
    struct Recorder {
        accept: bool,
        fail_urls: bool,
        alerts: RefCell<Vec<(String, String)>>,
        confirms: RefCell<Vec<String>>,
        routes: RefCell<Vec<Route>>,
        urls: RefCell<Vec<String>>,
        shares: RefCell<Vec<(String, String)>>,
    }

    impl Notifier for Recorder {
        fn alert(&self, title: &str, message: &str) {
            self.alerts
                .borrow_mut()
                .push((title.to_string(), message.to_string()));
        }

        fn confirm(&self, title: &str, _message: &str, _accept_label: &str) -> bool {
            self.confirms.borrow_mut().push(title.to_string());
            self.accept
        }
    }

    impl Navigator for Recorder {
        fn navigate(&self, route: Route) {
            self.routes.borrow_mut().push(route);
        }

        fn back(&self) {}

        fn replace(&self, route: Route) {
            self.routes.borrow_mut().push(route);
        }
    }

    impl UrlOpener for Recorder {
        fn open_url(&self, url: &str) -> Result<(), CapabilityError> {
            if self.fail_urls {
                return Err(CapabilityError::OpenUrl(url.to_string()));
            }
            self.urls.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    impl ShareSheet for Recorder {
        fn share(&self, title: &str, message: &str) -> Result<(), CapabilityError> {
            self.shares
                .borrow_mut()
                .push((title.to_string(), message.to_string()));
            Ok(())
        }
    }

    fn gated_service() -> Service {
        catalog::services()
            .into_iter()
            .find(|s| s.requires_auth)
            .unwrap()
    }

    #[test]
    fn test_gated_service_blocks_guest() {
        let ui = Recorder::default();
        let outcome = open_service(&gated_service(), None, &ui, &ui);

        assert_eq!(
            outcome,
            ServiceOutcome::LoginRequired {
                login_offered: false
            }
        );
        assert!(ui.alerts.borrow().is_empty());
        assert!(ui.routes.borrow().is_empty());
    }

    #[test]
    fn test_gated_service_offers_login() {
        let ui = Recorder {
            accept: true,
            ..Recorder::default()
        };
        open_service(&gated_service(), None, &ui, &ui);
        assert_eq!(*ui.routes.borrow(), vec![Route::Login]);
    }

    #[test]
    fn test_gated_service_opens_with_session() {
        let sessions = SessionStore::new(MemoryStore::new(), DemoVerifier::new());
        let record = sessions.login(&Credentials::new("KP1", "pw")).unwrap();
        let ui = Recorder::default();

        let outcome = open_service(&gated_service(), Some(&record), &ui, &ui);
        assert_eq!(outcome, ServiceOutcome::Opened);
        assert_eq!(
            ui.alerts.borrow()[0],
            (
                "Results".to_string(),
                "Your results will be displayed here".to_string()
            )
        );
    }

    #[test]
    fn test_public_service_opens_for_guest() {
        let library = catalog::services()
            .into_iter()
            .find(|s| !s.requires_auth)
            .unwrap();
        let ui = Recorder::default();
        assert_eq!(open_service(&library, None, &ui, &ui), ServiceOutcome::Opened);
        assert!(ui.confirms.borrow().is_empty());
    }

    #[test]
    fn test_share_article_message() {
        let ui = Recorder::default();
        let article = &catalog::news()[0];
        assert!(share_article(article, &ui));

        let shares = ui.shares.borrow();
        assert_eq!(shares[0].0, article.title);
        assert!(shares[0].1.ends_with("Read more in the Kisii Polytechnic app."));
    }

    #[test]
    fn test_open_contact_failure_is_reported() {
        let ui = Recorder {
            fail_urls: true,
            ..Recorder::default()
        };
        let contact = &catalog::contacts()[0];
        assert!(!open_contact(contact, &ui, &ui));
        assert_eq!(ui.alerts.borrow()[0].0, "Error");
    }

    #[test]
    fn test_emergency_menu_calls_security_when_accepted() {
        let ui = Recorder {
            accept: true,
            ..Recorder::default()
        };
        let item = catalog::menu_items()
            .into_iter()
            .find(|m| m.action == MenuAction::EmergencyContacts)
            .unwrap();
        open_menu_item(&item, &ui, &ui);
        assert_eq!(*ui.urls.borrow(), vec![SECURITY_PHONE_URL.to_string()]);
    }

    #[test]
    fn test_quick_action_navigates() {
        let ui = Recorder::default();
        let contact = catalog::quick_actions()
            .into_iter()
            .find(|a| a.title == "Contact")
            .unwrap();
        run_quick_action(&contact, &ui);
        assert_eq!(*ui.routes.borrow(), vec![Route::More]);
    }

    #[test]
    fn test_confirm_logout_respects_cancel() {
        let sessions = SessionStore::new(MemoryStore::new(), DemoVerifier::new());
        sessions.login(&Credentials::new("KP1", "pw")).unwrap();

        assert!(!confirm_logout(&sessions, &Recorder::default()));
        assert!(sessions.is_logged_in());

        let accepting = Recorder {
            accept: true,
            ..Recorder::default()
        };
        assert!(confirm_logout(&sessions, &accepting));
        assert!(!sessions.is_logged_in());
    }
}
