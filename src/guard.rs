//! Page-load authentication guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start()` builds one `AuthGuard` and calls `enforce` before mounting the
//! app, so every full page load is checked. The router's page switch calls
//! `enforce_page` again on every in-app route change, so a page reached
//! without a reload is guarded too. The guard only reads the session; it
//! never writes storage.
//!
//! DESIGN
//! ======
//! The decision is a pure table over (authenticated, page kind):
//!
//! | authenticated | page      | action              |
//! |---------------|-----------|---------------------|
//! | no            | protected | redirect to entry   |
//! | no            | public    | allow               |
//! | yes           | public    | redirect to landing |
//! | yes           | protected | allow               |
//!
//! Anything that prevents reading a valid session (disabled storage, a
//! corrupt profile) counts as unauthenticated, so failures never open a
//! protected page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionStore;
use crate::util::browser;
use crate::util::storage::{KeyValueStore, LocalStorage, StorageError};

/// Page served for an empty final path segment (`/`, `/shop/`).
pub const INDEX_PAGE: &str = "index.html";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Reachable without a session (login, registration).
    Public,
    /// Requires a session.
    Protected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardAction {
    Allow,
    /// Send an anonymous visitor to the public entry page.
    RedirectToEntry,
    /// Send a signed-in user away from login/registration.
    RedirectToLanding,
}

/// Identity of the page being loaded: the final path segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    name: String,
}

impl Page {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Derive the page from a location path such as `/shop/login.html?next=1`.
    ///
    /// Query and fragment are ignored; an empty final segment is `index.html`.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segment = path.rsplit('/').next().unwrap_or_default();
        if segment.is_empty() {
            Self::named(INDEX_PAGE)
        } else {
            Self::named(segment)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Page names the guard routes between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    pub public_pages: Vec<String>,
    /// Where signed-in users land.
    pub landing_page: String,
    /// Where anonymous users are sent.
    pub entry_page: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            public_pages: vec!["login.html".to_owned(), "register.html".to_owned()],
            landing_page: INDEX_PAGE.to_owned(),
            entry_page: "register.html".to_owned(),
        }
    }
}

/// The guard table.
pub fn decide(authenticated: bool, kind: PageKind) -> GuardAction {
    match (authenticated, kind) {
        (false, PageKind::Protected) => GuardAction::RedirectToEntry,
        (true, PageKind::Public) => GuardAction::RedirectToLanding,
        (false, PageKind::Public) | (true, PageKind::Protected) => GuardAction::Allow,
    }
}

#[derive(Clone, Debug)]
pub struct AuthGuard {
    config: GuardConfig,
}

impl AuthGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, page: &Page) -> PageKind {
        if self.config.public_pages.iter().any(|p| p == page.name()) {
            PageKind::Public
        } else {
            PageKind::Protected
        }
    }

    /// Evaluate the guard once for `page` against the stored session.
    pub fn check<S: KeyValueStore>(&self, session: &SessionStore<S>, page: &Page) -> GuardAction {
        let authenticated = session.has_valid_session();
        let kind = self.classify(page);
        let action = decide(authenticated, kind);
        log::debug!(
            "guard: page={} kind={kind:?} authenticated={authenticated} action={action:?}",
            page.name()
        );
        action
    }

    /// Decision used when the session cannot be read at all.
    pub fn check_without_session(&self, page: &Page) -> GuardAction {
        decide(false, self.classify(page))
    }

    /// Decide for `page` given the result of opening storage.
    ///
    /// A store that could not be opened means signed out.
    pub fn evaluate<S: KeyValueStore>(&self, store: Result<S, StorageError>, page: &Page) -> GuardAction {
        match store {
            Ok(store) => self.check(&SessionStore::new(store), page),
            Err(e) => {
                log::warn!("guard: storage unavailable, treating as signed out: {e}");
                self.check_without_session(page)
            }
        }
    }

    /// Navigation target for `action`, or `None` to stay.
    pub fn redirect_target(&self, action: GuardAction) -> Option<&str> {
        match action {
            GuardAction::Allow => None,
            GuardAction::RedirectToEntry => Some(self.config.entry_page.as_str()),
            GuardAction::RedirectToLanding => Some(self.config.landing_page.as_str()),
        }
    }

    /// Guard the current browser location.
    ///
    /// Returns `true` when the page may continue loading; otherwise a
    /// redirect has been issued.
    pub fn enforce(&self) -> bool {
        self.enforce_page(&Page::from_path(&browser::current_path().unwrap_or_default()))
    }

    /// Guard `page` against the browser session, redirecting if needed.
    pub fn enforce_page(&self, page: &Page) -> bool {
        let action = self.evaluate(LocalStorage::open(), page);
        match self.redirect_target(action) {
            Some(target) => {
                log::info!("guard: redirecting {} -> {target}", page.name());
                browser::navigate(target);
                false
            }
            None => true,
        }
    }
}
