//! Session and view-state controller.
//!
//! The [`Controller`] owns the signed-in [`Session`] (if any) and the
//! [`ViewState`], and applies user actions to them one at a time. Every
//! transition runs to completion: it updates state, persists the session when
//! it changed, re-renders the affected dashboard sections and reports the
//! outcome to the notification sink.
//!
//! The dashboard is showing exactly when a session exists.

use std::collections::BTreeMap;

use secrecy::SecretString;

use rentzy_core::{Category, Role};

use crate::error::{AppError, Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::models::catalog::CatalogItem;
use crate::models::session::Session;
use crate::models::view::{ActiveView, LoginSurface, LoginTab, Section, ViewState};
use crate::notify::{Notification, NotificationSink};
use crate::providers::Providers;
use crate::render::{
    DashboardScreen, LoginPanel, MarketingScreen, Screen, SectionContent, menu, render_section,
};
use crate::search::{SearchQuery, filter_catalog};
use crate::services::auth::{self, SignupForm};
use crate::store::SessionStore;

/// Drives the marketing page, login surface and dashboard.
pub struct Controller {
    store: Box<dyn SessionStore>,
    providers: Providers,
    sink: Box<dyn NotificationSink>,
    session: Option<Session>,
    view: ViewState,
    query: SearchQuery,
    rendered: BTreeMap<Section, SectionContent>,
}

impl Controller {
    /// Create a controller, restoring any persisted session.
    ///
    /// A stored session opens straight onto the dashboard overview. A record
    /// that cannot be read is logged and ignored.
    pub fn new(
        store: impl SessionStore + 'static,
        providers: Providers,
        sink: impl NotificationSink + 'static,
    ) -> Self {
        let session = match store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load saved session, starting signed out");
                None
            }
        };

        let view = if session.is_some() {
            ViewState::dashboard()
        } else {
            ViewState::marketing()
        };

        let mut controller = Self {
            store: Box::new(store),
            providers,
            sink: Box::new(sink),
            session,
            view,
            query: SearchQuery::default(),
            rendered: BTreeMap::new(),
        };

        if let Some(session) = &controller.session {
            tracing::info!(session_id = %session.id(), role = %session.role(), "Restored session");
            set_sentry_user(&session.id(), Some(&session.profile().email));
            controller.render_all();
        }

        controller
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The signed-in session.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// The last browse query.
    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Last rendered content of a dashboard section.
    #[must_use]
    pub fn section_content(&self, section: Section) -> Option<&SectionContent> {
        self.rendered.get(&section)
    }

    // =========================================================================
    // Login Surface
    // =========================================================================

    /// Open the login surface on the login tab for `role`.
    pub fn open_login(&mut self, role: Role) {
        self.view.pending_role = Some(role);
        self.view.login = Some(LoginSurface {
            tab: LoginTab::Login,
        });
        tracing::info!(%role, "Opened login");
    }

    /// Show the login tab of an open login surface.
    pub fn show_login_tab(&mut self) {
        self.set_login_tab(LoginTab::Login);
    }

    /// Show the signup tab of an open login surface.
    pub fn show_signup_tab(&mut self) {
        self.set_login_tab(LoginTab::Signup);
    }

    fn set_login_tab(&mut self, tab: LoginTab) {
        match self.view.login.as_mut() {
            Some(surface) => surface.tab = tab,
            None => tracing::debug!(?tab, "Login surface closed, ignoring tab change"),
        }
    }

    /// Close the login surface. The pending role is kept.
    pub fn close_login(&mut self) {
        self.view.login = None;
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Sign in with email and password as the pending role.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` if either value is empty. State is unchanged.
    pub fn submit_login(&mut self, email: &str, password: &SecretString) -> Result<()> {
        let session = auth::login_with_password(email, password, self.pending_role())
            .map_err(|e| self.reject(e.into()))?;
        self.establish(session, "Login successful!");
        Ok(())
    }

    /// Create an account as the pending role.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` for the first failing field rule. State is
    /// unchanged.
    pub fn submit_signup(&mut self, form: SignupForm) -> Result<()> {
        let session =
            auth::register(form, self.pending_role()).map_err(|e| self.reject(e.into()))?;
        self.establish(session, "Account created successfully!");
        Ok(())
    }

    /// Mocked Google sign-in as the pending role. Always succeeds.
    pub fn submit_federated_login(&mut self) {
        let session = auth::google_login(self.pending_role());
        self.establish(session, "Google login successful!");
    }

    /// End the session and return to the marketing page. Always succeeds.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to remove saved session");
        }

        if let Some(session) = self.session.take() {
            tracing::info!(session_id = %session.id(), "Logged out");
        }
        self.view = ViewState::marketing();
        self.query = SearchQuery::default();
        self.rendered.clear();

        clear_sentry_user();
        add_breadcrumb("auth", "Logged out", None);
        self.sink
            .notify(Notification::success("Logged out successfully"));
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    /// Show a dashboard section, re-rendering only that section.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NoActiveSession` on the marketing page.
    pub fn switch_section(&mut self, section: Section) -> Result<()> {
        if self.session.is_none() {
            return Err(self.reject(AppError::NoActiveSession));
        }

        self.view.active = ActiveView::Dashboard(section);
        self.render(section);

        tracing::info!(%section, "Switched section");
        add_breadcrumb("navigation", "Switched section", Some(&[("section", section.as_str())]));
        Ok(())
    }

    /// Switch the session to the owner role and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NoActiveSession` when signed out. State is unchanged.
    pub fn switch_role(&mut self) -> Result<()> {
        if self.session.is_none() {
            return Err(self.reject(AppError::NoActiveSession));
        }
        if let Some(session) = self.session.as_mut() {
            session.set_role(Role::Owner);
            tracing::info!(session_id = %session.id(), "Switched to owner");
        }
        self.persist();

        self.render(Section::Listings);
        self.render(Section::Overview);

        add_breadcrumb("auth", "Switched role", Some(&[("role", "owner")]));
        self.sink
            .notify(Notification::success("Switched to Owner account"));
        Ok(())
    }

    /// Filter the catalog and remember the query for the browse section.
    ///
    /// Returns the visible items whether or not anyone is signed in.
    pub fn search(&mut self, term: &str, category: &str) -> Vec<CatalogItem> {
        self.query = SearchQuery::new(term, category);
        tracing::debug!(term, category, "Search");
        if self.session.is_some() {
            self.render(Section::Browse);
        }
        filter_catalog(&self.providers.catalog.items(), &self.query)
    }

    /// React to a category card.
    ///
    /// Signed in: browse that category, keeping the current search term.
    /// Signed out: open the renter login.
    pub fn select_category(&mut self, category: Category) {
        if self.session.is_none() {
            self.open_login(Role::Renter);
            return;
        }

        self.query.category = category.as_str().to_string();
        self.view.active = ActiveView::Dashboard(Section::Browse);
        self.render(Section::Browse);
        tracing::info!(%category, "Browsing category");
    }

    /// Placeholder for creating a listing.
    pub fn add_listing(&self) {
        self.sink.notify(Notification::info(
            "Add listing functionality will be implemented",
        ));
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Describe the current screen.
    #[must_use]
    pub fn snapshot(&self) -> Screen {
        match (self.view.active, &self.session) {
            (ActiveView::Dashboard(section), Some(session)) => {
                let content = self.rendered.get(&section).cloned().unwrap_or_else(|| {
                    render_section(section, session, &self.providers, &self.query)
                });
                Screen::Dashboard(DashboardScreen {
                    welcome: format!("Welcome, {}", session.profile().name),
                    role: session.role(),
                    menu: menu(section),
                    section,
                    content,
                })
            }
            _ => Screen::Marketing(MarketingScreen::new(self.view.login.map(|surface| {
                LoginPanel::new(self.pending_role(), surface.tab)
            }))),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn pending_role(&self) -> Role {
        self.view.pending_role.unwrap_or_default()
    }

    /// Install a new session and open the dashboard on the overview.
    fn establish(&mut self, session: Session, message: &str) {
        tracing::info!(session_id = %session.id(), role = %session.role(), "Signed in");
        set_sentry_user(&session.id(), Some(&session.profile().email));
        let role = session.role().to_string();
        add_breadcrumb("auth", "Signed in", Some(&[("role", role.as_str())]));

        self.session = Some(session);
        self.persist();

        self.view.login = None;
        self.view.active = ActiveView::Dashboard(Section::Overview);
        self.query = SearchQuery::default();
        self.render_all();

        self.sink.notify(Notification::success(message));
    }

    /// Save the current session. Failures are logged, not surfaced.
    fn persist(&self) {
        if let Some(session) = &self.session
            && let Err(e) = self.store.save(session)
        {
            tracing::warn!(error = %e, "Failed to save session");
        }
    }

    fn render_all(&mut self) {
        for section in Section::ALL {
            self.render(section);
        }
    }

    fn render(&mut self, section: Section) {
        if let Some(session) = &self.session {
            let content = render_section(section, session, &self.providers, &self.query);
            tracing::debug!(%section, "Rendered section");
            self.rendered.insert(section, content);
        }
    }

    /// Report a rejected action to the user and hand the error back.
    fn reject(&self, err: AppError) -> AppError {
        tracing::warn!(error = %err, "Action rejected");
        self.sink.notify(Notification::error(err.user_message()));
        err
    }
}
