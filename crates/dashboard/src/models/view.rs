//! Navigation state: which view, which dashboard section, and the login surface.

use serde::{Deserialize, Serialize};

use rentzy_core::Role;

/// Top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Landing page with hero, categories and features.
    Marketing,
    /// Signed-in dashboard.
    Dashboard,
}

/// Dashboard sections, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Overview,
    Browse,
    Bookings,
    Listings,
    Profile,
}

impl Section {
    /// All sections in menu order.
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Browse,
        Self::Bookings,
        Self::Listings,
        Self::Profile,
    ];

    /// Machine name (`"overview"`, `"browse"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Browse => "browse",
            Self::Bookings => "bookings",
            Self::Listings => "listings",
            Self::Profile => "profile",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Browse => "Browse Items",
            Self::Bookings => "My Bookings",
            Self::Listings => "My Listings",
            Self::Profile => "Profile",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("invalid section: {s}"))
    }
}

/// Which tab of the login surface is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoginTab {
    #[default]
    Login,
    Signup,
}

/// The open login/signup modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSurface {
    pub tab: LoginTab,
}

/// Where the user is. The section only exists inside the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActiveView {
    Marketing,
    Dashboard(Section),
}

/// Transient navigation state owned by the controller.
///
/// Never persisted; on startup it is derived from whether a session was
/// loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub(crate) active: ActiveView,
    pub(crate) pending_role: Option<Role>,
    pub(crate) login: Option<LoginSurface>,
}

impl ViewState {
    pub(crate) const fn marketing() -> Self {
        Self {
            active: ActiveView::Marketing,
            pending_role: None,
            login: None,
        }
    }

    pub(crate) const fn dashboard() -> Self {
        Self {
            active: ActiveView::Dashboard(Section::Overview),
            pending_role: None,
            login: None,
        }
    }

    /// The top-level view.
    #[must_use]
    pub const fn view(&self) -> View {
        match self.active {
            ActiveView::Marketing => View::Marketing,
            ActiveView::Dashboard(_) => View::Dashboard,
        }
    }

    /// The active dashboard section, `None` on the marketing view.
    #[must_use]
    pub const fn section(&self) -> Option<Section> {
        match self.active {
            ActiveView::Marketing => None,
            ActiveView::Dashboard(section) => Some(section),
        }
    }

    /// Role chosen when the login surface was last opened.
    #[must_use]
    pub const fn pending_role(&self) -> Option<Role> {
        self.pending_role
    }

    /// The login surface, if open.
    #[must_use]
    pub const fn login_surface(&self) -> Option<LoginSurface> {
        self.login
    }
}
