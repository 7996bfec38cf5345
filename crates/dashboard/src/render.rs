//! Declarative description of what is on screen.
//!
//! The controller never draws anything. It produces a [`Screen`] that a
//! presentation layer (the CLI templates, or a test) turns into output.

use serde::Serialize;

use rentzy_core::{Category, Role};

use crate::models::catalog::{Booking, CatalogItem, Listing, OverviewStats};
use crate::models::session::Session;
use crate::models::view::{LoginTab, Section};
use crate::providers::Providers;
use crate::search::{SearchQuery, filter_catalog};

/// Shown in the listings section to renters.
pub const OWNER_REQUIRED_MESSAGE: &str = "You need to be an owner to view listings.";

/// Label of the action offered alongside [`OWNER_REQUIRED_MESSAGE`].
pub const SWITCH_TO_OWNER_ACTION: &str = "Switch to Owner Account";

/// Everything currently visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Screen {
    Marketing(MarketingScreen),
    Dashboard(DashboardScreen),
}

/// The landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketingScreen {
    pub categories: Vec<CategoryCard>,
    /// The login modal, if open.
    pub login: Option<LoginPanel>,
}

impl MarketingScreen {
    pub(crate) fn new(login: Option<LoginPanel>) -> Self {
        Self {
            categories: Category::ALL.into_iter().map(CategoryCard::from).collect(),
            login,
        }
    }
}

/// One category card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCard {
    /// Value passed to `select_category` when the card is clicked.
    pub slug: String,
    pub name: String,
    pub description: String,
}

impl From<Category> for CategoryCard {
    fn from(category: Category) -> Self {
        Self {
            slug: category.as_str().to_lowercase(),
            name: category.as_str().to_string(),
            description: category.description().to_string(),
        }
    }
}

/// The open login/signup modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginPanel {
    /// "Login as Renter" or "Login as Owner".
    pub title: String,
    pub tab: LoginTab,
}

impl LoginPanel {
    pub(crate) fn new(role: Role, tab: LoginTab) -> Self {
        Self {
            title: format!("Login as {}", role.label()),
            tab,
        }
    }
}

/// The signed-in dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardScreen {
    /// "Welcome, {name}".
    pub welcome: String,
    pub role: Role,
    /// Sidebar entries in menu order; exactly one is active.
    pub menu: Vec<MenuEntry>,
    pub section: Section,
    pub content: SectionContent,
}

/// A sidebar menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub section: Section,
    pub label: String,
    pub active: bool,
}

/// Build the sidebar with `active` highlighted.
pub(crate) fn menu(active: Section) -> Vec<MenuEntry> {
    Section::ALL
        .into_iter()
        .map(|section| MenuEntry {
            section,
            label: section.label().to_string(),
            active: section == active,
        })
        .collect()
}

/// Rendered content of one dashboard section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionContent {
    Overview {
        stats: OverviewStats,
    },
    Browse {
        query: SearchQuery,
        items: Vec<CatalogItem>,
    },
    Bookings {
        bookings: Vec<Booking>,
    },
    Listings {
        #[serde(flatten)]
        access: ListingsAccess,
    },
    Profile {
        name: String,
        email: String,
        phone: String,
    },
}

/// What the listings section shows, depending on role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "access", rename_all = "snake_case")]
pub enum ListingsAccess {
    /// The owner's listings.
    Owned { listings: Vec<Listing> },
    /// Renters are asked to switch roles first.
    OwnerRequired { message: String, action: String },
}

/// Render `section` for `session` from the providers.
pub(crate) fn render_section(
    section: Section,
    session: &Session,
    providers: &Providers,
    query: &SearchQuery,
) -> SectionContent {
    match section {
        Section::Overview => {
            let stats = match session.role() {
                Role::Renter => OverviewStats::for_renter(&providers.bookings.bookings()),
                Role::Owner => OverviewStats::for_owner(&providers.listings.listings()),
            };
            SectionContent::Overview { stats }
        }
        Section::Browse => SectionContent::Browse {
            query: query.clone(),
            items: filter_catalog(&providers.catalog.items(), query),
        },
        Section::Bookings => SectionContent::Bookings {
            bookings: providers.bookings.bookings(),
        },
        Section::Listings => {
            let access = match session.role() {
                Role::Owner => ListingsAccess::Owned {
                    listings: providers.listings.listings(),
                },
                Role::Renter => ListingsAccess::OwnerRequired {
                    message: OWNER_REQUIRED_MESSAGE.to_string(),
                    action: SWITCH_TO_OWNER_ACTION.to_string(),
                },
            };
            SectionContent::Listings { access }
        }
        Section::Profile => {
            let profile = session.profile();
            SectionContent::Profile {
                name: profile.name.clone(),
                email: profile.email.clone(),
                phone: profile.phone.clone(),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::session::Profile;
    use rentzy_core::SessionId;

    fn session(role: Role) -> Session {
        Session::new(SessionId::new(1), Profile::demo("a@b.co"), role)
    }

    #[test]
    fn test_menu_has_one_active_entry() {
        let entries = menu(Section::Bookings);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries.iter().filter(|e| e.active).count(), 1);
        assert_eq!(entries[2].label, "My Bookings");
        assert!(entries[2].active);
    }

    #[test]
    fn test_listings_depend_on_role() {
        let providers = Providers::mock();
        let query = SearchQuery::default();

        let renter = render_section(Section::Listings, &session(Role::Renter), &providers, &query);
        assert!(matches!(
            renter,
            SectionContent::Listings {
                access: ListingsAccess::OwnerRequired { .. }
            }
        ));

        let owner = render_section(Section::Listings, &session(Role::Owner), &providers, &query);
        match owner {
            SectionContent::Listings {
                access: ListingsAccess::Owned { listings },
            } => assert_eq!(listings.len(), 3),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_browse_applies_query() {
        let providers = Providers::mock();
        let query = SearchQuery::new("", "Villas");
        match render_section(Section::Browse, &session(Role::Renter), &providers, &query) {
            SectionContent::Browse { items, .. } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "Beach Villa");
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_profile_shows_contact_details() {
        let content = render_section(
            Section::Profile,
            &session(Role::Renter),
            &Providers::mock(),
            &SearchQuery::default(),
        );
        assert_eq!(
            content,
            SectionContent::Profile {
                name: "John Doe".to_string(),
                email: "a@b.co".to_string(),
                phone: "+91 9876543210".to_string(),
            }
        );
    }

    #[test]
    fn test_login_panel_title() {
        assert_eq!(
            LoginPanel::new(Role::Owner, LoginTab::Login).title,
            "Login as Owner"
        );
    }

    #[test]
    fn test_screen_json_is_tagged() {
        let screen = Screen::Marketing(MarketingScreen::new(None));
        let value = serde_json::to_value(&screen).unwrap();
        assert_eq!(value["view"], "marketing");
        assert_eq!(value["categories"][0]["slug"], "bikes");
        assert!(value["login"].is_null());
    }
}
