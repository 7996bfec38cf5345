//! Screen and notification output.
//!
//! Text output goes through the askama templates in `templates/`; `--json`
//! prints the same data as one JSON document per frame.

use std::io::Write;

use askama::Template;
use serde::Serialize;
use thiserror::Error;

use rentzy_dashboard::models::{Booking, CatalogItem, Listing, LoginTab, OverviewStats};
use rentzy_dashboard::notify::Notification;
use rentzy_dashboard::render::{
    CategoryCard, DashboardScreen, ListingsAccess, MarketingScreen, MenuEntry, Screen,
    SectionContent,
};

/// Errors that can occur writing output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Templates
// =============================================================================

#[derive(Template)]
#[template(path = "marketing.txt")]
struct MarketingTemplate<'a> {
    categories: &'a [CategoryCard],
    login: Option<LoginView<'a>>,
}

struct LoginView<'a> {
    title: &'a str,
    tab: &'static str,
}

#[derive(Template)]
#[template(path = "dashboard.txt")]
struct DashboardTemplate<'a> {
    welcome: &'a str,
    role: &'static str,
    menu: &'a [MenuEntry],
    body: String,
}

#[derive(Template)]
#[template(path = "sections/overview.txt")]
struct OverviewTemplate {
    stats: Vec<(&'static str, String)>,
}

#[derive(Template)]
#[template(path = "sections/browse.txt")]
struct BrowseTemplate<'a> {
    term: &'a str,
    category: &'a str,
    items: &'a [CatalogItem],
}

#[derive(Template)]
#[template(path = "sections/bookings.txt")]
struct BookingsTemplate<'a> {
    bookings: &'a [Booking],
}

#[derive(Template)]
#[template(path = "sections/listings.txt")]
struct ListingsTemplate<'a> {
    listings: &'a [Listing],
}

#[derive(Template)]
#[template(path = "sections/owner_required.txt")]
struct OwnerRequiredTemplate<'a> {
    message: &'a str,
    action: &'a str,
}

#[derive(Template)]
#[template(path = "sections/profile.txt")]
struct ProfileTemplate<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a screen as text.
///
/// # Errors
///
/// Returns `askama::Error` if a template fails to render.
pub fn render_text(screen: &Screen) -> askama::Result<String> {
    match screen {
        Screen::Marketing(marketing) => render_marketing(marketing),
        Screen::Dashboard(dashboard) => render_dashboard(dashboard),
    }
}

fn render_marketing(screen: &MarketingScreen) -> askama::Result<String> {
    MarketingTemplate {
        categories: &screen.categories,
        login: screen.login.as_ref().map(|panel| LoginView {
            title: &panel.title,
            tab: match panel.tab {
                LoginTab::Login => "login",
                LoginTab::Signup => "signup",
            },
        }),
    }
    .render()
}

fn render_dashboard(screen: &DashboardScreen) -> askama::Result<String> {
    DashboardTemplate {
        welcome: &screen.welcome,
        role: screen.role.label(),
        menu: &screen.menu,
        body: render_section(&screen.content)?,
    }
    .render()
}

fn render_section(content: &SectionContent) -> askama::Result<String> {
    match content {
        SectionContent::Overview { stats } => OverviewTemplate {
            stats: stat_rows(stats),
        }
        .render(),
        SectionContent::Browse { query, items } => BrowseTemplate {
            term: &query.term,
            category: &query.category,
            items,
        }
        .render(),
        SectionContent::Bookings { bookings } => BookingsTemplate { bookings }.render(),
        SectionContent::Listings { access } => match access {
            ListingsAccess::Owned { listings } => ListingsTemplate { listings }.render(),
            ListingsAccess::OwnerRequired { message, action } => {
                OwnerRequiredTemplate { message, action }.render()
            }
        },
        SectionContent::Profile { name, email, phone } => {
            ProfileTemplate { name, email, phone }.render()
        }
    }
}

fn stat_rows(stats: &OverviewStats) -> Vec<(&'static str, String)> {
    match stats {
        OverviewStats::Renter {
            active_bookings,
            pending_requests,
            total_spent,
            rating,
        } => vec![
            ("Active Bookings", active_bookings.to_string()),
            ("Pending Requests", pending_requests.to_string()),
            ("Total Spent", total_spent.to_string()),
            ("Rating", rating.to_string()),
        ],
        OverviewStats::Owner {
            active_listings,
            total_bookings,
            total_earnings,
            rating,
        } => vec![
            ("Active Listings", active_listings.to_string()),
            ("Total Bookings", total_bookings.to_string()),
            ("Total Earnings", total_earnings.to_string()),
            ("Rating", rating.to_string()),
        ],
    }
}

// =============================================================================
// Printing
// =============================================================================

#[derive(Serialize)]
struct JsonFrame<'a> {
    notifications: &'a [Notification],
    screen: &'a Screen,
}

/// Print notifications followed by the screen.
///
/// # Errors
///
/// Returns `OutputError` if rendering or writing fails.
pub fn print_frame(
    out: &mut impl Write,
    notifications: &[Notification],
    screen: &Screen,
    json: bool,
) -> Result<(), OutputError> {
    if json {
        let frame = JsonFrame {
            notifications,
            screen,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&frame)?)?;
        return Ok(());
    }

    for notification in notifications {
        writeln!(out, "[{}] {}", notification.severity, notification.message)?;
    }
    writeln!(out, "{}", render_text(screen)?.trim_end())?;
    writeln!(out)?;
    Ok(())
}
