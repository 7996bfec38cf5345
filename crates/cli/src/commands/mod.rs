//! Dashboard actions shared by one-shot commands and the shell.

pub mod shell;

use clap::{Subcommand, ValueEnum};
use secrecy::SecretString;

use rentzy_core::{Category, CategoryError, Role};
use rentzy_dashboard::Controller;
use rentzy_dashboard::models::Section;
use rentzy_dashboard::search::ALL_CATEGORIES;
use rentzy_dashboard::services::auth::SignupForm;

/// Errors from applying an action.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// The controller rejected the action.
    #[error(transparent)]
    Rejected(#[from] rentzy_dashboard::AppError),

    /// The category card name was not recognised.
    #[error(transparent)]
    Category(#[from] CategoryError),
}

/// Login surface tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Login,
    Signup,
}

/// A user action against the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// Print the current screen
    Status,
    /// Open the login surface for a role (`renter` or `owner`)
    Open { role: Role },
    /// Switch the login surface tab
    Tab {
        #[arg(value_enum)]
        tab: TabArg,
    },
    /// Close the login surface
    Close,
    /// Log in with email and password
    Login {
        /// Email address
        #[arg(short, long, default_value = "")]
        email: String,

        /// Password
        #[arg(short, long, default_value = "")]
        password: String,

        /// Role to log in as (defaults to the role chosen with `open`)
        #[arg(short, long)]
        role: Option<Role>,
    },
    /// Create an account
    Signup {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// 12-digit Aadhaar number
        #[arg(long, default_value = "")]
        aadhaar: String,
        /// PAN (e.g. ABCDE1234F)
        #[arg(long, default_value = "")]
        pan: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,

        /// Role to sign up as (defaults to the role chosen with `open`)
        #[arg(short, long)]
        role: Option<Role>,
    },
    /// Log in with Google
    Google {
        /// Role to log in as (defaults to the role chosen with `open`)
        #[arg(short, long)]
        role: Option<Role>,
    },
    /// Log out
    Logout,
    /// Show a dashboard section (overview, browse, bookings, listings, profile)
    Section { section: Section },
    /// Switch the current account to the owner role
    SwitchRole,
    /// Search the catalog
    Search {
        /// Text to match against item names
        #[arg(default_value = "")]
        term: String,

        /// Category name, or "All Categories"
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,
    },
    /// Pick a category card (bikes, cars, homes, villas, gadgets)
    Category { slug: String },
    /// Add a new listing
    AddListing,
}

impl Action {
    /// Apply the action to the controller.
    ///
    /// # Errors
    ///
    /// Returns `ActionError` if the controller rejects the action or the
    /// category is unknown. Rejections have already been reported to the
    /// notification sink.
    pub fn apply(self, controller: &mut Controller) -> Result<(), ActionError> {
        match self {
            Self::Status => {}
            Self::Open { role } => controller.open_login(role),
            Self::Tab { tab } => match tab {
                TabArg::Login => controller.show_login_tab(),
                TabArg::Signup => controller.show_signup_tab(),
            },
            Self::Close => controller.close_login(),
            Self::Login {
                email,
                password,
                role,
            } => {
                open_for(controller, role);
                controller.submit_login(&email, &SecretString::from(password))?;
            }
            Self::Signup {
                name,
                email,
                phone,
                aadhaar,
                pan,
                password,
                confirm_password,
                role,
            } => {
                open_for(controller, role);
                controller.show_signup_tab();
                controller.submit_signup(SignupForm {
                    name,
                    email,
                    phone,
                    aadhaar,
                    pan,
                    password: SecretString::from(password),
                    confirm_password: SecretString::from(confirm_password),
                })?;
            }
            Self::Google { role } => {
                open_for(controller, role);
                controller.submit_federated_login();
            }
            Self::Logout => controller.logout(),
            Self::Section { section } => controller.switch_section(section)?,
            Self::SwitchRole => controller.switch_role()?,
            Self::Search { term, category } => {
                let visible = controller.search(&term, &category);
                tracing::debug!(count = visible.len(), "Search results");
            }
            Self::Category { slug } => {
                controller.select_category(Category::from_slug(&slug)?);
            }
            Self::AddListing => controller.add_listing(),
        }
        Ok(())
    }
}

/// A one-shot command starts a fresh process with no pending role, so an
/// explicit `--role` stands in for opening the login surface first.
fn open_for(controller: &mut Controller, role: Option<Role>) {
    if let Some(role) = role {
        controller.open_login(role);
    }
}
