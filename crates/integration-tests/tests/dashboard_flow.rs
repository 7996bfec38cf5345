//! Integration tests for navigating the dashboard end to end.

#![allow(clippy::unwrap_used)]

use rentzy_core::{Category, Role};
use rentzy_dashboard::models::{LoginTab, Section, View};
use rentzy_dashboard::notify::Severity;
use rentzy_dashboard::render::{ListingsAccess, Screen, SectionContent};
use rentzy_dashboard::services::auth::SignupForm;
use rentzy_dashboard::{AppError, Controller};
use rentzy_integration_tests::TestContext;
use secrecy::SecretString;

fn content(controller: &Controller) -> SectionContent {
    match controller.snapshot() {
        Screen::Dashboard(screen) => screen.content,
        Screen::Marketing(_) => panic!("expected dashboard"),
    }
}

// =============================================================================
// Signup
// =============================================================================

#[test]
fn test_signup_as_owner_then_browse_listings() {
    let ctx = TestContext::new();
    let (mut controller, sink) = ctx.start();

    controller.open_login(Role::Owner);
    controller.show_signup_tab();
    assert_eq!(
        controller.view_state().login_surface().unwrap().tab,
        LoginTab::Signup
    );

    controller
        .submit_signup(SignupForm {
            name: "Ravi Kumar".to_string(),
            email: "ravi@example.in".to_string(),
            phone: "9876543210".to_string(),
            aadhaar: "1234 5678 9012".to_string(),
            pan: "ABCDE1234F".to_string(),
            password: SecretString::from("pa55word"),
            confirm_password: SecretString::from("pa55word"),
        })
        .unwrap();
    assert_eq!(sink.last().unwrap().message, "Account created successfully!");

    controller.switch_section(Section::Listings).unwrap();
    match content(&controller) {
        SectionContent::Listings {
            access: ListingsAccess::Owned { listings },
        } => {
            let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();
            assert_eq!(names, ["My Honda City", "Gaming Laptop", "Apartment"]);
        }
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn test_failed_signup_keeps_surface_open() {
    let ctx = TestContext::new();
    let (mut controller, sink) = ctx.start();

    controller.open_login(Role::Renter);
    controller.show_signup_tab();
    let err = controller
        .submit_signup(SignupForm {
            name: "Ravi Kumar".to_string(),
            email: "ravi@example.in".to_string(),
            phone: "98765".to_string(),
            aadhaar: "1234 5678 9012".to_string(),
            pan: "ABCDE1234F".to_string(),
            password: SecretString::from("pa55word"),
            confirm_password: SecretString::from("pa55word"),
        })
        .unwrap_err();

    assert!(matches!(err, AppError::Auth(_)));
    let notification = sink.last().unwrap();
    assert_eq!(notification.message, "Please enter a valid phone number");
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(controller.view_state().view(), View::Marketing);
    assert!(controller.view_state().login_surface().is_some());
    assert!(!ctx.session_path().exists());
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_category_card_before_and_after_login() {
    let ctx = TestContext::new();
    let (mut controller, _) = ctx.start();

    controller.select_category(Category::Bikes);
    assert_eq!(controller.view_state().view(), View::Marketing);
    assert_eq!(controller.view_state().pending_role(), Some(Role::Renter));

    controller
        .submit_login("rider@example.com", &SecretString::from("x"))
        .unwrap();
    controller.select_category(Category::Bikes);

    assert_eq!(controller.view_state().section(), Some(Section::Browse));
    match content(&controller) {
        SectionContent::Browse { query, items } => {
            assert_eq!(query.category, "Bikes");
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].name, "Royal Enfield");
        }
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn test_exactly_one_menu_entry_active_everywhere() {
    let ctx = TestContext::new();
    let (mut controller, _) = ctx.start();
    controller.submit_federated_login();

    for section in Section::ALL {
        controller.switch_section(section).unwrap();
        match controller.snapshot() {
            Screen::Dashboard(screen) => {
                let active: Vec<Section> = screen
                    .menu
                    .iter()
                    .filter(|entry| entry.active)
                    .map(|entry| entry.section)
                    .collect();
                assert_eq!(active, [section]);
            }
            Screen::Marketing(_) => panic!("expected dashboard"),
        }
    }
}

#[test]
fn test_renter_upgrades_to_owner() {
    let ctx = TestContext::new();
    let (mut controller, sink) = ctx.start();
    controller.submit_federated_login();
    controller.switch_section(Section::Listings).unwrap();

    assert!(matches!(
        content(&controller),
        SectionContent::Listings {
            access: ListingsAccess::OwnerRequired { .. }
        }
    ));

    controller.switch_role().unwrap();
    assert!(matches!(
        content(&controller),
        SectionContent::Listings {
            access: ListingsAccess::Owned { .. }
        }
    ));
    assert_eq!(sink.last().unwrap().message, "Switched to Owner account");
    assert_eq!(controller.view_state().section(), Some(Section::Listings));
}

#[test]
fn test_snapshot_json_round_trip_fields() {
    let ctx = TestContext::new();
    let (mut controller, _) = ctx.start();
    controller.submit_federated_login();
    controller.switch_section(Section::Profile).unwrap();

    let value = serde_json::to_value(controller.snapshot()).unwrap();
    assert_eq!(value["view"], "dashboard");
    assert_eq!(value["section"], "profile");
    assert_eq!(value["content"]["section"], "profile");
    assert_eq!(value["content"]["email"], "john.doe@gmail.com");
}
