//! Rentzy CLI - browse and manage rentals from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the current screen
//! rentzy status
//!
//! # Log in as an owner
//! rentzy login -e owner@example.com -p secret --role owner
//!
//! # Jump to a dashboard section
//! rentzy section bookings
//!
//! # Search the catalog
//! rentzy search honda --category "All Categories"
//!
//! # Interactive shell, one command per line
//! rentzy shell
//! ```
//!
//! The signed-in session is saved under `RENTZY_STATE_DIR` (or `--state-dir`)
//! so separate invocations share it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rentzy_dashboard::config::LogFormat;
use rentzy_dashboard::notify::{Notification, NotificationSink, RecordingSink, TracingSink};
use rentzy_dashboard::providers::Providers;
use rentzy_dashboard::store::JsonFileStore;
use rentzy_dashboard::{Controller, DashboardConfig};

mod commands;
mod output;

use commands::Action;

#[derive(Parser)]
#[command(name = "rentzy")]
#[command(author, version, about = "Rentzy rental marketplace")]
struct Cli {
    /// Directory holding the saved session (overrides `RENTZY_STATE_DIR`)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Print screens as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell
    Shell,
    #[command(flatten)]
    Action(Action),
}

/// Logs each notification and keeps it for printing.
struct CliSink {
    recording: RecordingSink,
}

impl NotificationSink for CliSink {
    fn notify(&self, notification: Notification) {
        TracingSink.notify(notification.clone());
        self.recording.notify(notification);
    }
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &DashboardConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Install the tracing subscriber. Logs go to stderr so stdout stays clean.
fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rentzy_dashboard=info,rentzy=info".into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Text);
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    let config = match cli.state_dir.clone() {
        Some(dir) => config.with_state_dir(dir),
        None => config,
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);
    init_tracing(config.log_format);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &DashboardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::from_config(config);
    tracing::debug!(path = %store.path().display(), "Using session file");

    let recording = RecordingSink::new();
    let mut controller = Controller::new(
        store,
        Providers::mock(),
        CliSink {
            recording: recording.clone(),
        },
    );

    let stdout = std::io::stdout();
    match cli.command {
        Commands::Shell => {
            commands::shell::run(
                &mut controller,
                &recording,
                std::io::stdin().lock(),
                stdout.lock(),
                cli.json,
            )?;
        }
        Commands::Action(action) => {
            let applied = action.apply(&mut controller);
            let mut out = stdout.lock();
            output::print_frame(&mut out, &recording.drain(), &controller.snapshot(), cli.json)?;
            out.flush()?;
            applied?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rentzy_core::Role;
    use rentzy_dashboard::models::Section;

    #[test]
    fn test_parse_one_shot_commands() {
        let cli = Cli::try_parse_from(["rentzy", "--json", "section", "browse"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Action(Action::Section {
                section: Section::Browse
            })
        ));

        let cli = Cli::try_parse_from(["rentzy", "open", "owner"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Action(Action::Open { role: Role::Owner })
        ));
    }

    #[test]
    fn test_global_state_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["rentzy", "status", "--state-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.state_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["rentzy", "search"]).unwrap();
        match cli.command {
            Commands::Action(Action::Search { term, category }) => {
                assert_eq!(term, "");
                assert_eq!(category, "All Categories");
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_invalid_role_rejected() {
        assert!(Cli::try_parse_from(["rentzy", "open", "admin"]).is_err());
    }

    #[test]
    fn test_cli_sink_records() {
        let recording = RecordingSink::new();
        let sink = CliSink {
            recording: recording.clone(),
        };
        sink.notify(Notification::info("hello"));
        assert_eq!(recording.drain(), vec![Notification::info("hello")]);
    }
}
