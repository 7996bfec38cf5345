//! Integration tests for Rentzy.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rentzy-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_persistence` - Sessions surviving (or not) a restart
//! - `dashboard_flow` - End-to-end navigation through the dashboard
//!
//! Each test gets its own temporary state directory, so a "restart" is a
//! second [`Controller`](rentzy_dashboard::Controller) built over the same
//! session file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use rentzy_dashboard::notify::RecordingSink;
use rentzy_dashboard::providers::Providers;
use rentzy_dashboard::store::JsonFileStore;
use rentzy_dashboard::{Controller, DashboardConfig};
use tempfile::TempDir;

/// A temporary state directory shared by successive controllers.
pub struct TestContext {
    dir: TempDir,
    pub config: DashboardConfig,
}

impl TestContext {
    /// Create a fresh state directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = DashboardConfig::default().with_state_dir(dir.path().join("state"));
        Self { dir, config }
    }

    /// Start a controller over the shared session file, as a new process would.
    #[must_use]
    pub fn start(&self) -> (Controller, RecordingSink) {
        let sink = RecordingSink::new();
        let controller = Controller::new(
            JsonFileStore::from_config(&self.config),
            Providers::mock(),
            sink.clone(),
        );
        (controller, sink)
    }

    /// Path of the session file.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.config.session_path()
    }

    /// Root of the temporary directory.
    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
