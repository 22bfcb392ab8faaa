//! Test helpers: build the full router against a temporary upload directory.
//!
//! Run from workspace root: `cargo test -p chromia-api`.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;
use chromia_api::setup::initialize_app;
use chromia_api::state::AppState;
use chromia_core::config::AnalyzerConfig;
use chromia_core::Config;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Test application: server, shared state and the owned upload directory.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        self._temp_dir.path()
    }

    /// Names of the files currently sitting in the upload directory.
    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.upload_dir())
            .expect("upload dir readable")
            .map(|entry| {
                entry
                    .expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

/// App with a deletion delay long enough that uploads stay put during a test.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// App that deletes uploads after `delay`.
pub async fn setup_test_app_with_delay(delay: Duration) -> TestApp {
    setup_test_app_with(|config| config.deletion_delay = delay).await
}

pub async fn setup_test_app_with(customize: impl FnOnce(&mut AnalyzerConfig)) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut inner = AnalyzerConfig {
        upload_dir: temp_dir.path().to_path_buf(),
        deletion_delay: Duration::from_secs(3600),
        ..AnalyzerConfig::default()
    };
    customize(&mut inner);
    let config = Config(Box::new(inner));

    let (state, router) = initialize_app(config)
        .await
        .expect("Failed to initialize app");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        state,
        _temp_dir: temp_dir,
    }
}
