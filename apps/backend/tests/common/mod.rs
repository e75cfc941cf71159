//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router with chosen evaluation settings
//! - Helper functions for building request bodies

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use answer_check_backend::models::EvaluationSettings;
use answer_check_backend::{router, AppState};

/// Test context holding the application router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context with default evaluation settings.
    pub fn new() -> Self {
        Self::with_settings(EvaluationSettings::default())
    }

    /// Create a context with custom evaluation settings.
    pub fn with_settings(settings: EvaluationSettings) -> Self {
        Self {
            app: router(AppState::new(settings)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}
