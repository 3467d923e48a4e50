//! Backend Smoke - end-to-end tests for the account manager API
//!
//! This library drives a fixed suite of HTTP scenarios against the game
//! account manager backend: pricing configuration reads and patches, and a
//! full create/fetch/update/delete chain over accounts. The binary wraps it
//! with a small CLI and maps the run outcome to the process exit code.

pub mod commands;
pub mod common;
pub mod http;
pub mod report;
pub mod suite;

// Re-export commonly used types for tests
pub use common::{Config, Error, Result};
pub use http::{Method, RequestSpec};
pub use report::Recorder;
