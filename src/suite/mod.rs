//! The canonical scenario suite and its orchestrator

pub mod runner;
pub mod scenarios;

pub use runner::{RunOutcome, Suite};

/// Identifiers produced by earlier scenarios for later, dependent ones
///
/// Threaded explicitly through the orchestrator; the fetch/update/delete
/// chain only runs once `account_id` has been filled in by creation.
#[derive(Debug, Default)]
pub struct ScenarioContext {
    pub account_id: Option<String>,
}
