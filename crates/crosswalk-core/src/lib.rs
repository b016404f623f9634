// Public fallible APIs in this crate share one concrete error contract (`CrosswalkError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod clipboard;
pub mod client;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod flow;
pub mod fuzzy;
pub(crate) mod loadlog;
pub mod models;
pub mod query;

pub use client::Portal;
pub use error::{CrosswalkError, Result};
pub use flow::{CodeSearchFlow, OrderSearchFlow, SearchPhase};
pub use models::{CodeRecord, OrderRecord, RESULT_ROW_LIMIT, SUGGESTION_LIMIT};
