//! Run summary (run_summary.json)

mod run_summary;

pub use run_summary::{RunStatus, RunSummary, RUN_SUMMARY_SCHEMA_ID, RUN_SUMMARY_SCHEMA_VERSION};
