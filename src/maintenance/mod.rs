//! Host maintenance actions

pub mod clean;

pub use clean::{run_clean, ActionOutcome, CleanAction, CleanMode, CleanReport, CLEAN_PLAN};
