//! Spaced repetition scheduling
//!
//! This module provides:
//! - The fixed interval table and due-date calculation
//! - Review outcome transitions (remembered / forgotten)
//! - Caller-held review sessions
//! - Progress statistics

pub mod algorithm;
pub mod models;
pub mod session;

pub use algorithm::{apply_outcome, due_records, is_due, next_due_date, review_stats, INTERVALS};
pub use models::*;
pub use session::{ReviewSession, SessionError, SessionSummary};
