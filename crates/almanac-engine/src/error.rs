//! Error types for almanac-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlmanacError {
    #[error("Invalid year: {0} (years start at 1)")]
    InvalidYear(u32),

    #[error("Invalid season: {0}")]
    InvalidSeason(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Invalid weekday: {0} (expected 0-6)")]
    InvalidWeekday(u32),

    #[error("Invalid event filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Invalid resident group: {0}")]
    InvalidGroup(String),

    #[error("Invalid calendar state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, AlmanacError>;
