//! Domain model for an expense.
use serde::{Deserialize, Serialize};

/// Maximum length accepted for an expense title.
pub const MAX_TITLE_LENGTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    /// Always positive; expenses only record money spent.
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    /// Calendar date in YYYY-MM-DD format. Zero-padded, so lexicographic
    /// order equals chronological order.
    pub date: String,
    /// Time of day in HH:MM:SS format.
    pub time: String,
}
