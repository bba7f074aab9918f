//! Domain model for a budget.
use serde::{Deserialize, Serialize};

/// Recurring period over which a budget resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleType {
    Monthly,
    Weekly,
}

impl CycleType {
    /// Database representation of the cycle type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleType::Monthly => "MONTHLY",
            CycleType::Weekly => "WEEKLY",
        }
    }

    /// Parse the database representation back into a cycle type.
    pub fn parse(value: &str) -> Option<CycleType> {
        match value {
            "MONTHLY" => Some(CycleType::Monthly),
            "WEEKLY" => Some(CycleType::Weekly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub name: String,
    /// Total budget amount for one cycle.
    pub amount: f64,
    /// Date the budget was started, YYYY-MM-DD.
    pub start_date: String,
    pub cycle_type: CycleType,
    /// For MONTHLY: day of month (1-31). For WEEKLY: day of week
    /// (0 = Sunday, 1 = Monday, ..., 6 = Saturday).
    pub cycle_value: u32,
    /// Only one budget can be active at a time.
    pub active: bool,
}

impl Budget {
    /// Validate a cycle value against a cycle type.
    pub fn is_valid_cycle_value(cycle_type: CycleType, value: u32) -> bool {
        match cycle_type {
            CycleType::Monthly => (1..=31).contains(&value),
            CycleType::Weekly => value <= 6,
        }
    }

    /// Get the day name for a weekly cycle value.
    pub fn day_name(&self) -> &'static str {
        match self.cycle_value {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Invalid",
        }
    }
}
