//! Weighing tolerance calculation
//!
//! Takes a theoretical weight per portion, the number of portions, and a pair
//! of units, and derives the total theoretical weight, the ±2% acceptance
//! range around it, and whether a measured weight falls inside that range.
//!
//! The result is a pure function of the input and is recomputed from scratch
//! on every change.

use serde::{Deserialize, Serialize};

use crate::core::decimal::format_fixed;
use crate::core::unit::Unit;

/// Lower band multiplier (-2%)
pub const LOWER_FACTOR: f64 = 0.98;

/// Upper band multiplier (+2%)
pub const UPPER_FACTOR: f64 = 1.02;

/// Decimal places shown for totals of 1 or more
pub const STANDARD_PRECISION: usize = 4;

/// Decimal places shown for totals below 1
pub const FINE_PRECISION: usize = 8;

/// Parsed calculator input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeighingInput {
    /// Theoretical weight of one portion, in `unit1`
    pub theoretical_weight_per_unit: f64,

    /// Unit of the theoretical weight
    pub unit1: Unit,

    /// Number of portions to weigh
    pub repeat_count: i64,

    /// Unit the total and the range are expressed in
    pub unit2: Unit,

    /// Measured weight in `unit2`, `None` while the field is blank
    pub actual_weight: Option<f64>,
}

/// Classification of a measured weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeighingStatus {
    /// Within the tolerance band
    Pass,
    /// Outside the tolerance band
    Fail,
    /// Range is known but no measurement was entered
    AwaitingInput,
    /// Not enough input to compute a range
    Empty,
}

impl WeighingStatus {
    /// Text shown to the operator
    pub fn label(&self) -> &'static str {
        match self {
            WeighingStatus::Pass => "Pass",
            WeighingStatus::Fail => "Fail",
            WeighingStatus::AwaitingInput => "Awaiting Input",
            WeighingStatus::Empty => "-",
        }
    }
}

impl std::fmt::Display for WeighingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Calculator output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeighingResult {
    /// Total theoretical weight in `unit2`
    pub total_theoretical_weight: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub status: WeighingStatus,
    /// Decimal places to use when displaying the numbers above
    pub display_precision: usize,
}

impl WeighingResult {
    /// The all-zero result used when there is nothing to compute
    pub fn empty() -> Self {
        Self {
            total_theoretical_weight: 0.0,
            lower_bound: 0.0,
            upper_bound: 0.0,
            status: WeighingStatus::Empty,
            display_precision: STANDARD_PRECISION,
        }
    }

    /// Total formatted at the display precision
    pub fn total_display(&self) -> String {
        format_fixed(self.total_theoretical_weight, self.display_precision)
    }

    /// Range formatted as `lower - upper`
    pub fn range_display(&self) -> String {
        format!(
            "{} - {}",
            format_fixed(self.lower_bound, self.display_precision),
            format_fixed(self.upper_bound, self.display_precision)
        )
    }
}

/// Compute the tolerance range and status for `input`
pub fn compute(input: &WeighingInput) -> WeighingResult {
    if input.theoretical_weight_per_unit == 0.0 || input.repeat_count == 0 {
        return WeighingResult::empty();
    }

    let total_in_unit1 = input.theoretical_weight_per_unit * input.repeat_count as f64;
    let total = Unit::convert(total_in_unit1, input.unit1, input.unit2);

    let lower_bound = total * LOWER_FACTOR;
    let upper_bound = total * UPPER_FACTOR;

    let status = match input.actual_weight {
        None => WeighingStatus::AwaitingInput,
        Some(actual) if actual >= lower_bound && actual <= upper_bound => WeighingStatus::Pass,
        Some(_) => WeighingStatus::Fail,
    };

    WeighingResult {
        total_theoretical_weight: total,
        lower_bound,
        upper_bound,
        status,
        display_precision: display_precision(total),
    }
}

/// Decimal places used to present a total
pub fn display_precision(total: f64) -> usize {
    if total < 1.0 {
        FINE_PRECISION
    } else {
        STANDARD_PRECISION
    }
}
