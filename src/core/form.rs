//! Weighing form state
//!
//! Holds the raw text of each field exactly as entered, plus the two unit
//! toggles. Evaluation parses the text leniently and runs the tolerance
//! calculation, so a half-typed or garbled field never produces an error.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::core::numeric::{float_or_zero, int_or_zero, is_blank};
use crate::core::tolerance::{compute, WeighingInput, WeighingResult};
use crate::core::unit::{Unit, UnitParseError};

/// Editable fields of the weighing form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeighingForm {
    pub theoretical_weight: String,
    pub unit1: Unit,
    pub times: String,
    pub unit2: Unit,
    pub actual_weight: String,
}

impl Default for WeighingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl WeighingForm {
    /// Form pre-filled with the worked example shown on first launch
    pub fn new() -> Self {
        Self {
            theoretical_weight: "2.063".to_string(),
            unit1: Unit::Mg,
            times: "2".to_string(),
            unit2: Unit::Mg,
            actual_weight: "4.01".to_string(),
        }
    }

    /// Form with every text field empty
    pub fn cleared() -> Self {
        Self {
            theoretical_weight: String::new(),
            unit1: Unit::Mg,
            times: String::new(),
            unit2: Unit::Mg,
            actual_weight: String::new(),
        }
    }

    /// Reset every field ("Clear All")
    pub fn clear_all(&mut self) {
        *self = Self::cleared();
    }

    /// Parse the current text into calculator input
    pub fn input(&self) -> WeighingInput {
        WeighingInput {
            theoretical_weight_per_unit: float_or_zero(&self.theoretical_weight),
            unit1: self.unit1,
            repeat_count: int_or_zero(&self.times),
            unit2: self.unit2,
            actual_weight: if is_blank(&self.actual_weight) {
                None
            } else {
                Some(float_or_zero(&self.actual_weight))
            },
        }
    }

    /// Recompute the result from the current fields
    pub fn evaluate(&self) -> WeighingResult {
        compute(&self.input())
    }

    /// Apply a single edit
    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Weight(v) => self.theoretical_weight = v,
            FormEdit::Unit(u) => self.unit1 = u,
            FormEdit::Times(v) => self.times = v,
            FormEdit::TotalUnit(u) => self.unit2 = u,
            FormEdit::Actual(v) => self.actual_weight = v,
            FormEdit::Clear => self.clear_all(),
        }
    }
}

/// One change to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Weight(String),
    Unit(Unit),
    Times(String),
    TotalUnit(Unit),
    Actual(String),
    Clear,
}

/// Errors parsing a form edit line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormEditError {
    #[error("Unknown field '{0}' (expected weight, unit, times, total-unit or actual)")]
    UnknownField(String),

    #[error("Expected 'field=value' or 'clear', got '{0}'")]
    Malformed(String),

    #[error(transparent)]
    Unit(#[from] UnitParseError),
}

impl FromStr for FormEdit {
    type Err = FormEditError;

    /// Parse `field=value` or `clear`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("clear") {
            return Ok(FormEdit::Clear);
        }

        let (field, value) = line
            .split_once('=')
            .ok_or_else(|| FormEditError::Malformed(line.to_string()))?;
        let value = value.trim().to_string();

        match field.trim().to_ascii_lowercase().as_str() {
            "weight" => Ok(FormEdit::Weight(value)),
            "unit" => Ok(FormEdit::Unit(value.parse()?)),
            "times" => Ok(FormEdit::Times(value)),
            "total-unit" | "total_unit" => Ok(FormEdit::TotalUnit(value.parse()?)),
            "actual" => Ok(FormEdit::Actual(value)),
            other => Err(FormEditError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tolerance::WeighingStatus;

    #[test]
    fn test_initial_form_evaluates_to_fail() {
        let result = WeighingForm::new().evaluate();
        assert!((result.total_theoretical_weight - 4.126).abs() < 1e-9);
        assert_eq!(result.status, WeighingStatus::Fail);
    }

    #[test]
    fn test_clear_all_resets_fields() {
        let mut form = WeighingForm::new();
        form.unit1 = Unit::G;
        form.unit2 = Unit::G;
        form.clear_all();
        assert_eq!(form, WeighingForm::cleared());
        assert_eq!(form.unit1, Unit::Mg);
        assert_eq!(form.evaluate().status, WeighingStatus::Empty);
    }

    #[test]
    fn test_unparseable_fields_count_as_zero() {
        let mut form = WeighingForm::new();
        form.times = "two".to_string();
        assert_eq!(form.input().repeat_count, 0);
        assert_eq!(form.evaluate().status, WeighingStatus::Empty);
    }

    #[test]
    fn test_garbled_actual_is_zero_not_blank() {
        let mut form = WeighingForm::new();
        form.actual_weight = "abc".to_string();
        assert_eq!(form.input().actual_weight, Some(0.0));
        assert_eq!(form.evaluate().status, WeighingStatus::Fail);
    }

    #[test]
    fn test_blank_actual_awaits_input() {
        let mut form = WeighingForm::new();
        form.apply(FormEdit::Actual("  ".to_string()));
        assert_eq!(form.evaluate().status, WeighingStatus::AwaitingInput);
    }

    #[test]
    fn test_parse_edits() {
        assert_eq!(
            "weight=2.5".parse::<FormEdit>().unwrap(),
            FormEdit::Weight("2.5".to_string())
        );
        assert_eq!(
            "total-unit = g".parse::<FormEdit>().unwrap(),
            FormEdit::TotalUnit(Unit::G)
        );
        assert_eq!("CLEAR".parse::<FormEdit>().unwrap(), FormEdit::Clear);
        assert_eq!(
            "actual=".parse::<FormEdit>().unwrap(),
            FormEdit::Actual(String::new())
        );
    }

    #[test]
    fn test_parse_edit_errors() {
        assert!(matches!(
            "colour=red".parse::<FormEdit>(),
            Err(FormEditError::UnknownField(_))
        ));
        assert!(matches!(
            "weight 2".parse::<FormEdit>(),
            Err(FormEditError::Malformed(_))
        ));
        assert!(matches!(
            "unit=kg".parse::<FormEdit>(),
            Err(FormEditError::Unit(_))
        ));
    }
}
