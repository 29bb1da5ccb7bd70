//! Two-operand add/subtract calculator

use serde::{Deserialize, Serialize};

use crate::core::decimal::round_significant;
use crate::core::numeric::parse_float;

/// Significant digits kept in a calculator result
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Supported operators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Operator {
    #[default]
    #[value(name = "+", alias = "add")]
    #[serde(rename = "+")]
    Add,
    #[value(name = "-", alias = "sub")]
    #[serde(rename = "-")]
    Subtract,
}

impl Operator {
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
        }
    }
}

/// Evaluate `num1 op num2` from raw text
///
/// Returns `None` when either operand is not a number, which the form shows as
/// an empty result.
pub fn calculate(num1: &str, op: Operator, num2: &str) -> Option<f64> {
    let a = parse_float(num1)?;
    let b = parse_float(num2)?;
    Some(round_significant(op.apply(a, b), SIGNIFICANT_DIGITS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_one_plus_point_two() {
        assert_eq!(calculate("0.1", Operator::Add, "0.2"), Some(0.3));
    }

    #[test]
    fn test_default_is_add() {
        assert_eq!(Operator::default(), Operator::Add);
    }

    #[test]
    fn test_halfway_results_round_up() {
        assert_eq!(
            calculate("123456789012344", Operator::Add, "0.5"),
            Some(123456789012345.0)
        );
        assert_eq!(
            calculate("1000000000000000", Operator::Add, "5"),
            Some(1000000000000010.0)
        );
    }

    #[test]
    fn test_subtraction_artifacts_removed() {
        assert_eq!(calculate("0.3", Operator::Subtract, "0.1"), Some(0.2));
        assert_eq!(calculate("1.1", Operator::Add, "2.2"), Some(3.3));
    }

    #[test]
    fn test_non_numeric_operand_is_empty() {
        assert_eq!(calculate("", Operator::Add, "1"), None);
        assert_eq!(calculate("1", Operator::Subtract, "x"), None);
    }

    #[test]
    fn test_round_significant_passthrough() {
        assert_eq!(round_significant(0.0, 15), 0.0);
        assert_eq!(round_significant(f64::INFINITY, 15), f64::INFINITY);
        assert_eq!(round_significant(123456.0, 15), 123456.0);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Subtract.to_string(), "-");
    }
}
