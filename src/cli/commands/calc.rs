//! `weigh calc` command - simple add/subtract calculator

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::output::{effective_format, print_structured};
use crate::cli::GlobalOpts;
use crate::core::arith::{calculate, Operator};
use crate::core::decimal::number_text;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// First number
    #[arg(allow_hyphen_values = true)]
    pub num1: String,

    /// Operator (+ or -)
    pub op: Operator,

    /// Second number
    #[arg(allow_hyphen_values = true)]
    pub num2: String,
}

#[derive(Debug, Serialize)]
struct CalcReport<'a> {
    num1: &'a str,
    op: Operator,
    num2: &'a str,
    result: Option<f64>,
}

pub fn run(args: CalcArgs, global: &GlobalOpts) -> Result<()> {
    let result = calculate(&args.num1, args.op, &args.num2);
    if result.is_none() {
        tracing::info!(num1 = %args.num1, num2 = %args.num2, "operand is not a number");
    }

    let config = Config::load().into_diagnostic()?;
    let report = CalcReport {
        num1: &args.num1,
        op: args.op,
        num2: &args.num2,
        result,
    };
    if !print_structured(&report, effective_format(global.format, config.format))? {
        println!("{}", result.map(number_text).unwrap_or_default());
    }
    Ok(())
}
