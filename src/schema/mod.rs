//! Validated input records for the calculators.
//!
//! Form values arrive from the UI as loosely-typed field bags; the boundary
//! between that world and the formula layer is here. Each record validates
//! its fields on construction, so a successfully built value carries its
//! preconditions with it and the formulas never have to re-check them
//! (division by a zero duration, log of a non-positive ratio, and so on are
//! unrepresentable at the call site).
//!
//! Fields are private on purpose: mutation would bypass validation.

use serde::Serialize;
use thiserror::Error;

/// Rejection of a calculator input field at the validation boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },
    #[error("cashflow series needs at least two entries (got {len})")]
    TooFewCashflows { len: usize },
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotPositive { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::Negative { field, value })
    }
}

fn require_count(field: &'static str, value: u32) -> Result<u32, InputError> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(InputError::ZeroCount { field })
    }
}

/// Inputs for the CAGR calculator.
///
/// `initial_value > 0` and `duration_years > 0` are required; the CAGR
/// formula divides by both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CagrInput {
    initial_value: f64,
    final_value: f64,
    duration_years: f64,
}

impl CagrInput {
    pub fn new(initial_value: f64, final_value: f64, duration_years: f64) -> Result<Self, InputError> {
        Ok(Self {
            initial_value: require_positive("initial_value", initial_value)?,
            final_value: require_positive("final_value", final_value)?,
            duration_years: require_positive("duration_years", duration_years)?,
        })
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    pub fn final_value(&self) -> f64 {
        self.final_value
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_years
    }
}

/// Inputs for the loan EMI calculator.
///
/// The rate is the *annual* percentage rate; conversion to the monthly
/// periodic rate happens inside the calculator. A zero rate is valid and
/// selects the straight-line repayment case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmiInput {
    principal: f64,
    annual_rate_pct: f64,
    tenure_months: u32,
}

impl EmiInput {
    pub fn new(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> Result<Self, InputError> {
        Ok(Self {
            principal: require_positive("principal", principal)?,
            annual_rate_pct: require_non_negative("annual_rate_pct", annual_rate_pct)?,
            tenure_months: require_count("tenure_months", tenure_months)?,
        })
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_pct(&self) -> f64 {
        self.annual_rate_pct
    }

    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }
}

/// Inputs for the SIP projection calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SipInput {
    monthly_investment: f64,
    annual_rate_pct: f64,
    duration_years: u32,
}

impl SipInput {
    pub fn new(monthly_investment: f64, annual_rate_pct: f64, duration_years: u32) -> Result<Self, InputError> {
        Ok(Self {
            monthly_investment: require_positive("monthly_investment", monthly_investment)?,
            annual_rate_pct: require_non_negative("annual_rate_pct", annual_rate_pct)?,
            duration_years: require_count("duration_years", duration_years)?,
        })
    }

    pub fn monthly_investment(&self) -> f64 {
        self.monthly_investment
    }

    pub fn annual_rate_pct(&self) -> f64 {
        self.annual_rate_pct
    }

    pub fn duration_years(&self) -> u32 {
        self.duration_years
    }
}

/// A series of equally-spaced cashflows for the IRR calculator.
///
/// Index 0 is period 0 (conventionally the initial outflow, negative).
/// At least two entries are required; a series whose entries never change
/// sign has no internal rate of return, but that is detected during the
/// root search, not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashflowSeries {
    flows: Vec<f64>,
}

impl CashflowSeries {
    pub fn new(flows: Vec<f64>) -> Result<Self, InputError> {
        if flows.len() < 2 {
            return Err(InputError::TooFewCashflows { len: flows.len() });
        }
        Ok(Self { flows })
    }

    pub fn flows(&self) -> &[f64] {
        &self.flows
    }
}
