//! Systematic Investment Plan projection.

use serde::Serialize;

use crate::schema::SipInput;

/// Result of a SIP projection. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SipSummary {
    /// Total amount paid in over the duration.
    pub invested: f64,
    /// Projected value at the end of the duration.
    pub final_value: f64,
    /// `final_value - invested`.
    pub wealth_gained: f64,
}

/// Projects the future value of a fixed monthly investment.
///
/// Installments are assumed to be paid at the start of each month
/// (annuity-due), the convention mutual-fund SIP calculators use:
/// `FV = A * ((1+i)^n - 1) / i * (1+i)` with monthly rate `i` over
/// `n` months. `i == 0` degenerates to `A * n`.
pub fn calculate_sip(input: &SipInput) -> SipSummary {
    let amount = input.monthly_investment();
    let n = input.duration_years() * 12;
    let i = input.annual_rate_pct() / 12.0 / 100.0;

    let invested = amount * n as f64;
    let final_value = if i == 0.0 {
        invested
    } else {
        amount * ((1.0 + i).powi(n as i32) - 1.0) / i * (1.0 + i)
    };

    SipSummary {
        invested,
        final_value,
        wealth_gained: final_value - invested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sip(amount: f64, annual_rate_pct: f64, years: u32) -> SipSummary {
        calculate_sip(&SipInput::new(amount, annual_rate_pct, years).unwrap())
    }

    #[test]
    fn test_zero_rate_returns_invested_amount() {
        let summary = sip(5000.0, 0.0, 10);
        assert_eq!(summary.invested, 5000.0 * 120.0);
        assert_eq!(summary.final_value, summary.invested);
        assert_eq!(summary.wealth_gained, 0.0);
    }

    #[test]
    fn test_positive_rate_beats_invested_amount() {
        let summary = sip(5000.0, 12.0, 10);
        assert!(summary.final_value > summary.invested);
        assert_eq!(summary.wealth_gained, summary.final_value - summary.invested);
    }

    #[test]
    fn test_single_year_magnitude() {
        // 1000/month at 12% for a year: 12 annuity-due installments at 1%.
        // FV = 1000 * (1.01^12 - 1) / 0.01 * 1.01 ~= 12809.33.
        let summary = sip(1000.0, 12.0, 1);
        assert!((summary.final_value - 12809.33).abs() < 0.01);
    }

    #[test]
    fn test_longer_duration_compounds_more() {
        let five = sip(2000.0, 10.0, 5);
        let ten = sip(2000.0, 10.0, 10);
        assert!(ten.wealth_gained > 2.0 * five.wealth_gained);
    }
}
