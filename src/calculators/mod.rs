//! Standalone financial calculators.
//!
//! All functions here are pure and deterministic over their validated input
//! types (see [`crate::schema`]). Intermediate arithmetic stays in raw `f64`
//! with no rounding; summaries carry the unrounded values, and
//! [`round_to_cents`] is applied only when a value is about to be displayed.

pub mod cagr;
pub mod emi;
pub mod irr;
pub mod sip;

pub use cagr::{calculate_cagr, CagrSummary, ChartPoint};
pub use emi::{calculate_emi, EmiPeriod, EmiSummary};
pub use irr::{internal_rate_of_return, net_present_value};
pub use sip::{calculate_sip, SipSummary};

/// Rounds a monetary or percentage value to two decimal places for display.
///
/// Display-only: never fold this back into a further computation.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1234.5678), 1234.57);
        assert_eq!(round_to_cents(0.1 + 0.2), 0.3);
        assert_eq!(round_to_cents(-2.344), -2.34);
        assert_eq!(round_to_cents(0.0), 0.0);
    }
}
