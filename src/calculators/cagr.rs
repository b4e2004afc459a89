//! Compound Annual Growth Rate.

use serde::Serialize;

use crate::schema::CagrInput;

/// A labelled value for the caller's charting layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: &'static str,
    pub value: f64,
}

/// Result of a CAGR calculation. All values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CagrSummary {
    /// `(final / initial)^(1 / years) - 1`, as a fraction.
    pub absolute_cagr: f64,
    /// `absolute_cagr * 100`.
    pub percentage_cagr: f64,
    /// `final - initial`.
    pub absolute_returns: f64,
    /// Initial vs. final value, ready for a two-bar chart.
    pub bar_chart_data: Vec<ChartPoint>,
}

/// Computes the compound annual growth rate of an investment.
///
/// The input type guarantees `initial > 0` and `years > 0`, so the ratio and
/// the fractional exponent below are always well-defined.
pub fn calculate_cagr(input: &CagrInput) -> CagrSummary {
    let initial = input.initial_value();
    let final_value = input.final_value();
    let years = input.duration_years();

    let absolute_cagr = (final_value / initial).powf(1.0 / years) - 1.0;

    CagrSummary {
        absolute_cagr,
        percentage_cagr: absolute_cagr * 100.0,
        absolute_returns: final_value - initial,
        bar_chart_data: vec![
            ChartPoint { name: "Initial Value", value: initial },
            ChartPoint { name: "Final Value", value: final_value },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cagr(initial: f64, final_value: f64, years: f64) -> CagrSummary {
        calculate_cagr(&CagrInput::new(initial, final_value, years).unwrap())
    }

    #[test]
    fn test_absolute_returns_is_final_minus_initial() {
        let summary = cagr(5000.0, 25000.0, 5.0);
        assert_eq!(summary.absolute_returns, 20000.0);
    }

    #[rstest]
    #[case(1.0)]
    #[case(5.0)]
    #[case(40.0)]
    fn test_flat_investment_has_zero_cagr(#[case] years: f64) {
        let summary = cagr(10000.0, 10000.0, years);
        assert_eq!(summary.percentage_cagr, 0.0);
        assert_eq!(summary.absolute_cagr, 0.0);
        assert_eq!(summary.absolute_returns, 0.0);
    }

    #[test]
    fn test_doubling_in_one_year_is_hundred_percent() {
        let summary = cagr(1000.0, 2000.0, 1.0);
        assert!((summary.percentage_cagr - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_multi_year_growth() {
        // 5000 -> 25000 over 5 years: 5^(1/5) - 1 ~= 0.37973.
        let summary = cagr(5000.0, 25000.0, 5.0);
        assert!((summary.absolute_cagr - 0.3797296614612147).abs() < 1e-12);
    }

    #[test]
    fn test_losing_investment_has_negative_cagr() {
        let summary = cagr(10000.0, 5000.0, 3.0);
        assert!(summary.absolute_cagr < 0.0);
        assert!(summary.absolute_cagr > -1.0);
    }

    #[test]
    fn test_bar_chart_data_mirrors_inputs() {
        let summary = cagr(5000.0, 25000.0, 5.0);
        assert_eq!(
            summary.bar_chart_data,
            vec![
                ChartPoint { name: "Initial Value", value: 5000.0 },
                ChartPoint { name: "Final Value", value: 25000.0 },
            ]
        );
    }
}
