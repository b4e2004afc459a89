//! Equated Monthly Installment (loan amortization).

use serde::Serialize;

use crate::schema::EmiInput;

/// One row of the amortization schedule. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmiPeriod {
    /// 1-based month number.
    pub period: u32,
    /// Interest component of this month's installment.
    pub interest: f64,
    /// Principal component of this month's installment.
    pub principal: f64,
    /// Balance remaining after this installment.
    pub outstanding: f64,
}

/// Result of an EMI calculation, including the full repayment schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmiSummary {
    /// The fixed monthly installment.
    pub emi: f64,
    pub total_interest_payable: f64,
    pub total_payment: f64,
    pub schedule: Vec<EmiPeriod>,
}

/// Computes the fixed monthly installment and amortization schedule for a
/// loan.
///
/// Uses `EMI = P * r * (1+r)^n / ((1+r)^n - 1)` with the monthly periodic
/// rate `r` derived from the annual percentage rate. A zero rate degenerates
/// to the straight-line case `P / n` exactly, which the closed form cannot
/// express (it divides by `(1+r)^n - 1 == 0`).
pub fn calculate_emi(input: &EmiInput) -> EmiSummary {
    let principal = input.principal();
    let n = input.tenure_months();
    let r = input.annual_rate_pct() / 12.0 / 100.0;

    let emi = if r == 0.0 {
        principal / n as f64
    } else {
        let growth = (1.0 + r).powi(n as i32);
        principal * r * growth / (growth - 1.0)
    };

    let mut schedule = Vec::with_capacity(n as usize);
    let mut outstanding = principal;
    for period in 1..=n {
        let interest = outstanding * r;
        let principal_component = emi - interest;
        outstanding -= principal_component;
        // The closed form repays exactly; only float residue remains after
        // the last installment.
        if period == n {
            outstanding = 0.0;
        }
        schedule.push(EmiPeriod {
            period,
            interest,
            principal: principal_component,
            outstanding,
        });
    }

    let total_payment = emi * n as f64;
    EmiSummary {
        emi,
        total_interest_payable: total_payment - principal,
        total_payment,
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn emi(principal: f64, annual_rate_pct: f64, tenure_months: u32) -> EmiSummary {
        calculate_emi(&EmiInput::new(principal, annual_rate_pct, tenure_months).unwrap())
    }

    #[rstest]
    #[case(120000.0, 12)]
    #[case(50000.0, 7)]
    #[case(999.0, 1)]
    fn test_zero_rate_is_straight_line(#[case] principal: f64, #[case] months: u32) {
        let summary = emi(principal, 0.0, months);
        assert_eq!(summary.emi, principal / months as f64);
        // emi * n - principal can carry one ulp of division residue.
        assert!(summary.total_interest_payable.abs() < 1e-9);
    }

    #[test]
    fn test_known_installment() {
        // 10 lakh at 8.5% over 20 years: the standard tables give ~8678.
        let summary = emi(1_000_000.0, 8.5, 240);
        assert!((summary.emi - 8678.0).abs() < 1.0, "emi = {}", summary.emi);
    }

    #[test]
    fn test_schedule_principal_components_sum_to_principal() {
        let principal = 250_000.0;
        let summary = emi(principal, 9.0, 36);
        let repaid: f64 = summary.schedule.iter().map(|row| row.principal).sum();
        assert!((repaid - principal).abs() < 1e-6, "repaid = {repaid}");
    }

    #[test]
    fn test_schedule_shape_and_totals() {
        let summary = emi(250_000.0, 9.0, 36);
        assert_eq!(summary.schedule.len(), 36);
        assert_eq!(summary.schedule.last().unwrap().outstanding, 0.0);
        // Interest share shrinks as the balance amortizes.
        assert!(summary.schedule[0].interest > summary.schedule[35].interest);
        assert!(
            (summary.total_payment - (summary.total_interest_payable + 250_000.0)).abs() < 1e-9
        );
    }

    #[test]
    fn test_outstanding_is_monotonically_decreasing() {
        let summary = emi(100_000.0, 11.0, 24);
        let mut prev = 100_000.0;
        for row in &summary.schedule {
            assert!(row.outstanding < prev);
            prev = row.outstanding;
        }
    }
}
