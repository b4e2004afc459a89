//! Internal rate of return for a periodic cashflow series.

use crate::schema::CashflowSeries;

// Bracket for the bisection. Rates below -100% are meaningless and the NPV
// of any realistic series is monotone well before +1000%.
const RATE_LO: f64 = -0.9999;
const RATE_HI: f64 = 10.0;
const TOLERANCE: f64 = 1e-9;
const MAX_ITERATIONS: u32 = 200;

/// Net present value of `flows` at the given periodic `rate`, with index 0
/// discounted by `(1 + rate)^0 = 1`.
pub fn net_present_value(rate: f64, flows: &[f64]) -> f64 {
    flows
        .iter()
        .enumerate()
        .map(|(period, &flow)| flow / (1.0 + rate).powi(period as i32))
        .sum()
}

/// Finds the periodic rate at which the series' net present value is zero.
///
/// Solved by bisection on the NPV sign change within `[-99.99%, 1000%]`.
/// Returns `None` when the NPV has the same sign at both bracket ends, i.e.
/// the series has no root there (for example, all-positive flows). A series
/// with multiple sign changes can have several mathematically valid roots;
/// this returns whichever one the bisection converges to.
pub fn internal_rate_of_return(series: &CashflowSeries) -> Option<f64> {
    let flows = series.flows();
    let mut lo = RATE_LO;
    let mut hi = RATE_HI;
    let npv_lo = net_present_value(lo, flows);
    let npv_hi = net_present_value(hi, flows);

    if npv_lo == 0.0 {
        return Some(lo);
    }
    if npv_hi == 0.0 {
        return Some(hi);
    }
    if npv_lo.signum() == npv_hi.signum() {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        let npv_mid = net_present_value(mid, flows);
        if npv_mid == 0.0 || (hi - lo) / 2.0 < TOLERANCE {
            return Some(mid);
        }
        if npv_mid.signum() == npv_lo.signum() {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Some((lo + hi) / 2.0)
}
