//! Aggregator / ROI Calculator
//!
//! Combines a vendor cost profile, a composite scale factor and a licensing
//! discount into a per-vendor cost breakdown, then derives savings,
//! break-even and NPV across vendors.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::vendors::{Architecture, VendorCostProfile};

/// Default annual discount rate for NPV
pub const DEFAULT_DISCOUNT_RATE: Decimal = dec!(0.10);

/// Per-vendor, per-run cost breakdown
///
/// One-time categories are totals; maintenance/licensing/personnel/downtime
/// are annual amounts. `total_costs` covers the full projection window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub vendor_id: String,
    pub vendor_name: String,
    pub architecture: Architecture,
    pub years: u32,
    pub hardware: Decimal,
    pub network_redesign: Decimal,
    pub implementation: Decimal,
    pub training: Decimal,
    pub migration: Decimal,
    pub maintenance: Decimal,
    pub licensing: Decimal,
    pub personnel: Decimal,
    pub downtime: Decimal,
    pub total_initial_costs: Decimal,
    pub annual_costs: Decimal,
    pub total_costs: Decimal,
}

/// Calculate a vendor's scaled cost breakdown over the projection window
///
/// The discount applies to the licensing/subscription category only;
/// one-time categories and the other recurring categories are never
/// discounted. The legacy-device share uplifts downtime exposure.
pub fn calculate_vendor_costs(
    costs: &VendorCostProfile,
    scale: f64,
    licensing_discount_percent: Decimal,
    years: u32,
    legacy_device_percent: u8,
) -> CalculationResult {
    let scale = Decimal::from_f64(scale).unwrap_or(Decimal::ONE);
    let discount = Decimal::ONE - licensing_discount_percent / dec!(100);
    let legacy_uplift = Decimal::ONE + Decimal::from(legacy_device_percent) / dec!(200);

    let hardware = costs.hardware_cost * scale;
    let network_redesign = costs.network_redesign_cost * scale;
    let implementation = costs.implementation_cost * scale;
    let training = costs.training_cost * scale;
    let migration = costs.migration_cost * scale;

    let maintenance = costs.maintenance_cost * scale;
    let licensing = costs.licensing_cost * discount * scale;
    let personnel = costs.personnel_cost * scale;
    let downtime =
        costs.downtime_cost_per_hour * costs.annual_downtime_hours * legacy_uplift * scale;

    let total_initial_costs = hardware + network_redesign + implementation + training + migration;
    let annual_costs = maintenance + licensing + personnel + downtime;
    let total_costs = total_initial_costs + annual_costs * Decimal::from(years);

    CalculationResult {
        vendor_id: costs.id.clone(),
        vendor_name: costs.name.clone(),
        architecture: costs.architecture,
        years,
        hardware,
        network_redesign,
        implementation,
        training,
        migration,
        maintenance,
        licensing,
        personnel,
        downtime,
        total_initial_costs,
        annual_costs,
        total_costs,
    }
}

/// Savings of the proposed solution relative to the current one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub amount: Decimal,
    pub percentage: Decimal,
}

/// Compute savings of switching from `current` to `proposed`
///
/// A zero-cost current vendor reports 0% savings; this is a legitimate
/// input state, not an arithmetic error.
pub fn calculate_savings(current: &CalculationResult, proposed: &CalculationResult) -> Savings {
    let amount = current.total_costs - proposed.total_costs;
    let percentage = if current.total_costs.is_zero() {
        Decimal::ZERO
    } else {
        amount / current.total_costs * dec!(100)
    };
    Savings { amount, percentage }
}

/// Break-even point for the initial investment delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEven {
    /// No positive initial investment to recover
    Immediate,
    /// Months until cumulative savings cover the initial delta
    Months(u32),
}

/// ROI metrics for adopting the proposed solution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    pub break_even: BreakEven,
    pub npv: Decimal,
}

/// Compute break-even time and NPV
///
/// `initial_investment_delta` is proposed initial costs minus current
/// initial costs. Non-positive annual savings or a non-positive delta mean
/// break-even is immediate; NPV is computed either way.
pub fn calculate_roi(
    initial_investment_delta: Decimal,
    annual_savings: Decimal,
    years: u32,
    discount_rate: Decimal,
) -> RoiMetrics {
    let break_even = if annual_savings <= Decimal::ZERO
        || initial_investment_delta <= Decimal::ZERO
    {
        BreakEven::Immediate
    } else {
        let monthly = annual_savings / dec!(12);
        let months = (initial_investment_delta / monthly).ceil();
        BreakEven::Months(months.to_u32().unwrap_or(u32::MAX))
    };

    let mut npv = -initial_investment_delta;
    let mut factor = Decimal::ONE;
    for _ in 0..years {
        factor /= Decimal::ONE + discount_rate;
        npv += annual_savings * factor;
    }

    RoiMetrics { break_even, npv }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendors::VendorCatalog;

    fn cisco() -> VendorCostProfile {
        VendorCatalog::new().get("cisco").unwrap()
    }

    fn portnox() -> VendorCostProfile {
        VendorCatalog::new().get("portnox").unwrap()
    }

    #[test]
    fn test_total_is_initial_plus_annual_times_years() {
        for years in [1, 3, 5, 10] {
            let result = calculate_vendor_costs(&cisco(), 1.43, Decimal::ZERO, years, 0);
            assert_eq!(
                result.total_costs,
                result.total_initial_costs + result.annual_costs * Decimal::from(years),
            );
        }
    }

    #[test]
    fn test_initial_costs_independent_of_years() {
        let one = calculate_vendor_costs(&cisco(), 1.0, Decimal::ZERO, 1, 0);
        let five = calculate_vendor_costs(&cisco(), 1.0, Decimal::ZERO, 5, 0);
        assert_eq!(one.total_initial_costs, five.total_initial_costs);
        assert_eq!(one.annual_costs, five.annual_costs);
        assert!(five.total_costs > one.total_costs);
    }

    #[test]
    fn test_discount_hits_licensing_only() {
        let base = calculate_vendor_costs(&portnox(), 1.0, Decimal::ZERO, 3, 0);
        let discounted = calculate_vendor_costs(&portnox(), 1.0, dec!(40), 3, 0);

        assert_eq!(discounted.licensing, base.licensing * dec!(0.6));
        assert_eq!(discounted.personnel, base.personnel);
        assert_eq!(discounted.implementation, base.implementation);
        assert_eq!(discounted.total_initial_costs, base.total_initial_costs);
        assert!(discounted.annual_costs < base.annual_costs);
    }

    #[test]
    fn test_legacy_share_uplifts_downtime_only() {
        let clean = calculate_vendor_costs(&cisco(), 1.0, Decimal::ZERO, 3, 0);
        let legacy = calculate_vendor_costs(&cisco(), 1.0, Decimal::ZERO, 3, 100);

        assert_eq!(legacy.downtime, clean.downtime * dec!(1.5));
        assert_eq!(legacy.licensing, clean.licensing);
        assert_eq!(legacy.maintenance, clean.maintenance);
    }

    #[test]
    fn test_savings_basic() {
        let current = calculate_vendor_costs(&cisco(), 1.43, Decimal::ZERO, 3, 0);
        let proposed = calculate_vendor_costs(&portnox(), 1.15, Decimal::ZERO, 3, 0);
        let savings = calculate_savings(&current, &proposed);
        assert!(savings.amount > Decimal::ZERO);
        assert!(savings.percentage > Decimal::ZERO);
        assert!(savings.percentage < dec!(100));
    }

    #[test]
    fn test_zero_cost_current_reports_zero_percent() {
        let mut current = calculate_vendor_costs(&cisco(), 1.0, Decimal::ZERO, 3, 0);
        current.total_costs = Decimal::ZERO;
        let proposed = calculate_vendor_costs(&portnox(), 1.0, Decimal::ZERO, 3, 0);

        let savings = calculate_savings(&current, &proposed);
        assert_eq!(savings.percentage, Decimal::ZERO);
        assert_eq!(savings.amount, -proposed.total_costs);
    }

    #[test]
    fn test_break_even_months() {
        // $60k extra upfront, $120k/year back: ceil(60000 / 10000) = 6 months
        let roi = calculate_roi(dec!(60000), dec!(120000), 3, DEFAULT_DISCOUNT_RATE);
        assert_eq!(roi.break_even, BreakEven::Months(6));
        assert!(roi.npv > Decimal::ZERO);
    }

    #[test]
    fn test_break_even_rounds_up() {
        let roi = calculate_roi(dec!(65000), dec!(120000), 3, DEFAULT_DISCOUNT_RATE);
        assert_eq!(roi.break_even, BreakEven::Months(7));
    }

    #[test]
    fn test_negative_delta_is_immediate() {
        let roi = calculate_roi(dec!(-25000), dec!(120000), 3, DEFAULT_DISCOUNT_RATE);
        assert_eq!(roi.break_even, BreakEven::Immediate);
        // NPV still proceeds with the non-positive delta
        assert!(roi.npv > dec!(25000));
    }

    #[test]
    fn test_non_positive_savings_is_immediate() {
        let roi = calculate_roi(dec!(60000), Decimal::ZERO, 3, DEFAULT_DISCOUNT_RATE);
        assert_eq!(roi.break_even, BreakEven::Immediate);
        assert_eq!(roi.npv, dec!(-60000));
    }

    #[test]
    fn test_npv_discounts_future_savings() {
        let roi = calculate_roi(Decimal::ZERO, dec!(110000), 1, DEFAULT_DISCOUNT_RATE);
        // 110000 / 1.1 = 100000, modulo division rounding in the last digits
        let drift = (roi.npv - dec!(100000)).abs();
        assert!(drift < dec!(0.01), "npv {}", roi.npv);
    }
}
