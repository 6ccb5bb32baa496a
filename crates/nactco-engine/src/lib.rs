//! OpenNAC TCO Calculation Engine
//!
//! Pure, deterministic cost comparison pipeline for network access control
//! deployments.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     CALCULATION ENGINE                              │
//! │                                                                     │
//! │  ComparisonRequest ─► Validation ─► Scale Factors                   │
//! │                                                                     │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐               │
//! │  │ Vendor Cost  │  │   Scaling    │  │  Aggregator  │               │
//! │  │    Model     │─►│   Engine     │─►│  / ROI Calc  │               │
//! │  └──────────────┘  └──────────────┘  └──────────────┘               │
//! │         ▲                                     │                     │
//! │  ┌──────────────┐                   ┌──────────────────┐            │
//! │  │   Industry   │                   │   Report Data    │            │
//! │  │   Defaults   │                   │    Projector     │            │
//! │  └──────────────┘                   └──────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every invocation takes an immutable request snapshot and returns a fresh
//! result set; there is no shared mutable state between runs.

#![allow(dead_code)]

pub mod costs;
pub mod industries;
pub mod report;
pub mod scaling;
pub mod vendors;

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nactco_common::{DiscountConfig, OrganizationProfile, TcoError, TcoResult};

pub use costs::{
    calculate_roi, calculate_savings, calculate_vendor_costs, BreakEven, CalculationResult,
    RoiMetrics, Savings, DEFAULT_DISCOUNT_RATE,
};
pub use industries::{IndustryCatalog, IndustryOverrides};
pub use report::{project, ComparisonReport, CostCategory, ReportLineItem, VendorComparison};
pub use scaling::ScaleFactors;
pub use vendors::{Architecture, VendorCatalog, VendorCostProfile};

/// Default proposed vendor id
pub const DEFAULT_PROPOSED_VENDOR: &str = "portnox";

/// One immutable calculation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub profile: OrganizationProfile,
    /// Current/competitor vendor ids to compare against the proposed one
    pub vendor_ids: Vec<String>,
    /// The cloud solution being proposed
    pub proposed_vendor: String,
    pub industry: Option<String>,
    pub discounts: DiscountConfig,
}

impl ComparisonRequest {
    /// Build a request against the default proposed vendor, no industry,
    /// no discounts
    pub fn new(profile: OrganizationProfile, vendor_ids: Vec<String>) -> Self {
        Self {
            profile,
            vendor_ids,
            proposed_vendor: DEFAULT_PROPOSED_VENDOR.into(),
            industry: None,
            discounts: DiscountConfig::none(),
        }
    }

    fn validate(&self) -> TcoResult<()> {
        self.profile.validate()?;
        self.discounts.validate()?;
        if self.vendor_ids.is_empty() {
            return Err(TcoError::InvalidProfile(
                "at least one current vendor must be selected".into(),
            ));
        }
        Ok(())
    }
}

/// Calculation engine
///
/// Holds the vendor and industry catalogs as injected configuration; no
/// ambient globals. Callers construct one instance and pass immutable
/// requests per run.
pub struct CalculationEngine {
    /// Vendor cost model
    pub vendors: Arc<VendorCatalog>,
    /// Industry defaults
    pub industries: Arc<IndustryCatalog>,
}

impl CalculationEngine {
    /// Create an engine with the built-in catalogs
    pub fn new() -> Self {
        Self {
            vendors: Arc::new(VendorCatalog::new()),
            industries: Arc::new(IndustryCatalog::new()),
        }
    }

    /// Create an engine with injected catalogs
    pub fn with_catalogs(vendors: Arc<VendorCatalog>, industries: Arc<IndustryCatalog>) -> Self {
        Self { vendors, industries }
    }

    /// Run a full comparison
    pub fn compare(&self, request: &ComparisonRequest) -> TcoResult<ComparisonReport> {
        request.validate()?;

        let factors = ScaleFactors::compute(&request.profile)?;
        let industry = request
            .industry
            .as_deref()
            .and_then(|id| self.industries.get(id));

        tracing::debug!(
            devices = request.profile.device_count,
            locations = request.profile.location_count,
            on_prem = factors.on_prem(),
            cloud = factors.cloud(),
            "computed scale factors"
        );

        let proposed_costs = self
            .vendors
            .base_costs(&request.proposed_vendor, industry.as_ref())?;
        let proposed = calculate_vendor_costs(
            &proposed_costs,
            factors.for_architecture(proposed_costs.architecture),
            request.discounts.portnox_discount_percent,
            request.profile.years_to_project,
            request.profile.legacy_device_percent,
        );

        let mut results = vec![proposed.clone()];
        let mut comparisons = Vec::new();

        for vendor_id in &request.vendor_ids {
            if vendor_id == &request.proposed_vendor {
                continue;
            }
            let vendor_costs = self.vendors.base_costs(vendor_id, industry.as_ref())?;
            let current = calculate_vendor_costs(
                &vendor_costs,
                factors.for_architecture(vendor_costs.architecture),
                request.discounts.competitor_discount_percent,
                request.profile.years_to_project,
                request.profile.legacy_device_percent,
            );

            let savings = calculate_savings(&current, &proposed);
            let roi = calculate_roi(
                proposed.total_initial_costs - current.total_initial_costs,
                current.annual_costs - proposed.annual_costs,
                request.profile.years_to_project,
                DEFAULT_DISCOUNT_RATE,
            );

            comparisons.push(VendorComparison {
                current_vendor_id: current.vendor_id.clone(),
                savings,
                roi,
            });
            results.push(current);
        }

        let line_items = project(&results);

        tracing::info!(
            run_vendors = results.len(),
            proposed = %request.proposed_vendor,
            "comparison complete"
        );

        Ok(ComparisonReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            profile: request.profile.clone(),
            size_class: request.profile.size_class(),
            scale_factors: factors,
            results,
            comparisons,
            line_items,
        })
    }
}

impl Default for CalculationEngine {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn request(vendors: &[&str]) -> ComparisonRequest {
        ComparisonRequest::new(
            OrganizationProfile::default(),
            vendors.iter().map(|v| v.to_string()).collect(),
        )
    }

    #[test]
    fn test_cisco_vs_portnox_default_scenario() {
        // 1000 devices, 3 years, default industry, no discounts
        let engine = CalculationEngine::new();
        let report = engine.compare(&request(&["cisco"])).unwrap();

        let portnox = &report.results[0];
        let cisco = &report.results[1];
        assert_eq!(portnox.vendor_id, "portnox");
        assert_eq!(cisco.vendor_id, "cisco");
        assert!(cisco.total_costs > portnox.total_costs);

        let comparison = &report.comparisons[0];
        assert!(comparison.savings.amount > Decimal::ZERO);
        assert!(comparison.savings.percentage > dec!(10));
        // Portnox is cheaper upfront too, so break-even is immediate
        assert_eq!(comparison.roi.break_even, BreakEven::Immediate);
    }

    #[test]
    fn test_idempotent_monetary_outputs() {
        let engine = CalculationEngine::new();
        let req = request(&["cisco", "aruba"]);
        let a = engine.compare(&req).unwrap();
        let b = engine.compare(&req).unwrap();
        assert_eq!(a.results, b.results);
        assert_eq!(a.comparisons, b.comparisons);
        assert_eq!(a.line_items, b.line_items);
    }

    #[test]
    fn test_portnox_discount_monotonicity() {
        let engine = CalculationEngine::new();
        let base_req = request(&["cisco"]);
        let mut discounted_req = base_req.clone();
        discounted_req.discounts.portnox_discount_percent = dec!(40);

        let base = engine.compare(&base_req).unwrap();
        let discounted = engine.compare(&discounted_req).unwrap();

        // Portnox annual cost strictly decreases, Cisco is untouched
        assert!(discounted.results[0].annual_costs < base.results[0].annual_costs);
        assert_eq!(discounted.results[1].annual_costs, base.results[1].annual_costs);
        assert!(discounted.comparisons[0].savings.amount > base.comparisons[0].savings.amount);
    }

    #[test]
    fn test_unknown_vendor_surfaces() {
        let engine = CalculationEngine::new();
        let err = engine.compare(&request(&["packetfence"])).unwrap_err();
        assert!(matches!(err, TcoError::UnknownVendor(_)));
    }

    #[test]
    fn test_invalid_profile_surfaces() {
        let engine = CalculationEngine::new();
        let mut req = request(&["cisco"]);
        req.profile.years_to_project = 0;
        assert!(matches!(
            engine.compare(&req).unwrap_err(),
            TcoError::InvalidProfile(_)
        ));
    }

    #[test]
    fn test_industry_override_raises_downtime_exposure() {
        let engine = CalculationEngine::new();
        let default_run = engine.compare(&request(&["cisco"])).unwrap();

        let mut finance_req = request(&["cisco"]);
        finance_req.industry = Some("finance".into());
        let finance_run = engine.compare(&finance_req).unwrap();

        let default_cisco = &default_run.results[1];
        let finance_cisco = &finance_run.results[1];
        assert!(finance_cisco.downtime > default_cisco.downtime);
        assert!(finance_cisco.total_costs > default_cisco.total_costs);
    }

    #[test]
    fn test_unknown_industry_falls_back_to_vendor_defaults() {
        let engine = CalculationEngine::new();
        let mut req = request(&["cisco"]);
        req.industry = Some("agriculture".into());
        let report = engine.compare(&req).unwrap();
        let baseline = engine.compare(&request(&["cisco"])).unwrap();
        assert_eq!(report.results, baseline.results);
    }

    #[test]
    fn test_proposed_vendor_not_duplicated() {
        let engine = CalculationEngine::new();
        let report = engine.compare(&request(&["portnox", "cisco"])).unwrap();
        let portnox_count = report
            .results
            .iter()
            .filter(|r| r.vendor_id == "portnox")
            .count();
        assert_eq!(portnox_count, 1);
        assert_eq!(report.comparisons.len(), 1);
    }

    #[test]
    fn test_serializes_to_json() {
        let engine = CalculationEngine::new();
        let report = engine.compare(&request(&["cisco"])).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"portnox\""));
        assert!(json.contains("network_redesign"));
    }
}
