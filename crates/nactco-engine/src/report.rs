//! Report Data Projector
//!
//! Shapes calculation results into the flat line items consumed by chart
//! and PDF collaborators. Formatting and cent rounding only; costs are
//! never re-derived here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nactco_common::{OrgSizeClass, OrganizationProfile};

use crate::costs::{CalculationResult, RoiMetrics, Savings};
use crate::scaling::ScaleFactors;

/// Cost categories in canonical report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Hardware,
    NetworkRedesign,
    Implementation,
    Training,
    Migration,
    Maintenance,
    Licensing,
    Personnel,
    Downtime,
    Total,
}

impl CostCategory {
    /// Canonical report ordering
    pub const ORDER: [CostCategory; 10] = [
        CostCategory::Hardware,
        CostCategory::NetworkRedesign,
        CostCategory::Implementation,
        CostCategory::Training,
        CostCategory::Migration,
        CostCategory::Maintenance,
        CostCategory::Licensing,
        CostCategory::Personnel,
        CostCategory::Downtime,
        CostCategory::Total,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Hardware => "Hardware",
            CostCategory::NetworkRedesign => "Network Redesign",
            CostCategory::Implementation => "Implementation",
            CostCategory::Training => "Training",
            CostCategory::Migration => "Migration",
            CostCategory::Maintenance => "Maintenance",
            CostCategory::Licensing => "Licensing",
            CostCategory::Personnel => "Personnel",
            CostCategory::Downtime => "Downtime",
            CostCategory::Total => "Total",
        }
    }
}

/// One line of the projected report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLineItem {
    pub vendor_id: String,
    pub category: CostCategory,
    pub label: String,
    /// Amount over the projection window, rounded to the cent
    pub amount: Decimal,
}

/// Savings and ROI of one competitor measured against the proposed vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorComparison {
    pub current_vendor_id: String,
    pub savings: Savings,
    pub roi: RoiMetrics,
}

/// Full output of one comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub profile: OrganizationProfile,
    pub size_class: OrgSizeClass,
    pub scale_factors: ScaleFactors,
    pub results: Vec<CalculationResult>,
    pub comparisons: Vec<VendorComparison>,
    pub line_items: Vec<ReportLineItem>,
}

/// Project results into flat line items, canonical order per vendor
///
/// Annual categories are carried over the result's projection window so
/// the per-category lines add up to the total line.
pub fn project(results: &[CalculationResult]) -> Vec<ReportLineItem> {
    let mut items = Vec::with_capacity(results.len() * CostCategory::ORDER.len());
    for result in results {
        for category in CostCategory::ORDER {
            items.push(ReportLineItem {
                vendor_id: result.vendor_id.clone(),
                category,
                label: category.label().to_string(),
                amount: window_amount(result, category).round_dp(2),
            });
        }
    }
    items
}

fn window_amount(result: &CalculationResult, category: CostCategory) -> Decimal {
    let years = Decimal::from(result.years);
    match category {
        CostCategory::Hardware => result.hardware,
        CostCategory::NetworkRedesign => result.network_redesign,
        CostCategory::Implementation => result.implementation,
        CostCategory::Training => result.training,
        CostCategory::Migration => result.migration,
        CostCategory::Maintenance => result.maintenance * years,
        CostCategory::Licensing => result.licensing * years,
        CostCategory::Personnel => result.personnel * years,
        CostCategory::Downtime => result.downtime * years,
        CostCategory::Total => result.total_costs,
    }
}
