//! Industry Defaults
//!
//! Partial per-industry cost overrides. A field that is present replaces
//! the vendor default; an absent field keeps it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Partial cost overrides for one industry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryOverrides {
    pub id: String,
    pub name: String,
    pub hardware_cost: Option<Decimal>,
    pub licensing_cost: Option<Decimal>,
    pub maintenance_cost: Option<Decimal>,
    pub implementation_cost: Option<Decimal>,
    pub personnel_cost: Option<Decimal>,
    pub downtime_cost_per_hour: Option<Decimal>,
    pub annual_downtime_hours: Option<Decimal>,
}

impl IndustryOverrides {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Industry catalog
pub struct IndustryCatalog {
    industries: Arc<RwLock<HashMap<String, IndustryOverrides>>>,
}

impl IndustryCatalog {
    pub fn new() -> Self {
        let catalog = Self {
            industries: Arc::new(RwLock::new(HashMap::new())),
        };
        catalog.load_default_industries();
        catalog
    }

    fn load_default_industries(&self) {
        let mut industries = self.industries.write();

        // Downtime exposure is the industry-wide knob; regulated sectors
        // pay far more per outage hour than the vendor-table defaults.
        industries.insert("healthcare".into(), IndustryOverrides {
            downtime_cost_per_hour: Some(dec!(8000)),
            ..IndustryOverrides::new("healthcare", "Healthcare")
        });

        industries.insert("finance".into(), IndustryOverrides {
            downtime_cost_per_hour: Some(dec!(12000)),
            personnel_cost: Some(dec!(220000)),
            ..IndustryOverrides::new("finance", "Financial Services")
        });

        industries.insert("government".into(), IndustryOverrides {
            downtime_cost_per_hour: Some(dec!(6000)),
            annual_downtime_hours: Some(dec!(30)),
            ..IndustryOverrides::new("government", "Government")
        });

        industries.insert("education".into(), IndustryOverrides {
            downtime_cost_per_hour: Some(dec!(2500)),
            ..IndustryOverrides::new("education", "Education")
        });

        industries.insert("retail".into(), IndustryOverrides {
            downtime_cost_per_hour: Some(dec!(6500)),
            ..IndustryOverrides::new("retail", "Retail")
        });

        industries.insert("manufacturing".into(), IndustryOverrides {
            downtime_cost_per_hour: Some(dec!(7500)),
            annual_downtime_hours: Some(dec!(28)),
            ..IndustryOverrides::new("manufacturing", "Manufacturing")
        });

        industries.insert("technology".into(), IndustryOverrides {
            downtime_cost_per_hour: Some(dec!(5500)),
            ..IndustryOverrides::new("technology", "Technology")
        });
    }

    /// Get industry overrides; unknown ids fall back to vendor defaults
    pub fn get(&self, industry_id: &str) -> Option<IndustryOverrides> {
        self.industries.read().get(industry_id).cloned()
    }

    /// Get all industries, sorted by id
    pub fn all(&self) -> Vec<IndustryOverrides> {
        let mut all: Vec<_> = self.industries.read().values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Register or replace an industry record
    pub fn insert(&self, industry: IndustryOverrides) {
        self.industries.write().insert(industry.id.clone(), industry);
    }
}

impl Default for IndustryCatalog {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_industries_present() {
        let catalog = IndustryCatalog::new();
        for id in ["healthcare", "finance", "government", "education", "retail", "manufacturing", "technology"] {
            assert!(catalog.get(id).is_some(), "missing industry {}", id);
        }
    }

    #[test]
    fn test_unknown_industry_is_none() {
        let catalog = IndustryCatalog::new();
        assert!(catalog.get("agriculture").is_none());
    }

    #[test]
    fn test_overrides_are_partial() {
        let catalog = IndustryCatalog::new();
        let healthcare = catalog.get("healthcare").unwrap();
        assert!(healthcare.downtime_cost_per_hour.is_some());
        assert!(healthcare.hardware_cost.is_none());
        assert!(healthcare.licensing_cost.is_none());
    }
}
