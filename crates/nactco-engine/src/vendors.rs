//! Vendor Cost Model

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use nactco_common::{TcoError, TcoResult};

use crate::industries::IndustryOverrides;

/// Deployment architecture of a NAC product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    OnPrem,
    CloudNative,
}

/// Per-vendor base cost profile
///
/// All monetary fields are baseline amounts for a 1000-device, single-site
/// deployment; the scaling engine stretches them to the organization's
/// actual footprint. Cloud-native profiles carry zero hardware cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorCostProfile {
    pub id: String,
    pub name: String,
    pub architecture: Architecture,
    /// One-time appliance/server spend
    pub hardware_cost: Decimal,
    /// One-time switch/VLAN redesign work
    pub network_redesign_cost: Decimal,
    /// One-time deployment services
    pub implementation_cost: Decimal,
    /// One-time admin training
    pub training_cost: Decimal,
    /// One-time migration off the incumbent solution
    pub migration_cost: Decimal,
    /// Annual subscription/licensing
    pub licensing_cost: Decimal,
    /// Annual hardware and software maintenance
    pub maintenance_cost: Decimal,
    /// Annual FTE-equivalent administration cost
    pub personnel_cost: Decimal,
    /// Cost of one hour of NAC-related outage
    pub downtime_cost_per_hour: Decimal,
    /// Expected NAC-related outage hours per year
    pub annual_downtime_hours: Decimal,
}

impl VendorCostProfile {
    /// Apply a partial industry override, keeping vendor defaults for
    /// fields the industry record leaves absent
    pub fn with_industry(&self, industry: &IndustryOverrides) -> Self {
        let mut out = self.clone();
        if let Some(v) = industry.hardware_cost {
            out.hardware_cost = v;
        }
        if let Some(v) = industry.licensing_cost {
            out.licensing_cost = v;
        }
        if let Some(v) = industry.maintenance_cost {
            out.maintenance_cost = v;
        }
        if let Some(v) = industry.implementation_cost {
            out.implementation_cost = v;
        }
        if let Some(v) = industry.personnel_cost {
            out.personnel_cost = v;
        }
        if let Some(v) = industry.downtime_cost_per_hour {
            out.downtime_cost_per_hour = v;
        }
        if let Some(v) = industry.annual_downtime_hours {
            out.annual_downtime_hours = v;
        }
        out
    }
}

/// Vendor catalog
pub struct VendorCatalog {
    vendors: Arc<RwLock<HashMap<String, VendorCostProfile>>>,
}

impl VendorCatalog {
    pub fn new() -> Self {
        let catalog = Self {
            vendors: Arc::new(RwLock::new(HashMap::new())),
        };
        catalog.load_default_vendors();
        catalog
    }

    fn load_default_vendors(&self) {
        let mut vendors = self.vendors.write();

        vendors.insert("portnox".into(), VendorCostProfile {
            id: "portnox".into(),
            name: "Portnox Cloud".into(),
            architecture: Architecture::CloudNative,
            hardware_cost: dec!(0),
            network_redesign_cost: dec!(0),
            implementation_cost: dec!(15000),
            training_cost: dec!(3000),
            migration_cost: dec!(7500),
            licensing_cost: dec!(42000),
            maintenance_cost: dec!(0),
            personnel_cost: dec!(50000),
            downtime_cost_per_hour: dec!(2500),
            annual_downtime_hours: dec!(4),
        });

        vendors.insert("cisco".into(), VendorCostProfile {
            id: "cisco".into(),
            name: "Cisco ISE".into(),
            architecture: Architecture::OnPrem,
            hardware_cost: dec!(130000),
            network_redesign_cost: dec!(30000),
            implementation_cost: dec!(95000),
            training_cost: dec!(12500),
            migration_cost: dec!(25000),
            licensing_cost: dec!(85000),
            maintenance_cost: dec!(26000),
            personnel_cost: dec!(200000),
            downtime_cost_per_hour: dec!(5000),
            annual_downtime_hours: dec!(24),
        });

        vendors.insert("aruba".into(), VendorCostProfile {
            id: "aruba".into(),
            name: "Aruba ClearPass".into(),
            architecture: Architecture::OnPrem,
            hardware_cost: dec!(110000),
            network_redesign_cost: dec!(25000),
            implementation_cost: dec!(80000),
            training_cost: dec!(10000),
            migration_cost: dec!(20000),
            licensing_cost: dec!(72000),
            maintenance_cost: dec!(22000),
            personnel_cost: dec!(175000),
            downtime_cost_per_hour: dec!(4500),
            annual_downtime_hours: dec!(20),
        });

        vendors.insert("forescout".into(), VendorCostProfile {
            id: "forescout".into(),
            name: "Forescout Platform".into(),
            architecture: Architecture::OnPrem,
            hardware_cost: dec!(120000),
            network_redesign_cost: dec!(27500),
            implementation_cost: dec!(85000),
            training_cost: dec!(11000),
            migration_cost: dec!(22500),
            licensing_cost: dec!(80000),
            maintenance_cost: dec!(24000),
            personnel_cost: dec!(180000),
            downtime_cost_per_hour: dec!(5000),
            annual_downtime_hours: dec!(22),
        });

        vendors.insert("fortinac".into(), VendorCostProfile {
            id: "fortinac".into(),
            name: "FortiNAC".into(),
            architecture: Architecture::OnPrem,
            hardware_cost: dec!(90000),
            network_redesign_cost: dec!(20000),
            implementation_cost: dec!(65000),
            training_cost: dec!(8500),
            migration_cost: dec!(17500),
            licensing_cost: dec!(60000),
            maintenance_cost: dec!(18000),
            personnel_cost: dec!(150000),
            downtime_cost_per_hour: dec!(4000),
            annual_downtime_hours: dec!(18),
        });

        // NPS is nearly free to license but costly to run and fragile
        vendors.insert("microsoft".into(), VendorCostProfile {
            id: "microsoft".into(),
            name: "Microsoft NPS".into(),
            architecture: Architecture::OnPrem,
            hardware_cost: dec!(35000),
            network_redesign_cost: dec!(15000),
            implementation_cost: dec!(45000),
            training_cost: dec!(6000),
            migration_cost: dec!(12500),
            licensing_cost: dec!(12000),
            maintenance_cost: dec!(7000),
            personnel_cost: dec!(125000),
            downtime_cost_per_hour: dec!(4000),
            annual_downtime_hours: dec!(30),
        });

        vendors.insert("securew2".into(), VendorCostProfile {
            id: "securew2".into(),
            name: "SecureW2".into(),
            architecture: Architecture::CloudNative,
            hardware_cost: dec!(0),
            network_redesign_cost: dec!(0),
            implementation_cost: dec!(32500),
            training_cost: dec!(5000),
            migration_cost: dec!(10000),
            licensing_cost: dec!(55000),
            maintenance_cost: dec!(0),
            personnel_cost: dec!(75000),
            downtime_cost_per_hour: dec!(3000),
            annual_downtime_hours: dec!(8),
        });
    }

    /// Get vendor profile
    pub fn get(&self, vendor_id: &str) -> Option<VendorCostProfile> {
        self.vendors.read().get(vendor_id).cloned()
    }

    /// Get all vendor profiles, sorted by id
    pub fn all(&self) -> Vec<VendorCostProfile> {
        let mut all: Vec<_> = self.vendors.read().values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Register or replace a vendor profile
    pub fn insert(&self, profile: VendorCostProfile) {
        self.vendors.write().insert(profile.id.clone(), profile);
    }

    /// Resolve base costs for a vendor, with optional industry overrides
    ///
    /// Unknown vendors are an error, never a silent zero-cost profile.
    pub fn base_costs(
        &self,
        vendor_id: &str,
        industry: Option<&IndustryOverrides>,
    ) -> TcoResult<VendorCostProfile> {
        let profile = self
            .get(vendor_id)
            .ok_or_else(|| TcoError::UnknownVendor(vendor_id.to_string()))?;

        Ok(match industry {
            Some(ind) => profile.with_industry(ind),
            None => profile,
        })
    }
}

impl Default for VendorCatalog {
    fn default() -> Self { Self::new() }
}
