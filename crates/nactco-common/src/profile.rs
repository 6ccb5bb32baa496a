//! Organization profile and discount configuration

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{TcoError, TcoResult};

/// Organization size class derived from device count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgSizeClass {
    Small,
    Medium,
    Large,
}

impl OrgSizeClass {
    /// Derive size class from device count
    pub fn from_devices(device_count: u32) -> Self {
        match device_count {
            0..=1000 => OrgSizeClass::Small,
            1001..=5000 => OrgSizeClass::Medium,
            _ => OrgSizeClass::Large,
        }
    }
}

/// Organization parameters for one calculation run
///
/// Immutable once constructed; a parameter change produces a new profile,
/// never an in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationProfile {
    /// Managed endpoint count
    pub device_count: u32,
    /// Physical site count
    pub location_count: u32,
    /// Projection horizon in years (1-10)
    pub years_to_project: u32,
    /// Share of devices without modern agents/certificates (0-100)
    pub legacy_device_percent: u8,
    /// Regulatory burden level (1-5)
    pub compliance_complexity: u8,
    /// Rollout difficulty level (1-5)
    pub implementation_complexity: u8,
    /// Annual fully-loaded cost of one network admin, in dollars
    pub annual_staff_cost: u64,
}

impl OrganizationProfile {
    /// Size class derived from the device count
    pub fn size_class(&self) -> OrgSizeClass {
        OrgSizeClass::from_devices(self.device_count)
    }

    /// Check all fields against their domains
    pub fn validate(&self) -> TcoResult<()> {
        if self.device_count < 1 {
            return Err(TcoError::InvalidProfile("device count must be at least 1".into()));
        }
        if self.location_count < 1 {
            return Err(TcoError::InvalidProfile("location count must be at least 1".into()));
        }
        if !(1..=10).contains(&self.years_to_project) {
            return Err(TcoError::InvalidProfile(format!(
                "years to project must be 1-10, got {}",
                self.years_to_project
            )));
        }
        if self.legacy_device_percent > 100 {
            return Err(TcoError::InvalidProfile(format!(
                "legacy device percent must be 0-100, got {}",
                self.legacy_device_percent
            )));
        }
        if !(1..=5).contains(&self.compliance_complexity) {
            return Err(TcoError::InvalidProfile(format!(
                "compliance complexity must be 1-5, got {}",
                self.compliance_complexity
            )));
        }
        if !(1..=5).contains(&self.implementation_complexity) {
            return Err(TcoError::InvalidProfile(format!(
                "implementation complexity must be 1-5, got {}",
                self.implementation_complexity
            )));
        }
        if self.annual_staff_cost == 0 {
            return Err(TcoError::InvalidProfile("annual staff cost must be positive".into()));
        }
        Ok(())
    }
}

impl Default for OrganizationProfile {
    fn default() -> Self {
        Self {
            device_count: 1000,
            location_count: 1,
            years_to_project: 3,
            legacy_device_percent: 0,
            compliance_complexity: 3,
            implementation_complexity: 3,
            annual_staff_cost: 100_000,
        }
    }
}

/// Vendor discounts, applied to the licensing/subscription category only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Discount on the proposed cloud solution (0-40%)
    pub portnox_discount_percent: Decimal,
    /// Discount on competitor licensing (0-25%)
    pub competitor_discount_percent: Decimal,
}

impl DiscountConfig {
    /// No discounts on either side
    pub fn none() -> Self {
        Self {
            portnox_discount_percent: Decimal::ZERO,
            competitor_discount_percent: Decimal::ZERO,
        }
    }

    /// Check both discounts against their allowed ranges
    pub fn validate(&self) -> TcoResult<()> {
        if self.portnox_discount_percent < Decimal::ZERO
            || self.portnox_discount_percent > dec!(40)
        {
            return Err(TcoError::InvalidProfile(format!(
                "portnox discount must be 0-40%, got {}",
                self.portnox_discount_percent
            )));
        }
        if self.competitor_discount_percent < Decimal::ZERO
            || self.competitor_discount_percent > dec!(25)
        {
            return Err(TcoError::InvalidProfile(format!(
                "competitor discount must be 0-25%, got {}",
                self.competitor_discount_percent
            )));
        }
        Ok(())
    }
}

impl Default for DiscountConfig {
    fn default() -> Self { Self::none() }
}
