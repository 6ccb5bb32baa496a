//! Scaling Engine
//!
//! Turns an organization profile into multiplicative scale factors and
//! composes them asymmetrically for on-premises vs cloud-native products.

use serde::{Deserialize, Serialize};

use nactco_common::{OrganizationProfile, TcoResult};

use crate::vendors::Architecture;

/// Reference baseline the factors are anchored to
pub const BASELINE_DEVICES: f64 = 1000.0;
/// Baseline annual staff cost in dollars
pub const BASELINE_STAFF_COST: f64 = 100_000.0;

const DEVICE_SCALE_FLOOR: f64 = 0.5;

/// Multiplicative scale factors for one calculation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub device: f64,
    pub location: f64,
    pub implementation: f64,
    pub staff: f64,
    pub compliance: f64,
}

impl ScaleFactors {
    /// Compute factors from a profile, rejecting out-of-domain fields
    pub fn compute(profile: &OrganizationProfile) -> TcoResult<Self> {
        profile.validate()?;

        let device = (1.0 + (profile.device_count as f64 - BASELINE_DEVICES) / 9000.0 * 0.5)
            .max(DEVICE_SCALE_FLOOR);
        let location = 1.0 + (profile.location_count as f64 - 1.0) / 49.0 * 0.8;
        let implementation = 0.7 + profile.implementation_complexity as f64 * 0.2;
        let staff = profile.annual_staff_cost as f64 / BASELINE_STAFF_COST;
        let compliance = 0.8 + profile.compliance_complexity as f64 * 0.1;

        Ok(Self {
            device,
            location,
            implementation,
            staff,
            compliance,
        })
    }

    /// Composite factor for on-premises deployments
    pub fn on_prem(&self) -> f64 {
        self.device * self.location * self.implementation * self.staff * self.compliance
    }

    /// Composite factor for cloud-native deployments
    ///
    /// No per-site hardware and centralized policy management: device,
    /// location, implementation and compliance growth is damped. Staff cost
    /// stays a direct multiplier for both architectures.
    pub fn cloud(&self) -> f64 {
        (1.0 + (self.device - 1.0) * 0.3)
            * (1.0 + (self.location - 1.0) * 0.1)
            * (1.0 + (self.implementation - 1.0) * 0.3)
            * self.staff
            * (1.0 + (self.compliance - 1.0) * 0.5)
    }

    /// Composite factor for the given architecture
    pub fn for_architecture(&self, architecture: Architecture) -> f64 {
        match architecture {
            Architecture::OnPrem => self.on_prem(),
            Architecture::CloudNative => self.cloud(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile(devices: u32, locations: u32, implementation: u8, compliance: u8) -> OrganizationProfile {
        OrganizationProfile {
            device_count: devices,
            location_count: locations,
            implementation_complexity: implementation,
            compliance_complexity: compliance,
            ..OrganizationProfile::default()
        }
    }

    #[test]
    fn test_baseline_identity() {
        let factors = ScaleFactors::compute(&OrganizationProfile::default()).unwrap();
        assert_eq!(factors.device, 1.0);
        assert_eq!(factors.location, 1.0);
        assert_eq!(factors.staff, 1.0);
        // Complexity factors at level 3 sit at their formula values
        assert!((factors.implementation - 1.3).abs() < 1e-12);
        assert!((factors.compliance - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_complexity_factor_ranges() {
        let low = ScaleFactors::compute(&profile(1000, 1, 1, 1)).unwrap();
        let high = ScaleFactors::compute(&profile(1000, 1, 5, 5)).unwrap();
        assert!((low.implementation - 0.9).abs() < 1e-12);
        assert!((high.implementation - 1.7).abs() < 1e-12);
        assert!((low.compliance - 0.9).abs() < 1e-12);
        assert!((high.compliance - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_device_factor_floor() {
        let factors = ScaleFactors::compute(&profile(1, 1, 3, 3)).unwrap();
        assert!(factors.device >= 0.5);
        assert!(factors.device < 1.0);
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut p = OrganizationProfile::default();
        p.implementation_complexity = 0;
        assert!(ScaleFactors::compute(&p).is_err());
    }

    #[test]
    fn test_stress_dampening_exceeds_two_x() {
        // 10000 devices, 50 sites, both complexities maxed
        let factors = ScaleFactors::compute(&profile(10000, 50, 5, 5)).unwrap();
        let on_prem = factors.on_prem();
        let cloud = factors.cloud();
        assert!(on_prem > cloud * 2.0, "on_prem {} vs cloud {}", on_prem, cloud);
    }

    #[test]
    fn test_cloud_dampens_growth() {
        let small = ScaleFactors::compute(&profile(2000, 5, 3, 3)).unwrap();
        let big = ScaleFactors::compute(&profile(8000, 40, 3, 3)).unwrap();
        let on_prem_growth = big.on_prem() / small.on_prem();
        let cloud_growth = big.cloud() / small.cloud();
        assert!(cloud_growth < on_prem_growth);
    }

    proptest! {
        // At or above the baseline in every dimension, each damped cloud
        // component is dominated by its raw on-prem counterpart.
        #[test]
        fn prop_cloud_never_exceeds_on_prem_above_baseline(
            devices in 1000u32..20000,
            locations in 1u32..64,
            implementation in 3u8..=5,
            compliance in 3u8..=5,
        ) {
            let factors = ScaleFactors::compute(
                &profile(devices, locations, implementation, compliance),
            ).unwrap();
            prop_assert!(factors.cloud() <= factors.on_prem() + 1e-9);
        }

        #[test]
        fn prop_factors_are_positive(
            devices in 1u32..50000,
            locations in 1u32..200,
            implementation in 1u8..=5,
            compliance in 1u8..=5,
        ) {
            let factors = ScaleFactors::compute(
                &profile(devices, locations, implementation, compliance),
            ).unwrap();
            prop_assert!(factors.on_prem() > 0.0);
            prop_assert!(factors.cloud() > 0.0);
        }
    }
}
