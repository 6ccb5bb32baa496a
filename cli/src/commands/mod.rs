//! Command handlers

pub mod compare;
pub mod config;
pub mod factors;
pub mod industries;
pub mod vendors;

use nactco_common::OrganizationProfile;
use nactco_engine::Architecture;

use crate::config::Config;
use crate::OrgArgs;

/// Merge CLI arguments with config-file defaults into a profile
pub fn build_profile(args: &OrgArgs, config: &Config) -> OrganizationProfile {
    OrganizationProfile {
        device_count: args.devices.or(config.default_devices).unwrap_or(1000),
        location_count: args.locations.or(config.default_locations).unwrap_or(1),
        years_to_project: args.years.or(config.default_years).unwrap_or(3),
        legacy_device_percent: args.legacy,
        compliance_complexity: args.compliance,
        implementation_complexity: args.implementation,
        annual_staff_cost: args.staff_cost,
    }
}

/// Short label for a deployment architecture
pub fn arch_label(architecture: Architecture) -> &'static str {
    match architecture {
        Architecture::OnPrem => "on-prem",
        Architecture::CloudNative => "cloud-native",
    }
}
