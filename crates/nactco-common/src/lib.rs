//! Shared domain types for the OpenNAC TCO platform

pub mod error;
pub mod profile;

pub use error::{TcoError, TcoResult};
pub use profile::{DiscountConfig, OrgSizeClass, OrganizationProfile};
