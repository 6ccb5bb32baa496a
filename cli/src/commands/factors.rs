//! Factors command

use nactco_engine::ScaleFactors;
use serde::Serialize;
use tabled::Tabled;

use super::build_profile;
use crate::config::Config;
use crate::output::OutputFormat;
use crate::OrgArgs;

#[derive(Serialize, Tabled)]
struct FactorRow {
    #[tabled(rename = "Factor")]
    factor: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn handle(args: OrgArgs, config: &Config, format: OutputFormat) -> Result<(), String> {
    let profile = build_profile(&args, config);
    let factors = ScaleFactors::compute(&profile).map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Table => {
            let rows = vec![
                FactorRow { factor: "device", value: format!("{:.4}", factors.device) },
                FactorRow { factor: "location", value: format!("{:.4}", factors.location) },
                FactorRow { factor: "implementation", value: format!("{:.4}", factors.implementation) },
                FactorRow { factor: "staff", value: format!("{:.4}", factors.staff) },
                FactorRow { factor: "compliance", value: format!("{:.4}", factors.compliance) },
                FactorRow { factor: "on-prem composite", value: format!("{:.4}", factors.on_prem()) },
                FactorRow { factor: "cloud composite", value: format!("{:.4}", factors.cloud()) },
            ];
            format.print_table(&rows);
        }
        _ => format.print(&factors),
    }
    Ok(())
}
