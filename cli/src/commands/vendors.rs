//! Vendor commands

use nactco_engine::VendorCatalog;
use serde::Serialize;
use tabled::Tabled;

use super::arch_label;
use crate::output::{money, OutputFormat};
use crate::VendorCommands;

#[derive(Serialize, Tabled)]
struct VendorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Architecture")]
    architecture: &'static str,
    #[tabled(rename = "Hardware")]
    hardware: String,
    #[tabled(rename = "Licensing/yr")]
    licensing: String,
    #[tabled(rename = "Personnel/yr")]
    personnel: String,
}

pub fn handle(action: VendorCommands, format: OutputFormat) -> Result<(), String> {
    let catalog = VendorCatalog::new();
    match action {
        VendorCommands::List => {
            let rows: Vec<VendorRow> = catalog
                .all()
                .into_iter()
                .map(|v| VendorRow {
                    id: v.id.clone(),
                    name: v.name.clone(),
                    architecture: arch_label(v.architecture),
                    hardware: money(v.hardware_cost),
                    licensing: money(v.licensing_cost),
                    personnel: money(v.personnel_cost),
                })
                .collect();
            format.print_table(&rows);
        }
        VendorCommands::Get { id } => {
            let vendor = catalog
                .get(&id)
                .ok_or_else(|| format!("unknown vendor: {}", id))?;
            format.print(&vendor);
        }
    }
    Ok(())
}
