//! Industry commands

use nactco_engine::IndustryCatalog;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{money, OutputFormat};
use crate::IndustryCommands;

#[derive(Serialize, Tabled)]
struct IndustryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Downtime/hr")]
    downtime: String,
    #[tabled(rename = "Downtime hrs/yr")]
    downtime_hours: String,
    #[tabled(rename = "Personnel/yr")]
    personnel: String,
}

fn opt_money(value: Option<Decimal>) -> String {
    value.map(money).unwrap_or_else(|| "-".into())
}

pub fn handle(action: IndustryCommands, format: OutputFormat) -> Result<(), String> {
    let catalog = IndustryCatalog::new();
    match action {
        IndustryCommands::List => {
            let rows: Vec<IndustryRow> = catalog
                .all()
                .into_iter()
                .map(|i| IndustryRow {
                    id: i.id.clone(),
                    name: i.name.clone(),
                    downtime: opt_money(i.downtime_cost_per_hour),
                    downtime_hours: i
                        .annual_downtime_hours
                        .map(|h| h.to_string())
                        .unwrap_or_else(|| "-".into()),
                    personnel: opt_money(i.personnel_cost),
                })
                .collect();
            format.print_table(&rows);
        }
    }
    Ok(())
}
