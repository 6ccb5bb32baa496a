//! Compare command

use colored::Colorize;
use nactco_common::DiscountConfig;
use nactco_engine::{BreakEven, CalculationEngine, ComparisonReport, ComparisonRequest};
use serde::Serialize;
use tabled::{Table, Tabled};

use super::{arch_label, build_profile};
use crate::config::Config;
use crate::output::{money, OutputFormat};
use crate::CompareArgs;

#[derive(Serialize, Tabled)]
struct CostRow {
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Architecture")]
    architecture: &'static str,
    #[tabled(rename = "Initial")]
    initial: String,
    #[tabled(rename = "Annual")]
    annual: String,
    #[tabled(rename = "Total")]
    total: String,
}

pub fn handle(args: CompareArgs, config: &Config, format: OutputFormat) -> Result<(), String> {
    let request = ComparisonRequest {
        profile: build_profile(&args.org, config),
        vendor_ids: args.vendors,
        proposed_vendor: args.proposed,
        industry: args.industry.or_else(|| config.default_industry.clone()),
        discounts: DiscountConfig {
            portnox_discount_percent: args.portnox_discount,
            competitor_discount_percent: args.competitor_discount,
        },
    };

    let engine = CalculationEngine::new();
    let report = engine.compare(&request).map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Table => print_report(&report),
        _ => format.print(&report),
    }
    Ok(())
}

fn print_report(report: &ComparisonReport) {
    let rows: Vec<CostRow> = report
        .results
        .iter()
        .map(|r| CostRow {
            vendor: r.vendor_name.clone(),
            architecture: arch_label(r.architecture),
            initial: money(r.total_initial_costs),
            annual: money(r.annual_costs),
            total: money(r.total_costs),
        })
        .collect();

    println!(
        "TCO over {} years, {} devices, {} location(s)\n",
        report.profile.years_to_project,
        report.profile.device_count,
        report.profile.location_count,
    );
    println!("{}\n", Table::new(&rows));

    for comparison in &report.comparisons {
        let break_even = match comparison.roi.break_even {
            BreakEven::Immediate => "immediate".to_string(),
            BreakEven::Months(m) => format!("{} months", m),
        };
        let savings = format!(
            "{} ({}%)",
            money(comparison.savings.amount),
            comparison.savings.percentage.round_dp(1),
        );
        let savings = if comparison.savings.amount.is_sign_positive() {
            savings.green()
        } else {
            savings.red()
        };
        println!(
            "vs {}: savings {}, break-even {}, NPV {}",
            comparison.current_vendor_id.bold(),
            savings,
            break_even,
            money(comparison.roi.npv),
        );
    }
}
