//! Output formatting

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Print serializable data; the table arm needs `Tabled` rows, so
    /// commands with tabular output call `print_table` instead
    pub fn print<T: Serialize>(&self, data: &T) {
        match self {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(data).unwrap_or_default());
            }
            OutputFormat::Table => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
        }
    }

    /// Print rows as a table, or fall back to the structured formats
    pub fn print_table<T: Serialize + Tabled>(&self, rows: &[T]) {
        match self {
            OutputFormat::Table => println!("{}", Table::new(rows)),
            _ => self.print(&rows),
        }
    }
}

/// Format a dollar amount with thousands separators, no cents
pub fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let raw = rounded.abs().to_string();
    let digits = raw.split('.').next().unwrap_or(&raw);

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < Decimal::ZERO {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
