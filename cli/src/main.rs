//! OpenNAC TCO CLI
//!
//! Command-line interface for the OpenNAC TCO comparison engine.
//!
//! # Usage
//!
//! ```bash
//! nactco vendors list
//! nactco compare --vendor cisco --devices 5000 --years 5
//! nactco compare --vendor cisco --vendor aruba --industry healthcare --format json
//! nactco factors --devices 10000 --locations 50
//! nactco config set default_industry finance
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "nactco")]
#[command(author = "OpenNAC")]
#[command(version = "0.1.0")]
#[command(about = "OpenNAC TCO Comparison Calculator", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, short, default_value = "table")]
    format: output::OutputFormat,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the vendor cost model
    Vendors {
        #[command(subcommand)]
        action: VendorCommands,
    },
    /// Browse industry cost defaults
    Industries {
        #[command(subcommand)]
        action: IndustryCommands,
    },
    /// Run a TCO comparison
    Compare(CompareArgs),
    /// Show scale factors for an organization profile
    Factors(OrgArgs),
    /// Configure CLI defaults
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum VendorCommands {
    /// List all vendor cost profiles
    List,
    /// Get one vendor cost profile
    Get { id: String },
}

#[derive(Subcommand)]
enum IndustryCommands {
    /// List all industry override records
    List,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the active configuration
    Show,
    /// Set a configuration key
    Set { key: String, value: String },
}

/// Organization profile arguments shared by compare and factors
#[derive(Debug, clap::Args)]
struct OrgArgs {
    /// Managed device count
    #[arg(long, env = "NACTCO_DEVICES")]
    devices: Option<u32>,

    /// Physical site count
    #[arg(long)]
    locations: Option<u32>,

    /// Projection horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Legacy device share, percent
    #[arg(long, default_value_t = 0)]
    legacy: u8,

    /// Compliance complexity, 1-5
    #[arg(long, default_value_t = 3)]
    compliance: u8,

    /// Implementation complexity, 1-5
    #[arg(long, default_value_t = 3)]
    implementation: u8,

    /// Annual fully-loaded network admin cost, dollars
    #[arg(long, default_value_t = 100_000)]
    staff_cost: u64,
}

#[derive(Debug, clap::Args)]
struct CompareArgs {
    #[command(flatten)]
    org: OrgArgs,

    /// Current vendor id (repeatable)
    #[arg(long = "vendor", required = true)]
    vendors: Vec<String>,

    /// Proposed vendor id
    #[arg(long, default_value = "portnox")]
    proposed: String,

    /// Industry id for cost overrides
    #[arg(long)]
    industry: Option<String>,

    /// Discount on the proposed solution's licensing, percent (0-40)
    #[arg(long, default_value = "0")]
    portnox_discount: rust_decimal::Decimal,

    /// Discount on competitor licensing, percent (0-25)
    #[arg(long, default_value = "0")]
    competitor_discount: rust_decimal::Decimal,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_default();

    let result = match cli.command {
        Commands::Vendors { action } => commands::vendors::handle(action, cli.format),
        Commands::Industries { action } => commands::industries::handle(action, cli.format),
        Commands::Compare(args) => commands::compare::handle(args, &config, cli.format),
        Commands::Factors(args) => commands::factors::handle(args, &config, cli.format),
        Commands::Config { action } => commands::config::handle(action, cli.profile.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
