//! `stocklens` — single-operator inventory intelligence CLI.
//!
//! Loads the operator's CSV tables, applies the selected filters, and
//! prints one run's report: headline KPIs, reorder alerts, and the demand
//! forecast table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use stocklens_core::Horizon;
use stocklens_ingest::{
    FilterSpec, RegionScope, load_inventory_file, load_sales_file, load_sku_list_file,
};
use stocklens_report::DashboardReport;

#[derive(Parser)]
#[command(name = "stocklens")]
#[command(about = "Inventory KPIs, reorder alerts and demand forecasts", long_about = None)]
struct Cli {
    /// Inventory CSV (item_name, price, cost_price, units_left, units_sold,
    /// reorder_point, category, supplier, location)
    #[arg(long)]
    inventory: PathBuf,

    /// Sales CSV (item_name, Date, Units_Sold, location); omit to skip
    /// forecasting
    #[arg(long)]
    sales: Option<PathBuf>,

    /// Optional single-column SKU allowlist CSV
    #[arg(long)]
    sku_file: Option<PathBuf>,

    /// Forecast horizon in days
    #[arg(long, default_value = "30")]
    horizon: u32,

    /// Region slice of the inventory
    #[arg(long, value_enum, default_value = "all")]
    region: RegionArg,

    /// Category allowlist (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Supplier allowlist (repeatable)
    #[arg(long = "supplier")]
    suppliers: Vec<String>,

    /// Location allowlist (repeatable)
    #[arg(long = "location")]
    locations: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: Format,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum RegionArg {
    All,
    Ca,
    Us,
}

impl From<RegionArg> for RegionScope {
    fn from(value: RegionArg) -> Self {
        match value {
            RegionArg::All => RegionScope::All,
            RegionArg::Ca => RegionScope::Ca,
            RegionArg::Us => RegionScope::Us,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() -> Result<()> {
    stocklens_observability::init();
    let cli = Cli::parse();

    let horizon = Horizon::new(cli.horizon).context("invalid --horizon")?;

    let records = load_inventory_file(&cli.inventory)
        .with_context(|| format!("loading inventory from {}", cli.inventory.display()))?;
    let skus = match &cli.sku_file {
        Some(path) => load_sku_list_file(path)
            .with_context(|| format!("loading SKU list from {}", path.display()))?,
        None => Vec::new(),
    };

    let filter = FilterSpec {
        region: cli.region.into(),
        categories: cli.categories,
        suppliers: cli.suppliers,
        locations: cli.locations,
        skus,
    };
    let records = filter.apply(records);
    tracing::info!(records = records.len(), "inventory filtered");

    let observations = match &cli.sales {
        Some(path) => load_sales_file(path)
            .with_context(|| format!("loading sales from {}", path.display()))?,
        None => Vec::new(),
    };

    let report = DashboardReport::assemble(&records, &observations, horizon);

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Table => render_text(&report),
    }

    Ok(())
}

fn render_text(report: &DashboardReport) {
    println!("stocklens run {}", report.run_id);
    println!();
    println!("KPIs");
    println!("  total stock value: {:.2}", report.kpis.total_stock_value);
    println!("  avg margin:        {:.2}%", report.kpis.avg_margin_pct);
    println!("  avg turnover:      {:.2}", report.kpis.avg_turnover);

    if !report.reorder_alerts.is_empty() {
        println!();
        println!("Below reorder point");
        for alert in &report.reorder_alerts {
            println!(
                "  {} @ {}: {} left (reorder at {})",
                alert.item_name, alert.location, alert.units_left, alert.reorder_point
            );
        }
    }

    if !report.forecasts.is_empty() {
        println!();
        println!("Forecast ({})", report.forecasts[0].column);
        for row in &report.forecasts {
            println!("  {} @ {}: {}", row.item_name, row.location, row.units);
        }
    }
}
