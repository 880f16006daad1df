//! Slice command implementation

use anyhow::Result;
use cb_olap::slice::{apply, slice, SliceFilter};
use serde_json::json;

use crate::cli::{GlobalArgs, OutputFormat, SliceArgs};
use crate::commands::render::{format_amount, print_bar_chart, print_summary};
use crate::context::RuntimeContext;

/// Execute the slice command
pub fn execute(args: &SliceArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();
    ctx.verbose(&format!(
        "Slicing {} records from year {}",
        view.len(),
        ctx.year
    ));

    let filter = SliceFilter {
        product: args.product.clone(),
        region: args.region.clone(),
    };
    let result = slice(&view, &filter);

    if args.output == OutputFormat::Json {
        let value = json!({
            "year": ctx.year,
            "filter": result.filter,
            "summary": result.summary,
            "monthly": result.monthly,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if filter.is_unfiltered() {
        println!("Filters: none (whole year {})", ctx.year);
    } else {
        println!("Filters: {} (year {})", filter.describe().join(" | "), ctx.year);
    }
    println!();
    print_summary(&result.summary);

    if result.is_empty() {
        println!();
        println!("No data matches the selected filters.");
        return Ok(());
    }

    println!();
    println!("Monthly sales:");
    let rows: Vec<(String, u64)> = result
        .monthly
        .iter()
        .map(|m| (format!("month {:>2}", m.month), m.total))
        .collect();
    print_bar_chart(&rows);

    if args.rows {
        println!();
        println!("Matching records:");
        for record in apply(&view, &filter).records() {
            println!(
                "  {}  {}  {}  ${}",
                record.date,
                record.product,
                record.region,
                format_amount(record.sales_amount)
            );
        }
    }
    Ok(())
}
