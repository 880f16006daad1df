//! Overview command implementation
//!
//! Whole-dataset KPIs: total sales, distinct product and region counts,
//! mean sale, and per-year record counts. Unlike the query modes this
//! reports over the full dataset, not the year-filtered view.

use anyhow::Result;
use serde_json::json;

use crate::cli::{GlobalArgs, OutputFormat, OverviewArgs};
use crate::commands::render::format_amount;
use crate::context::RuntimeContext;

/// Execute the overview command
pub fn execute(args: &OverviewArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let ds = &ctx.dataset;

    let per_year: Vec<(i32, usize)> = ds
        .years()
        .into_iter()
        .map(|year| (year, ds.view_for_year(year).len()))
        .collect();

    match args.output {
        OutputFormat::Json => {
            let value = json!({
                "total_sales": ds.total_sales(),
                "records": ds.len(),
                "products": ds.products(),
                "regions": ds.regions(),
                "mean_sale": ds.mean_sales(),
                "records_per_year": per_year
                    .iter()
                    .map(|(year, count)| json!({ "year": year, "records": count }))
                    .collect::<Vec<_>>(),
                "active_year": ctx.year,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("Total sales    ${}", format_amount(ds.total_sales()));
            println!("Records        {}", format_amount(ds.len() as u64));
            println!("Products       {}", ds.products().len());
            println!("Regions        {}", ds.regions().len());
            println!("Mean sale      ${:.0}", ds.mean_sales());
            println!();
            println!("Records per year:");
            for (year, count) in &per_year {
                println!("  {}  {}", year, format_amount(*count as u64));
            }
            println!();
            println!("Active year filter: {}", ctx.year);
        }
    }
    Ok(())
}
