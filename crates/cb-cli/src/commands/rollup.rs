//! Rollup command implementation

use anyhow::Result;
use cb_olap::rollup::rollup;
use serde_json::json;

use crate::cli::{GlobalArgs, OutputFormat, RollupArgs};
use crate::commands::render::{format_amount, print_bar_chart};
use crate::context::RuntimeContext;

/// Execute the rollup command
pub fn execute(args: &RollupArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();

    let level = args.level.into();
    let by = args.by.map(Into::into);
    let result = rollup(&view, level, by);

    if args.output == OutputFormat::Json {
        let value = json!({
            "year": ctx.year,
            "level": result.level,
            "by": result.by,
            "groups": result.groups,
            "top": result.top(args.top),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match by {
        Some(dim) => println!("Roll-up: sales by {} and {} (year {})", level, dim, ctx.year),
        None => println!("Roll-up: sales by {} (year {})", level, ctx.year),
    }
    println!();

    if result.groups.is_empty() {
        println!("No data for year {}.", ctx.year);
        return Ok(());
    }

    let rows: Vec<(String, u64)> = result.groups.iter().map(|g| (g.label(), g.total)).collect();
    print_bar_chart(&rows);

    println!();
    println!("Top {} groups:", args.top.min(result.groups.len()));
    for (rank, group) in result.top(args.top).iter().enumerate() {
        println!(
            "  {}. {}  ${}",
            rank + 1,
            group.label(),
            format_amount(group.total)
        );
    }
    Ok(())
}
