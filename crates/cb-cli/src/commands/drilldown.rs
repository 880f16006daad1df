//! Drilldown command implementation
//!
//! With no selection this prints the full quarter→month→region→product
//! hierarchy; with a quarter it lists the months available for the next
//! step; with quarter and month it prints the region→product detail tree.

use anyhow::Result;
use cb_olap::{drill, hierarchy, months_in_quarter};
use serde_json::json;

use crate::cli::{DrilldownArgs, GlobalArgs, OutputFormat};
use crate::commands::render::{format_amount, print_tree};
use crate::context::RuntimeContext;

/// Execute the drilldown command
pub fn execute(args: &DrilldownArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();

    match (args.quarter, args.month) {
        (None, _) => {
            let root = hierarchy(&view);
            if args.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&json!({
                    "year": ctx.year,
                    "hierarchy": root,
                }))?);
            } else {
                println!("Drill-down hierarchy (year {}):", ctx.year);
                println!();
                print_tree(&root);
                let quarters: Vec<String> =
                    view.quarters().iter().map(|q| q.to_string()).collect();
                if !quarters.is_empty() {
                    println!();
                    println!("Drill further with --quarter {{{}}}", quarters.join(","));
                }
            }
        }
        (Some(quarter), None) => {
            let months = months_in_quarter(&view, quarter);
            if args.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&json!({
                    "year": ctx.year,
                    "quarter": quarter,
                    "months": months,
                }))?);
            } else if months.is_empty() {
                println!("No data in Q{} of year {}.", quarter, ctx.year);
            } else {
                let list: Vec<String> = months.iter().map(|m| m.to_string()).collect();
                println!(
                    "Months with data in Q{} of {}: {}",
                    quarter,
                    ctx.year,
                    list.join(", ")
                );
                println!("Drill further with --quarter {} --month <m>", quarter);
            }
        }
        (Some(quarter), Some(month)) => {
            let result = drill(&view, quarter, month);
            if args.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&json!({
                    "year": ctx.year,
                    "quarter": result.quarter,
                    "month": result.month,
                    "total": result.total,
                    "tree": result.tree,
                }))?);
            } else if result.total == 0 {
                println!("No data in Q{} month {} of year {}.", quarter, month, ctx.year);
            } else {
                println!("Drill-down: Q{} / month {} (year {})", quarter, month, ctx.year);
                println!("Period sales   ${}", format_amount(result.total));
                println!();
                print_tree(&result.tree);
            }
        }
    }
    Ok(())
}
