//! Dice command implementation

use anyhow::Result;
use cb_olap::{dice, DiceSelection};
use serde_json::json;

use crate::cli::{DiceArgs, GlobalArgs, OutputFormat};
use crate::commands::render::{print_matrix, print_summary};
use crate::context::RuntimeContext;

/// Execute the dice command
pub fn execute(args: &DiceArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();

    let selection = DiceSelection {
        products: args.products.clone(),
        regions: args.regions.clone(),
        quarters: args.quarters.clone(),
    };
    let result = dice(&view, &selection)?;

    if args.output == OutputFormat::Json {
        let value = json!({
            "year": ctx.year,
            "selection": selection,
            "summary": result.summary,
            "percent_of_year": result.percent_of_year,
            "crosstab": result.crosstab,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "Dice: products {:?}, regions {:?}, quarters {:?} (year {})",
        selection.products, selection.regions, selection.quarters, ctx.year
    );
    println!();
    print_summary(&result.summary);
    println!("Share of year  {:.1}%", result.percent_of_year);

    if result.is_empty() {
        println!();
        println!("No data matches the selected filters.");
        return Ok(());
    }

    println!();
    println!("Region x product sales matrix:");
    print_matrix(&result.crosstab);
    Ok(())
}
