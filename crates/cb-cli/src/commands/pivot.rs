//! Pivot command implementation

use anyhow::{Context, Result};
use cb_export::save_crosstab_xlsx;
use cb_olap::pivot;
use serde_json::json;

use crate::cli::{GlobalArgs, OutputFormat, PivotArgs};
use crate::commands::render::{format_amount, print_matrix};
use crate::context::RuntimeContext;
use std::path::{Path, PathBuf};

/// Execute the pivot command
pub fn execute(args: &PivotArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let view = ctx.view();

    let index = args.index.into();
    let columns = args.columns.into();
    let tab = pivot(&view, index, columns)?;
    let stats = tab.cell_stats();

    if args.output == OutputFormat::Json {
        let value = json!({
            "year": ctx.year,
            "crosstab": tab,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Pivot: {} x {} (year {})", index, columns, ctx.year);
        println!();
        if tab.is_empty() {
            println!("No data for year {}.", ctx.year);
        } else {
            print_matrix(&tab);
            println!();
            println!("Max cell   ${}", format_amount(stats.max));
            println!("Mean cell  ${:.0}", stats.mean);
            println!("Min cell   ${}", format_amount(stats.min));
        }
    }

    if let Some(export) = &args.export {
        let path = match export {
            Some(path) => PathBuf::from(path),
            None => ctx
                .config
                .export_path_absolute(Path::new(&global.project_dir)),
        };
        save_crosstab_xlsx(&path, &tab)
            .with_context(|| format!("Failed to export pivot table to {}", path.display()))?;
        println!("Exported pivot table to {}", path.display());
    }
    Ok(())
}
