//! Generate command implementation

use anyhow::{Context, Result};
use cb_core::{generate, Config, GeneratorConfig};
use std::path::{Path, PathBuf};

use crate::cli::{GenerateArgs, GlobalArgs};

/// Execute the generate command
pub fn execute(args: &GenerateArgs, global: &GlobalArgs) -> Result<()> {
    let root = Path::new(&global.project_dir);
    let config = Config::load_from_dir(root).context("Failed to load project configuration")?;
    let defaults = config.generator.clone();

    let gen_config = GeneratorConfig {
        records: args.records.unwrap_or(defaults.records),
        start: args.start.unwrap_or(defaults.start),
        end: args.end.unwrap_or(defaults.end),
        products: defaults.products,
        regions: defaults.regions,
        seed: args.seed,
    };

    let dataset = generate(&gen_config).context("Failed to generate dataset")?;

    let output = match (&args.output, &global.data) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => config.dataset_path_absolute(root),
    };
    dataset
        .write_csv(&output)
        .with_context(|| format!("Failed to write dataset to {}", output.display()))?;

    match args.seed {
        Some(seed) => println!(
            "Generated {} records to {} (seed {})",
            dataset.len(),
            output.display(),
            seed
        ),
        None => println!("Generated {} records to {}", dataset.len(), output.display()),
    }
    Ok(())
}
