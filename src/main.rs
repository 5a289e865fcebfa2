use anyhow::{Context, Result};
use go_vanity_gen::{Config, logging, scaffold};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init_logging(config.verbose);

    if config.init {
        let written = scaffold::write_starter_files(&config.input)
            .context("Failed to write starter files")?;
        for path in &written {
            tracing::info!("created {}", path.display());
        }
        return Ok(());
    }

    config.validate().context("Invalid configuration")?;

    let report = go_vanity_gen::generate(&config.input, &config.output)?;
    tracing::info!(
        "generated {} pages for {} paths in {}",
        report.files.len(),
        report.paths,
        config.output.display()
    );

    Ok(())
}
