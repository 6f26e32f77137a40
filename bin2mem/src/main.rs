use anyhow::{Context, Result};
use clap::Parser;
use log::info;

mod cli;

fn main() -> Result<()> {
    env_logger::init();

    let config = bin2mem::Config::from(cli::Args::parse());
    let summary = bin2mem::convert_file(&config).with_context(|| {
        format!(
            "failed to convert '{}' into '{}'",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;
    info!("Done: {} lines written", summary.words);

    Ok(())
}
