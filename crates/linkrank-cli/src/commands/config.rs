//! Configuration command

use crate::app::{ConfigArgs, OutputFormat};
use anyhow::Result;
use linkrank_core::RankConfig;

pub async fn run(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    if args.path {
        println!("{}", RankConfig::default_path().display());
        return Ok(());
    }

    let config = RankConfig::load()?;
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        _ => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
    }
    Ok(())
}
