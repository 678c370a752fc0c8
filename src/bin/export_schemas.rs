//! Writes JSON Schemas for the request and result types.

use anyhow::Context;
use clap::Parser;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;
use trade_advisor::domain::entities::{TradeRequest, TradeResult};

#[derive(Parser)]
#[command(name = "export_schemas")]
#[command(about = "Export JSON Schemas for TradeRequest and TradeResult")]
struct Cli {
    /// Output directory
    #[arg(short, long, default_value = "schemas")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create {}", cli.out_dir.display()))?;

    let schemas = [
        ("trade_request.schema.json", schema_for!(TradeRequest)),
        ("trade_result.schema.json", schema_for!(TradeResult)),
    ];
    for (file, schema) in schemas {
        let path = cli.out_dir.join(file);
        fs::write(&path, serde_json::to_string_pretty(&schema)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
