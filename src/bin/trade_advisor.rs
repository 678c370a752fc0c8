//! trade-advisor CLI - recommends the most valuable exchange for a hand

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use trade_advisor::application::services::{
    Recommendation, TradeAdvisor, ValueThenUnitsStrategy,
};
use trade_advisor::application::services::request_normalizer::TRUE_TOKEN;
use trade_advisor::config::{AppConfig, DEFAULT_CONFIG_FILE};
use trade_advisor::domain::entities::TradeResult;
use trade_advisor::infrastructure::solver::build_solver;
use trade_advisor::telemetry::init_tracing;

/// Exit code when there is nothing to recommend.
const EXIT_NO_RESULT: u8 = 2;

#[derive(Parser)]
#[command(name = "trade-advisor")]
#[command(about = "Rank and present the most valuable resource exchange")]
struct Cli {
    /// Shards held
    #[arg(long = "s", value_name = "COUNT")]
    shards: Option<String>,

    /// Tools held
    #[arg(long = "t", value_name = "COUNT")]
    tools: Option<String>,

    /// Demons held
    #[arg(long = "d", value_name = "COUNT")]
    demons: Option<String>,

    /// Crystals held
    #[arg(long = "c", value_name = "COUNT")]
    crystals: Option<String>,

    /// Preference flag to set (repeatable)
    #[arg(long = "flag", value_name = "NAME")]
    flags: Vec<String>,

    /// Print a plain text table instead of JSON
    #[arg(long)]
    plain: bool,

    /// Configuration file stem or path
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,
}

impl Cli {
    fn fields(&self) -> Vec<(String, String)> {
        let holdings = [
            ("s", &self.shards),
            ("t", &self.tools),
            ("d", &self.demons),
            ("c", &self.crystals),
        ];
        holdings
            .into_iter()
            .filter_map(|(name, value)| value.clone().map(|v| (name.to_string(), v)))
            .chain(
                self.flags
                    .iter()
                    .map(|flag| (flag.clone(), TRUE_TOKEN.to_string())),
            )
            .collect()
    }
}

fn render_plain(result: &TradeResult) -> String {
    let mut out = format!("{:>3}  {:<24} {:>6}\n", "#", "basket", "value");
    for allocation in result.allocations() {
        out.push_str(&format!(
            "{:>3}  {:<24} {:>6}\n",
            allocation.position(),
            allocation.allocation().to_string(),
            allocation.value()
        ));
    }
    out.push_str(&format!("{:>3}  {:<24} {:>6}", "", "total", result.total_value()));
    out
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load_from(&cli.config).context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialize tracing")?;

    let solver = build_solver(&config.solver).context("failed to build solver client")?;
    let advisor = TradeAdvisor::new(
        solver,
        Arc::new(ValueThenUnitsStrategy::new()),
        config.advisor_config(),
    );

    match advisor.advise(cli.fields()).await? {
        Recommendation::Trade(result) => {
            if cli.plain {
                println!("{}", render_plain(&result));
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Recommendation::NothingToCompute => {
            eprintln!("nothing to compute: supply at least one holding or flag");
            Ok(ExitCode::from(EXIT_NO_RESULT))
        }
        Recommendation::NoFeasibleTrade => {
            eprintln!("no feasible trade for this hand");
            Ok(ExitCode::from(EXIT_NO_RESULT))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
