//! Wiring & DI. Entry point: parse args, bootstrap adapters, inject into the
//! analysis service, run. No business logic here.

use chat_report::adapters::persistence::{FsReportSink, JsonSessionSource};
use chat_report::adapters::tokenizer::select_tokenizer;
use chat_report::shared::config::AppConfig;
use chat_report::usecases::{AnalysisService, NightWindow, SimplifyPolicy};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Analyze an exported chat transcript into a stats artifact and a
/// simplified-text digest.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the exported transcript JSON
    input_file: PathBuf,

    /// Path for the statistics JSON artifact
    #[arg(long, default_value = "stats.json")]
    output_stats: PathBuf,

    /// Path for the simplified-text artifact
    #[arg(long, default_value = "simplified_chat.txt")]
    output_text: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let cfg = AppConfig::load().unwrap_or_default();

    let tokenizer = select_tokenizer();
    let window = NightWindow::new(
        cfg.night_start_hour_or_default(),
        cfg.night_end_hour_or_default(),
    );
    let policy = match cfg.keep_all_threshold {
        Some(limit) => SimplifyPolicy::SampleOver(limit),
        None => SimplifyPolicy::KeepAll,
    };

    let service = AnalysisService::new(
        tokenizer,
        Arc::new(JsonSessionSource),
        Arc::new(FsReportSink),
        window,
        policy,
    );

    let stats = service
        .run(&args.input_file, &args.output_stats, &args.output_text)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!(
        total = stats.meta.total_count,
        active_users = stats.meta.active_user_count,
        top_talkers = stats.top_talkers.len(),
        night_owl = stats.night_owl.is_some(),
        "report artifacts ready"
    );
    Ok(())
}
