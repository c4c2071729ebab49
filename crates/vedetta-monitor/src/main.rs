mod config;
mod monitor;

use anyhow::Result;
use config::DaemonConfig;
use monitor::Monitor;
use tracing_subscriber::EnvFilter;
use vedetta_alert::AlertDispatcher;
use vedetta_common::settings::MonitorSettings;
use vedetta_notify::telegram::TelegramChannel;
use vedetta_store::ledger::AlertLedger;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vedetta=info".parse()?))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (report_mode, config_path) = match args.first().map(String::as_str) {
        Some("report") => (true, args.get(1).cloned()),
        other => (false, other.map(str::to_string)),
    };
    let config_path = config_path.unwrap_or_else(|| "vedetta.toml".to_string());
    let config = DaemonConfig::load_or_default(&config_path)?;

    if report_mode {
        print_report(&config);
        return Ok(());
    }

    tracing::info!(config = %config_path, "vedetta starting");

    let settings = MonitorSettings::load(&config.settings_path);
    if settings.bot_token.is_empty() {
        tracing::warn!("Bot token not configured; notifications will fail until it is set");
    }
    let channel = TelegramChannel::new(&settings.bot_token, &settings.chat_id);
    let dispatcher = AlertDispatcher::new(AlertLedger::new(&config.ledger_path), Box::new(channel));

    Monitor::new(config, dispatcher).run().await;
    Ok(())
}

/// `report` subcommand: print the resource snapshots and exit.
fn print_report(config: &DaemonConfig) {
    let settings = MonitorSettings::load(&config.settings_path);
    let mounts: Vec<String> = settings
        .mount_points
        .iter()
        .map(|m| m.path.clone())
        .collect();

    println!("{}\n", vedetta_report::cpu::summary());
    println!("{}\n", vedetta_report::memory::summary());
    println!("{}\n", vedetta_report::disk::summary(&mounts));
    println!("{}", vedetta_report::network::summary());
}
