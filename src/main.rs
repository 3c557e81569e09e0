use clap::Parser;
use dmx_addresses::core::ConfigProvider;
use dmx_addresses::utils::logger;
use dmx_addresses::{AddressEngine, AppSettings, CliConfig, LocalStorage, TerminalPrompter};

fn main() {
    let cli = CliConfig::parse();

    let settings = match AppSettings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    tracing::debug!("Settings: {:?}", settings);

    let storage = LocalStorage::new(settings.output_dir().to_string());
    let engine = AddressEngine::new(TerminalPrompter::stdio(), storage, settings.file_name());

    match engine.run() {
        Ok(report) => match report.output_path {
            Some(path) => tracing::info!("✅ Addresses saved to: {}", path),
            None => tracing::info!("No addresses computed, nothing written"),
        },
        Err(e) => {
            tracing::error!(
                "❌ Session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    }
}
