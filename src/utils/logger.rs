use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 建立日誌過濾器；RUST_LOG 優先，其次 verbose，最後是設定檔中的等級
pub fn cli_filter_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        "dmx_addresses=debug".to_string()
    } else {
        format!("dmx_addresses={}", level.unwrap_or(DEFAULT_LOG_LEVEL))
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli_filter_directive(verbose, level)));

    // stdout 保留給互動提示，日誌一律寫到 stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
