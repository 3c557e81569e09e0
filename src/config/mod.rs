pub mod settings;
pub mod toml_config;

pub use settings::AppSettings;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "dmx-addresses")]
#[command(about = "Compute evenly spaced DMX start addresses and write them to a file")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the address file is written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Name of the address file
    #[arg(short, long)]
    pub file_name: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
