use crate::config::toml_config::TomlConfig;
use crate::core::writer::DEFAULT_FILE_NAME;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate, LOG_LEVELS};

pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Effective settings of a run: defaults, then the TOML file, then command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub output_dir: String,
    pub file_name: String,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            log_level: None,
            verbose: false,
        }
    }
}

impl AppSettings {
    pub fn from_sources(
        toml: Option<&TomlConfig>,
        output_dir: Option<&str>,
        file_name: Option<&str>,
        verbose: bool,
    ) -> Self {
        let defaults = Self::default();

        Self {
            output_dir: output_dir
                .or_else(|| toml.and_then(TomlConfig::output_directory))
                .map(str::to_string)
                .unwrap_or(defaults.output_dir),
            file_name: file_name
                .or_else(|| toml.and_then(TomlConfig::file_name))
                .map(str::to_string)
                .unwrap_or(defaults.file_name),
            log_level: toml.and_then(TomlConfig::log_level).map(str::to_string),
            verbose,
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &crate::config::CliConfig) -> Result<Self> {
        let toml = match &cli.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                Some(toml)
            }
            None => None,
        };

        let settings = Self::from_sources(
            toml.as_ref(),
            cli.output_dir.as_deref(),
            cli.file_name.as_deref(),
            cli.verbose,
        );
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for AppSettings {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_file_name("file_name", &self.file_name)?;

        if let Some(level) = &self.log_level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}
