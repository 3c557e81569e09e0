pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{LocalStorage, TerminalPrompter};
pub use crate::config::AppSettings;
pub use crate::core::{engine::AddressEngine, session::Session, writer::write_addresses};
pub use crate::utils::error::{DmxError, Result};
