use crate::core::session::Session;
use crate::core::writer::write_addresses;
use crate::core::{Prompter, SessionOutcome, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: SessionOutcome,
    /// Full path of the written file, `None` when there was nothing to write.
    pub output_path: Option<String>,
}

/// Runs an interactive session and writes whatever list it ends with.
pub struct AddressEngine<P: Prompter, S: Storage> {
    prompter: P,
    storage: S,
    file_name: String,
}

impl<P: Prompter, S: Storage> AddressEngine<P, S> {
    pub fn new(prompter: P, storage: S, file_name: impl Into<String>) -> Self {
        Self {
            prompter,
            storage,
            file_name: file_name.into(),
        }
    }

    pub fn run(self) -> Result<RunReport> {
        let Self {
            prompter,
            storage,
            file_name,
        } = self;

        let mut session = Session::new(prompter);
        let outcome = session.run()?;
        let mut prompter = session.into_prompter();

        if outcome.addresses.is_empty() {
            return Ok(RunReport {
                outcome,
                output_path: None,
            });
        }

        if !outcome.confirmed {
            tracing::warn!(
                "⚠️ Writing {} address(es) from a round that was answered with 'n'",
                outcome.addresses.len()
            );
        }

        prompter.say(&format!("Writing to file:  {}", file_name))?;
        let output_path = write_addresses(&storage, &file_name, &outcome.addresses)?;

        Ok(RunReport {
            outcome,
            output_path,
        })
    }
}
