// Adapters layer: concrete implementations of the domain ports (terminal, local storage).

pub mod storage;
pub mod terminal;

pub use storage::LocalStorage;
pub use terminal::TerminalPrompter;
