pub mod engine;
pub mod session;
pub mod writer;

pub use crate::domain::model::{
    AddressPlan, Answer, Confirmation, Phase, SessionOutcome, SessionState,
};
pub use crate::domain::ports::{ConfigProvider, Prompter, Storage};
pub use crate::utils::error::Result;
