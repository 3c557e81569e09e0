use crate::utils::error::Result;

/// Line-oriented interaction with the operator.
pub trait Prompter {
    /// Writes `prompt` verbatim and reads one reply without its line terminator.
    ///
    /// End of input is [`crate::DmxError::InputClosed`].
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Prints `line` followed by a newline.
    fn say(&mut self, line: &str) -> Result<()>;
}

pub trait Storage {
    /// Creates or truncates `path` and writes `data`, returning the full path written.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn output_dir(&self) -> &str;
    fn file_name(&self) -> &str;
}
