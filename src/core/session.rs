use crate::core::{AddressPlan, Answer, Confirmation, Phase, SessionOutcome, SessionState};
use crate::domain::ports::Prompter;
use crate::utils::error::Result;

pub const LIGHT_COUNT_PROMPT: &str = "How many lights? \n";
pub const CHANNEL_COUNT_PROMPT: &str = "How many channels? \n";
pub const FIRST_POSITION_PROMPT: &str = "First position of in the DMX universe \n";

pub const EMPTY_INPUT_MESSAGE: &str = "You need to input something :D";
pub const NOT_NUMERIC_MESSAGE: &str = "You need to input numbers :D";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Empty,
    NotNumeric,
    Overflow,
    Addresses(Vec<i64>),
}

/// Base-10 integer with surrounding whitespace ignored.
///
/// Single underscores may group digits (`1_000`); leading, trailing or doubled underscores
/// are rejected.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let text = raw.trim();
    if !text.contains('_') {
        return text.parse::<i64>().ok();
    }

    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let grouped = digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if !grouped {
        return None;
    }

    text.replace('_', "").parse::<i64>().ok()
}

/// Checks the three raw inputs of a round and computes the address list.
///
/// Emptiness is tested on the raw text before any parsing, so `""` in any field wins over
/// a non-numeric value in another.
pub fn validate_inputs(light_n: &str, channel_n: &str, first_position: &str) -> Validation {
    if light_n.is_empty() || channel_n.is_empty() || first_position.is_empty() {
        return Validation::Empty;
    }

    let parsed = (
        parse_integer(light_n),
        parse_integer(channel_n),
        parse_integer(first_position),
    );

    let (Some(light_count), Some(channel_count), Some(first)) = parsed else {
        return Validation::NotNumeric;
    };

    match AddressPlan::new(light_count, channel_count, first).addresses() {
        Some(addresses) => Validation::Addresses(addresses),
        None => Validation::Overflow,
    }
}

pub fn format_addresses(addresses: &[i64]) -> String {
    format!("Addresses:  {:?}", addresses)
}

/// Interactive prompt/confirm loop.
///
/// The address list of a rejected round is kept in the state. When a later round ends on an
/// empty or non-numeric input the outcome still carries that list, with `confirmed == false`.
pub struct Session<P: Prompter> {
    prompter: P,
    state: SessionState,
}

impl<P: Prompter> Session<P> {
    pub fn new(prompter: P) -> Self {
        Self {
            prompter,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    pub fn is_done(&self) -> bool {
        self.state.phase == Phase::Done
    }

    /// Advances the state machine by one phase and returns the new phase.
    pub fn step(&mut self) -> Result<Phase> {
        let next = match self.state.phase {
            Phase::Prompting => {
                self.state.rounds += 1;
                tracing::debug!("Round {}: prompting for inputs", self.state.rounds);

                self.state.light_n = self.prompter.ask(LIGHT_COUNT_PROMPT)?;
                self.state.channel_n = self.prompter.ask(CHANNEL_COUNT_PROMPT)?;
                self.state.first_position = self.prompter.ask(FIRST_POSITION_PROMPT)?;
                Phase::Validating
            }
            Phase::Validating => self.validate()?,
            Phase::Confirming(kind) => {
                let reply = self.prompter.ask(kind.question())?;
                let answer = Answer::from_reply(&reply);
                tracing::debug!("Reply {:?} to {:?} read as {:?}", reply, kind, answer);

                self.state.confirmed =
                    kind == Confirmation::Addresses && answer == Answer::Finish;

                match answer {
                    Answer::Retry => Phase::Prompting,
                    Answer::Finish => Phase::Done,
                }
            }
            Phase::Done => Phase::Done,
        };

        self.state.phase = next;
        Ok(next)
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        while !self.is_done() {
            self.step()?;
        }

        tracing::debug!(
            "Session finished after {} round(s) with {} address(es), confirmed: {}",
            self.state.rounds,
            self.state.addresses.len(),
            self.state.confirmed
        );

        Ok(SessionOutcome {
            addresses: self.state.addresses.clone(),
            confirmed: self.state.confirmed,
            rounds: self.state.rounds,
        })
    }

    fn validate(&mut self) -> Result<Phase> {
        let validation = validate_inputs(
            &self.state.light_n,
            &self.state.channel_n,
            &self.state.first_position,
        );

        let kind = match validation {
            Validation::Empty => {
                self.prompter.say(EMPTY_INPUT_MESSAGE)?;
                Confirmation::EmptyInput
            }
            Validation::NotNumeric => {
                self.prompter.say(NOT_NUMERIC_MESSAGE)?;
                Confirmation::NotNumeric
            }
            Validation::Overflow => {
                tracing::warn!(
                    "⚠️ Addresses for lights={:?} channels={:?} first={:?} overflow a 64-bit integer",
                    self.state.light_n,
                    self.state.channel_n,
                    self.state.first_position
                );
                self.prompter.say(NOT_NUMERIC_MESSAGE)?;
                Confirmation::NotNumeric
            }
            Validation::Addresses(addresses) => {
                self.prompter.say(&format_addresses(&addresses))?;
                self.state.addresses = addresses;
                Confirmation::Addresses
            }
        };

        Ok(Phase::Confirming(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DmxError;
    use std::collections::VecDeque;

    struct ScriptedPrompter {
        replies: VecDeque<String>,
        transcript: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(replies: &[&str]) -> Self {
            Self {
                replies: replies.iter().map(|r| r.to_string()).collect(),
                transcript: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, prompt: &str) -> Result<String> {
            self.transcript.push(prompt.to_string());
            self.replies.pop_front().ok_or(DmxError::InputClosed)
        }

        fn say(&mut self, line: &str) -> Result<()> {
            self.transcript.push(format!("{}\n", line));
            Ok(())
        }
    }

    #[test]
    fn test_validate_inputs() {
        assert_eq!(
            validate_inputs("3", "4", "10"),
            Validation::Addresses(vec![10, 14, 18])
        );
        assert_eq!(validate_inputs("", "4", "10"), Validation::Empty);
        assert_eq!(validate_inputs("abc", "", "10"), Validation::Empty);
        assert_eq!(validate_inputs("abc", "4", "10"), Validation::NotNumeric);
        assert_eq!(validate_inputs("3", "4.5", "10"), Validation::NotNumeric);
        assert_eq!(validate_inputs(" ", "4", "10"), Validation::NotNumeric);
        assert_eq!(validate_inputs(" 2 ", "+3", "-1"), Validation::Addresses(vec![-1, 2]));
        assert_eq!(validate_inputs("-2", "3", "1"), Validation::Addresses(vec![]));
        assert_eq!(validate_inputs("1_0", "1", "1"), Validation::Addresses((1..=10).collect()));
        assert_eq!(
            validate_inputs("1000000000000000000", "0", "1"),
            Validation::Overflow
        );
        assert_eq!(
            validate_inputs("3", &i64::MAX.to_string(), "1"),
            Validation::Overflow
        );
    }

    #[test]
    fn test_parse_integer_digit_groups() {
        assert_eq!(parse_integer("1_000"), Some(1000));
        assert_eq!(parse_integer(" -5_1_2 "), Some(-512));
        assert_eq!(parse_integer("+1_0"), Some(10));
        assert_eq!(parse_integer("_10"), None);
        assert_eq!(parse_integer("10_"), None);
        assert_eq!(parse_integer("1__0"), None);
        assert_eq!(parse_integer("-_1"), None);
        assert_eq!(parse_integer("1_a"), None);
    }

    #[test]
    fn test_empty_input_then_retry_restarts_prompts() {
        let mut session = Session::new(ScriptedPrompter::new(&[
            "", "4", "10", "n", "1", "1", "5", "y",
        ]));
        let outcome = session.run().unwrap();

        assert_eq!(outcome.addresses, vec![5]);
        assert!(outcome.confirmed);
        assert_eq!(outcome.rounds, 2);

        let transcript = session.into_prompter().transcript;
        assert_eq!(transcript[3], format!("{}\n", EMPTY_INPUT_MESSAGE));
        assert_eq!(transcript[4], "Do you want to continue? (y/n)\n");
        assert_eq!(transcript[5], LIGHT_COUNT_PROMPT);
        assert_eq!(transcript[6], CHANNEL_COUNT_PROMPT);
        assert_eq!(transcript[7], FIRST_POSITION_PROMPT);
    }

    #[test]
    fn test_format_addresses() {
        assert_eq!(format_addresses(&[10, 14, 18]), "Addresses:  [10, 14, 18]");
        assert_eq!(format_addresses(&[]), "Addresses:  []");
    }

    #[test]
    fn test_accepted_round() {
        let mut session = Session::new(ScriptedPrompter::new(&["3", "4", "10", "y"]));
        let outcome = session.run().unwrap();

        assert_eq!(outcome.addresses, vec![10, 14, 18]);
        assert!(outcome.confirmed);
        assert_eq!(outcome.rounds, 1);

        let prompter = session.into_prompter();
        assert_eq!(
            prompter.transcript,
            vec![
                LIGHT_COUNT_PROMPT.to_string(),
                CHANNEL_COUNT_PROMPT.to_string(),
                FIRST_POSITION_PROMPT.to_string(),
                "Addresses:  [10, 14, 18]\n".to_string(),
                "Are these wanted addresses? (y/n)\n".to_string(),
            ]
        );
    }

    #[test]
    fn test_step_walks_phases() {
        let mut session = Session::new(ScriptedPrompter::new(&["1", "1", "1", "n"]));
        assert_eq!(session.step().unwrap(), Phase::Validating);
        assert_eq!(
            session.step().unwrap(),
            Phase::Confirming(Confirmation::Addresses)
        );
        assert_eq!(session.step().unwrap(), Phase::Prompting);
        assert!(!session.state().confirmed);
        assert_eq!(session.state().addresses, vec![1]);
    }

    #[test]
    fn test_empty_input_then_finish() {
        let mut session = Session::new(ScriptedPrompter::new(&["", "4", "10", "y"]));
        let outcome = session.run().unwrap();

        assert!(outcome.addresses.is_empty());
        assert!(!outcome.confirmed);

        let transcript = session.into_prompter().transcript;
        assert_eq!(transcript[3], format!("{}\n", EMPTY_INPUT_MESSAGE));
        assert_eq!(transcript[4], "Do you want to continue? (y/n)\n");
    }

    #[test]
    fn test_not_numeric_then_retry() {
        let mut session = Session::new(ScriptedPrompter::new(&[
            "abc", "4", "10", "n", "2", "5", "1", "",
        ]));
        let outcome = session.run().unwrap();

        assert_eq!(outcome.addresses, vec![1, 6]);
        assert!(outcome.confirmed);
        assert_eq!(outcome.rounds, 2);

        let transcript = session.into_prompter().transcript;
        assert_eq!(transcript[3], format!("{}\n", NOT_NUMERIC_MESSAGE));
        assert_eq!(transcript[5], LIGHT_COUNT_PROMPT);
        assert_eq!(transcript[6], CHANNEL_COUNT_PROMPT);
        assert_eq!(transcript[7], FIRST_POSITION_PROMPT);
    }

    #[test]
    fn test_rejected_list_survives_failed_round() {
        let mut session = Session::new(ScriptedPrompter::new(&[
            "2", "3", "1", "n", "", "", "", "y",
        ]));
        let outcome = session.run().unwrap();

        assert_eq!(outcome.addresses, vec![1, 4]);
        assert!(!outcome.confirmed);
    }

    #[test]
    fn test_uppercase_n_finishes() {
        let mut session = Session::new(ScriptedPrompter::new(&["2", "3", "1", "N"]));
        let outcome = session.run().unwrap();
        assert_eq!(outcome.rounds, 1);
        assert!(outcome.confirmed);
    }

    #[test]
    fn test_overflow_reports_numeric_error() {
        let max = i64::MAX.to_string();
        let mut session = Session::new(ScriptedPrompter::new(&["2", "1", max.as_str(), "y"]));
        let outcome = session.run().unwrap();
        assert!(outcome.addresses.is_empty());

        let transcript = session.into_prompter().transcript;
        assert_eq!(transcript[3], format!("{}\n", NOT_NUMERIC_MESSAGE));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut session = Session::new(ScriptedPrompter::new(&["3", "4"]));
        assert!(matches!(session.run(), Err(DmxError::InputClosed)));
    }
}
