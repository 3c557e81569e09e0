/// The only reply that sends the session back to the prompts.
pub const RETRY_TOKEN: &str = "n";

/// Three parsed inputs of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPlan {
    pub light_count: i64,
    pub channel_count: i64,
    pub first_position: i64,
}

impl AddressPlan {
    pub fn new(light_count: i64, channel_count: i64, first_position: i64) -> Self {
        Self {
            light_count,
            channel_count,
            first_position,
        }
    }

    /// `first_position + i * channel_count` for every light.
    ///
    /// A light count of zero or below gives an empty list. Returns `None` when an address
    /// does not fit in an `i64` or the list itself cannot be allocated.
    pub fn addresses(&self) -> Option<Vec<i64>> {
        if self.light_count <= 0 {
            return Some(Vec::new());
        }

        // 先確認最後一個位址不會溢位，中間的位址必定介於首尾之間
        let last_offset = (self.light_count - 1).checked_mul(self.channel_count)?;
        self.first_position.checked_add(last_offset)?;

        let len = usize::try_from(self.light_count).ok()?;
        let mut addresses = Vec::new();
        addresses.try_reserve_exact(len).ok()?;
        addresses.extend((0..self.light_count).map(|i| self.first_position + i * self.channel_count));

        Some(addresses)
    }
}

/// Interpretation of a "continue?" or "are these wanted?" reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Retry,
    Finish,
}

impl Answer {
    /// Exact, case-sensitive comparison with [`RETRY_TOKEN`]; nothing is trimmed.
    pub fn from_reply(reply: &str) -> Self {
        if reply == RETRY_TOKEN {
            Answer::Retry
        } else {
            Answer::Finish
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    EmptyInput,
    NotNumeric,
    Addresses,
}

impl Confirmation {
    pub fn question(&self) -> &'static str {
        match self {
            Confirmation::EmptyInput | Confirmation::NotNumeric => {
                "Do you want to continue? (y/n)\n"
            }
            Confirmation::Addresses => "Are these wanted addresses? (y/n)\n",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Prompting,
    Validating,
    Confirming(Confirmation),
    Done,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub light_n: String,
    pub channel_n: String,
    pub first_position: String,
    pub addresses: Vec<i64>,
    /// True only when the last round ended by accepting `addresses`.
    pub confirmed: bool,
    pub rounds: usize,
    pub phase: Phase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            light_n: String::new(),
            channel_n: String::new(),
            first_position: String::new(),
            addresses: Vec::new(),
            confirmed: false,
            rounds: 0,
            phase: Phase::Prompting,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub addresses: Vec<i64>,
    pub confirmed: bool,
    pub rounds: usize,
}
