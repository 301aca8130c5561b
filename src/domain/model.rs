use serde::{Deserialize, Serialize};

/// Parse outcome for the raw `number` query token. The classifier only ever
/// sees the `Valid` side; everything else turns into a 400 at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedNumber {
    Valid(i64),
    /// The original token, or `None` when the parameter was absent.
    Invalid(Option<String>),
}

/// Property tags attached to a classified number, serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberProperty {
    Prime,
    Perfect,
    Armstrong,
    Odd,
}

/// Result record for one classified number. Created fresh per request and
/// discarded after serialization; there is no cache or shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    /// True properties only, in fixed priority order: prime, perfect,
    /// armstrong, odd.
    pub properties: Vec<NumberProperty>,
    pub digit_sum: u32,
    pub fun_fact: String,
}
