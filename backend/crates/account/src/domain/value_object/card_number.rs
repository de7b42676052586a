//! Card Number Value Object

use std::fmt;

/// Card number length
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Payment card number: exactly 16 ASCII digits
///
/// `Debug` masks all but the last four digits so the number never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn parse(value: &str) -> Option<Self> {
        (value.len() == CARD_NUMBER_DIGITS && value.bytes().all(|b| b.is_ascii_digit()))
            .then(|| Self(value.to_string()))
    }

    /// Wrap a value read back from storage
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn last_four(&self) -> &str {
        &self.0[self.0.len().saturating_sub(4)..]
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardNumber(************{})", self.last_four())
    }
}
