//! Raw location text entered by the user

use std::fmt;

use crate::errors::DomainError;

/// Location text as typed by the user, guaranteed non-empty after trimming
///
/// Either a numeric pair such as `"-14.0, 33.8"` or a free-text place name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Create a new query from user text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocationQuery` if the text is blank.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidLocationQuery(
                "location must not be empty".to_string(),
            ));
        }
        Ok(Self(text))
    }

    /// The text exactly as entered
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under which geocoding results for this text are cached
    #[must_use]
    pub fn cache_key(&self) -> String {
        self.0.trim().to_lowercase()
    }

    /// Parse the text as a `number, number` pair
    ///
    /// Matches `^\s*(-?\d+\.?\d*),\s*(-?\d+\.?\d*)\s*$`: the comma must follow
    /// the first number directly, whitespace is only allowed after it and
    /// around the whole pair. Returns the numbers in the order typed.
    #[must_use]
    pub fn numeric_pair(&self) -> Option<(f64, f64)> {
        let (first, second) = self.0.trim().split_once(',')?;
        if !is_decimal_token(first) {
            return None;
        }
        let second = second.trim_start();
        if !is_decimal_token(second) {
            return None;
        }
        Some((first.parse().ok()?, second.parse().ok()?))
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `-?\d+\.?\d*`
fn is_decimal_token(token: &str) -> bool {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    !integer.is_empty()
        && integer.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}
