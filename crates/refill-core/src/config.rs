use crate::counter::{CounterState, DEFAULT_INITIAL};
use crate::error::{Error, Result};

/// Construction options for a [`CounterState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CounterConfig {
    /// Falls back to [`DEFAULT_INITIAL`] when absent.
    pub initial: Option<i64>,
    /// Reject a negative initial value instead of storing it.
    pub strict: bool,
}

impl CounterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(mut self, initial: i64) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn resolved_initial(&self) -> i64 {
        self.initial.unwrap_or(DEFAULT_INITIAL)
    }

    pub fn build(&self) -> Result<CounterState> {
        let initial = self.resolved_initial();
        if self.strict && initial < 0 {
            return Err(Error::NegativeInitial(initial));
        }
        Ok(CounterState::new(initial))
    }
}
