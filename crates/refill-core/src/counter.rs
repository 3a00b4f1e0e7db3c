//! The counter state unit.
//!
//! A [`CounterState`] owns one [`Signal`] holding a [`Snapshot`], so a
//! `reset()` that changes both `count` and `reset_epoch` reaches subscribers as a
//! single notification.

use std::cell::RefCell;
use std::rc::Rc;

use crate::effects::{Dispose, ResetGate};
use crate::error::{Error, Result};
use crate::signal::{Signal, SubId};

/// Value used when no initial value is supplied.
pub const DEFAULT_INITIAL: i64 = 1;

/// The `(count, reset_epoch)` pair as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub count: i64,
    pub reset_epoch: u64,
}

impl Snapshot {
    /// How many items a renderer repeats. Negative counts render nothing.
    pub fn cups(&self) -> usize {
        usize::try_from(self.count).unwrap_or(0)
    }
}

/// Counter with reset-to-initial and a reset epoch.
///
/// Cloning yields another handle to the same state.
#[derive(Clone)]
pub struct CounterState {
    initial: i64,
    state: Signal<Snapshot>,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL)
    }
}

impl CounterState {
    /// Accepts any value, including zero and negatives.
    pub fn new(initial: i64) -> Self {
        if initial < 0 {
            log::warn!("counter: negative initial value {initial}; renderers will show nothing");
        }
        Self {
            initial,
            state: Signal::new(Snapshot {
                count: initial,
                reset_epoch: 0,
            }),
        }
    }

    pub fn from_initial(initial: Option<i64>) -> Self {
        Self::new(initial.unwrap_or(DEFAULT_INITIAL))
    }

    /// Like [`CounterState::new`] but rejects a negative initial value.
    pub fn try_new(initial: i64) -> Result<Self> {
        if initial < 0 {
            return Err(Error::NegativeInitial(initial));
        }
        Ok(Self::new(initial))
    }

    pub fn initial(&self) -> i64 {
        self.initial
    }

    pub fn count(&self) -> i64 {
        self.state.with(|s| s.count)
    }

    pub fn reset_epoch(&self) -> u64 {
        self.state.with(|s| s.reset_epoch)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.get()
    }

    pub fn set_count(&self, n: i64) {
        if n < 0 {
            log::warn!("counter: count set to negative value {n}");
        }
        log::debug!("counter: set_count({n})");
        self.state.update(|s| s.count = n);
    }

    /// Like [`CounterState::set_count`] but rejects negative values.
    pub fn try_set_count(&self, n: i64) -> Result<()> {
        if n < 0 {
            return Err(Error::NegativeCount(n));
        }
        self.set_count(n);
        Ok(())
    }

    /// Adds one, saturating at `i64::MAX`.
    pub fn increment(&self) {
        self.state.update(|s| {
            if s.count == i64::MAX {
                log::warn!("counter: increment saturated at {}", i64::MAX);
            }
            s.count = s.count.saturating_add(1);
            log::debug!("counter: incremented to {}", s.count);
        });
    }

    /// Adds one, or fails without touching the state on overflow.
    pub fn try_increment(&self) -> Result<()> {
        let count = self.count();
        let next = count.checked_add(1).ok_or(Error::Overflow { count })?;
        self.state.update(|s| s.count = next);
        Ok(())
    }

    /// Restores the initial value and bumps the reset epoch in one notification.
    pub fn reset(&self) {
        let initial = self.initial;
        self.state.update(|s| {
            s.count = initial;
            s.reset_epoch += 1;
            log::debug!("counter: reset to {initial} (epoch {})", s.reset_epoch);
        });
    }

    /// Calls `f` once after every mutation.
    pub fn subscribe(&self, f: impl Fn(Snapshot) + 'static) -> SubId {
        self.state.subscribe(move |s| f(*s))
    }

    /// Like [`CounterState::subscribe`], returning a guard that unsubscribes when run.
    pub fn watch(&self, f: impl Fn(Snapshot) + 'static) -> Dispose {
        let id = self.subscribe(f);
        let state = self.state.clone();
        Dispose::new(move || {
            state.unsubscribe(id);
        })
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.state.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscriber_count()
    }

    /// Runs `effect` once per `reset()` made after this call.
    ///
    /// The epoch current at install time counts as the mount observation and
    /// never fires; plain count changes never fire.
    pub fn on_reset(&self, effect: impl Fn(Snapshot) + 'static) -> SubId {
        let gate = Rc::new(RefCell::new(ResetGate::new()));
        gate.borrow_mut().observe(self.reset_epoch());
        self.subscribe(move |s| {
            let fire = gate.borrow_mut().observe(s.reset_epoch);
            if fire {
                effect(s);
            }
        })
    }
}
