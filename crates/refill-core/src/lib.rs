//! # Counters, Sessions, and Reset Effects
//!
//! Refill is a small reactive core for one piece of UI state: a counter that
//! can be incremented, set, and reset to its initial value. There are four
//! main pieces:
//!
//! - `Signal<T>` — observable value with subscribers.
//! - `CounterState` — the counter itself, held in a `Signal<Snapshot>`.
//! - `Session` / `remember*` — lifecycle-aware storage bound to composition.
//! - `reset_effect!` / `CounterState::on_reset` — side-effects keyed on resets.
//!
//! ## Counter state
//!
//! ```rust
//! use refill_core::*;
//!
//! let cups = CounterState::new(5);
//! cups.increment();
//! cups.increment();
//! assert_eq!(cups.count(), 7);
//!
//! cups.reset();
//! assert_eq!(cups.count(), 5);
//! assert_eq!(cups.reset_epoch(), 1);
//! ```
//!
//! `count` and `reset_epoch` live in one `Snapshot`, so a reset reaches each
//! subscriber as a single notification even though both fields changed.
//! `CounterState::default()` starts at [`DEFAULT_INITIAL`] (1). Any initial
//! value is accepted; use `try_new` / `CounterConfig::strict` to reject
//! negatives.
//!
//! ## Reset effects
//!
//! The reset epoch lets an observer tell "reset" apart from "changed", even when
//! a reset restores the value already shown. A reset effect never fires for the
//! epoch it first sees:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use refill_core::*;
//!
//! let cups = CounterState::new(2);
//! let fired = Rc::new(Cell::new(0));
//! let f = fired.clone();
//! cups.on_reset(move |_| f.set(f.get() + 1));
//!
//! cups.increment();
//! assert_eq!(fired.get(), 0);
//! cups.reset();
//! assert_eq!(fired.get(), 1);
//! ```
//!
//! ## Sessions and hooks
//!
//! Inside `Session::compose`, `use_counter` remembers a counter per call site
//! and marks the session dirty whenever it changes; the owner recomposes when
//! `take_dirty()` says so:
//!
//! ```rust
//! use refill_core::*;
//!
//! fn app() -> CounterState {
//!     let cups = use_counter(None);
//!     reset_effect!(cups.reset_epoch(), || log::info!("refilled"));
//!     cups
//! }
//!
//! let session = Session::new();
//! let cups = session.compose(app);
//! cups.increment();
//! assert!(session.take_dirty());
//! assert_eq!(session.compose(app).count(), 2);
//! session.end();
//! ```

pub mod config;
pub mod counter;
pub mod effects;
pub mod error;
pub mod hooks;
pub mod prelude;
pub mod runtime;
pub mod session;
pub mod signal;


pub use prelude::*;
