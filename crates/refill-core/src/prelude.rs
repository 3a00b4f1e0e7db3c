pub use crate::config::CounterConfig;
pub use crate::counter::{CounterState, DEFAULT_INITIAL, Snapshot};
pub use crate::effects::{Dispose, MountState, ResetGate};
pub use crate::error::{Error, Result};
pub use crate::hooks::{use_counter, use_counter_with_key};
pub use crate::reset_effect;
pub use crate::runtime::{remember, remember_with_key};
pub use crate::session::{Session, SessionHandle, current_session, on_end};
pub use crate::signal::{Signal, SubId, signal};
