use std::cell::{Cell, RefCell};

use crate::counter::CounterState;
use crate::effects::ResetGate;
use crate::runtime::{remember, remember_with_key};
use crate::session::current_session;

struct CounterSlot {
    counter: CounterState,
    bound: Cell<bool>,
}

impl CounterSlot {
    fn new(initial: Option<i64>) -> Self {
        Self {
            counter: CounterState::from_initial(initial),
            bound: Cell::new(false),
        }
    }

    fn counter(&self) -> CounterState {
        if !self.bound.get() {
            self.bound.set(bind_to_session(&self.counter));
        }
        self.counter.clone()
    }
}

// Every mutation marks the owning session dirty once; the subscription goes
// away with the session.
fn bind_to_session(counter: &CounterState) -> bool {
    let Some(session) = current_session() else {
        return false;
    };
    let handle = session.handle();
    let guard = counter.watch(move |_| handle.invalidate());
    session.add_disposer(move || guard.run());
    true
}

/// Counter remembered at this call site. `None` starts at 1.
///
/// The initial value is only read the first time; later passes return the same
/// counter whatever they pass in.
pub fn use_counter(initial: Option<i64>) -> CounterState {
    remember(|| CounterSlot::new(initial)).counter()
}

/// Key-based [`use_counter`], stable across conditional branches.
pub fn use_counter_with_key(key: impl AsRef<str>, initial: Option<i64>) -> CounterState {
    remember_with_key(format!("counter:{}", key.as_ref()), || {
        CounterSlot::new(initial)
    })
    .counter()
}

/// Internal implementation: keyed by a per-callsite id string plus `key`.
///
/// Components composed more than once per pass must pass a distinct `key` per
/// instance, otherwise the instances share one gate.
pub fn reset_effect_internal(
    callsite: &'static str,
    key: &str,
    epoch: u64,
    effect: impl FnOnce(),
) {
    let gate = remember_with_key(format!("reset_effect:{callsite}:{key}"), || {
        RefCell::new(ResetGate::new())
    });

    let fire = gate.borrow_mut().observe(epoch);
    if fire {
        log::debug!("reset_effect: epoch {epoch} at {callsite} [{key}]");
        effect();
    }
}

/// Runs `$effect` on passes where `$epoch` grew since the previous pass,
/// never on the first pass.
///
/// `reset_effect!(key = k, epoch, effect)` keeps a separate gate per `k` for
/// components composed several times in one pass.
#[macro_export]
macro_rules! reset_effect {
    (key = $key:expr, $epoch:expr, $effect:expr) => {
        $crate::hooks::reset_effect_internal(
            concat!(module_path!(), ":", line!(), ":", column!()),
            ::core::convert::AsRef::<str>::as_ref(&$key),
            $epoch,
            $effect,
        )
    };
    ($epoch:expr, $effect:expr) => {
        $crate::hooks::reset_effect_internal(
            concat!(module_path!(), ":", line!(), ":", column!()),
            "",
            $epoch,
            $effect,
        )
    };
}
