use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    pub fn has_run(&self) -> bool {
        self.0.borrow().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    NotMounted,
    Mounted,
}

/// Gate for an effect keyed on a reset epoch.
///
/// The first observation only records the epoch (the effect is suppressed on
/// mount). Every later observation of a newer epoch lets the effect run; epochs
/// only grow, so an older one is ignored.
#[derive(Debug, Clone, Default)]
pub struct ResetGate {
    has_mounted_before: bool,
    last_epoch: u64,
}

impl ResetGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_mounted_before(&self) -> bool {
        self.has_mounted_before
    }

    pub fn mount_state(&self) -> MountState {
        if self.has_mounted_before {
            MountState::Mounted
        } else {
            MountState::NotMounted
        }
    }

    /// Records `epoch` and returns whether the effect should run.
    pub fn observe(&mut self, epoch: u64) -> bool {
        if !self.has_mounted_before {
            self.has_mounted_before = true;
            self.last_epoch = epoch;
            return false;
        }
        if epoch <= self.last_epoch {
            return false;
        }
        self.last_epoch = epoch;
        true
    }
}
