use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::runtime::Composer;

thread_local! {
    static CURRENT_SESSION: RefCell<Option<Weak<SessionInner>>> = const { RefCell::new(None) };
}

/// One lifetime of remembered state, from construction to [`Session::end`].
///
/// A session owns the composer slots that `remember` and the hooks store into,
/// the cleanups registered while composing, and a dirty flag that observers set
/// when remembered state changes.
pub struct Session {
    inner: Rc<SessionInner>,
}

struct SessionInner {
    composer: RefCell<Composer>,
    disposers: RefCell<Vec<Box<dyn FnOnce()>>>,
    dirty: Cell<bool>,
    passes: Cell<u64>,
}

/// Weak handle used by subscribers to mark a session dirty.
#[derive(Clone)]
pub struct SessionHandle(Weak<SessionInner>);

impl SessionHandle {
    /// No-op once the session is gone.
    pub fn invalidate(&self) {
        if let Some(inner) = self.0.upgrade() {
            inner.dirty.set(true);
        }
    }

    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(SessionInner {
                composer: RefCell::new(Composer::default()),
                disposers: RefCell::new(Vec::new()),
                dirty: Cell::new(false),
                passes: Cell::new(0),
            }),
        }
    }

    /// Runs one composition pass with this session current.
    pub fn compose<R>(&self, f: impl FnOnce() -> R) -> R {
        self.inner.composer.borrow_mut().cursor = 0;
        self.inner.passes.set(self.inner.passes.get() + 1);
        log::trace!("session: composition pass {}", self.inner.passes.get());

        let prev = CURRENT_SESSION.with(|current| {
            current.replace(Some(Rc::downgrade(&self.inner)))
        });
        let _restore = RestoreCurrent { prev };
        f()
    }

    pub fn passes(&self) -> u64 {
        self.inner.passes.get()
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle(Rc::downgrade(&self.inner))
    }

    pub fn invalidate(&self) {
        self.inner.dirty.set(true);
    }

    pub fn is_dirty(&self) -> bool {
        self.inner.dirty.get()
    }

    /// Returns the dirty flag and clears it.
    pub fn take_dirty(&self) -> bool {
        self.inner.dirty.replace(false)
    }

    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        self.inner.disposers.borrow_mut().push(Box::new(disposer));
    }

    pub(crate) fn composer(&self) -> &RefCell<Composer> {
        &self.inner.composer
    }

    /// Runs every cleanup and drops all remembered state.
    pub fn end(self) {
        self.inner.run_disposers();
        let composer = std::mem::take(&mut *self.inner.composer.borrow_mut());
        drop(composer);
    }
}

impl Clone for Session {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

// Puts the previous session back even if the composition pass unwinds.
struct RestoreCurrent {
    prev: Option<Weak<SessionInner>>,
}

impl Drop for RestoreCurrent {
    fn drop(&mut self) {
        let prev = self.prev.take();
        CURRENT_SESSION.with(|current| *current.borrow_mut() = prev);
    }
}

impl SessionInner {
    fn run_disposers(&self) {
        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for disposer in disposers {
            disposer();
        }
    }
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        self.run_disposers();
    }
}

pub fn current_session() -> Option<Session> {
    CURRENT_SESSION.with(|current| {
        current
            .borrow()
            .as_ref()
            .and_then(|weak| weak.upgrade().map(|inner| Session { inner }))
    })
}

/// Registers a cleanup on the current session.
///
/// Outside a session there is nothing to tie the cleanup to, so it runs
/// immediately.
pub fn on_end(f: impl FnOnce() + 'static) {
    if let Some(session) = current_session() {
        session.add_disposer(f);
    } else {
        log::warn!("on_end: called outside a session; running cleanup now");
        f();
    }
}
