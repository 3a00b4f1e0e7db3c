use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

use crate::session::current_session;

/// Per-session slot storage for `remember`.
#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

/// Slot-based remember (sequential composition only).
///
/// `init` must not call `remember` itself.
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let Some(session) = current_session() else {
        log::warn!("remember: called outside a session; value will not be kept");
        return Rc::new(init());
    };

    let mut c = session.composer().borrow_mut();
    let cursor = c.cursor;
    c.cursor += 1;

    if cursor >= c.slots.len() {
        let rc: Rc<T> = Rc::new(init());
        c.slots.push(Box::new(rc.clone()));
        return rc;
    }

    if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
        rc.clone()
    } else {
        log::warn!(
            "remember: slot {} type changed; replacing. \
             If this is due to conditional composition, prefer remember_with_key.",
            cursor
        );
        let rc: Rc<T> = Rc::new(init());
        c.slots[cursor] = Box::new(rc.clone());
        rc
    }
}

/// Key-based remember.
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let Some(session) = current_session() else {
        log::warn!("remember_with_key: key '{key}' used outside a session; value will not be kept");
        return Rc::new(init());
    };

    let mut c = session.composer().borrow_mut();
    if let Some(existing) = c.keyed_slots.get(&key) {
        if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
            return rc.clone();
        }
        log::warn!(
            "remember_with_key: key '{}' reused with a different type; replacing.",
            key
        );
    }

    let rc: Rc<T> = Rc::new(init());
    c.keyed_slots.insert(key, Box::new(rc.clone()));
    rc
}
