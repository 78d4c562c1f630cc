//! Recording listener for asserting on notifications.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use gallery_model::Listener;

/// Records every `(target, timestamp)` it is called with.
pub struct Spy<T> {
    calls: Rc<RefCell<Vec<(T, DateTime<Utc>)>>>,
    listener: Listener<T>,
}

impl<T: Clone + 'static> Spy<T> {
    pub fn new() -> Self {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let recorded = Rc::clone(&calls);
        let listener: Listener<T> = Rc::new(move |target: &T, at: DateTime<Utc>| {
            recorded.borrow_mut().push((target.clone(), at));
        });
        Spy { calls, listener }
    }

    /// The same `Rc` every time, so it can be used for removal.
    pub fn listener(&self) -> Listener<T> {
        Rc::clone(&self.listener)
    }

    pub fn called(&self) -> bool {
        self.call_count() > 0
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_call(&self) -> Option<(T, DateTime<Utc>)> {
        self.calls.borrow().last().cloned()
    }
}
