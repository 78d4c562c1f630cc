//! ListenerRegistry - ordered listener list with snapshot notification.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use super::{Listener, ListenerId};

struct Registration<T> {
    id: ListenerId,
    listener: Listener<T>,
}

impl<T> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Registration {
            id: self.id,
            listener: Rc::clone(&self.listener),
        }
    }
}

/// Listener list owned by a single model instance.
///
/// Notification iterates over a snapshot taken at the start of the pass, so
/// listeners registered or removed from inside a callback take effect from
/// the next pass on. The internal borrow is released before any callback
/// runs, which lets callbacks touch the registry (or mutate the model again)
/// without panicking.
pub struct ListenerRegistry<T> {
    registrations: RefCell<Vec<Registration<T>>>,
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ListenerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<ListenerId> = self.registrations.borrow().iter().map(|r| r.id).collect();
        f.debug_struct("ListenerRegistry").field("ids", &ids).finish()
    }
}

impl<T> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self {
            registrations: RefCell::new(Vec::new()),
        }
    }

    /// Append a listener. The same `Rc` may be added more than once.
    pub fn add(&self, listener: Listener<T>) -> ListenerId {
        let id = ListenerId::next();
        self.registrations
            .borrow_mut()
            .push(Registration { id, listener });
        id
    }

    /// Remove one registration. Returns false if the id is not registered here.
    pub fn remove(&self, id: ListenerId) -> bool {
        let mut registrations = self.registrations.borrow_mut();
        match registrations.iter().position(|r| r.id == id) {
            Some(index) => {
                registrations.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every registration of this exact callback (pointer identity).
    /// Returns how many were removed.
    pub fn remove_matching(&self, listener: &Listener<T>) -> usize {
        let mut registrations = self.registrations.borrow_mut();
        let before = registrations.len();
        registrations.retain(|r| !Rc::ptr_eq(&r.listener, listener));
        before - registrations.len()
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.registrations.borrow().iter().any(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.registrations.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.borrow().is_empty()
    }

    /// Invoke every listener, in registration order, with `(target, at)`.
    pub fn notify(&self, target: &T, at: DateTime<Utc>) {
        let snapshot: Vec<Registration<T>> = self.registrations.borrow().clone();
        tracing::trace!(listeners = snapshot.len(), "notifying listeners");
        for registration in snapshot {
            (registration.listener)(target, at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Target;

    fn counter() -> (Rc<Cell<usize>>, Listener<Target>) {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let listener: Listener<Target> =
            Rc::new(move |_: &Target, _: DateTime<Utc>| seen.set(seen.get() + 1));
        (calls, listener)
    }

    #[test]
    fn add_and_notify_in_order() {
        let registry = ListenerRegistry::<Target>::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for label in ["a", "b", "c"] {
            let order = Rc::clone(&order);
            registry.add(Rc::new(move |_: &Target, _: DateTime<Utc>| {
                order.borrow_mut().push(label)
            }));
        }

        registry.notify(&Target, Utc::now());
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicates_are_invoked_twice() {
        let registry = ListenerRegistry::<Target>::new();
        let (calls, listener) = counter();

        let first = registry.add(Rc::clone(&listener));
        let second = registry.add(Rc::clone(&listener));
        assert_ne!(first, second);

        registry.notify(&Target, Utc::now());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn remove_by_id_and_absent_id() {
        let registry = ListenerRegistry::<Target>::new();
        let (calls, listener) = counter();

        let id = registry.add(listener);
        assert!(registry.contains(id));
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.is_empty());

        registry.notify(&Target, Utc::now());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn remove_matching_drops_every_copy() {
        let registry = ListenerRegistry::<Target>::new();
        let (calls, listener) = counter();
        let (other_calls, other) = counter();

        registry.add(Rc::clone(&listener));
        registry.add(other);
        registry.add(Rc::clone(&listener));

        assert_eq!(registry.remove_matching(&listener), 2);
        assert_eq!(registry.remove_matching(&listener), 0);
        assert_eq!(registry.len(), 1);

        registry.notify(&Target, Utc::now());
        assert_eq!(calls.get(), 0);
        assert_eq!(other_calls.get(), 1);
    }

    #[test]
    fn changes_during_a_pass_apply_to_the_next_pass() {
        let registry = Rc::new(ListenerRegistry::<Target>::new());
        let (late_calls, late) = counter();
        let self_calls = Rc::new(Cell::new(0));
        let own_id = Rc::new(Cell::new(None));

        {
            let registry_ref = Rc::downgrade(&registry);
            let own_id_inner = Rc::clone(&own_id);
            let self_calls = Rc::clone(&self_calls);
            let id = registry.add(Rc::new(move |_: &Target, _: DateTime<Utc>| {
                self_calls.set(self_calls.get() + 1);
                if let Some(registry) = registry_ref.upgrade() {
                    if let Some(id) = own_id_inner.get() {
                        registry.remove(id);
                    }
                    registry.add(Rc::clone(&late));
                }
            }));
            own_id.set(Some(id));
        }

        registry.notify(&Target, Utc::now());
        assert_eq!(self_calls.get(), 1);
        assert_eq!(late_calls.get(), 0);

        registry.notify(&Target, Utc::now());
        assert_eq!(self_calls.get(), 1);
        assert_eq!(late_calls.get(), 1);
    }
}
