//! Change notification.
//!
//! Listeners are plain closures kept in registration order. Adding one
//! returns a [`ListenerId`] which is the only way to remove it again.

use std::fmt;

/// Handle returned by [`Listeners::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Callback<T> = Box<dyn FnMut(&T) + Send>;

/// Ordered set of change listeners for values of type `T`.
pub struct Listeners<T> {
    entries: Vec<(ListenerId, Callback<T>)>,
    next_id: u64,
}

impl<T> Listeners<T> {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `listener` after every listener already present.
    pub fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&T) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes the listener registered under `id`.
    ///
    /// Returns false if it was already removed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(entry, _)| *entry == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Calls every listener with `value`, in registration order.
    pub fn notify(&mut self, value: &T) {
        for (_, listener) in &mut self.entries {
            listener(value);
        }
    }

    /// Number of registered listeners.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no listener is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_notify_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::new();

        for name in ["first", "second", "third"] {
            let log = Arc::clone(&log);
            listeners.add(move |value: &u32| log.lock().unwrap().push((name, *value)));
        }

        listeners.notify(&7);
        assert_eq!(
            *log.lock().unwrap(),
            vec![("first", 7), ("second", 7), ("third", 7)]
        );
    }

    #[test]
    fn test_removed_listener_never_fires() {
        let calls = Arc::new(Mutex::new(0));
        let mut listeners = Listeners::new();

        let counter = Arc::clone(&calls);
        let id = listeners.add(move |_: &()| *counter.lock().unwrap() += 1);
        assert_eq!(listeners.len(), 1);

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert!(listeners.is_empty());

        listeners.notify(&());
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut listeners = Listeners::<()>::new();
        let a = listeners.add(|_| {});
        listeners.remove(a);
        let b = listeners.add(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn test_listeners_are_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Listeners<String>>();
    }
}
