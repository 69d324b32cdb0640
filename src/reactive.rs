//! Observable boolean cell.
//!
//! [`ReactiveBool`] is a shared, single-threaded boolean with change
//! notification. Cloning the cell clones the handle, not the value: every
//! clone reads and writes the same slot.
//!
//! - [`ReactiveBool::set`] stores the new value and then notifies every
//!   subscriber synchronously, in subscription order. Writing the value the
//!   cell already holds notifies nobody, which is what keeps two linked cells
//!   from echoing forever.
//! - [`ReactiveBool::subscribe`] pushes the current value immediately, then
//!   every later change.
//! - [`ReactiveBool::subscribe_skip_current`] only pushes later changes.
//!
//! Subscriptions are released when their [`Subscription`] handle is dropped.
//! Group handles that share a lifetime in a [`CompositeSubscription`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Observer = Rc<dyn Fn(bool)>;

struct Inner {
    value: Cell<bool>,
    observers: RefCell<Vec<(u64, Observer)>>,
    next_id: Cell<u64>,
}

/// Shared boolean cell with synchronous change notification.
#[derive(Clone)]
pub struct ReactiveBool {
    inner: Rc<Inner>,
}

/// Non-owning handle to a [`ReactiveBool`].
#[derive(Clone)]
pub struct WeakReactiveBool {
    inner: Weak<Inner>,
}

impl ReactiveBool {
    pub fn new(value: bool) -> Self {
        ReactiveBool {
            inner: Rc::new(Inner {
                value: Cell::new(value),
                observers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Current value.
    pub fn get(&self) -> bool {
        self.inner.value.get()
    }

    /// Store `value` and notify subscribers if it differs from the current one.
    ///
    /// Returns `true` when the value changed.
    pub fn set(&self, value: bool) -> bool {
        if self.inner.value.replace(value) == value {
            return false;
        }
        // Snapshot so observers may subscribe, unsubscribe or write back.
        let observers: Vec<Observer> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(value);
        }
        true
    }

    /// Subscribe to the current value and every subsequent change.
    pub fn subscribe(&self, observer: impl Fn(bool) + 'static) -> Subscription {
        let observer: Observer = Rc::new(observer);
        let subscription = self.attach(Rc::clone(&observer));
        observer(self.get());
        subscription
    }

    /// Subscribe to subsequent changes only; the current value is not pushed.
    pub fn subscribe_skip_current(&self, observer: impl Fn(bool) + 'static) -> Subscription {
        self.attach(Rc::new(observer))
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    pub fn downgrade(&self) -> WeakReactiveBool {
        WeakReactiveBool {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether both handles point at the same cell.
    pub fn ptr_eq(&self, other: &ReactiveBool) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn attach(&self, observer: Observer) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.observers.borrow_mut().push((id, observer));
        Subscription {
            cell: Rc::downgrade(&self.inner),
            id,
        }
    }
}

impl Default for ReactiveBool {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for ReactiveBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveBool")
            .field("value", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl WeakReactiveBool {
    pub fn upgrade(&self) -> Option<ReactiveBool> {
        self.inner.upgrade().map(|inner| ReactiveBool { inner })
    }
}

/// Handle to a live subscription. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cell: Weak<Inner>,
    id: u64,
}

impl Subscription {
    /// Unsubscribe now.
    pub fn dispose(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.cell.upgrade() {
            inner
                .observers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// A bag of subscriptions released together.
#[derive(Debug, Default)]
pub struct CompositeSubscription {
    subscriptions: Vec<Subscription>,
}

impl CompositeSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release every held subscription.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}
