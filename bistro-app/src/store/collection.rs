//! Generic reactive collection
//!
//! An ordered sequence of id-keyed records published through a
//! `tokio::sync::watch` channel. Subscribers observe the full current
//! sequence immediately, then the full sequence again after every mutation;
//! there is no diffing. Mutations are synchronous and atomic from the
//! caller's perspective.

use tokio::sync::watch;

/// A record stored in a [`Collection`], keyed by a numeric id
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
}

impl Record for shared::models::Dish {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for shared::models::Category {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for shared::models::Order {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for shared::models::Reservation {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Ordered, observable sequence of records
///
/// The watch channel is the single source of truth: `send_modify` mutates the
/// sequence in place and notifies subscribers in the same call, so readers
/// can never observe a half-applied mutation.
#[derive(Debug)]
pub struct Collection<T: Record> {
    tx: watch::Sender<Vec<T>>,
}

impl<T: Record> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx }
    }

    /// Append a record (the caller has already allocated its id) and publish
    pub fn insert(&self, record: T) -> T {
        let result = record.clone();
        self.tx.send_modify(|records| records.push(record));
        result
    }

    /// Replace the record with the same id
    ///
    /// Returns `None` when no record matches; the caller maps that to its
    /// domain-specific not-found error. A miss publishes nothing.
    pub fn replace(&self, record: T) -> Option<T> {
        let mut replaced = false;
        self.tx.send_if_modified(|records| {
            if let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) {
                *slot = record.clone();
                replaced = true;
            }
            replaced
        });
        if replaced {
            Some(record)
        } else {
            None
        }
    }

    /// Apply a partial in-place update to the record with the given id
    ///
    /// Returns the updated record, or `None` when no record matches. A miss
    /// publishes nothing.
    pub fn update_with(&self, id: i64, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut updated = None;
        self.tx.send_if_modified(|records| {
            if let Some(slot) = records.iter_mut().find(|r| r.id() == id) {
                f(slot);
                updated = Some(slot.clone());
                true
            } else {
                false
            }
        });
        updated
    }

    /// Remove the record with the given id
    ///
    /// Returns the removed record, or `None` when no record matches. A miss
    /// publishes nothing.
    pub fn remove(&self, id: i64) -> Option<T> {
        let mut removed = None;
        self.tx.send_if_modified(|records| {
            if let Some(pos) = records.iter().position(|r| r.id() == id) {
                removed = Some(records.remove(pos));
                true
            } else {
                false
            }
        });
        removed
    }

    /// Look up a record by id
    pub fn get(&self, id: i64) -> Option<T> {
        self.tx.borrow().iter().find(|r| r.id() == id).cloned()
    }

    /// Snapshot of the full sequence, in insertion order
    pub fn list(&self) -> Vec<T> {
        self.tx.borrow().clone()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Subscribe to the full sequence
    ///
    /// The receiver holds the current sequence immediately and is notified
    /// after every mutation. Dropping the receiver is the only unsubscribe
    /// step; the collection never holds references to its subscribers.
    pub fn subscribe(&self) -> watch::Receiver<Vec<T>> {
        self.tx.subscribe()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
