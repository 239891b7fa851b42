use crate::models::order::{LayoutImage, Order, StageFlags};
use crate::models::stage::Stage;
use crate::persist::snapshot::SnapshotFile;
use crate::validation::order::OrderFields;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// In-memory order list, mirrored to a JSON snapshot on every mutation.
///
/// The store performs no authorization: the handler layer is responsible
/// for session and role checks before calling any mutation here. Mutations
/// on an unknown id are silent no-ops.
pub struct OrderStore {
    orders: DashMap<u64, Order>,
    next_id: AtomicU64,
    snapshot: SnapshotFile,
}

impl OrderStore {
    pub fn new(snapshot: SnapshotFile) -> Self {
        Self {
            orders: DashMap::new(),
            next_id: AtomicU64::new(1),
            snapshot,
        }
    }

    /// Rehydrate from the order snapshot. The id counter resets to one more
    /// than the highest id found (or 1 when empty), the only mechanism
    /// keeping ids unique across restarts. Returns the number of orders
    /// loaded.
    pub fn load(&self) -> usize {
        let orders: Vec<Order> = self.snapshot.load().unwrap_or_default();

        self.orders.clear();
        let mut max_id = 0;
        for order in orders {
            max_id = max_id.max(order.id);
            self.orders.insert(order.id, order);
        }
        self.next_id.store(max_id + 1, Ordering::SeqCst);

        self.orders.len()
    }

    /// Insert a new order with every stage flag pending and no layout. The
    /// assigned id is strictly greater than any id this process has handed
    /// out, including ids loaded from the snapshot.
    pub fn add(&self, fields: OrderFields) -> Order {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let order = Order {
            id,
            client: fields.client,
            order_number: fields.order_number,
            date_in: fields.date_in,
            date_due: fields.date_due,
            note: fields.note,
            stages: StageFlags::default(),
            layout: None,
        };

        self.orders.insert(id, order.clone());
        self.persist();

        order
    }

    /// Edit the form fields of an existing order. Stage flags and layout
    /// are untouched. Unknown id is a no-op.
    pub fn update(&self, id: u64, fields: OrderFields) -> bool {
        let found = match self.orders.get_mut(&id) {
            Some(mut entry) => {
                let order = entry.value_mut();
                order.client = fields.client;
                order.order_number = fields.order_number;
                order.date_in = fields.date_in;
                order.date_due = fields.date_due;
                order.note = fields.note;
                true
            }
            None => false,
        };

        if found {
            self.persist();
        } else {
            debug!(order_id = id, "Edit of unknown order ignored");
        }
        found
    }

    /// Set one stage flag. No authorization here; the caller has already
    /// consulted the session manager.
    pub fn update_stage(&self, id: u64, stage: Stage, done: bool) -> bool {
        let found = match self.orders.get_mut(&id) {
            Some(mut entry) => {
                entry.value_mut().stages.set(stage, done);
                true
            }
            None => false,
        };

        if found {
            self.persist();
        } else {
            debug!(order_id = id, stage = %stage, "Stage update for unknown order ignored");
        }
        found
    }

    /// Attach layout artwork. This is the landing point of the one
    /// asynchronous flow (file upload): exactly one mutation, then persist.
    pub fn set_layout(&self, id: u64, layout: LayoutImage) -> bool {
        let found = match self.orders.get_mut(&id) {
            Some(mut entry) => {
                entry.value_mut().layout = Some(layout);
                true
            }
            None => false,
        };

        if found {
            self.persist();
        } else {
            debug!(order_id = id, "Layout upload for unknown order ignored");
        }
        found
    }

    /// Delete if present; unknown id is a no-op.
    pub fn remove(&self, id: u64) -> bool {
        let removed = self.orders.remove(&id).is_some();

        if removed {
            self.persist();
        } else {
            debug!(order_id = id, "Removal of unknown order ignored");
        }
        removed
    }

    pub fn get(&self, id: u64) -> Option<Order> {
        self.orders.get(&id).map(|entry| entry.value().clone())
    }

    /// Full list, sorted by id.
    pub fn list(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.iter().map(|e| e.value().clone()).collect();
        orders.sort_by_key(|o| o.id);
        orders
    }

    /// Case-insensitive substring filter on client name or order number.
    /// A blank term yields the full list. This is a display view, never a
    /// mutation.
    pub fn search(&self, term: &str) -> Vec<Order> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.list();
        }

        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|e| e.value().matches(&term))
            .map(|e| e.value().clone())
            .collect();
        orders.sort_by_key(|o| o.id);
        orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Write the full list out. A failed write keeps the in-memory state
    /// authoritative and is only logged.
    fn persist(&self) {
        if let Err(e) = self.snapshot.save(&self.list()) {
            warn!(
                path = %self.snapshot.path().display(),
                error = %e,
                "Failed to persist order snapshot"
            );
        }
    }
}
