use crate::models::order::Order;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate counters shown at the top of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    /// All orders on the board
    pub total: usize,
    /// At least one stage complete
    pub in_production: usize,
    /// Layout artwork uploaded
    pub with_layout: usize,
    /// Plotted but not yet cut
    pub waiting_cut: usize,
    /// Every stage complete
    pub completed: usize,
    /// Past due and not fully complete
    pub delayed: usize,
}

/// Derive the board counters from the full, unfiltered order list.
///
/// Pure and recomputed from scratch on every request; nothing is
/// maintained incrementally, so there is no staleness to manage. `today`
/// is passed in so callers and tests control the delay cutoff.
pub fn compute(orders: &[Order], today: NaiveDate) -> BoardStats {
    BoardStats {
        total: orders.len(),
        in_production: orders.iter().filter(|o| o.stages.any()).count(),
        with_layout: orders.iter().filter(|o| o.layout.is_some()).count(),
        waiting_cut: orders
            .iter()
            .filter(|o| o.stages.plotting && !o.stages.cutting)
            .count(),
        completed: orders.iter().filter(|o| o.stages.all()).count(),
        delayed: orders.iter().filter(|o| o.is_delayed(today)).count(),
    }
}
