use crate::controllers::interactive::events::sort_event::SortEvent;

/// Receives events from the sorting worker, in program order, on the worker thread.
///
/// Implementations must return quickly and must not call back into the controller's
/// blocking commands (`reset`, `shutdown`).
pub trait SortPresenterPort: Send + Sync {
    fn present(&self, event: SortEvent);
}
