pub mod sort_event;

pub use sort_event::SortEvent;
