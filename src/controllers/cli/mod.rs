pub mod trace;

pub use trace::{TraceController, TraceReport};
