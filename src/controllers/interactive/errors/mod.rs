pub mod abort_reason;

pub use abort_reason::AbortReason;
