pub mod sort_hooks;

pub use sort_hooks::SortHooks;
