use crate::core::actions::cancellation::Cancelled;
use crate::core::data::array_model::ArrayModelError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error(transparent)]
    Array(#[from] ArrayModelError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}
