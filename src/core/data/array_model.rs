use rand::Rng;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicI32, Ordering};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayModelError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    #[error("index {index} out of range for array of length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl ArrayModelError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Bar heights being sorted.
///
/// Each slot is an atomic scalar so a renderer thread can sample the values while the
/// worker swaps them. The two stores of a swap are not atomic as a pair.
#[derive(Debug, Default)]
pub struct ArrayModel {
    values: Box<[AtomicI32]>,
}

impl ArrayModel {
    #[must_use]
    pub fn from_values(values: Vec<i32>) -> Self {
        Self {
            values: values.into_iter().map(AtomicI32::new).collect(),
        }
    }

    pub fn random<R: Rng>(
        len: usize,
        value_range: RangeInclusive<i32>,
        rng: &mut R,
    ) -> Result<Self, ArrayModelError> {
        let mut model = Self::default();
        model.initialize(len, value_range, rng)?;
        Ok(model)
    }

    /// Refills the model with `len` values drawn uniformly from `value_range`.
    ///
    /// Callers must not reinitialize while a sort run holds the model.
    pub fn initialize<R: Rng>(
        &mut self,
        len: usize,
        value_range: RangeInclusive<i32>,
        rng: &mut R,
    ) -> Result<(), ArrayModelError> {
        if len == 0 {
            return Err(ArrayModelError::invalid("array length must be positive"));
        }

        if value_range.is_empty() {
            return Err(ArrayModelError::invalid(format!(
                "value range {}..={} is empty",
                value_range.start(),
                value_range.end()
            )));
        }

        self.values = (0..len)
            .map(|_| AtomicI32::new(rng.gen_range(value_range.clone())))
            .collect();

        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<i32, ArrayModelError> {
        self.slot(index).map(|slot| slot.load(Ordering::Acquire))
    }

    /// Exchanges two values. Swapping an index with itself is valid and leaves the values alone.
    pub fn swap(&self, first: usize, second: usize) -> Result<(), ArrayModelError> {
        let a = self.slot(first)?;
        let b = self.slot(second)?;

        if first == second {
            return Ok(());
        }

        let first_value = a.load(Ordering::Acquire);
        let second_value = b.load(Ordering::Acquire);
        a.store(second_value, Ordering::Release);
        b.store(first_value, Ordering::Release);

        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<i32> {
        self.values
            .iter()
            .map(|slot| slot.load(Ordering::Acquire))
            .collect()
    }

    fn slot(&self, index: usize) -> Result<&AtomicI32, ArrayModelError> {
        self.values.get(index).ok_or(ArrayModelError::OutOfRange {
            index,
            len: self.values.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_initialize_fills_requested_length_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let model = ArrayModel::random(80, 10..=509, &mut rng).unwrap();

        assert_eq!(model.len(), 80);
        assert!(model.snapshot().iter().all(|v| (10..=509).contains(v)));
    }

    #[test]
    fn test_initialize_is_reproducible_for_a_seed() {
        let first = ArrayModel::random(32, 1..=100, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = ArrayModel::random(32, 1..=100, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn test_initialize_rejects_zero_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = ArrayModel::random(0, 1..=10, &mut rng);

        assert!(matches!(
            result,
            Err(ArrayModelError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_initialize_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(1);
        #[allow(clippy::reversed_empty_ranges)]
        let result = ArrayModel::random(4, 10..=9, &mut rng);

        assert!(matches!(
            result,
            Err(ArrayModelError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_failed_initialize_keeps_previous_values() {
        let mut model = ArrayModel::from_values(vec![3, 1, 2]);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(model.initialize(0, 1..=10, &mut rng).is_err());
        assert_eq!(model.snapshot(), vec![3, 1, 2]);
    }

    #[test]
    fn test_get_out_of_range() {
        let model = ArrayModel::from_values(vec![5, 6]);

        assert_eq!(model.get(1), Ok(6));
        assert_eq!(
            model.get(2),
            Err(ArrayModelError::OutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_swap_exchanges_values() {
        let model = ArrayModel::from_values(vec![5, 3, 8, 1]);

        model.swap(0, 3).unwrap();

        assert_eq!(model.snapshot(), vec![1, 3, 8, 5]);
    }

    #[test]
    fn test_swap_same_index_is_noop() {
        let model = ArrayModel::from_values(vec![5, 3]);

        assert_eq!(model.swap(1, 1), Ok(()));
        assert_eq!(model.snapshot(), vec![5, 3]);
    }

    #[test]
    fn test_swap_out_of_range_leaves_array_untouched() {
        let model = ArrayModel::from_values(vec![5, 3]);

        assert_eq!(
            model.swap(0, 9),
            Err(ArrayModelError::OutOfRange { index: 9, len: 2 })
        );
        assert_eq!(model.snapshot(), vec![5, 3]);
    }

    #[test]
    fn test_empty_model() {
        let model = ArrayModel::from_values(Vec::new());

        assert!(model.is_empty());
        assert!(model.snapshot().is_empty());
        assert!(model.get(0).is_err());
    }
}
