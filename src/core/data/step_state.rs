/// Which indices the current step highlights. `None` marks a role with no index.
///
/// Each published value fully replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepState {
    pub pivot: Option<usize>,
    pub low_cursor: Option<usize>,
    pub scan: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Pivot,
    LowCursor,
    Scan,
}

impl StepState {
    pub const CLEARED: Self = Self {
        pivot: None,
        low_cursor: None,
        scan: None,
    };

    #[must_use]
    pub fn partitioning(pivot: usize, low_cursor: Option<usize>, scan: usize) -> Self {
        Self {
            pivot: Some(pivot),
            low_cursor,
            scan: Some(scan),
        }
    }

    #[must_use]
    pub fn placed(pivot_slot: usize) -> Self {
        Self {
            pivot: None,
            low_cursor: Some(pivot_slot),
            scan: None,
        }
    }

    /// Role drawn for `index`; the pivot wins over the low cursor, which wins over the scan.
    #[must_use]
    pub fn highlight(&self, index: usize) -> Option<Highlight> {
        if self.pivot == Some(index) {
            Some(Highlight::Pivot)
        } else if self.low_cursor == Some(index) {
            Some(Highlight::LowCursor)
        } else if self.scan == Some(index) {
            Some(Highlight::Scan)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_highlights_nothing() {
        let state = StepState::CLEARED;

        assert_eq!(state.highlight(0), None);
        assert_eq!(StepState::default(), StepState::CLEARED);
    }

    #[test]
    fn test_highlight_priority_follows_paint_order() {
        let state = StepState {
            pivot: Some(3),
            low_cursor: Some(3),
            scan: Some(3),
        };
        assert_eq!(state.highlight(3), Some(Highlight::Pivot));

        let state = StepState::partitioning(5, Some(2), 2);
        assert_eq!(state.highlight(2), Some(Highlight::LowCursor));
        assert_eq!(state.highlight(5), Some(Highlight::Pivot));
        assert_eq!(state.highlight(4), None);
    }

    #[test]
    fn test_placed_marks_only_the_pivot_slot() {
        let state = StepState::placed(4);

        assert_eq!(state.highlight(4), Some(Highlight::LowCursor));
        assert_eq!(state.pivot, None);
        assert_eq!(state.scan, None);
        assert_ne!(state, StepState::CLEARED);
    }
}
