//! Rasterizes the array and the current step into an RGBA framebuffer.

use crate::core::data::step_state::{Highlight, StepState};

pub type Rgba = [u8; 4];

pub const BACKGROUND: Rgba = [255, 255, 255, 255];
pub const BAR: Rgba = [0, 0, 0, 255];
pub const PIVOT: Rgba = [255, 0, 0, 255];
pub const LOW_CURSOR: Rgba = [0, 255, 0, 255];
pub const SCAN: Rgba = [0, 0, 255, 255];

/// Framebuffer geometry and bar width, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    pub width: u32,
    pub height: u32,
    pub bar_width: u32,
}

impl BarLayout {
    /// Horizontal span of bar `index`, or `None` once it falls off the right edge.
    /// Bars wider than one pixel keep a one pixel gap on their right.
    #[must_use]
    pub fn bar_columns(&self, index: usize) -> Option<(u32, u32)> {
        let start = u32::try_from(index).ok()?.checked_mul(self.bar_width)?;
        if self.bar_width == 0 || start >= self.width {
            return None;
        }

        let drawn = if self.bar_width > 1 {
            self.bar_width - 1
        } else {
            1
        };

        Some((start, (start + drawn).min(self.width)))
    }
}

#[must_use]
pub fn colour_for(highlight: Option<Highlight>) -> Rgba {
    match highlight {
        Some(Highlight::Pivot) => PIVOT,
        Some(Highlight::LowCursor) => LOW_CURSOR,
        Some(Highlight::Scan) => SCAN,
        None => BAR,
    }
}

/// Clears `frame` and draws one bar per value, rising from the bottom edge.
///
/// Heights are in pixels and clipped to the frame; non-positive values draw nothing.
/// `frame` must hold `width * height` RGBA pixels.
pub fn draw_bars(frame: &mut [u8], layout: BarLayout, values: &[i32], step: StepState) {
    let width = layout.width as usize;
    let height = layout.height as usize;

    if frame.len() != width * height * 4 {
        tracing::warn!(
            frame_len = frame.len(),
            width,
            height,
            "framebuffer size does not match layout"
        );
        return;
    }

    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND);
    }

    for (index, &value) in values.iter().enumerate() {
        let Some((left, right)) = layout.bar_columns(index) else {
            break;
        };

        let bar_height = (value.max(0) as usize).min(height);
        let colour = colour_for(step.highlight(index));

        for row in (height - bar_height)..height {
            let row_start = (row * width + left as usize) * 4;
            let row_end = (row * width + right as usize) * 4;

            for pixel in frame[row_start..row_end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&colour);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], layout: BarLayout, x: u32, y: u32) -> Rgba {
        let offset = ((y * layout.width + x) * 4) as usize;
        let mut out = [0; 4];
        out.copy_from_slice(&frame[offset..offset + 4]);
        out
    }

    fn layout() -> BarLayout {
        BarLayout {
            width: 12,
            height: 8,
            bar_width: 3,
        }
    }

    #[test]
    fn test_bar_columns_leave_a_gap() {
        let layout = layout();

        assert_eq!(layout.bar_columns(0), Some((0, 2)));
        assert_eq!(layout.bar_columns(3), Some((9, 11)));
        assert_eq!(layout.bar_columns(4), None);
    }

    #[test]
    fn test_single_pixel_bars_have_no_gap() {
        let layout = BarLayout {
            width: 4,
            height: 4,
            bar_width: 1,
        };

        assert_eq!(layout.bar_columns(2), Some((2, 3)));
    }

    #[test]
    fn test_draw_bars_from_bottom_with_highlights() {
        let layout = layout();
        let mut frame = vec![0; 12 * 8 * 4];
        let step = StepState::partitioning(2, Some(0), 1);

        draw_bars(&mut frame, layout, &[3, 5, 8, 20], step);

        // low cursor bar, 3 tall
        assert_eq!(pixel(&frame, layout, 0, 7), LOW_CURSOR);
        assert_eq!(pixel(&frame, layout, 0, 5), LOW_CURSOR);
        assert_eq!(pixel(&frame, layout, 0, 4), BACKGROUND);
        // gap column
        assert_eq!(pixel(&frame, layout, 2, 7), BACKGROUND);
        assert_eq!(pixel(&frame, layout, 3, 3), SCAN);
        assert_eq!(pixel(&frame, layout, 6, 0), PIVOT);
        // clipped to frame height
        assert_eq!(pixel(&frame, layout, 9, 0), BAR);
    }

    #[test]
    fn test_cleared_step_draws_plain_bars() {
        let layout = layout();
        let mut frame = vec![0; 12 * 8 * 4];

        draw_bars(&mut frame, layout, &[1, -4], StepState::CLEARED);

        assert_eq!(pixel(&frame, layout, 0, 7), BAR);
        assert_eq!(pixel(&frame, layout, 3, 7), BACKGROUND);
    }

    #[test]
    fn test_mismatched_frame_is_left_untouched() {
        let mut frame = vec![7; 10];

        draw_bars(&mut frame, layout(), &[1], StepState::CLEARED);

        assert_eq!(frame, vec![7; 10]);
    }
}
