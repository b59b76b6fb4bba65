//! Status colors for seat surfaces.

use crate::attendance::Status;

/// RGBA color, linear components in 0..1.
pub type Color = [f32; 4];

/// Maps attendance status to seat surface colors, plus the hover highlight.
#[derive(Debug, Clone, Copy)]
pub struct StatusPalette {
    pub unmarked: Color,
    pub present: Color,
    pub absent: Color,
    pub highlight: Color,
}

impl StatusPalette {
    pub fn color_for(&self, status: Status) -> Color {
        match status {
            Status::Unmarked => self.unmarked,
            Status::Present => self.present,
            Status::Absent => self.absent,
        }
    }
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self {
            unmarked: [0.62, 0.64, 0.67, 1.0],
            present: [0.24, 0.72, 0.34, 1.0],
            absent: [0.82, 0.25, 0.22, 1.0],
            highlight: [0.98, 0.85, 0.30, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_has_a_distinct_color() {
        let palette = StatusPalette::default();
        let colors = [
            palette.color_for(Status::Unmarked),
            palette.color_for(Status::Present),
            palette.color_for(Status::Absent),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
