//! Fixed gradients that sit outside the semantic token set.
//!
//! These stops are hand picked rather than generated, and they do not react
//! to the theme mode or to overrides.

use gpui::{rgb, Rgba};

/// One stop of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Color at this stop.
    pub color: Rgba,
    /// Position along the gradient axis in `0.0..=1.0`.
    pub position: f32,
}

impl GradientStop {
    fn new(color: u32, position: f32) -> Self {
        Self {
            color: rgb(color),
            position,
        }
    }
}

/// Four-stop gradient rendered behind the enabled send button.
#[must_use]
pub fn send_button_stops() -> [GradientStop; 4] {
    [
        GradientStop::new(0x78de99, 0.0),
        GradientStop::new(0x0dbd8c, 0.3),
        GradientStop::new(0x128585, 0.6),
        GradientStop::new(0x24456b, 1.0),
    ]
}

/// Two-color hero gradient used by oversized call-to-action buttons.
#[must_use]
pub fn super_button_stops() -> [GradientStop; 2] {
    [
        GradientStop::new(0x0467dd, 0.0),
        GradientStop::new(0x0c8a68, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_are_ordered_and_bounded() {
        for stops in [send_button_stops().as_slice(), super_button_stops().as_slice()] {
            for pair in stops.windows(2) {
                assert!(pair[0].position < pair[1].position);
            }
            assert!((stops[0].position - 0.0).abs() < f32::EPSILON);
            assert!((stops[stops.len() - 1].position - 1.0).abs() < f32::EPSILON);
        }
    }
}
