use eframe::egui::{Vec2, vec2};

use crate::config::BAR_GRAPH_CONFIG;

/// Resolve a layout constraint to a concrete size.
/// Unbounded axes fall back to the control minimum, bounded axes never go below it.
pub fn resolve_size(constraint: Vec2) -> Vec2 {
    let min = BAR_GRAPH_CONFIG.min_size;
    let axis = |available: f32, min: f32| {
        if available.is_infinite() {
            min
        } else {
            // f32::max also maps NaN to the minimum
            available.max(min)
        }
    };
    vec2(axis(constraint.x, min.x), axis(constraint.y, min.y))
}

/// Dirty flags and bookkeeping for the two-pass layout protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub measure_valid: bool,
    pub arrange_valid: bool,
    /// Constraint seen by the last measure pass
    pub last_available: Option<Vec2>,
    /// Size resolved by the last measure pass, handed to the next arrange pass
    pub desired_size: Vec2,
    /// Size resolved by the last arrange pass
    pub actual_size: Vec2,
    pub measure_passes: u64,
    pub arrange_passes: u64,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            measure_valid: false,
            arrange_valid: false,
            last_available: None,
            desired_size: Vec2::ZERO,
            actual_size: Vec2::ZERO,
            measure_passes: 0,
            arrange_passes: 0,
        }
    }
}

impl LayoutState {
    pub fn needs_measure(&self, available: Vec2) -> bool {
        !self.measure_valid || self.last_available != Some(available)
    }

    pub fn needs_arrange(&self, final_size: Vec2) -> bool {
        !self.arrange_valid || self.actual_size != final_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_axes_fall_back_to_minimum() {
        assert_eq!(resolve_size(Vec2::INFINITY), vec2(400.0, 60.0));
        assert_eq!(resolve_size(vec2(f32::INFINITY, 90.0)), vec2(400.0, 90.0));
        assert_eq!(resolve_size(vec2(450.0, f32::INFINITY)), vec2(450.0, 60.0));
    }

    #[test]
    fn bounded_axes_are_clamped_to_minimum() {
        assert_eq!(resolve_size(vec2(100.0, 20.0)), vec2(400.0, 60.0));
        assert_eq!(resolve_size(vec2(-10.0, -4.0)), vec2(400.0, 60.0));
        assert_eq!(resolve_size(vec2(399.0, 75.0)), vec2(400.0, 75.0));
        assert_eq!(resolve_size(vec2(f32::NAN, 61.0)), vec2(400.0, 61.0));
        assert_eq!(resolve_size(vec2(800.0, 120.0)), vec2(800.0, 120.0));
    }

    #[test]
    fn fresh_state_needs_both_passes() {
        let s = LayoutState::default();
        assert!(s.needs_measure(vec2(400.0, 60.0)));
        assert!(s.needs_arrange(vec2(400.0, 60.0)));
    }

    #[test]
    fn changed_constraint_invalidates_measure() {
        let s = LayoutState {
            measure_valid: true,
            last_available: Some(vec2(400.0, 60.0)),
            ..Default::default()
        };
        assert!(!s.needs_measure(vec2(400.0, 60.0)));
        assert!(s.needs_measure(vec2(500.0, 60.0)));
    }
}
