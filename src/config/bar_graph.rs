//! Bar graph theme and geometry configuration

use eframe::egui::{Color32, Vec2};

/// Number of minor divisions on the tick scale. One tick per inner boundary.
pub const TICK_DIVISIONS: usize = 100;
/// Number of divisions on the label scale. One label per inner boundary.
pub const TEXT_DIVISIONS: usize = 20;

pub const TICK_COUNT: usize = TICK_DIVISIONS - 1;
pub const LABEL_COUNT: usize = TEXT_DIVISIONS - 1;

/// Every n-th tick (1-based) is a major tick
pub const MAJOR_TICK_EVERY: usize = 5;
/// Minor tick length as a fraction of the control height
pub const TICK_LENGTH_DIVISOR: f32 = 10.0;

/// Value shown on the first label, and the step between labels
pub const LABEL_STEP: u32 = 5;

pub const MIN_BAR_VALUE: f64 = 0.0;
pub const MAX_BAR_VALUE: f64 = 100.0;

pub struct BarGraphConfig {
    /// Fallback size used for unbounded layout constraints
    pub min_size: Vec2,

    // --- BRUSHES ---
    pub foreground: Color32,
    /// Bar gradient, offset 0 (left edge of the bar)
    pub bar_gradient_start: Color32,
    /// Bar gradient, offset 1 (right edge of the bar)
    pub bar_gradient_end: Color32,
    pub frame_fill: Color32,

    pub frame_stroke_width: f32,
    pub tick_stroke_width: f32,
    pub label_font_size: f32,
}

pub const BAR_GRAPH_CONFIG: BarGraphConfig = BarGraphConfig {
    min_size: Vec2::new(400.0, 60.0),

    foreground: Color32::WHITE,
    bar_gradient_start: Color32::from_rgb(33, 62, 25), // Dark green
    bar_gradient_end: Color32::from_rgb(79, 153, 67),  // Lighter green
    frame_fill: Color32::TRANSPARENT,

    frame_stroke_width: 1.0,
    tick_stroke_width: 1.0,
    label_font_size: 14.0,
};
