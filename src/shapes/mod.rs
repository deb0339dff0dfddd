//! Retained child primitives owned by the bar graph control.
//!
//! Each primitive takes part in the same two-pass protocol as the control:
//! `measure` receives a constraint and reports a desired size, `arrange`
//! receives the layout slot the primitive is drawn into. Geometry stored on a
//! primitive (line end points, explicit widths) is local to its slot.

mod primitives;
mod stack_panel;

use eframe::egui::{Rect, Vec2};

pub use primitives::{Fill, HorizontalAlignment, Line, Rectangle, TextBlock, VerticalAlignment};
pub use stack_panel::StackPanel;

pub trait Drawable {
    /// Measure pass. Returns the desired size within `available`.
    fn measure(&mut self, available: Vec2) -> Vec2;

    /// Arrange pass. `slot` is in the owning control's coordinate space.
    fn arrange(&mut self, slot: Rect);
}
