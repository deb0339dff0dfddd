use eframe::egui::{Rect, Vec2, pos2, vec2};

use super::{Drawable, TextBlock};

/// Horizontal row of text blocks, laid out left to right after a left padding.
#[derive(Debug, Clone, Default)]
pub struct StackPanel {
    pub padding_left: f32,
    children: Vec<TextBlock>,
    slot: Option<Rect>,
}

impl StackPanel {
    pub fn new(children: Vec<TextBlock>) -> Self {
        Self {
            padding_left: 0.0,
            children,
            slot: None,
        }
    }

    pub fn children(&self) -> &[TextBlock] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [TextBlock] {
        &mut self.children
    }

    pub fn slot(&self) -> Option<Rect> {
        self.slot
    }

    /// Re-run child placement within the current slot, e.g. after padding or
    /// child widths changed.
    pub fn layout_children(&mut self) {
        let Some(slot) = self.slot else {
            return;
        };
        let mut x = slot.left() + self.padding_left;
        for child in &mut self.children {
            let w = child.width.unwrap_or(0.0);
            child.arrange(Rect::from_min_size(pos2(x, slot.top()), vec2(w, slot.height())));
            x += w;
        }
    }
}

impl Drawable for StackPanel {
    fn measure(&mut self, available: Vec2) -> Vec2 {
        let mut desired = Vec2::ZERO;
        for child in &mut self.children {
            // Horizontal stacking: children are unconstrained along x.
            let size = child.measure(vec2(f32::INFINITY, available.y));
            desired.x += size.x;
            desired.y = desired.y.max(size.y);
        }
        desired.x += self.padding_left;
        desired.min(available)
    }

    fn arrange(&mut self, slot: Rect) {
        self.slot = Some(slot);
        self.layout_children();
    }
}
