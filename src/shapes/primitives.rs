use eframe::egui::{Align, Align2, Color32, Pos2, Rect, Stroke, Vec2, lerp, vec2};

use super::Drawable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    #[default]
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    #[default]
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color32),
    /// Two-stop gradient running from the left edge (offset 0) to the right edge (offset 1)
    /// of the filled shape's own bounds.
    HorizontalGradient { start: Color32, end: Color32 },
}

impl Fill {
    pub fn is_transparent(&self) -> bool {
        match self {
            Self::Solid(c) => *c == Color32::TRANSPARENT,
            Self::HorizontalGradient { start, end } => {
                *start == Color32::TRANSPARENT && *end == Color32::TRANSPARENT
            }
        }
    }

    /// Color at `t` across the shape (0 = left edge, 1 = right edge).
    pub fn color_at(&self, t: f32) -> Color32 {
        match *self {
            Self::Solid(c) => c,
            Self::HorizontalGradient { start, end } => {
                let t = t.clamp(0.0, 1.0);
                let channel = |a: u8, b: u8| lerp(a as f32..=b as f32, t).round() as u8;
                Color32::from_rgba_unmultiplied(
                    channel(start.r(), end.r()),
                    channel(start.g(), end.g()),
                    channel(start.b(), end.b()),
                    channel(start.a(), end.a()),
                )
            }
        }
    }
}

fn to_align2(h: HorizontalAlignment, v: VerticalAlignment) -> Align2 {
    let x = match h {
        HorizontalAlignment::Left => Align::Min,
        HorizontalAlignment::Center | HorizontalAlignment::Stretch => Align::Center,
        HorizontalAlignment::Right => Align::Max,
    };
    let y = match v {
        VerticalAlignment::Top => Align::Min,
        VerticalAlignment::Center | VerticalAlignment::Stretch => Align::Center,
        VerticalAlignment::Bottom => Align::Max,
    };
    Align2([x, y])
}

/// Filled and/or stroked rectangle.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub fill: Fill,
    pub stroke: Stroke,
    pub horizontal_alignment: HorizontalAlignment,
    /// Explicit size. `None` fills the slot along that axis.
    pub width: Option<f32>,
    pub height: Option<f32>,
    desired_size: Vec2,
    slot: Rect,
}

impl Rectangle {
    pub fn new(fill: Fill, stroke: Stroke) -> Self {
        Self {
            fill,
            stroke,
            horizontal_alignment: HorizontalAlignment::default(),
            width: None,
            height: None,
            desired_size: Vec2::ZERO,
            slot: Rect::NOTHING,
        }
    }

    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    pub fn desired_size(&self) -> Vec2 {
        self.desired_size
    }

    pub fn slot(&self) -> Rect {
        self.slot
    }

    /// Rendered bounds: the explicit size aligned within the slot.
    pub fn bounds(&self) -> Rect {
        if self.slot == Rect::NOTHING {
            return Rect::NOTHING;
        }
        let size = vec2(
            self.width.unwrap_or(self.slot.width()),
            self.height.unwrap_or(self.slot.height()),
        );
        let dx = match self.horizontal_alignment {
            HorizontalAlignment::Left => 0.0,
            HorizontalAlignment::Right => self.slot.width() - size.x,
            HorizontalAlignment::Center | HorizontalAlignment::Stretch => {
                (self.slot.width() - size.x) / 2.0
            }
        };
        Rect::from_min_size(self.slot.min + vec2(dx, 0.0), size)
    }
}

impl Drawable for Rectangle {
    fn measure(&mut self, available: Vec2) -> Vec2 {
        // Explicit sizes are capped by the constraint, stretched axes take all of it.
        let axis = |explicit: Option<f32>, available: f32| match explicit {
            Some(v) => v.min(available),
            None if available.is_finite() => available,
            None => 0.0,
        };
        self.desired_size = vec2(
            axis(self.width, available.x),
            axis(self.height, available.y),
        );
        self.desired_size
    }

    fn arrange(&mut self, slot: Rect) {
        self.slot = slot;
    }
}

/// Straight line segment. End points are relative to the slot origin.
#[derive(Debug, Clone)]
pub struct Line {
    pub stroke: Stroke,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    constraint: Vec2,
    slot: Rect,
}

impl Line {
    pub fn new(stroke: Stroke) -> Self {
        Self {
            stroke,
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 0.0,
            constraint: Vec2::ZERO,
            slot: Rect::NOTHING,
        }
    }

    pub fn set_vertical(&mut self, x: f32, y1: f32, y2: f32) {
        self.x1 = x;
        self.x2 = x;
        self.y1 = y1;
        self.y2 = y2;
    }

    /// Constraint received during the last measure pass
    pub fn constraint(&self) -> Vec2 {
        self.constraint
    }

    pub fn slot(&self) -> Rect {
        self.slot
    }

    /// End points in the owning control's coordinate space.
    pub fn points(&self) -> [Pos2; 2] {
        let origin = self.origin();
        [
            origin + vec2(self.x1, self.y1),
            origin + vec2(self.x2, self.y2),
        ]
    }

    fn origin(&self) -> Pos2 {
        if self.slot == Rect::NOTHING {
            Pos2::ZERO
        } else {
            self.slot.min
        }
    }
}

impl Drawable for Line {
    fn measure(&mut self, available: Vec2) -> Vec2 {
        self.constraint = available;
        vec2(self.x1.max(self.x2), self.y1.max(self.y2)).min(available)
    }

    fn arrange(&mut self, slot: Rect) {
        self.slot = slot;
    }
}

/// Single line of static text.
#[derive(Debug, Clone)]
pub struct TextBlock {
    pub text: String,
    pub color: Color32,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    /// Explicit slot width assigned by the owning panel
    pub width: Option<f32>,
    constraint: Vec2,
    slot: Rect,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, color: Color32) -> Self {
        Self {
            text: text.into(),
            color,
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            width: None,
            constraint: Vec2::ZERO,
            slot: Rect::NOTHING,
        }
    }

    pub fn centered(mut self) -> Self {
        self.horizontal_alignment = HorizontalAlignment::Center;
        self.vertical_alignment = VerticalAlignment::Center;
        self
    }

    /// Constraint received during the last measure pass
    pub fn constraint(&self) -> Vec2 {
        self.constraint
    }

    pub fn slot(&self) -> Rect {
        self.slot
    }

    /// Where the painter should anchor the text, and how.
    pub fn anchor(&self) -> (Pos2, Align2) {
        let align = to_align2(self.horizontal_alignment, self.vertical_alignment);
        (align.pos_in_rect(&self.slot), align)
    }
}

impl Drawable for TextBlock {
    fn measure(&mut self, available: Vec2) -> Vec2 {
        self.constraint = available;
        // Glyph extents are resolved by the painter; layout only reserves the slot width.
        vec2(self.width.unwrap_or(0.0), 0.0).min(available)
    }

    fn arrange(&mut self, slot: Rect) {
        self.slot = slot;
    }
}
