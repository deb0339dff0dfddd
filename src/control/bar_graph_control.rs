//! Horizontal bar graph with ruler ticks and a 5..95 scale.

use eframe::egui::{Pos2, Rect, Stroke, Vec2};

use crate::config::{
    BAR_GRAPH_CONFIG, DF, LABEL_COUNT, LABEL_STEP, MAJOR_TICK_EVERY, MAX_BAR_VALUE, MIN_BAR_VALUE,
    TEXT_DIVISIONS, TICK_COUNT, TICK_DIVISIONS, TICK_LENGTH_DIVISOR,
};
use crate::control::layout_state::{LayoutState, resolve_size};
use crate::shapes::{Drawable, Fill, HorizontalAlignment, Line, Rectangle, StackPanel, TextBlock};

/// Identifies a registered child. Registration order is also paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildId {
    Bar,
    TopTick(usize),
    BottomTick(usize),
    Frame,
    ScalePanel,
}

/// Layout work requested by a property change. BarValue only affects placement,
/// so a change never needs a new measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    Arrange,
}

/// Clamp a requested bar value into 0..=100. NaN maps to 0.
pub fn clamp_bar_value(value: f64) -> f64 {
    if value.is_nan() {
        MIN_BAR_VALUE
    } else {
        value.clamp(MIN_BAR_VALUE, MAX_BAR_VALUE)
    }
}

/// Length of tick `index` (0-based) for a control of `height`.
/// Every 5th tick is a major tick, twice the base length.
pub fn tick_length(index: usize, height: f32) -> f32 {
    let base = height / TICK_LENGTH_DIVISOR;
    if (index + 1) % MAJOR_TICK_EVERY == 0 {
        base * 2.0
    } else {
        base
    }
}

pub struct BarGraphControl {
    bar_value: f64,

    bar: Rectangle,
    top_ticks: Vec<Line>,
    bottom_ticks: Vec<Line>,
    frame: Rectangle,
    scale_panel: StackPanel,
    children: Vec<ChildId>,

    layout: LayoutState,
    on_invalidate: Option<Box<dyn FnMut(Invalidation)>>,
}

impl Default for BarGraphControl {
    fn default() -> Self {
        Self::new()
    }
}

impl BarGraphControl {
    pub fn new() -> Self {
        let cfg = &BAR_GRAPH_CONFIG;
        let foreground = Stroke::new(cfg.tick_stroke_width, cfg.foreground);
        let mut children = Vec::with_capacity(2 * TICK_COUNT + 3);

        // Bar value
        let bar = Rectangle::new(
            Fill::HorizontalGradient {
                start: cfg.bar_gradient_start,
                end: cfg.bar_gradient_end,
            },
            Stroke::NONE,
        )
        .with_alignment(HorizontalAlignment::Left);
        children.push(ChildId::Bar);

        // Tick marks, registered as top/bottom pairs
        let mut top_ticks = Vec::with_capacity(TICK_COUNT);
        let mut bottom_ticks = Vec::with_capacity(TICK_COUNT);
        for i in 0..TICK_COUNT {
            top_ticks.push(Line::new(foreground));
            children.push(ChildId::TopTick(i));
            bottom_ticks.push(Line::new(foreground));
            children.push(ChildId::BottomTick(i));
        }

        let frame = Rectangle::new(
            Fill::Solid(cfg.frame_fill),
            Stroke::new(cfg.frame_stroke_width, cfg.foreground),
        );
        children.push(ChildId::Frame);

        let labels = (1..=LABEL_COUNT as u32)
            .map(|i| TextBlock::new((i * LABEL_STEP).to_string(), cfg.foreground).centered())
            .collect();
        let scale_panel = StackPanel::new(labels);
        children.push(ChildId::ScalePanel);

        Self {
            bar_value: MIN_BAR_VALUE,
            bar,
            top_ticks,
            bottom_ticks,
            frame,
            scale_panel,
            children,
            layout: LayoutState::default(),
            on_invalidate: None,
        }
    }

    // --- VALUE PROPERTY ---

    pub fn bar_value(&self) -> f64 {
        self.bar_value
    }

    /// Out of range input is clamped silently. Only an actual change invalidates the arrange pass.
    pub fn set_bar_value(&mut self, value: f64) {
        let new = clamp_bar_value(value);
        let old = self.bar_value;
        if new != old {
            self.bar_value = new;
            if DF.log_value_changes {
                log::debug!("BarValue {:.2} -> {:.2}", old, new);
            }
            self.invalidate(Invalidation::Arrange);
        }
    }

    /// Register the callback told about every layout invalidation. Replaces any previous one.
    pub fn on_invalidate(&mut self, listener: impl FnMut(Invalidation) + 'static) {
        self.on_invalidate = Some(Box::new(listener));
    }

    fn invalidate(&mut self, kind: Invalidation) {
        match kind {
            Invalidation::Arrange => self.layout.arrange_valid = false,
        }
        if let Some(listener) = self.on_invalidate.as_mut() {
            listener(kind);
        }
    }

    // --- LAYOUT ---

    /// Measure pass. Unbounded axes resolve to the minimum size, bounded ones are clamped to it.
    pub fn measure(&mut self, available: Vec2) -> Vec2 {
        let size = resolve_size(available);

        self.bar.measure(size);
        self.frame.measure(size);
        for (top, bottom) in self.top_ticks.iter_mut().zip(self.bottom_ticks.iter_mut()) {
            top.measure(size);
            bottom.measure(size);
        }
        self.scale_panel.measure(size);

        self.layout.last_available = Some(available);
        self.layout.desired_size = size;
        self.layout.measure_valid = true;
        self.layout.measure_passes += 1;
        if DF.log_layout {
            log::trace!("measure {:?} -> {:?}", available, size);
        }
        size
    }

    /// Arrange pass. Assigns the full control rectangle to every child, then places them.
    pub fn arrange(&mut self, final_size: Vec2) -> Vec2 {
        let size = resolve_size(final_size);
        let rect = Rect::from_min_size(Pos2::ZERO, size);

        self.bar.arrange(rect);
        self.frame.arrange(rect);
        for (top, bottom) in self.top_ticks.iter_mut().zip(self.bottom_ticks.iter_mut()) {
            top.arrange(rect);
            bottom.arrange(rect);
        }
        self.scale_panel.arrange(rect);
        self.place_children(size);

        self.layout.actual_size = size;
        self.layout.arrange_valid = true;
        self.layout.arrange_passes += 1;
        if DF.log_layout {
            log::trace!("arrange {:?} -> {:?} (value {:.2})", final_size, size, self.bar_value);
        }
        size
    }

    /// Run whichever passes are stale for `available`. The arrange pass receives the
    /// measured size. Returns the arranged size.
    pub fn update_layout(&mut self, available: Vec2) -> Vec2 {
        if self.layout.needs_measure(available) {
            self.measure(available);
        }
        let desired = self.layout.desired_size;
        if self.layout.needs_arrange(desired) {
            self.arrange(desired);
        }
        self.layout.actual_size
    }

    fn place_children(&mut self, size: Vec2) {
        let (width, height) = (size.x, size.y);

        self.bar.height = Some(height);
        self.bar.width = Some((width / 100.0) * self.bar_value as f32);

        self.frame.height = Some(height);
        self.frame.width = Some(width);

        let spacing = width / TICK_DIVISIONS as f32;
        for (i, (top, bottom)) in self
            .top_ticks
            .iter_mut()
            .zip(self.bottom_ticks.iter_mut())
            .enumerate()
        {
            let x = spacing * (i + 1) as f32;
            let len = tick_length(i, height);
            top.set_vertical(x, 0.0, len);
            bottom.set_vertical(x, height - len, height);
        }

        let slot_width = width / TEXT_DIVISIONS as f32;
        self.scale_panel.padding_left = slot_width / 2.0;
        for label in self.scale_panel.children_mut() {
            label.width = Some(slot_width);
        }
        self.scale_panel.layout_children();
    }

    // --- ACCESSORS ---

    pub fn bar(&self) -> &Rectangle {
        &self.bar
    }

    pub fn frame(&self) -> &Rectangle {
        &self.frame
    }

    pub fn top_ticks(&self) -> &[Line] {
        &self.top_ticks
    }

    pub fn bottom_ticks(&self) -> &[Line] {
        &self.bottom_ticks
    }

    pub fn scale_panel(&self) -> &StackPanel {
        &self.scale_panel
    }

    /// Children in registration order
    pub fn children(&self) -> &[ChildId] {
        &self.children
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn arrange_passes(&self) -> u64 {
        self.layout.arrange_passes
    }

    pub fn is_measure_valid(&self) -> bool {
        self.layout.measure_valid
    }

    pub fn is_arrange_valid(&self) -> bool {
        self.layout.arrange_valid
    }

    pub fn actual_size(&self) -> Vec2 {
        self.layout.actual_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn arranged(width: f32, height: f32, value: f64) -> BarGraphControl {
        let mut c = BarGraphControl::new();
        c.set_bar_value(value);
        c.measure(vec2(width, height));
        c.arrange(vec2(width, height));
        c
    }

    #[test]
    fn setter_clamps_into_range() {
        let mut c = BarGraphControl::new();
        assert_eq!(c.bar_value(), 0.0);
        for (input, expected) in [(150.0, 100.0), (-10.0, 0.0), (42.5, 42.5), (100.0, 100.0)] {
            c.set_bar_value(input);
            assert_eq!(c.bar_value(), expected);
        }
        c.set_bar_value(f64::NAN);
        assert_eq!(c.bar_value(), 0.0);
        c.set_bar_value(f64::INFINITY);
        assert_eq!(c.bar_value(), 100.0);
    }

    #[test]
    fn reference_geometry_at_400_by_60() {
        let c = arranged(400.0, 60.0, 50.0);

        assert_eq!(c.bar().bounds().width(), 200.0);
        assert_eq!(c.bar().bounds().height(), 60.0);
        assert_eq!(c.bar().bounds().left(), 0.0);

        let xs: Vec<f32> = c.top_ticks().iter().take(3).map(|t| t.x1).collect();
        assert_eq!(xs, vec![4.0, 8.0, 12.0]);

        let labels = c.scale_panel().children();
        assert_eq!(c.scale_panel().padding_left, 10.0);
        assert_eq!(labels[0].slot().left(), 10.0);
        assert_eq!(labels[0].slot().width(), 20.0);
        assert_eq!(labels[1].slot().left(), 30.0);
    }

    #[test]
    fn bar_width_tracks_clamped_value() {
        for (w, v) in [(400.0_f32, 0.0), (640.0, 33.0), (1000.0, 150.0), (450.0, -5.0)] {
            let c = arranged(w, 60.0, v);
            let expected = (w / 100.0) * clamp_bar_value(v) as f32;
            assert_eq!(c.bar().width, Some(expected));
        }
    }

    #[test]
    fn frame_outlines_whole_control() {
        let c = arranged(520.0, 80.0, 10.0);
        assert_eq!(
            c.frame().bounds(),
            Rect::from_min_size(Pos2::ZERO, vec2(520.0, 80.0))
        );
        assert!(c.frame().fill.is_transparent());
    }

    #[test]
    fn tick_counts_do_not_depend_on_size() {
        for (w, h) in [(400.0, 60.0), (1200.0, 200.0), (10.0, 5.0)] {
            let c = arranged(w, h, 0.0);
            assert_eq!(c.top_ticks().len(), 99);
            assert_eq!(c.bottom_ticks().len(), 99);
        }
    }

    #[test]
    fn every_fifth_tick_is_major() {
        let c = arranged(400.0, 60.0, 0.0);
        for (i, (top, bottom)) in c.top_ticks().iter().zip(c.bottom_ticks()).enumerate() {
            let expected = if (i + 1) % 5 == 0 { 12.0 } else { 6.0 };
            assert_eq!(top.y1, 0.0);
            assert_eq!(top.y2, expected);
            assert_eq!(bottom.y1, 60.0 - expected);
            assert_eq!(bottom.y2, 60.0);
            assert_eq!(top.x1, top.x2);
            assert_eq!(top.x1, bottom.x1);
        }
    }

    #[test]
    fn labels_read_5_to_95() {
        let c = BarGraphControl::new();
        let texts: Vec<&str> = c
            .scale_panel()
            .children()
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        let expected: Vec<String> = (1..=19).map(|i| (i * 5).to_string()).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn children_registered_in_fixed_order() {
        let c = BarGraphControl::new();
        let children = c.children();
        assert_eq!(children.len(), 2 * 99 + 3);
        assert_eq!(children[0], ChildId::Bar);
        assert_eq!(children[1], ChildId::TopTick(0));
        assert_eq!(children[2], ChildId::BottomTick(0));
        assert_eq!(children[197], ChildId::TopTick(98));
        assert_eq!(children[198], ChildId::BottomTick(98));
        assert_eq!(children[199], ChildId::Frame);
        assert_eq!(children[200], ChildId::ScalePanel);
    }

    #[test]
    fn unbounded_constraint_uses_minimum_size() {
        let mut c = BarGraphControl::new();
        assert_eq!(c.measure(Vec2::INFINITY), vec2(400.0, 60.0));
        assert_eq!(c.arrange(vec2(f32::INFINITY, 90.0)), vec2(400.0, 90.0));
        assert_eq!(c.frame().bounds().width(), 400.0);
    }

    #[test]
    fn undersized_constraint_lays_out_at_minimum() {
        let c = arranged(100.0, 20.0, 50.0);
        assert_eq!(c.actual_size(), vec2(400.0, 60.0));
        assert_eq!(c.bar().width, Some(200.0));
        assert_eq!(c.scale_panel().children()[0].slot().width(), 20.0);

        let mut c = BarGraphControl::new();
        c.set_bar_value(50.0);
        assert_eq!(c.update_layout(vec2(-10.0, -4.0)), vec2(400.0, 60.0));
        assert_eq!(c.bar().width, Some(200.0));
        assert_eq!(c.frame().bounds().height(), 60.0);
    }

    #[test]
    fn measure_reaches_every_child_with_resolved_size() {
        let mut c = BarGraphControl::new();
        let resolved = c.measure(vec2(f32::INFINITY, 90.0));
        assert_eq!(resolved, vec2(400.0, 90.0));

        // Nothing is arranged yet, so stretched rectangles desire the whole constraint
        assert_eq!(c.bar().desired_size(), resolved);
        assert_eq!(c.frame().desired_size(), resolved);
        assert!(c.top_ticks().iter().all(|t| t.constraint() == resolved));
        assert!(c.bottom_ticks().iter().all(|t| t.constraint() == resolved));
        assert!(
            c.scale_panel()
                .children()
                .iter()
                .all(|l| l.constraint() == vec2(f32::INFINITY, 90.0))
        );
    }

    #[test]
    fn value_change_dirties_arrange_only() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut c = BarGraphControl::new();
        let sink = Rc::clone(&events);
        c.on_invalidate(move |kind| sink.borrow_mut().push(kind));

        c.update_layout(vec2(400.0, 60.0));
        assert!(c.is_measure_valid() && c.is_arrange_valid());

        c.set_bar_value(25.0);
        assert!(c.is_measure_valid());
        assert!(!c.is_arrange_valid());
        assert_eq!(*events.borrow(), vec![Invalidation::Arrange]);

        let measures = c.layout().measure_passes;
        c.update_layout(vec2(400.0, 60.0));
        assert_eq!(c.layout().measure_passes, measures);
        assert_eq!(c.bar().width, Some(100.0));
    }

    #[test]
    fn unchanged_write_is_a_no_op() {
        let events = Rc::new(RefCell::new(0));
        let mut c = BarGraphControl::new();
        let sink = Rc::clone(&events);
        c.on_invalidate(move |_| *sink.borrow_mut() += 1);

        c.set_bar_value(50.0);
        c.update_layout(vec2(400.0, 60.0));
        let passes = c.arrange_passes();

        c.set_bar_value(50.0);
        c.set_bar_value(120.0);
        c.set_bar_value(100.0);
        c.update_layout(vec2(400.0, 60.0));

        // 50 -> 100 is the only change after the first write
        assert_eq!(*events.borrow(), 2);
        assert_eq!(c.arrange_passes(), passes + 1);

        c.set_bar_value(100.0);
        c.update_layout(vec2(400.0, 60.0));
        assert_eq!(c.arrange_passes(), passes + 1);
        assert_eq!(*events.borrow(), 2);
    }

    #[test]
    fn resize_triggers_both_passes() {
        let mut c = BarGraphControl::new();
        c.update_layout(vec2(400.0, 60.0));
        let (m, a) = (c.layout().measure_passes, c.arrange_passes());
        assert_eq!(c.update_layout(vec2(800.0, 60.0)), vec2(800.0, 60.0));
        assert_eq!(c.layout().measure_passes, m + 1);
        assert_eq!(c.arrange_passes(), a + 1);
        assert_eq!(c.top_ticks()[0].x1, 8.0);
    }
}
