use eframe::egui::{
    Color32, CornerRadius, FontId, Mesh, Painter, Pos2, Rect, Response, Sense, Shape, StrokeKind,
    Ui, Widget,
};

use crate::config::BAR_GRAPH_CONFIG;
use crate::control::{BarGraphControl, ChildId};
use crate::shapes::{Fill, Rectangle};

impl Widget for &mut BarGraphControl {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = self.update_layout(ui.available_size());
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        if ui.is_rect_visible(rect) {
            paint(self, &ui.painter_at(rect), rect.min);
        }
        response
    }
}

/// Paint the arranged children in registration order, offset by `origin`.
pub fn paint(control: &BarGraphControl, painter: &Painter, origin: Pos2) {
    let offset = origin.to_vec2();
    let font = FontId::proportional(BAR_GRAPH_CONFIG.label_font_size);

    for child in control.children() {
        match *child {
            ChildId::Bar => paint_rectangle(painter, control.bar(), offset),
            ChildId::Frame => paint_rectangle(painter, control.frame(), offset),
            ChildId::TopTick(i) => {
                let tick = &control.top_ticks()[i];
                let [a, b] = tick.points();
                painter.line_segment([a + offset, b + offset], tick.stroke);
            }
            ChildId::BottomTick(i) => {
                let tick = &control.bottom_ticks()[i];
                let [a, b] = tick.points();
                painter.line_segment([a + offset, b + offset], tick.stroke);
            }
            ChildId::ScalePanel => {
                for label in control.scale_panel().children() {
                    let (pos, align) = label.anchor();
                    painter.text(pos + offset, align, &label.text, font.clone(), label.color);
                }
            }
        }
    }
}

fn paint_rectangle(painter: &Painter, shape: &Rectangle, offset: eframe::egui::Vec2) {
    let rect = shape.bounds();
    if !rect.is_finite() || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    let rect = rect.translate(offset);

    match shape.fill {
        Fill::Solid(color) if color != Color32::TRANSPARENT => {
            painter.rect_filled(rect, CornerRadius::ZERO, color);
        }
        Fill::Solid(_) => {}
        Fill::HorizontalGradient { .. } => {
            painter.add(Shape::mesh(horizontal_gradient_mesh(rect, &shape.fill)));
        }
    }

    if shape.stroke.width > 0.0 {
        painter.rect_stroke(rect, CornerRadius::ZERO, shape.stroke, StrokeKind::Inside);
    }
}

/// Quad colored with the fill's left edge color on the left and right edge color on the right.
/// The GPU interpolates in between.
pub fn horizontal_gradient_mesh(rect: Rect, fill: &Fill) -> Mesh {
    let (start, end) = (fill.color_at(0.0), fill.color_at(1.0));
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), start);
    mesh.colored_vertex(rect.right_top(), end);
    mesh.colored_vertex(rect.right_bottom(), end);
    mesh.colored_vertex(rect.left_bottom(), start);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}
