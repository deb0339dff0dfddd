use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Outer margin around the hosted bar graph
    pub control_margin: i8,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        central_panel: Color32::from_rgb(20, 20, 24),
        side_panel: Color32::from_rgb(25, 25, 25),
    },
    control_margin: 16,
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame around the bar graph
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(self.control_margin),
            ..Default::default()
        }
    }
}
