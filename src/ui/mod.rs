mod bar_graph_widget;
mod styles;
mod ui_config;

pub use bar_graph_widget::{horizontal_gradient_mesh, paint};
pub use styles::setup_custom_visuals;
pub(crate) use ui_config::UI_CONFIG;
