mod bar_graph_control;
mod layout_state;

pub use bar_graph_control::{BarGraphControl, ChildId, Invalidation, clamp_bar_value, tick_length};
pub use layout_state::{LayoutState, resolve_size};
