//! Configuration module for the bar graph control.

mod bar_graph;
mod debug;

// Re-export commonly used items
pub use bar_graph::{
    BAR_GRAPH_CONFIG, BarGraphConfig, LABEL_COUNT, LABEL_STEP, MAJOR_TICK_EVERY, MAX_BAR_VALUE,
    MIN_BAR_VALUE, TEXT_DIVISIONS, TICK_COUNT, TICK_DIVISIONS, TICK_LENGTH_DIVISOR,
};
pub use debug::{DF, LogFlags};
