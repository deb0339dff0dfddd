//! Horizontal bar graph / progress indicator for egui, with ruler tick marks
//! and a 5..95 scale, laid out through a small retained measure/arrange tree.

pub mod app;
pub mod config;
pub mod control;
pub mod shapes;
pub mod ui;

pub use app::BarGraphApp;
pub use control::{BarGraphControl, ChildId, Invalidation};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Initial bar value (clamped to 0..=100). Overrides the persisted value.
    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<f64>,

    /// Sweep the bar from 0 to 100 continuously
    #[arg(long, default_value_t = false)]
    pub animate: bool,
}

/// Creates the demo app. This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> BarGraphApp {
    BarGraphApp::new(cc, args)
}
