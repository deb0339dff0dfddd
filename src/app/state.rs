use serde::{Deserialize, Serialize};

use crate::control::clamp_bar_value;

/// UI state persisted between runs through eframe storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarGraphAppState {
    pub bar_value: f64,
    pub animate: bool,
    /// Sweep speed in value units per second
    pub sweep_rate: f64,
}

impl Default for BarGraphAppState {
    fn default() -> Self {
        Self {
            bar_value: 0.0,
            animate: false,
            sweep_rate: 20.0,
        }
    }
}

impl BarGraphAppState {
    /// Advance the sweep by `dt` seconds. Wraps back to 0 once 100 is passed.
    /// Returns true on wrap-around.
    pub fn advance_sweep(&mut self, dt: f64) -> bool {
        let next = self.bar_value + self.sweep_rate * dt;
        if next > 100.0 {
            self.bar_value = clamp_bar_value(next - 100.0);
            true
        } else {
            self.bar_value = clamp_bar_value(next);
            false
        }
    }
}
