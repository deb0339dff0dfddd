mod root;
mod state;

pub use root::BarGraphApp;
pub use state::BarGraphAppState;
