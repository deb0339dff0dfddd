//! Debugging feature flags.

pub struct LogFlags {
    /// Log every BarValue change (old -> new) at debug level
    pub log_value_changes: bool,

    /// Log measure/arrange passes at trace level
    pub log_layout: bool,

    /// Log sweep animation wrap-arounds in the demo app
    pub log_animation: bool,
}

pub const DF: LogFlags = LogFlags {
    log_value_changes: false,
    log_layout: false,
    log_animation: false,
};
