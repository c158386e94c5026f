//! Debugging feature flags.

pub struct LogFlags {
    /// Per-policy choices (RP, EEV, MILP) at debug level.
    pub log_selection: bool,

    /// One line per swept threshold.
    pub log_sweep: bool,

    /// Branch and bound statistics.
    pub log_solver: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_selection: true,
    log_sweep: true,
    log_solver: false,
    log_performance: false,
};
