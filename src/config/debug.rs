//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` so debug
//! builds stay readable. All of these are only consulted under
//! `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (submissions, chart mode switches, copy actions).
    pub print_ui_interactions: bool,
    /// Emit request token bookkeeping (issued, superseded, stale responses dropped).
    pub print_request_tokens: bool,
    /// Emit chart instance create/destroy events.
    pub print_chart_lifecycle: bool,
    /// Dump the decoded payload of every successful fetch.
    pub print_payloads: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_request_tokens: true,
    print_chart_lifecycle: false,
    print_payloads: false,
};
