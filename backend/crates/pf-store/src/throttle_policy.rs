use chrono::TimeDelta;

/// Submissions allowed per origin before throttling kicks in
pub const DEFAULT_MAX_SUBMISSIONS: usize = 3;

/// Trailing window: 15 minutes
pub const DEFAULT_WINDOW_SECS: i64 = 15 * 60;

/// Per-origin ceiling on contact submissions within a trailing window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottlePolicy {
    /// Maximum submissions per origin inside the window
    pub max_submissions: usize,
    /// Trailing window length
    pub window: TimeDelta,
}

impl ThrottlePolicy {
    /// Windows too long to represent are capped at `TimeDelta::MAX`
    pub fn new(max_submissions: usize, window_secs: i64) -> Self {
        Self {
            max_submissions,
            window: TimeDelta::try_seconds(window_secs).unwrap_or(TimeDelta::MAX),
        }
    }

    /// True once the recent count goes past the ceiling
    pub fn exceeded_by(&self, recent_count: usize) -> bool {
        recent_count > self.max_submissions
    }
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUBMISSIONS, DEFAULT_WINDOW_SECS)
    }
}
