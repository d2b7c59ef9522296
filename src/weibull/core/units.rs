//! Units for life-data observations.
//!
//! - [`TimeUnit`] declares the time granularity of observed lifetimes.
//!
//! Notes
//! -----
//! - `TimeUnit` is metadata only; it does not rescale values by itself.

/// Units of measurement for observed lifetimes.
///
/// Sets the assumed time scale for the data and for reporting downstream
/// (η, MTTF, and B-lives are expressed in the same unit). It does **not**
/// rescale values automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    #[default]
    Hours,
    Days,
    /// Load cycles, for fatigue tests that count cycles instead of time.
    Cycles,
}

impl TimeUnit {
    /// Short label for reports and plot axes.
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
            TimeUnit::Cycles => "cycles",
        }
    }
}
