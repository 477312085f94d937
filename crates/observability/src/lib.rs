//! Process-wide logging for binaries and test harnesses embedding the rules.

pub mod subscriber;

pub use subscriber::DEFAULT_FILTER;

/// Install the global subscriber.
///
/// Returns `true` on the call that installed it; later calls leave the existing
/// subscriber in place and return `false`.
pub fn init() -> bool {
    subscriber::init()
}
