use chrono::{SecondsFormat, Utc};

/// Source of the `@timestamp` field.
///
/// Called exactly once per log call, while the record is assembled and
/// before the sink sees it.
pub trait Clock: Send + Sync {
    fn now(&self) -> String;
}

/// Wall clock in UTC, formatted like `2020-05-11T15:01:01.123Z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl<F> Clock for F
where
    F: Fn() -> String + Send + Sync,
{
    fn now(&self) -> String {
        self()
    }
}
