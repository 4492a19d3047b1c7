use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity recorded as `log.level`.
///
/// There is no filtering by severity: every call is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Name written into `log.level`.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }

    /// Closest `tracing` level. `tracing` has nothing above `ERROR`, so
    /// critical maps onto it.
    pub fn tracing_level(self) -> tracing::Level {
        match self {
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warning => tracing::Level::WARN,
            Severity::Error | Severity::Critical => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_is_an_alias_of_warning() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!(Severity::Warning.as_str(), "warning");
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!("fatal".parse::<Severity>(), Err(ParseSeverityError("fatal".to_string())));
    }

    #[test]
    fn serializes_as_lowercase_name() {
        for severity in Severity::ALL {
            let encoded = serde_json::to_value(severity).unwrap();
            assert_eq!(encoded, serde_json::Value::String(severity.to_string()));
        }
        let decoded: Severity = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(decoded, Severity::Warning);
    }
}
