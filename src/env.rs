/// Environment variable names used by this crate for convenient
/// configuration of loggers from microservices.
///
/// These are purely helpers; [`Logger`](crate::logger::Logger) itself
/// never reads the environment.

/// Service name written into `service.name`.
pub const TWIGLET_SERVICE_NAME_ENV: &str = "TWIGLET_SERVICE_NAME";

/// Set to `false` or `0` to keep dotted keys literal instead of nesting
/// them.
pub const TWIGLET_NEST_DOTTED_KEYS_ENV: &str = "TWIGLET_NEST_DOTTED_KEYS";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read a boolean flag. Unset or unrecognised values yield `default`.
pub fn env_flag(key: &str, default: bool) -> bool {
    match env_or(key, "").trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
