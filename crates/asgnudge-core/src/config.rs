//! Process configuration.

/// Runtime configuration, built once at startup and passed into the
/// adjuster.
///
/// `ASG_TAG_NAME` / `ASG_TAG_VALUE` select the subset of groups this job is
/// allowed to touch. Either one unset leaves the filter incomplete, which
/// makes the run a silent no-op pass rather than an error.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tag key groups must carry to be processed.
    pub tag_key: Option<String>,
    /// Tag value groups must carry to be processed.
    pub tag_value: Option<String>,
    /// Log verbosity, `EnvFilter` directive syntax.
    pub log_level: String,
    /// Evaluate and log decisions without mutating any group.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_key: None,
            tag_value: None,
            log_level: "info".to_string(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Read `ASG_TAG_NAME`, `ASG_TAG_VALUE` and `LOG_LEVEL` from the
    /// process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Tests pass a closure over a
    /// map instead of mutating shared process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            tag_key: lookup("ASG_TAG_NAME"),
            tag_value: lookup("ASG_TAG_VALUE"),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            dry_run: false,
        }
    }
}
