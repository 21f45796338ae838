//! Error rendering configuration.
//!
//! Read from the environment:
//!
//! | Variable                  | Meaning                                  | Default |
//! |---------------------------|------------------------------------------|---------|
//! | `KETCH_STACK_TRACE_LIMIT` | Frames shown under a rendered callsite   | `10`    |
//! | `KETCH_COLOR`             | `auto`, `always` or `never`              | `auto`  |

use std::str::FromStr;

use thiserror::Error;

pub const STACK_TRACE_LIMIT_VAR: &str = "KETCH_STACK_TRACE_LIMIT";
pub const COLOR_VAR: &str = "KETCH_COLOR";

/// Default number of frames kept under a rendered callsite.
pub const DEFAULT_STACK_TRACE_LIMIT: usize = 10;

/// Color output mode for stack views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ConfigError::InvalidValue {
                var: COLOR_VAR,
                value: s.to_owned(),
                expected: "one of `auto`, `always`, `never`",
            }),
        }
    }
}

/// Malformed configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {var}: expected {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Settings that shape how errors render their stack views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ErrorsConfig {
    /// Depth limit handed to the stack filter.
    pub stack_trace_limit: usize,
    /// Which stack view terminal output should use.
    pub color: ColorMode,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        ErrorsConfig {
            stack_trace_limit: DEFAULT_STACK_TRACE_LIMIT,
            color: ColorMode::default(),
        }
    }
}

impl ErrorsConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = ErrorsConfig::default();

        if let Some(raw) = lookup(STACK_TRACE_LIMIT_VAR) {
            config.stack_trace_limit =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        var: STACK_TRACE_LIMIT_VAR,
                        value: raw.clone(),
                        expected: "a non-negative integer",
                    })?;
        }

        if let Some(raw) = lookup(COLOR_VAR) {
            config.color = raw.parse()?;
        }

        tracing::debug!(?config, "loaded error configuration");
        Ok(config)
    }

    #[must_use]
    pub fn with_stack_trace_limit(mut self, limit: usize) -> Self {
        self.stack_trace_limit = limit;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}
