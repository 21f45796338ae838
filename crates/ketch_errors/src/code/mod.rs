//! Error codes for every reportable runtime failure.
//!
//! Each code is a stable identifier (e.g. `E1006`) that tests and reporter
//! plugins can match on. The first digit indicates the failure family.

use std::fmt;

use thiserror::Error;

/// Error codes for reportable failures.
///
/// Format: E#### where the first digit indicates the family:
/// - E1xxx: Runtime and infrastructure failures
/// - E2xxx: Test API misuse, attributed to a callsite
/// - E9xxx: Aggregates
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Runtime Errors (E1xxx)
    /// Browser disconnected during a run
    E1001,
    /// Browser connections could not be established
    E1002,
    /// No test files at the given location
    E1003,
    /// Tests could not be prepared (also wraps API errors)
    E1004,
    /// Raw test file could not be parsed
    E1005,
    /// A time-limited operation timed out
    E1006,
    /// Reporter plugin raised an uncaught error
    E1007,
    /// Connection to a remote browser failed
    E1008,

    // API Errors (E2xxx)
    /// Client function code is not a function
    E2001,
    /// Selector code is neither a function nor a string
    E2002,
    /// Client function cannot resolve its test run
    E2003,
    /// Argument has the wrong type
    E2004,
    /// API method called more than once
    E2005,
    /// Request hook method failed
    E2006,
    /// Invalid `skipJsErrors` option
    E2007,

    // Aggregate Errors (E9xxx)
    /// Several errors reported together
    E9001,
}

impl ErrorCode {
    /// Wraps the message of every callsite-attributed error, and reports
    /// test compilation failures.
    pub const CANNOT_PREPARE_TESTS: ErrorCode = ErrorCode::E1004;
    pub const TIMEOUT_EXPIRED: ErrorCode = ErrorCode::E1006;
    pub const UNCAUGHT_ERROR_IN_REPORTER: ErrorCode = ErrorCode::E1007;
    pub const BROWSER_CONNECTION: ErrorCode = ErrorCode::E1008;
    pub const REQUEST_HOOK_FAILED: ErrorCode = ErrorCode::E2006;
    pub const INVALID_SKIP_JS_ERRORS_OPTION: ErrorCode = ErrorCode::E2007;
    pub const COMPOSITE: ErrorCode = ErrorCode::E9001;

    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive.
    pub const ALL: &[ErrorCode] = &[
        // Runtime
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        // API
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        // Aggregate
        ErrorCode::E9001,
    ];

    /// Get the code as a string (e.g., "E1006").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Runtime
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            // API
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            // Aggregate
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Check if this is a runtime error (E1xxx range).
    pub fn is_runtime_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
                | ErrorCode::E1007
                | ErrorCode::E1008
        )
    }

    /// Check if this is an API misuse error (E2xxx range).
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E2001
                | ErrorCode::E2002
                | ErrorCode::E2003
                | ErrorCode::E2004
                | ErrorCode::E2005
                | ErrorCode::E2006
                | ErrorCode::E2007
        )
    }

    /// Check if this is an aggregate code (E9xxx range).
    pub fn is_aggregate(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A code string that names no catalogued error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown error code `{0}`")]
pub struct UnknownErrorCode(pub String);

/// Parse an error code string like `"E1006"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or_else(|| UnknownErrorCode(s.to_owned()))
    }
}
