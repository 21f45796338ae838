//! Structured error values for the Ketch test runner.
//!
//! Every failure the runner reports is built here, from an [`ErrorCode`]
//! plus the arguments for that code's message template:
//!
//! - [`GeneralError`]: recognized application errors (timeouts, browser
//!   connection failures, test compilation and reporter plugin failures)
//! - [`ApiError`]: misuse of the test API, attributed to the [`Callsite`]
//!   of the offending call, with plain and colored stack views rendered on
//!   demand
//! - [`CompositeError`]: several errors reported as one unit
//!
//! [`ReportedError`] is the closed union of the three. Messages are rendered
//! once, at construction; API error stacks are rendered on each read so a
//! replaced callsite is always reflected.
//!
//! ```text
//! let err = GeneralError::browser_connection(template_args!["localhost", 1337]);
//! assert_eq!(err.code(), ErrorCode::BROWSER_CONNECTION);
//! assert!(is_general_error(&err));
//! ```
//!
//! [`Callsite`]: ketch_callsite::Callsite

mod api;
mod code;
mod composite;
mod config;
mod general;
mod reported;
mod template;

use std::sync::Once;

pub use api::{ApiContext, ApiError, ApiKind, INSTANTIATION_CALLSITE_NAME, SKIP_JS_ERRORS_METHOD};
pub use code::{ErrorCode, UnknownErrorCode};
pub use composite::{CompositeError, EmptyComposite, Reportable};
pub use config::{
    ColorMode, ConfigError, ErrorsConfig, COLOR_VAR, DEFAULT_STACK_TRACE_LIMIT,
    STACK_TRACE_LIMIT_VAR,
};
pub use general::{Failure, GeneralError, GeneralKind, PluginFailure, NO_STACK_TRACE_MESSAGE};
pub use reported::{is_general_error, ReportedError};
pub use template::{render_template, TemplateArg, TemplateInstruction};

/// Separator between a message and its callsite excerpt, and between the
/// parts of a composite error.
pub const ERROR_SEPARATOR: &str = "\n\n";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ketch_errors=debug` or `RUST_LOG=ketch_callsite=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
