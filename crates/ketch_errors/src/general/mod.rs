//! Recognized application errors.
//!
//! [`GeneralError`] is the base error: a code, the arguments it was rendered
//! with, and the rendered message. Its fixed-shape variants (test
//! compilation, reporter plugin, timeout, browser connection) are built by
//! dedicated constructors and tagged with a [`GeneralKind`].

use std::error::Error;
use std::fmt;

use crate::{render_template, ErrorCode, TemplateArg};

/// Fallback used when a reporter plugin raises a value without a stack.
pub const NO_STACK_TRACE_MESSAGE: &str = "No stack trace is available for a raised error.";

/// Which constructor produced a [`GeneralError`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GeneralKind {
    General,
    TestCompilation,
    ReporterPlugin,
    Timeout,
    BrowserConnection,
}

/// A failure raised outside this crate, described for reporting.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Failure {
    display: String,
    stack: Option<String>,
    inspection: String,
}

impl Failure {
    /// A failure with the given string form and optional stack text. Its
    /// inspection is the quoted string form.
    pub fn new(display: impl Into<String>, stack: Option<String>) -> Self {
        let display = display.into();
        let inspection = format!("{display:?}");
        Failure {
            display,
            stack,
            inspection,
        }
    }

    /// Describe an error value. Its stack is the error followed by its
    /// `caused by:` chain.
    pub fn from_error<E: Error + ?Sized>(err: &E) -> Self {
        let display = err.to_string();

        let mut stack = display.clone();
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str("\n    caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }

        Failure {
            display,
            stack: Some(stack),
            inspection: format!("{err:#?}"),
        }
    }

    /// Describe an arbitrary raised value. It has no stack.
    pub fn from_value<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Failure {
            display: format!("{value:?}"),
            stack: None,
            inspection: format!("{value:#?}"),
        }
    }

    #[must_use]
    pub fn with_inspection(mut self, inspection: impl Into<String>) -> Self {
        self.inspection = inspection.into();
        self
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Structural dump of the raised value.
    pub fn inspection(&self) -> &str {
        &self.inspection
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// An uncaught failure inside a reporter plugin method.
#[derive(Clone, Copy, Debug)]
pub struct PluginFailure<'a> {
    /// Reporter name.
    pub name: &'a str,
    /// Reporter method that raised, e.g. `reportTestDone`.
    pub method: &'a str,
    pub failure: &'a Failure,
}

/// A recognized application error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneralError {
    kind: GeneralKind,
    code: ErrorCode,
    data: Vec<TemplateArg>,
    message: String,
    stack: Option<String>,
}

impl GeneralError {
    /// Render `code`'s template with `args`.
    pub fn new(code: ErrorCode, args: Vec<TemplateArg>) -> Self {
        Self::with_kind(GeneralKind::General, code, args)
    }

    fn with_kind(kind: GeneralKind, code: ErrorCode, args: Vec<TemplateArg>) -> Self {
        let message = render_template(code.template(), &args);
        tracing::trace!(%code, ?kind, "constructed general error");
        GeneralError {
            kind,
            code,
            data: args,
            message,
            stack: None,
        }
    }

    /// Tests could not be compiled because of `original`.
    ///
    /// The stack is the same template rendered against the original stack,
    /// or against its string form when it has none.
    pub fn test_compilation(original: &Failure) -> Self {
        let code = ErrorCode::CANNOT_PREPARE_TESTS;
        let mut error = Self::with_kind(
            GeneralKind::TestCompilation,
            code,
            vec![TemplateArg::from(original.display())],
        );

        let original_stack = original.stack().unwrap_or(original.display());
        error.stack = Some(render_template(
            code.template(),
            &[TemplateArg::from(original_stack)],
        ));
        error
    }

    /// A reporter plugin method raised `plugin.failure`.
    pub fn reporter_plugin(plugin: PluginFailure<'_>) -> Self {
        let prepared_stack = prepare_plugin_stack(plugin.failure);
        Self::with_kind(
            GeneralKind::ReporterPlugin,
            ErrorCode::UNCAUGHT_ERROR_IN_REPORTER,
            vec![
                TemplateArg::from(plugin.method),
                TemplateArg::from(plugin.name),
                TemplateArg::from(prepared_stack),
            ],
        )
    }

    /// A time-limited operation timed out.
    pub fn timeout() -> Self {
        Self::with_kind(GeneralKind::Timeout, ErrorCode::TIMEOUT_EXPIRED, Vec::new())
    }

    /// A browser connection failed; `args` are forwarded unchanged.
    pub fn browser_connection(args: Vec<TemplateArg>) -> Self {
        Self::with_kind(
            GeneralKind::BrowserConnection,
            ErrorCode::BROWSER_CONNECTION,
            args,
        )
    }

    pub fn kind(&self) -> GeneralKind {
        self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The arguments the message was rendered with.
    pub fn data(&self) -> &[TemplateArg] {
        &self.data
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stack text: the eager override for test compilation errors, the
    /// message otherwise.
    pub fn stack(&self) -> &str {
        self.stack.as_deref().unwrap_or(&self.message)
    }
}

/// The stack text reported for a plugin failure.
fn prepare_plugin_stack(failure: &Failure) -> String {
    match failure.stack() {
        Some(stack) if !stack.is_empty() => stack.to_owned(),
        _ => format!(
            "{NO_STACK_TRACE_MESSAGE}\nRaised error object inspection:\n{}",
            failure.inspection()
        ),
    }
}

impl fmt::Display for GeneralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for GeneralError {}

#[cfg(test)]
mod tests;
