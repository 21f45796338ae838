//! The closed set of reportable errors.

use std::borrow::Cow;

use ketch_callsite::Callsite;
use thiserror::Error;

use crate::{ApiError, CompositeError, ErrorCode, Failure, GeneralError, Reportable, TemplateArg};

/// Every error value this crate constructs.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReportedError {
    /// A recognized application error.
    #[error(transparent)]
    General(#[from] GeneralError),
    /// An error attributed to a test API call.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Several errors reported together.
    #[error(transparent)]
    Composite(#[from] CompositeError),
}

impl ReportedError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportedError::General(err) => err.code(),
            ReportedError::Api(err) => err.code(),
            ReportedError::Composite(err) => err.code(),
        }
    }

    /// Substitution arguments; empty for composites.
    pub fn data(&self) -> &[TemplateArg] {
        match self {
            ReportedError::General(err) => err.data(),
            ReportedError::Api(err) => err.data(),
            ReportedError::Composite(_) => &[],
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ReportedError::General(err) => err.message(),
            ReportedError::Api(err) => err.message(),
            ReportedError::Composite(err) => err.message(),
        }
    }

    /// The unwrapped message of an API error; the message otherwise.
    pub fn raw_message(&self) -> &str {
        match self {
            ReportedError::Api(err) => err.raw_message(),
            _ => self.message(),
        }
    }

    pub fn stack(&self) -> Cow<'_, str> {
        match self {
            ReportedError::General(err) => Cow::Borrowed(err.stack()),
            ReportedError::Api(err) => Cow::Owned(err.stack()),
            ReportedError::Composite(err) => Cow::Borrowed(err.stack()),
        }
    }

    /// Colored stack for API errors; the plain stack otherwise.
    pub fn colored_stack(&self) -> Cow<'_, str> {
        match self {
            ReportedError::Api(err) => Cow::Owned(err.colored_stack()),
            _ => self.stack(),
        }
    }

    /// The stack view terminal output should use.
    pub fn stack_for_terminal(&self, is_tty: bool) -> Cow<'_, str> {
        match self {
            ReportedError::Api(err) => Cow::Owned(err.stack_for_terminal(is_tty)),
            _ => self.stack(),
        }
    }

    pub fn callsite(&self) -> Option<&Callsite> {
        match self {
            ReportedError::Api(err) => err.callsite(),
            _ => None,
        }
    }

    /// Whether this is a recognized application error.
    pub fn is_general_error(&self) -> bool {
        matches!(self, ReportedError::General(_))
    }
}

impl Reportable for ReportedError {
    fn code(&self) -> ErrorCode {
        ReportedError::code(self)
    }

    fn message(&self) -> &str {
        ReportedError::message(self)
    }

    fn stack(&self) -> Cow<'_, str> {
        ReportedError::stack(self)
    }
}

impl From<&ReportedError> for Failure {
    fn from(err: &ReportedError) -> Self {
        Failure::new(err.message(), Some(err.stack().into_owned()))
            .with_inspection(format!("{err:#?}"))
    }
}

/// Whether `err` is a recognized application error.
///
/// True only for a [`GeneralError`], bare or inside
/// [`ReportedError::General`]. API errors, composites and incidental errors
/// such as I/O failures are not recognized, whatever codes they carry.
pub fn is_general_error(err: &(dyn std::error::Error + 'static)) -> bool {
    err.is::<GeneralError>()
        || err
            .downcast_ref::<ReportedError>()
            .is_some_and(ReportedError::is_general_error)
}
