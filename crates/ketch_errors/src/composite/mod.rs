//! Aggregation of several errors into one reportable unit.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use crate::{ApiError, ErrorCode, GeneralError, ERROR_SEPARATOR};

/// Anything that can be reported: a code, a message and a stack text.
pub trait Reportable {
    fn code(&self) -> ErrorCode;

    fn message(&self) -> &str;

    /// Stack text. May be computed on each call.
    fn stack(&self) -> Cow<'_, str>;
}

impl<T: Reportable + ?Sized> Reportable for &T {
    fn code(&self) -> ErrorCode {
        (**self).code()
    }

    fn message(&self) -> &str {
        (**self).message()
    }

    fn stack(&self) -> Cow<'_, str> {
        (**self).stack()
    }
}

/// [`CompositeError::new`] was given no errors.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("a composite error needs at least one constituent error")]
pub struct EmptyComposite;

/// Several errors reported together.
///
/// Message and stack are joined once, at construction, in input order.
/// Nested composites are not flattened: their joined text is one element.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CompositeError {
    message: String,
    stack: String,
    error_count: usize,
}

impl CompositeError {
    pub fn new<E: Reportable>(errors: &[E]) -> Result<Self, EmptyComposite> {
        if errors.is_empty() {
            return Err(EmptyComposite);
        }

        let message = errors
            .iter()
            .map(Reportable::message)
            .collect::<Vec<_>>()
            .join(ERROR_SEPARATOR);
        let stack = errors
            .iter()
            .map(Reportable::stack)
            .collect::<Vec<_>>()
            .join(ERROR_SEPARATOR);

        tracing::trace!(count = errors.len(), "constructed composite error");

        Ok(CompositeError {
            message,
            stack,
            error_count: errors.len(),
        })
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::COMPOSITE
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// Number of direct constituents.
    pub fn error_count(&self) -> usize {
        self.error_count
    }
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CompositeError {}

impl Reportable for CompositeError {
    fn code(&self) -> ErrorCode {
        CompositeError::code(self)
    }

    fn message(&self) -> &str {
        CompositeError::message(self)
    }

    fn stack(&self) -> Cow<'_, str> {
        Cow::Borrowed(CompositeError::stack(self))
    }
}

impl Reportable for GeneralError {
    fn code(&self) -> ErrorCode {
        GeneralError::code(self)
    }

    fn message(&self) -> &str {
        GeneralError::message(self)
    }

    fn stack(&self) -> Cow<'_, str> {
        Cow::Borrowed(GeneralError::stack(self))
    }
}

impl Reportable for ApiError {
    fn code(&self) -> ErrorCode {
        ApiError::code(self)
    }

    fn message(&self) -> &str {
        ApiError::message(self)
    }

    fn stack(&self) -> Cow<'_, str> {
        Cow::Owned(ApiError::stack(self))
    }
}
