//! Callsite records.
//!
//! Defines [`Callsite`] and its two shapes, [`SourceCallsite`] for calls made
//! from a test file and [`RawCallsite`] for commands replayed from a raw
//! (pre-compiled) test, plus [`CallsiteRef`], the constructor-side handle
//! that is either already resolved or still a method name.

use std::fmt;
use std::sync::Arc;

/// Path prefixes that identify frames inside the test runtime itself.
const INTERNAL_PREFIXES: &[&str] = &["ketch:", "node:internal/"];

/// Path fragment that identifies third-party dependency frames.
const DEPENDENCY_FRAGMENT: &str = "/node_modules/";

/// One native stack frame captured with a callsite.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StackFrame {
    /// Function name, if the frame has one.
    pub function: Option<String>,
    pub file: String,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl StackFrame {
    pub fn new(function: Option<&str>, file: impl Into<String>, line: u32, column: u32) -> Self {
        StackFrame {
            function: function.map(str::to_owned),
            file: file.into(),
            line,
            column,
        }
    }

    /// Whether this frame belongs to the runtime or a dependency rather than
    /// to user test code.
    pub fn is_internal(&self) -> bool {
        INTERNAL_PREFIXES
            .iter()
            .any(|prefix| self.file.starts_with(prefix))
            || self.file.contains(DEPENDENCY_FRAGMENT)
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.function {
            Some(function) => write!(
                f,
                "{function} ({}:{}:{})",
                self.file, self.line, self.column
            ),
            None => write!(f, "{}:{}:{}", self.file, self.line, self.column),
        }
    }
}

/// A call made from a test source file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceCallsite {
    /// The API method that was called (e.g. `click`).
    pub method: String,
    pub file: String,
    /// 1-based line of the call.
    pub line: u32,
    /// 1-based column of the call.
    pub column: u32,
    /// Full text of `file`, when it could be read.
    pub source: Option<Arc<str>>,
    /// Native frames leading to the call, innermost first.
    pub frames: Vec<StackFrame>,
}

impl SourceCallsite {
    pub fn new(method: impl Into<String>, file: impl Into<String>, line: u32, column: u32) -> Self {
        SourceCallsite {
            method: method.into(),
            file: file.into(),
            line,
            column,
            source: None,
            frames: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<Arc<str>>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_frame(mut self, frame: StackFrame) -> Self {
        self.frames.push(frame);
        self
    }
}

/// A command replayed from a raw test, identified by its index in the
/// recorded command list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawCallsite {
    pub method: String,
    /// Textual form of every command in the raw test.
    pub commands: Vec<String>,
    /// Index of the failing command in `commands`.
    pub failed_index: usize,
}

impl RawCallsite {
    pub fn new(method: impl Into<String>, commands: Vec<String>, failed_index: usize) -> Self {
        RawCallsite {
            method: method.into(),
            commands,
            failed_index,
        }
    }
}

/// Where a failing API call was made.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Callsite {
    Source(SourceCallsite),
    Raw(RawCallsite),
}

impl Callsite {
    /// The API method this callsite belongs to.
    pub fn method(&self) -> &str {
        match self {
            Callsite::Source(site) => &site.method,
            Callsite::Raw(site) => &site.method,
        }
    }

    /// `file:line:column` for source callsites; `None` for raw ones.
    pub fn location(&self) -> Option<String> {
        match self {
            Callsite::Source(site) => Some(format!("{}:{}:{}", site.file, site.line, site.column)),
            Callsite::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Callsite::Raw(_))
    }
}

impl From<SourceCallsite> for Callsite {
    fn from(site: SourceCallsite) -> Self {
        Callsite::Source(site)
    }
}

impl From<RawCallsite> for Callsite {
    fn from(site: RawCallsite) -> Self {
        Callsite::Raw(site)
    }
}

/// A callsite handed to an error constructor: either already resolved, or
/// the name of the API method whose latest call should be looked up.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CallsiteRef {
    Resolved(Callsite),
    ByMethod(String),
}

impl From<Callsite> for CallsiteRef {
    fn from(callsite: Callsite) -> Self {
        CallsiteRef::Resolved(callsite)
    }
}

impl From<SourceCallsite> for CallsiteRef {
    fn from(site: SourceCallsite) -> Self {
        CallsiteRef::Resolved(Callsite::Source(site))
    }
}

impl From<RawCallsite> for CallsiteRef {
    fn from(site: RawCallsite) -> Self {
        CallsiteRef::Resolved(Callsite::Raw(site))
    }
}

impl From<&str> for CallsiteRef {
    fn from(method: &str) -> Self {
        CallsiteRef::ByMethod(method.to_owned())
    }
}

impl From<String> for CallsiteRef {
    fn from(method: String) -> Self {
        CallsiteRef::ByMethod(method)
    }
}

#[cfg(test)]
mod tests;
