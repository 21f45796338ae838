//! Message templates.
//!
//! Every [`ErrorCode`](crate::ErrorCode) owns a template in the catalogue
//! (`catalogue.rs`). A template is rendered against an ordered list of
//! [`TemplateArg`]s:
//!
//! - `{0}`, `{1}`, ... are replaced by the positional arguments, in order
//! - `{#name}` is replaced by the named argument `name`
//!
//! Substitution is a single left-to-right pass, so text coming from an
//! argument is never itself treated as a placeholder. A placeholder with no
//! matching argument is left in place.
//!
//! A [`TemplateInstruction`] rewrites a template before substitution without
//! touching the catalogue entry.

mod catalogue;

use std::fmt;

/// A substitution argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TemplateArg {
    /// Fills the next `{n}` slot by position among positional arguments.
    Positional(String),
    /// Fills every `{#name}` slot.
    Named { name: String, value: String },
}

impl TemplateArg {
    /// A positional argument from any displayable value.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        TemplateArg::Positional(value.to_string())
    }

    /// A named argument from any displayable value.
    pub fn named<T: fmt::Display + ?Sized>(name: impl Into<String>, value: &T) -> Self {
        TemplateArg::Named {
            name: name.into(),
            value: value.to_string(),
        }
    }

    /// The substituted text.
    pub fn value(&self) -> &str {
        match self {
            TemplateArg::Positional(value) | TemplateArg::Named { value, .. } => value,
        }
    }

    /// The placeholder name, for named arguments.
    pub fn name(&self) -> Option<&str> {
        match self {
            TemplateArg::Positional(_) => None,
            TemplateArg::Named { name, .. } => Some(name),
        }
    }
}

impl From<&str> for TemplateArg {
    fn from(value: &str) -> Self {
        TemplateArg::Positional(value.to_owned())
    }
}

impl From<String> for TemplateArg {
    fn from(value: String) -> Self {
        TemplateArg::Positional(value)
    }
}

impl fmt::Display for TemplateArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Build a `Vec<TemplateArg>` of positional arguments from displayable values.
///
/// ```
/// use ketch_errors::{template_args, TemplateArg};
///
/// let args = template_args!["localhost", 1337];
/// assert_eq!(args, vec![TemplateArg::from("localhost"), TemplateArg::from("1337")]);
/// ```
#[macro_export]
macro_rules! template_args {
    () => {
        ::std::vec::Vec::<$crate::TemplateArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::TemplateArg::display(&$arg)),+]
    };
}

/// A one-shot rewrite of a template, applied before substitution.
///
/// Consumed by [`apply`](Self::apply), so it can run at most once.
pub struct TemplateInstruction {
    process: Box<dyn FnOnce(&str) -> String + Send + Sync>,
}

impl TemplateInstruction {
    pub fn new(process: impl FnOnce(&str) -> String + Send + Sync + 'static) -> Self {
        TemplateInstruction {
            process: Box::new(process),
        }
    }

    /// Replace every `{#name}` in the template with `value`.
    pub fn replace_placeholder(name: &str, value: impl Into<String>) -> Self {
        let token = format!("{{#{name}}}");
        let value = value.into();
        Self::new(move |template| template.replace(&token, &value))
    }

    /// Produce the rewritten template.
    pub fn apply(self, template: &str) -> String {
        (self.process)(template)
    }
}

impl fmt::Debug for TemplateInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateInstruction").finish_non_exhaustive()
    }
}

/// A placeholder recognized inside `{...}`.
enum Placeholder<'a> {
    Index(usize),
    Name(&'a str),
}

fn parse_placeholder(inner: &str) -> Option<Placeholder<'_>> {
    if let Some(name) = inner.strip_prefix('#') {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        return valid.then_some(Placeholder::Name(name));
    }

    if !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit()) {
        return inner.parse().ok().map(Placeholder::Index);
    }

    None
}

fn lookup<'a>(placeholder: &Placeholder<'_>, args: &'a [TemplateArg]) -> Option<&'a str> {
    match placeholder {
        Placeholder::Index(index) => args
            .iter()
            .filter(|arg| matches!(arg, TemplateArg::Positional(_)))
            .nth(*index)
            .map(TemplateArg::value),
        Placeholder::Name(name) => args
            .iter()
            .find(|arg| arg.name() == Some(*name))
            .map(TemplateArg::value),
    }
}

/// Substitute `args` into `template`.
pub fn render_template(template: &str, args: &[TemplateArg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let parsed = after_open.find('}').and_then(|close| {
            let inner = &after_open[..close];
            parse_placeholder(inner).map(|placeholder| (placeholder, inner, close))
        });

        match parsed {
            Some((placeholder, inner, close)) => {
                match lookup(&placeholder, args) {
                    Some(value) => out.push_str(value),
                    None => {
                        tracing::debug!(placeholder = inner, "no argument for placeholder");
                        out.push('{');
                        out.push_str(inner);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}
