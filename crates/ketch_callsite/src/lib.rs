//! Callsite collaborators for error reporting.
//!
//! A [`Callsite`] describes where a failing test API call was made. This
//! crate owns everything needed to turn one into a readable source excerpt:
//!
//! - Resolution: mapping a method name to the callsite of its latest call
//!   ([`CallsiteResolver`], [`CallsiteRegistry`])
//! - Frame filtering: hiding runtime-internal frames and bounding depth
//!   ([`StackFilter`])
//! - Rendering: plain or ANSI-colored code frames ([`render_callsite`],
//!   [`select_renderers`])
//!
//! ```text
//!    12 |     await t
//!  > 13 |         .click('#submit')
//!    14 |         .expect(title).eql('Done');
//!
//!    at runLogin (tests/login.js:13:10)
//! ```
//!
//! Rendering is pure: the same callsite, renderer and filter always yield
//! the same string, so callers may re-render on every read.

mod callsite;
mod filter;
mod render;
mod resolver;

pub use callsite::{Callsite, CallsiteRef, RawCallsite, SourceCallsite, StackFrame};
pub use filter::StackFilter;
pub use render::{render_callsite, select_renderers, RenderOptions, Renderer, Renderers};
pub use resolver::{resolve_ref, CallsiteRegistry, CallsiteResolver, NoopResolver};
