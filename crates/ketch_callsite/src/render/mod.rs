//! Callsite Rendering
//!
//! Turns a [`Callsite`] into a code-frame excerpt, optionally with ANSI
//! colors, followed by the filtered native frames.

use std::fmt::Write;

use crate::{Callsite, RawCallsite, SourceCallsite, StackFilter};

/// ANSI color codes for colored excerpts.
mod colors {
    pub const MARKER: &str = "\x1b[1;31m"; // Bold red
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const FRAME: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Lines of context shown before and after the failing line.
const CONTEXT_LINES: usize = 2;

/// How a callsite excerpt is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Renderer {
    /// No escape sequences; safe for logs and files.
    #[default]
    Plain,
    /// ANSI-colored for terminals.
    Colored,
}

impl Renderer {
    fn paint(self, out: &mut String, text: &str, color: &str) {
        match self {
            Renderer::Plain => out.push_str(text),
            Renderer::Colored => {
                let _ = write!(out, "{color}{text}{}", colors::RESET);
            }
        }
    }
}

/// The renderer pair offered for a callsite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Renderers {
    /// Used for the colored stack view.
    pub default: Renderer,
    /// Used for the plain stack view.
    pub no_color: Renderer,
}

/// Choose renderers for `callsite`.
///
/// Raw command listings are never colored.
pub fn select_renderers(callsite: &Callsite) -> Renderers {
    match callsite {
        Callsite::Source(_) => Renderers {
            default: Renderer::Colored,
            no_color: Renderer::Plain,
        },
        Callsite::Raw(_) => Renderers {
            default: Renderer::Plain,
            no_color: Renderer::Plain,
        },
    }
}

/// Options for a single [`render_callsite`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub renderer: Renderer,
    pub stack_filter: StackFilter,
}

/// Render `callsite` as a source excerpt.
///
/// Returns `None` when there is nothing to show: the source text is
/// unavailable, the line is out of range, or the command list is empty.
pub fn render_callsite(callsite: &Callsite, options: RenderOptions) -> Option<String> {
    match callsite {
        Callsite::Source(site) => render_source(site, options),
        Callsite::Raw(site) => render_raw(site, options.renderer),
    }
}

fn render_source(site: &SourceCallsite, options: RenderOptions) -> Option<String> {
    let source = site.source.as_deref()?;
    let lines: Vec<&str> = source.lines().collect();

    let line_idx = (site.line as usize).checked_sub(1)?;
    if line_idx >= lines.len() {
        return None;
    }

    let first = line_idx.saturating_sub(CONTEXT_LINES);
    let last = (line_idx + CONTEXT_LINES).min(lines.len() - 1);
    let width = digits(last + 1);

    let mut out = String::new();
    for (idx, text) in lines.iter().enumerate().take(last + 1).skip(first) {
        if idx > first {
            out.push('\n');
        }
        write_code_line(&mut out, options.renderer, idx + 1, width, text, idx == line_idx);
    }

    let frames = options.stack_filter.apply(&site.frames);
    if !frames.is_empty() {
        out.push('\n');
        for frame in frames {
            out.push_str("\n   at ");
            options.renderer.paint(&mut out, &frame.to_string(), colors::FRAME);
        }
    }

    Some(out)
}

fn render_raw(site: &RawCallsite, renderer: Renderer) -> Option<String> {
    if site.failed_index >= site.commands.len() {
        return None;
    }

    let width = digits(site.commands.len());
    let mut out = String::new();
    for (idx, command) in site.commands.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        write_code_line(&mut out, renderer, idx + 1, width, command, idx == site.failed_index);
    }

    Some(out)
}

/// Write one `" > 13 | text"` row of a code frame.
fn write_code_line(
    out: &mut String,
    renderer: Renderer,
    number: usize,
    width: usize,
    text: &str,
    is_failing: bool,
) {
    if is_failing {
        out.push(' ');
        renderer.paint(out, ">", colors::MARKER);
        out.push(' ');
    } else {
        out.push_str("   ");
    }

    renderer.paint(out, &format!("{number:>width$} |"), colors::GUTTER);

    if !text.is_empty() {
        out.push(' ');
        if is_failing {
            renderer.paint(out, text, colors::BOLD);
        } else {
            out.push_str(text);
        }
    }
}

/// Number of decimal digits in `n`.
fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}
