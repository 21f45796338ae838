//! Callsite-attributed API errors.
//!
//! An [`ApiError`] reports misuse of the test API. Besides its message it
//! carries the [`Callsite`] of the offending call and renders two stack
//! views from it on demand:
//!
//! - [`ApiError::stack`]: plain excerpt
//! - [`ApiError::colored_stack`]: ANSI excerpt where the callsite allows it
//!
//! Views are recomputed on every call from the *current* callsite. The
//! callsite may be replaced after construction (for example when a test
//! compiler maps a raw test back to its commands), and later reads reflect
//! the replacement.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use ketch_callsite::{
    render_callsite, resolve_ref, select_renderers, Callsite, CallsiteRef, CallsiteResolver,
    RenderOptions, Renderer, Renderers, StackFilter,
};

use crate::{
    render_template, ColorMode, ErrorCode, ErrorsConfig, TemplateArg, TemplateInstruction,
    ERROR_SEPARATOR,
};

/// Placeholder rewritten by [`ApiError::client_function`].
pub const INSTANTIATION_CALLSITE_NAME: &str = "instantiationCallsiteName";

/// Method every [`ApiError::skip_js_errors_argument`] is attributed to.
pub const SKIP_JS_ERRORS_METHOD: &str = "skipJsErrors";

/// Collaborators needed to construct an [`ApiError`].
#[derive(Clone, Copy)]
pub struct ApiContext<'a> {
    pub resolver: &'a dyn CallsiteResolver,
    pub config: &'a ErrorsConfig,
}

impl<'a> ApiContext<'a> {
    pub fn new(resolver: &'a dyn CallsiteResolver, config: &'a ErrorsConfig) -> Self {
        ApiContext { resolver, config }
    }
}

/// Which constructor produced an [`ApiError`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ApiKind {
    Api,
    ClientFunction,
    RequestRuntime,
    SkipJsErrorsArgument,
}

/// An error attributed to a test API call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ApiError {
    kind: ApiKind,
    code: ErrorCode,
    data: Vec<TemplateArg>,
    raw_message: String,
    message: String,
    callsite: Option<Callsite>,
    stack_trace_limit: usize,
    color: ColorMode,
}

impl ApiError {
    /// Render `code`'s template (rewritten by `instruction`, if any) with
    /// `args`, wrap it as the reason tests cannot be prepared, and resolve
    /// `callsite`.
    pub fn new(
        ctx: ApiContext<'_>,
        callsite: impl Into<CallsiteRef>,
        code: ErrorCode,
        args: Vec<TemplateArg>,
        instruction: Option<TemplateInstruction>,
    ) -> Self {
        Self::with_kind(ApiKind::Api, ctx, callsite.into(), code, args, instruction)
    }

    /// A client function or selector was misused. Every
    /// `{#instantiationCallsiteName}` in the template becomes
    /// `instantiation_callsite_name` (e.g. `Selector`).
    pub fn client_function(
        ctx: ApiContext<'_>,
        callsite: impl Into<CallsiteRef>,
        instantiation_callsite_name: &str,
        code: ErrorCode,
        args: Vec<TemplateArg>,
    ) -> Self {
        let instruction = TemplateInstruction::replace_placeholder(
            INSTANTIATION_CALLSITE_NAME,
            instantiation_callsite_name,
        );
        Self::with_kind(
            ApiKind::ClientFunction,
            ctx,
            callsite.into(),
            code,
            args,
            Some(instruction),
        )
    }

    /// A request hook method failed at runtime.
    pub fn request_runtime(
        ctx: ApiContext<'_>,
        callsite: impl Into<CallsiteRef>,
        code: ErrorCode,
        args: Vec<TemplateArg>,
    ) -> Self {
        Self::with_kind(
            ApiKind::RequestRuntime,
            ctx,
            callsite.into(),
            code,
            args,
            None,
        )
    }

    /// An option passed to `skipJsErrors` is invalid.
    pub fn skip_js_errors_argument(
        ctx: ApiContext<'_>,
        code: ErrorCode,
        args: Vec<TemplateArg>,
    ) -> Self {
        Self::with_kind(
            ApiKind::SkipJsErrorsArgument,
            ctx,
            CallsiteRef::from(SKIP_JS_ERRORS_METHOD),
            code,
            args,
            None,
        )
    }

    fn with_kind(
        kind: ApiKind,
        ctx: ApiContext<'_>,
        callsite: CallsiteRef,
        code: ErrorCode,
        args: Vec<TemplateArg>,
        instruction: Option<TemplateInstruction>,
    ) -> Self {
        let template = match instruction {
            Some(instruction) => {
                tracing::trace!(%code, "applying template instruction");
                Cow::Owned(instruction.apply(code.template()))
            }
            None => Cow::Borrowed(code.template()),
        };

        let raw_message = render_template(&template, &args);
        let message = render_template(
            ErrorCode::CANNOT_PREPARE_TESTS.template(),
            &[TemplateArg::from(raw_message.as_str())],
        );

        let callsite = resolve_ref(ctx.resolver, callsite);
        tracing::trace!(%code, ?kind, resolved = callsite.is_some(), "constructed api error");

        ApiError {
            kind,
            code,
            data: args,
            raw_message,
            message,
            callsite,
            stack_trace_limit: ctx.config.stack_trace_limit,
            color: ctx.config.color,
        }
    }

    pub fn kind(&self) -> ApiKind {
        self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The arguments the message was rendered with.
    pub fn data(&self) -> &[TemplateArg] {
        &self.data
    }

    /// The rendered template before wrapping; used when the error is
    /// substituted into another report.
    pub fn raw_message(&self) -> &str {
        &self.raw_message
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn callsite(&self) -> Option<&Callsite> {
        self.callsite.as_ref()
    }

    /// Replace the callsite. Subsequent stack views render the new one.
    pub fn set_callsite(&mut self, callsite: Option<Callsite>) {
        self.callsite = callsite;
    }

    /// The message followed by a plain callsite excerpt, when one exists.
    pub fn stack(&self) -> String {
        self.render_stack(|renderers| renderers.no_color)
    }

    /// The message followed by the callsite excerpt drawn with the
    /// callsite's default renderer, when one exists.
    pub fn colored_stack(&self) -> String {
        self.render_stack(|renderers| renderers.default)
    }

    /// The stack view matching the configured color mode.
    pub fn stack_for_terminal(&self, is_tty: bool) -> String {
        if self.color.should_use_colors(is_tty) {
            self.colored_stack()
        } else {
            self.stack()
        }
    }

    fn render_stack(&self, pick: impl FnOnce(Renderers) -> Renderer) -> String {
        let Some(callsite) = &self.callsite else {
            return self.message.clone();
        };

        let options = RenderOptions {
            renderer: pick(select_renderers(callsite)),
            stack_filter: StackFilter::new(self.stack_trace_limit),
        };

        match render_callsite(callsite, options) {
            Some(excerpt) if !excerpt.is_empty() => {
                format!("{}{ERROR_SEPARATOR}{excerpt}", self.message)
            }
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ApiError {}
