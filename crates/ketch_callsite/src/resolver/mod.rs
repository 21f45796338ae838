//! Method-to-callsite resolution.

use rustc_hash::FxHashMap;

use crate::{Callsite, CallsiteRef};

/// Maps an API method name to the callsite of its most recent call.
pub trait CallsiteResolver {
    /// Look up the callsite for `method`, or `None` if no call was recorded.
    fn resolve(&self, method: &str) -> Option<Callsite>;
}

/// Resolve a [`CallsiteRef`] once: resolved callsites pass through
/// unchanged, method names go through `resolver`.
pub fn resolve_ref(resolver: &dyn CallsiteResolver, callsite: CallsiteRef) -> Option<Callsite> {
    match callsite {
        CallsiteRef::Resolved(callsite) => Some(callsite),
        CallsiteRef::ByMethod(method) => {
            let resolved = resolver.resolve(&method);
            if resolved.is_none() {
                tracing::debug!(%method, "no callsite recorded for method");
            }
            resolved
        }
    }
}

/// Resolver that never finds a callsite.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopResolver;

impl CallsiteResolver for NoopResolver {
    fn resolve(&self, _method: &str) -> Option<Callsite> {
        None
    }
}

/// Resolver backed by recorded calls, keyed by method name.
///
/// Recording a second call for the same method replaces the first, so
/// resolution always yields the latest call.
#[derive(Clone, Debug, Default)]
pub struct CallsiteRegistry {
    calls: FxHashMap<String, Callsite>,
}

impl CallsiteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `callsite` as the latest call of its method.
    pub fn record(&mut self, callsite: Callsite) {
        self.calls.insert(callsite.method().to_owned(), callsite);
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl CallsiteResolver for CallsiteRegistry {
    fn resolve(&self, method: &str) -> Option<Callsite> {
        self.calls.get(method).cloned()
    }
}
