//! Lifecycle hook registry
//!
//! Hooks are plain closures keyed by event name. Triggering an event runs its
//! hooks one after another in registration order.

use futures::future::BoxFuture;
use std::collections::HashMap;
use std::fmt;

/// Fired once the deployment has completed
pub const AFTER_DEPLOY: &str = "after:deploy:deploy";

/// Future returned by a hook
pub type HookFuture = BoxFuture<'static, ()>;

/// A hook: a callable taking no arguments
pub type Hook = Box<dyn Fn() -> HookFuture + Send + Sync>;

/// Hooks keyed by lifecycle event
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Vec<Hook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook for an event
    pub fn register<F>(&mut self, event: impl Into<String>, hook: F)
    where
        F: Fn() -> HookFuture + Send + Sync + 'static,
    {
        let event = event.into();
        tracing::trace!(event = %event, "Registering hook");
        self.hooks.entry(event).or_default().push(Box::new(hook));
    }

    /// Number of hooks registered for an event
    pub fn hook_count(&self, event: &str) -> usize {
        self.hooks.get(event).map_or(0, Vec::len)
    }

    /// Events with at least one hook
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Run every hook registered for `event`, returning how many ran
    pub async fn trigger(&self, event: &str) -> usize {
        let Some(hooks) = self.hooks.get(event) else {
            tracing::debug!(event = %event, "No hooks registered");
            return 0;
        };

        tracing::debug!(event = %event, hooks = hooks.len(), "Running hooks");
        for hook in hooks {
            hook().await;
        }
        hooks.len()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .hooks
            .iter()
            .map(|(event, hooks)| (event.as_str(), hooks.len()))
            .collect();
        f.debug_struct("HookRegistry").field("hooks", &counts).finish()
    }
}
