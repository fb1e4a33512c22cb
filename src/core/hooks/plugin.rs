//! Binds the export workflow to the post-deploy event

use super::registry::{HookRegistry, AFTER_DEPLOY};
use crate::core::export::{ExportOutcome, ExportWorkflow};
use futures::FutureExt;
use std::sync::Arc;
use tokio::sync::watch;

/// Registers [`ExportWorkflow`] against [`AFTER_DEPLOY`]
///
/// The hook itself returns nothing; the outcome of the latest run is published
/// on a watch channel for callers that want to report it.
pub struct ExportSwaggerPlugin {
    workflow: Arc<ExportWorkflow>,
    outcome_tx: watch::Sender<Option<ExportOutcome>>,
}

impl ExportSwaggerPlugin {
    pub fn new(workflow: ExportWorkflow) -> Self {
        let (outcome_tx, _) = watch::channel(None);
        Self {
            workflow: Arc::new(workflow),
            outcome_tx,
        }
    }

    /// Receiver for the outcome of the most recent run
    pub fn subscribe(&self) -> watch::Receiver<Option<ExportOutcome>> {
        self.outcome_tx.subscribe()
    }

    /// Add this plugin's hooks to the registry
    pub fn register(&self, registry: &mut HookRegistry) {
        let workflow = self.workflow.clone();
        let outcome_tx = self.outcome_tx.clone();

        registry.register(AFTER_DEPLOY, move || {
            let workflow = workflow.clone();
            let outcome_tx = outcome_tx.clone();
            async move {
                let outcome = workflow.run().await;
                outcome_tx.send_replace(Some(outcome));
            }
            .boxed()
        });
    }
}
