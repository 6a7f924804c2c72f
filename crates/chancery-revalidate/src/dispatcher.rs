//! Plan execution against the page cache.

use std::sync::Arc;

use chancery_cache::PageCache;

use crate::document_type::DocumentType;
use crate::plan::{InvalidationTarget, invalidation_plan};

/// Error from dispatching a change notification.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Every target in the plan failed to purge.
    ///
    /// Partial failure is not an error: the surviving purges already took
    /// effect and the notification can safely be retried for the rest.
    #[error("all {attempted} invalidation targets failed")]
    AllTargetsFailed {
        /// Number of targets attempted.
        attempted: usize,
    },
}

/// Result of a successful (possibly partial) dispatch.
#[derive(Debug)]
pub struct DispatchOutcome {
    /// Parsed document type the plan was computed for.
    pub document_type: DocumentType,
    /// Targets the plan contained, in execution order.
    pub targets: Vec<InvalidationTarget>,
    /// How many targets failed to purge (always `< targets.len()`).
    pub failed: usize,
}

/// Executes invalidation plans for Content Store change notifications.
///
/// Each dispatch is independent and stateless apart from the cache it
/// mutates. Purges are idempotent and commutative, so concurrent dispatches
/// need no ordering and repeating a notification is safe.
pub struct Dispatcher {
    cache: Arc<dyn PageCache>,
}

impl Dispatcher {
    /// Create a dispatcher purging against `cache`.
    #[must_use]
    pub fn new(cache: Arc<dyn PageCache>) -> Self {
        Self { cache }
    }

    /// Dispatch one change notification.
    ///
    /// Computes the invalidation plan for `document_type` and executes every
    /// target. A failed purge never aborts the remaining targets; failures
    /// are logged and counted.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::AllTargetsFailed`] only when no target could
    /// be purged at all.
    pub fn dispatch(
        &self,
        document_type: &str,
        slug: Option<&str>,
    ) -> Result<DispatchOutcome, DispatchError> {
        let doc_type = DocumentType::parse(document_type);
        if doc_type == DocumentType::Unknown {
            tracing::info!(document_type, "unknown document type, purging site root");
        }

        let targets = invalidation_plan(doc_type, slug);
        let mut failed = 0;

        for target in &targets {
            let result = match target {
                InvalidationTarget::Route(route) => self.cache.purge_route(route),
                InvalidationTarget::Tag(tag) => self.cache.purge_tag(tag),
                InvalidationTarget::All => self.cache.purge_all(),
            };
            match result {
                Ok(()) => tracing::debug!(%target, "purged"),
                Err(e) => {
                    tracing::error!(%target, "purge failed: {e}");
                    failed += 1;
                }
            }
        }

        if failed == targets.len() {
            return Err(DispatchError::AllTargetsFailed { attempted: failed });
        }

        Ok(DispatchOutcome {
            document_type: doc_type,
            targets,
            failed,
        })
    }
}
