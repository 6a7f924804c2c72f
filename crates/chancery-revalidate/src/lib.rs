//! Revalidation dispatching for Chancery.
//!
//! When an editor publishes in the Content Store, its webhook posts a change
//! notification naming the document type (and slug, for slugged types). This
//! crate turns that notification into the minimal set of cache invalidations
//! and executes them:
//!
//! 1. [`DocumentType::parse`] collapses the raw `_type` tag (including its
//!    historical aliases) into a fixed enumeration.
//! 2. [`invalidation_plan`] maps the type to an ordered list of
//!    [`InvalidationTarget`]s: concrete routes, symbolic tags, or the whole
//!    cache for layout-affecting types. Unknown types conservatively purge
//!    the site root, preferring over-invalidation to serving stale pages.
//! 3. [`Dispatcher::dispatch`] executes the plan against a
//!    [`chancery_cache::PageCache`]. One failed purge never stops the rest;
//!    the dispatch only errors when *every* target failed.
//!
//! Purges are idempotent, so re-delivered webhooks and concurrent
//! notifications are harmless.

mod dispatcher;
mod document_type;
mod plan;

pub use dispatcher::{DispatchError, DispatchOutcome, Dispatcher};
pub use document_type::DocumentType;
pub use plan::{InvalidationTarget, invalidation_plan};
