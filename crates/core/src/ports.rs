//! Port interfaces for the contribution pipeline
//!
//! These traits define the boundary between core logic and infrastructure
//! implementations.

use async_trait::async_trait;
use commitgrid_domain::{ActivityRecord, FetchError};

/// Trait for fetching raw activity records from an upstream source
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Fetch the most recent events for an account.
    ///
    /// Implementations issue a single request per invocation, enforce
    /// their configured timeout, and classify failures into
    /// [`FetchError`] kinds. They never touch the cache — write-through
    /// is the caller's decision.
    async fn recent_events(
        &self,
        login: &str,
        limit: usize,
    ) -> Result<Vec<ActivityRecord>, FetchError>;
}
