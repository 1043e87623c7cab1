//! Error types for fleet-manager operations.

use thiserror::Error;

/// Result type alias for fleet-manager operations.
pub type FleetResult<T> = Result<T, FleetError>;

/// Errors surfaced past the SDK's transport-level retries. All of these are
/// fatal for the running pass; the external scheduler re-invokes later.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("failed to list auto-scaling groups: {0}")]
    ListGroups(String),

    #[error("failed to describe auto-scaling group: {0}")]
    DescribeGroup(String),

    #[error("failed to list scaling policies: {0}")]
    ListPolicies(String),

    #[error("failed to set desired capacity: {0}")]
    SetCapacity(String),
}
