//! asgnudge-core — tag-filtered capacity adjustment for auto-scaling groups.
//!
//! One pass per invocation: list every group, keep those carrying the
//! configured tag, and for each with headroom below its maximum size and at
//! least one dynamic scaling policy attached, raise the desired capacity by
//! one (cooldown honoring disabled). Every run re-reads the world; no state
//! is held between invocations.
//!
//! All resilience lives in the SDK transport layer (adaptive retries);
//! anything that survives those retries aborts the run. The one local
//! recovery is a group that vanishes between listing and describe, which is
//! skipped with a warning.

pub mod adjuster;
pub mod aws;
pub mod config;
pub mod error;
pub mod fleet;

pub use adjuster::{CapacityAdjuster, RunSummary};
pub use aws::AwsFleetClient;
pub use config::Config;
pub use error::{FleetError, FleetResult};
pub use fleet::{FleetApi, GroupCapacity, GroupRecord, GroupTag};
