//! The fleet-manager abstraction.
//!
//! `FleetApi` covers the four remote operations this job consumes:
//! list-groups-with-pagination, describe-group-by-name,
//! list-scaling-policies-by-group, and set-desired-capacity. The production
//! implementation is [`crate::aws::AwsFleetClient`]; tests inject an
//! in-memory fake.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FleetResult;

/// A tag as reported by the fleet manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTag {
    pub key: String,
    pub value: String,
}

/// A group as returned by the listing call: its name and tag set.
#[derive(Debug, Clone)]
pub struct GroupRecord {
    pub name: String,
    pub tags: Vec<GroupTag>,
}

impl GroupRecord {
    /// Whether the tag set contains a tag with exactly this key and value.
    pub fn has_tag(&self, key: &str, value: &str) -> bool {
        self.tags.iter().any(|t| t.key == key && t.value == value)
    }
}

/// Desired and maximum capacity of a single group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCapacity {
    pub desired: i32,
    pub max: i32,
}

impl GroupCapacity {
    pub fn has_headroom(&self) -> bool {
        self.desired < self.max
    }
}

/// The four remote operation contracts consumed by the adjuster. Nothing
/// else about the managed service is depended on.
#[async_trait]
pub trait FleetApi: Send + Sync {
    /// List every auto-scaling group, paginating until exhaustion.
    async fn list_groups(&self) -> FleetResult<Vec<GroupRecord>>;

    /// Capacity of the named group, or `None` when the manager reports no
    /// matching record (deleted or renamed since listing).
    async fn describe_group(&self, name: &str) -> FleetResult<Option<GroupCapacity>>;

    /// Names of the scaling policies attached to the named group.
    async fn list_scaling_policies(&self, name: &str) -> FleetResult<Vec<String>>;

    /// Set desired capacity to an absolute value, with cooldown honoring
    /// disabled so the change applies immediately.
    async fn set_desired_capacity(&self, name: &str, desired: i32) -> FleetResult<()>;
}

#[async_trait]
impl<T: FleetApi + ?Sized> FleetApi for Arc<T> {
    async fn list_groups(&self) -> FleetResult<Vec<GroupRecord>> {
        (**self).list_groups().await
    }

    async fn describe_group(&self, name: &str) -> FleetResult<Option<GroupCapacity>> {
        (**self).describe_group(name).await
    }

    async fn list_scaling_policies(&self, name: &str) -> FleetResult<Vec<String>> {
        (**self).list_scaling_policies(name).await
    }

    async fn set_desired_capacity(&self, name: &str, desired: i32) -> FleetResult<()> {
        (**self).set_desired_capacity(name, desired).await
    }
}
