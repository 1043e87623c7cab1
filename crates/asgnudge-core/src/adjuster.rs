//! The capacity adjuster — one evaluation pass over tagged groups.
//!
//! `run()` lists the groups matching the configured tag and, for each in
//! listing order, describes it and decides: a vanished group is skipped
//! with a warning, a group at its maximum is skipped, a group without a
//! scaling policy is skipped, and anything left gets its desired capacity
//! set to `desired + 1`. Groups are independent; capacity is written as an
//! absolute value, so concurrent invocations can race — running one
//! instance at a time is an external operational invariant.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::FleetResult;
use crate::fleet::{FleetApi, GroupCapacity};

/// Counters for a single pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Groups matching the tag filter.
    pub matched: usize,
    /// Groups whose desired capacity was raised.
    pub scaled: usize,
    /// Groups skipped because desired already equals maximum.
    pub at_max: usize,
    /// Groups skipped because no scaling policy is attached.
    pub no_policy: usize,
    /// Groups that vanished between listing and describe.
    pub missing: usize,
}

/// Evaluates tagged groups and conditionally bumps their desired capacity.
pub struct CapacityAdjuster<A> {
    api: A,
    config: Config,
}

impl<A: FleetApi> CapacityAdjuster<A> {
    pub fn new(api: A, config: Config) -> Self {
        Self { api, config }
    }

    /// Names of all groups whose tag set contains the (key, value) pair.
    /// Empty vec, never an error, when nothing matches.
    pub async fn list_matching_groups(&self, key: &str, value: &str) -> FleetResult<Vec<String>> {
        let groups = self.api.list_groups().await?;
        let names: Vec<String> = groups
            .into_iter()
            .filter(|g| g.has_tag(key, value))
            .map(|g| g.name)
            .collect();
        debug!(count = names.len(), "tag-matched groups");
        Ok(names)
    }

    /// Capacity of the named group, `None` when it no longer exists.
    pub async fn capacity(&self, name: &str) -> FleetResult<Option<GroupCapacity>> {
        self.api.describe_group(name).await
    }

    /// True iff at least one scaling policy is attached to the group.
    pub async fn has_scaling_policy(&self, name: &str) -> FleetResult<bool> {
        Ok(!self.api.list_scaling_policies(name).await?.is_empty())
    }

    /// Set desired capacity to `new_desired`. In dry-run mode the decision
    /// is logged and the remote API is not called.
    pub async fn increase_desired_capacity(&self, name: &str, new_desired: i32) -> FleetResult<()> {
        if self.config.dry_run {
            info!(group = %name, new_desired, "dry run: would set desired capacity");
            return Ok(());
        }
        self.api.set_desired_capacity(name, new_desired).await
    }

    /// One pass: list, describe, decide, conditionally mutate.
    pub async fn run(&self) -> FleetResult<RunSummary> {
        let (Some(key), Some(value)) = (
            self.config.tag_key.as_deref(),
            self.config.tag_value.as_deref(),
        ) else {
            info!("tag filter not configured (ASG_TAG_NAME / ASG_TAG_VALUE); nothing to do");
            return Ok(RunSummary::default());
        };

        info!(tag_key = %key, tag_value = %value, "evaluating tagged auto-scaling groups");
        let names = self.list_matching_groups(key, value).await?;
        info!(matched = names.len(), "groups matched the tag filter");

        let mut summary = RunSummary {
            matched: names.len(),
            ..RunSummary::default()
        };

        for name in &names {
            let Some(cap) = self.capacity(name).await? else {
                warn!(group = %name, "group not found at describe time; skipping");
                summary.missing += 1;
                continue;
            };
            info!(group = %name, desired = cap.desired, max = cap.max, "current capacity");

            if !cap.has_headroom() {
                info!(group = %name, "already at maximum capacity; skipping");
                summary.at_max += 1;
                continue;
            }
            if !self.has_scaling_policy(name).await? {
                info!(group = %name, "no scaling policy attached; skipping");
                summary.no_policy += 1;
                continue;
            }

            let new_desired = cap.desired + 1;
            self.increase_desired_capacity(name, new_desired).await?;
            info!(group = %name, new_desired, "desired capacity increased by one");
            summary.scaled += 1;
        }

        Ok(summary)
    }
}
