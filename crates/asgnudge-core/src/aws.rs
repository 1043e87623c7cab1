//! AWS-backed implementation of the fleet API.
//!
//! Wraps `aws-sdk-autoscaling` with the transport retry policy set to
//! adaptive mode with 10 max attempts, so throttling and transient network
//! failures never reach the orchestration logic.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use aws_sdk_autoscaling::error::DisplayErrorContext;
use aws_sdk_autoscaling::Client;
use tracing::debug;

use crate::error::{FleetError, FleetResult};
use crate::fleet::{FleetApi, GroupCapacity, GroupRecord, GroupTag};

/// Hard cap on the paginated group listing.
const MAX_LISTED_GROUPS: usize = 100_000;

/// Production [`FleetApi`] backed by the AWS Auto Scaling API.
pub struct AwsFleetClient {
    client: Client,
}

impl AwsFleetClient {
    /// Load the ambient AWS configuration (region and credential chain)
    /// with the adaptive retry policy and build a client.
    pub async fn from_env() -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::adaptive().with_max_attempts(10))
            .load()
            .await;
        Self {
            client: Client::new(&config),
        }
    }

    /// Wrap an existing SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FleetApi for AwsFleetClient {
    async fn list_groups(&self) -> FleetResult<Vec<GroupRecord>> {
        let mut stream = self
            .client
            .describe_auto_scaling_groups()
            .into_paginator()
            .items()
            .send();

        let mut groups = Vec::new();
        while let Some(item) = stream.next().await {
            let asg =
                item.map_err(|e| FleetError::ListGroups(DisplayErrorContext(e).to_string()))?;
            let tags = asg
                .tags()
                .iter()
                .filter_map(|t| match (t.key(), t.value()) {
                    (Some(k), Some(v)) => Some(GroupTag {
                        key: k.to_string(),
                        value: v.to_string(),
                    }),
                    _ => None,
                })
                .collect();
            groups.push(GroupRecord {
                name: asg.auto_scaling_group_name().unwrap_or_default().to_string(),
                tags,
            });
            if groups.len() >= MAX_LISTED_GROUPS {
                debug!(cap = MAX_LISTED_GROUPS, "listing cap reached; stopping pagination");
                break;
            }
        }
        debug!(total = groups.len(), "listed auto-scaling groups");
        Ok(groups)
    }

    async fn describe_group(&self, name: &str) -> FleetResult<Option<GroupCapacity>> {
        let out = self
            .client
            .describe_auto_scaling_groups()
            .auto_scaling_group_names(name)
            .send()
            .await
            .map_err(|e| FleetError::DescribeGroup(DisplayErrorContext(e).to_string()))?;

        let Some(group) = out.auto_scaling_groups().first() else {
            return Ok(None);
        };
        Ok(Some(GroupCapacity {
            desired: group.desired_capacity().unwrap_or_default(),
            max: group.max_size().unwrap_or_default(),
        }))
    }

    async fn list_scaling_policies(&self, name: &str) -> FleetResult<Vec<String>> {
        let out = self
            .client
            .describe_policies()
            .auto_scaling_group_name(name)
            .send()
            .await
            .map_err(|e| FleetError::ListPolicies(DisplayErrorContext(e).to_string()))?;

        Ok(out
            .scaling_policies()
            .iter()
            .filter_map(|p| p.policy_name().map(str::to_string))
            .collect())
    }

    async fn set_desired_capacity(&self, name: &str, desired: i32) -> FleetResult<()> {
        self.client
            .set_desired_capacity()
            .auto_scaling_group_name(name)
            .desired_capacity(desired)
            .honor_cooldown(false)
            .send()
            .await
            .map_err(|e| FleetError::SetCapacity(DisplayErrorContext(e).to_string()))?;
        Ok(())
    }
}
