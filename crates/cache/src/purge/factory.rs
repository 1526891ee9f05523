//! Factory for creating purge policies

use crate::config::PurgePolicyConfig;
use crate::errors::Result;

use super::policies::{DeadCountPolicy, DeadRatioPolicy};
use super::traits::PurgePolicy;

/// Build the policy described by `config`, rejecting invalid parameters
pub fn create_purge_policy(config: &PurgePolicyConfig) -> Result<Box<dyn PurgePolicy>> {
    config.validate()?;

    let policy: Box<dyn PurgePolicy> = match *config {
        PurgePolicyConfig::DeadCount { threshold } => Box::new(DeadCountPolicy::new(threshold)),
        PurgePolicyConfig::DeadRatio { ratio, min_dead } => {
            Box::new(DeadRatioPolicy::new(ratio, min_dead))
        }
    };
    Ok(policy)
}
