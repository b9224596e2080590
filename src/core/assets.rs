//! Load-state tracking for assets that gate optional features.

use anyhow::anyhow;
use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

/// Lifecycle of a one-shot asset load. Settles exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetStatus {
    #[default]
    Pending,
    Ready,
    Failed,
}

impl AssetStatus {
    pub fn is_ready(self) -> bool {
        self == AssetStatus::Ready
    }

    /// Fold a poll result into the status.
    ///
    /// Returns `true` only on the call that moves the status out of `Pending`.
    /// Failures are logged here and never retried.
    pub fn settle(&mut self, poll: anyhow::Result<bool>, what: &str) -> bool {
        if *self != AssetStatus::Pending {
            return false;
        }
        match poll {
            Ok(false) => false,
            Ok(true) => {
                info!("{what} loaded");
                *self = AssetStatus::Ready;
                true
            }
            Err(err) => {
                error!("{err:#}; {what} disabled for this session");
                *self = AssetStatus::Failed;
                true
            }
        }
    }
}

/// `Ok(true)` once loaded, `Ok(false)` while in flight, `Err` when the load failed.
pub fn poll_load(
    asset_server: &AssetServer,
    id: impl Into<UntypedAssetId>,
    what: &str,
) -> anyhow::Result<bool> {
    match asset_server
        .get_load_state(id)
        .unwrap_or(LoadState::NotLoaded)
    {
        LoadState::Loaded => Ok(true),
        LoadState::Failed(err) => Err(anyhow!("failed to load {what}: {err}")),
        _ => Ok(false),
    }
}
