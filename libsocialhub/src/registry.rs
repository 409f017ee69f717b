//! Per-platform connection state
//!
//! Tracks a boolean "connected" flag for each platform. Toggling always
//! succeeds; the selection invariant (only connected platforms may stay
//! selected) is enforced by the session at the toggle point.

use std::collections::BTreeMap;

use crate::types::Platform;

/// Connection state for the fixed platform set.
///
/// Lives for the process lifetime; mutated only by explicit toggles.
#[derive(Debug, Clone)]
pub struct ConnectionRegistry {
    connected: BTreeMap<Platform, bool>,
}

impl ConnectionRegistry {
    /// All platforms start disconnected
    pub fn new() -> Self {
        Self {
            connected: Platform::ALL.iter().map(|p| (*p, false)).collect(),
        }
    }

    /// Start with the given platforms already connected
    pub fn with_connected(platforms: &[Platform]) -> Self {
        let mut registry = Self::new();
        for platform in platforms {
            registry.connected.insert(*platform, true);
        }
        registry
    }

    /// Flip the connection state; returns the new state
    pub fn toggle(&mut self, platform: Platform) -> bool {
        let state = self.connected.entry(platform).or_insert(false);
        *state = !*state;
        *state
    }

    pub fn is_connected(&self, platform: Platform) -> bool {
        self.connected.get(&platform).copied().unwrap_or(false)
    }

    /// Connected platforms in registry order
    pub fn connected_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .iter()
            .copied()
            .filter(|p| self.is_connected(*p))
            .collect()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
