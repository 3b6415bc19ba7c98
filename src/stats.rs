//! Probe-length statistics for a `LinearMap`

use crate::{
    key::ProbeKey,
    linear_map::{LinearMap, Slot, home_index},
};

/// Snapshot of how densely a table is packed and how long its probe chains are
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProbeStats {
    /// Number of live entries
    pub len: usize,
    /// Number of tombstoned slots
    pub tombstones: usize,
    /// Number of slots
    pub capacity: usize,
    /// Ratio of live entries to slots
    pub load_factor: f64,
    /// Average number of slots a successful lookup visits
    pub mean_probe_length: f64,
    /// Largest number of slots a successful lookup visits
    pub max_probe_length: usize,
}

/// Slots visited to reach `index` when starting from `home`, wrapping at `capacity`
#[allow(clippy::arithmetic_side_effects)]
fn probe_length(home: usize, index: usize, capacity: usize) -> usize {
    let distance = if index >= home { index - home } else { capacity - home + index };
    distance + 1
}

impl<K: ProbeKey, V> LinearMap<K, V> {
    /// Computes probe statistics by scanning every slot
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn probe_stats(&self) -> ProbeStats {
        let capacity = self.slots.len();
        let mut stats = ProbeStats { capacity, ..ProbeStats::default() };
        let mut total_probes: usize = 0;

        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Occupied(key, _) => {
                    let home = home_index(key.probe_hash(), capacity);
                    let length = probe_length(home, index, capacity);
                    total_probes = total_probes.saturating_add(length);
                    stats.max_probe_length = stats.max_probe_length.max(length);
                    stats.len += 1;
                }
                Slot::Dead => stats.tombstones += 1,
                Slot::Empty => {}
            }
        }

        if capacity > 0 {
            stats.load_factor = stats.len as f64 / capacity as f64;
        }
        if stats.len > 0 {
            stats.mean_probe_length = total_probes as f64 / stats.len as f64;
        }
        stats
    }
}
