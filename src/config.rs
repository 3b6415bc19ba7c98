//! Construction parameters for `LinearMap`

use log::debug;

/// Fill ratio applied when the requested one is outside `(0, 1]`
pub const DEFAULT_FILL_RATIO: f64 = 0.5;

/// Sizing parameters used to build a `LinearMap`.
///
/// `expected_size` is a hint, not a cap: the map grows past it on demand.
/// `fill_ratio` bounds the share of slots that may be occupied before an
/// insertion doubles the table. Out-of-range ratios (including NaN) are not
/// rejected; they fall back to [`DEFAULT_FILL_RATIO`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Number of entries the caller expects to store
    pub expected_size: usize,
    /// Maximum ratio of `(len + 1)` to capacity before growing
    pub fill_ratio: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { expected_size: 0, fill_ratio: DEFAULT_FILL_RATIO }
    }
}

impl MapConfig {
    /// Sets the expected number of entries
    #[must_use]
    pub fn with_expected_size(mut self, expected_size: usize) -> Self {
        self.expected_size = expected_size;
        self
    }

    /// Sets the fill ratio
    #[must_use]
    pub fn with_fill_ratio(mut self, fill_ratio: f64) -> Self {
        self.fill_ratio = fill_ratio;
        self
    }

    /// Returns the configured fill ratio, or the default when it lies outside `(0, 1]`
    #[must_use]
    pub fn normalized_fill_ratio(&self) -> f64 {
        if self.fill_ratio > 0.0 && self.fill_ratio <= 1.0 {
            self.fill_ratio
        } else {
            debug!(
                "fill ratio {} outside (0, 1], using {DEFAULT_FILL_RATIO}",
                self.fill_ratio
            );
            DEFAULT_FILL_RATIO
        }
    }

    /// Slot count for a fresh table: `floor(expected_size / fill_ratio) + 1`.
    ///
    /// Always at least 1 and always greater than `expected_size`.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn initial_capacity(&self) -> usize {
        let scaled = self.expected_size as f64 / self.normalized_fill_ratio();
        // float-to-int `as` saturates, so huge hints clamp to usize::MAX
        (scaled.floor() as usize).saturating_add(1)
    }
}
