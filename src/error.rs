//! Errors reported by the fallible `LinearMap` constructors and inserts

use std::collections::TryReserveError;

use thiserror::Error;

/// Failure of a fallible `LinearMap` operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LpMapError {
    /// Slot storage for the requested number of slots could not be reserved
    #[error("failed to allocate slot storage for {capacity} slots")]
    AllocationFailed {
        /// Number of slots that was requested
        capacity: usize,
        /// Allocator error returned by the reservation
        #[source]
        source: TryReserveError,
    },
}
