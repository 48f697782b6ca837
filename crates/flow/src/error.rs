//! Error types for the cadence-flow crate.

/// Error type for all fallible operations in the cadence-flow crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlowError {
    /// Returned when a single-year view is requested for a multi-year series.
    #[error("series spans several years ({first}..={last}), expected a single year")]
    MultipleYears {
        /// Earliest year present in the series.
        first: i32,
        /// Latest year present in the series.
        last: i32,
    },
}
