use thiserror::Error;

/// Result type alias for fallible operations in this library.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while validating the input of a packing run.
///
/// Once the input passes validation, packing itself is total: items that do not fit
/// are reported as unplaced and never raised as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// A container or item has a non-positive (or unrepresentable) width or height.
    #[error("invalid dimension: {width}x{height}, both sides must be positive integers (mm)")]
    InvalidDimension { width: i64, height: i64 },

    /// Two containers in the same instance share a name.
    #[error("duplicate container name: {0}")]
    DuplicateContainer(String),

    /// The packing configuration is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
