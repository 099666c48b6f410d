/// Errors returned by the checked vector accessors.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A component index outside of `0..len` was used.
    #[error("component index {index} is out of range for a vector with {len} components")]
    IndexOutOfRange { index: usize, len: usize },
}
