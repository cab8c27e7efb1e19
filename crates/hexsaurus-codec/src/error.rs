/// Errors reported by the checked codec entry points.
///
/// The plain `encode`/`decode` functions never fail; only
/// [`try_encode`](crate::try_encode) surfaces these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The input contains a character outside `0-9a-fA-F`.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit { position: usize, found: char },
}

pub type Result<T> = std::result::Result<T, CodecError>;
