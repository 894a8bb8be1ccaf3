use thiserror::Error;

/// Fatal parser errors.
///
/// Malformed lines never end up here; they surface as
/// [`ParsedEntry::Unmatched`](crate::ParsedEntry::Unmatched). The only fatal
/// condition is the underlying line source itself failing.
#[derive(Debug, Error)]
pub enum CedictError {
    #[error("I/O error reading dictionary source: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CedictError>;
