// Status codes shared by the fallible kernels.
//
// Search, byte, hash, and UTF-8 scanning kernels are infallible by contract
// and return values directly. Only the kernels that take scratch memory
// (similarity, sequence) and the strict rune decoder can fail.

/// Errors surfaced by the scratch-taking kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The scratch allocator could not satisfy a request. No partial output
    /// has been written.
    #[error("scratch allocation failed")]
    BadAlloc,

    /// The input is not well-formed UTF-8 (RFC 3629).
    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    /// An intersection requiring unique keys was given an input with repeats.
    #[error("input contains duplicate entries")]
    ContainsDuplicates,
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::BadAlloc.to_string(), "scratch allocation failed");
        assert_eq!(Error::InvalidUtf8.to_string(), "input is not valid UTF-8");
        assert_eq!(
            Error::ContainsDuplicates.to_string(),
            "input contains duplicate entries"
        );
    }
}
