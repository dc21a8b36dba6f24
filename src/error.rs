use std::fmt;

/// Identifies which of the two input sequences a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first sequence (`a`/`before`).
    A,
    /// The second sequence (`b`/`after`).
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::A => "first",
            Side::B => "second",
        })
    }
}

/// Terminal errors raised before (or during) a `lcs`/`ses` call.
///
/// A capacity overflow of the candidate store is deliberately *not* a
/// variant here: per the engine's contract that case is non-fatal and still
/// produces a valid best-effort prefix result, surfaced through
/// [`Outcome::diagnostic`](crate::Outcome::diagnostic) instead of an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One of the two input sequences was empty. Both sequences must be
    /// non-empty.
    #[error("the {side} sequence is empty")]
    EmptyInput {
        /// Which sequence was empty.
        side: Side,
    },

    /// One of the two input sequences exceeds the `u32::MAX` items the
    /// engine's index arithmetic can address.
    #[error("the {side} sequence has {len} items, exceeding the {} this engine supports", u32::MAX)]
    TooLong {
        /// Which sequence was too long.
        side: Side,
        /// The offending length.
        len: usize,
    },

    /// Allocating one of the traversal's scratch regions (the `v`/`w`
    /// diagonal vectors or the candidate store) failed.
    #[error("failed to allocate scratch space for the diff engine")]
    AllocationFailed,
}
