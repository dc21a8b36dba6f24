#![deny(missing_docs)]
//! `lcs-chain` computes the Longest Common Subsequence (LCS) and Shortest
//! Edit Script (SES) between two ordered sequences of comparable items.
//!
//! The engine is Myers's `O(ND)` edit-graph search, refined with Ukkonen's
//! diagonal k-band (to bound the diagonals explored) and Hunt's chained
//! k-candidates (to compress the recorded snakes from `O(D^2)` to
//! `O(|LCS|)`). It is a single-threaded, synchronous, allocation-bounded
//! pass: one call to [`lcs`]/[`ses`] runs to completion, error, or a
//! documented capacity ceiling.
//!
//! ```
//! use lcs_chain::lcs;
//!
//! let a = ['a', 'b', 'c'];
//! let b = ['a', 'x', 'c'];
//! let outcome = lcs(&a, &b).unwrap();
//! assert_eq!(outcome.result.len(), 2); // "a" and "c" each match in isolation
//! ```
//!
//! ## Modes
//!
//! [`lcs`] returns the maximal matched index-ranges shared by both
//! sequences. [`ses`] returns the minimal insert/delete script that
//! transforms `a` into `b`. Both share the same traversal and backtrack;
//! they differ only in how the backtrack emits records.
//!
//! Heterogeneous or custom-equality items can use [`lcs_by`]/[`ses_by`],
//! which take an explicit equality closure instead of requiring
//! `PartialEq`.
//!
//! ## Capacity
//!
//! The candidate store is preallocated using a heuristic
//! (`l*l + (l == 1) + 1`, where `l = min(|a|, |b|)`) that is documented as
//! imprecise for pathological inputs (long alternating match runs). When it
//! is exhausted mid-traversal, the engine logs a warning, backtracks from
//! the best prefix reached so far, and reports
//! [`Diagnostic::CapacityExceeded`] in the returned [`Outcome`] rather than
//! failing the call. [`Limits`] lets callers raise or lower that ceiling
//! up front.

mod backtrack;
mod candidate;
mod error;
mod limits;
mod traversal;


pub use error::{Error, Side};
pub use limits::Limits;

/// One maximal run of matched items, shared by both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// 0-based index into `a` at the head of the match.
    pub a_start: u32,
    /// 0-based index into `b` at the head of the match.
    pub b_start: u32,
    /// Count of consecutive matched items.
    pub length: u32,
}

/// One edit in a shortest edit script.
///
/// An adjacent `Delete` immediately followed by an `Insert` (or vice versa,
/// per the engine's tie-break) at the same gap represents a substitution;
/// callers that want a fused "replace" view can detect this by comparing
/// consecutive records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// `b[b_pos..b_pos + range]` is inserted before `a[a_pos]`.
    Insert {
        /// Position in `a` the insertion precedes.
        a_pos: u32,
        /// Position in `b` of the first inserted item.
        b_pos: u32,
        /// Count of inserted items.
        range: u32,
    },
    /// `a[a_pos..a_pos + range]` is deleted.
    Delete {
        /// Position in `a` of the first deleted item.
        a_pos: u32,
        /// Corresponding position in the resulting sequence.
        b_pos: u32,
        /// Count of deleted items.
        range: u32,
    },
}

impl Edit {
    /// The `+1`/`-1` flag from the engine's external interface: `+1` for an
    /// insertion, `-1` for a deletion.
    pub fn flag(&self) -> i32 {
        match self {
            Edit::Insert { .. } => 1,
            Edit::Delete { .. } => -1,
        }
    }
}

/// A non-fatal condition surfaced alongside a successful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The candidate store's capacity was exhausted before the traversal
    /// completed. The returned result is a valid edit script/LCS for the
    /// matched prefix only, not necessarily the global optimum.
    CapacityExceeded {
        /// Number of candidates recorded before the ceiling was hit.
        candidates_used: u32,
    },
}

/// The result of an `lcs`/`ses` call, plus an optional non-fatal
/// [`Diagnostic`].
///
/// Callers distinguish a complete result from a best-effort prefix by
/// inspecting [`Outcome::diagnostic`], not by the shape of
/// [`Outcome::result`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    /// The computed LCS or SES.
    pub result: T,
    /// Set when the candidate store's capacity was exceeded during the
    /// traversal.
    pub diagnostic: Option<Diagnostic>,
}

impl<T> Outcome<T> {
    /// Whether the traversal ran to completion without hitting the
    /// candidate store's capacity ceiling.
    pub fn is_complete(&self) -> bool {
        self.diagnostic.is_none()
    }
}

fn validate(a_len: usize, b_len: usize) -> Result<(u32, u32), Error> {
    if a_len == 0 {
        return Err(Error::EmptyInput { side: Side::A });
    }
    if b_len == 0 {
        return Err(Error::EmptyInput { side: Side::B });
    }
    if a_len > u32::MAX as usize {
        return Err(Error::TooLong {
            side: Side::A,
            len: a_len,
        });
    }
    if b_len > u32::MAX as usize {
        return Err(Error::TooLong {
            side: Side::B,
            len: b_len,
        });
    }
    Ok((a_len as u32, b_len as u32))
}

/// Computes the LCS of `a` and `b` using the default [`Limits`].
pub fn lcs<T: PartialEq>(a: &[T], b: &[T]) -> Result<Outcome<Vec<Match>>, Error> {
    lcs_with_limits(a, b, Limits::default())
}

/// Computes the LCS of `a` and `b` using a caller-supplied equality oracle,
/// with the default [`Limits`].
pub fn lcs_by<A, B>(
    a: &[A],
    b: &[B],
    eq: impl FnMut(&A, &B) -> bool,
) -> Result<Outcome<Vec<Match>>, Error> {
    lcs_by_with_limits(a, b, eq, Limits::default())
}

/// Computes the LCS of `a` and `b`, overriding the candidate store's
/// capacity ceiling via `limits`.
pub fn lcs_with_limits<T: PartialEq>(
    a: &[T],
    b: &[T],
    limits: Limits,
) -> Result<Outcome<Vec<Match>>, Error> {
    lcs_by_with_limits(a, b, |x, y| x == y, limits)
}

/// Computes the LCS of `a` and `b` using a caller-supplied equality oracle
/// and an explicit [`Limits`].
pub fn lcs_by_with_limits<A, B>(
    a: &[A],
    b: &[B],
    mut eq: impl FnMut(&A, &B) -> bool,
    limits: Limits,
) -> Result<Outcome<Vec<Match>>, Error> {
    let (n, m) = validate(a.len(), b.len())?;
    let traversal = traversal::run(n, m, |x, y| eq(&a[x as usize], &b[y as usize]), &limits)?;
    Ok(Outcome {
        result: backtrack::lcs(&traversal.store, traversal.tail),
        diagnostic: traversal.diagnostic,
    })
}

/// Computes the shortest edit script transforming `a` into `b` using the
/// default [`Limits`].
pub fn ses<T: PartialEq>(a: &[T], b: &[T]) -> Result<Outcome<Vec<Edit>>, Error> {
    ses_with_limits(a, b, Limits::default())
}

/// Computes the shortest edit script transforming `a` into `b` using a
/// caller-supplied equality oracle, with the default [`Limits`].
pub fn ses_by<A, B>(
    a: &[A],
    b: &[B],
    eq: impl FnMut(&A, &B) -> bool,
) -> Result<Outcome<Vec<Edit>>, Error> {
    ses_by_with_limits(a, b, eq, Limits::default())
}

/// Computes the shortest edit script transforming `a` into `b`, overriding
/// the candidate store's capacity ceiling via `limits`.
pub fn ses_with_limits<T: PartialEq>(
    a: &[T],
    b: &[T],
    limits: Limits,
) -> Result<Outcome<Vec<Edit>>, Error> {
    ses_by_with_limits(a, b, |x, y| x == y, limits)
}

/// Computes the shortest edit script transforming `a` into `b` using a
/// caller-supplied equality oracle and an explicit [`Limits`].
pub fn ses_by_with_limits<A, B>(
    a: &[A],
    b: &[B],
    mut eq: impl FnMut(&A, &B) -> bool,
    limits: Limits,
) -> Result<Outcome<Vec<Edit>>, Error> {
    let (n, m) = validate(a.len(), b.len())?;
    let traversal = traversal::run(n, m, |x, y| eq(&a[x as usize], &b[y as usize]), &limits)?;
    Ok(Outcome {
        result: backtrack::ses(&traversal.store, traversal.tail, n, m),
        diagnostic: traversal.diagnostic,
    })
}
