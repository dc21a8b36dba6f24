use crate::candidate::CandidateStore;
use crate::{Edit, Match};

/// Walks the back-link chain from `tail` and emits maximal match runs in
/// forward order.
///
/// The walk always visits at least one node, even when `tail` is the
/// reserved sentinel (the empty-LCS case): it keeps following back-links
/// for as long as the *node just processed* had a non-zero run length,
/// mirroring the do-while shape of the reference backtrack.
///
/// The chain is produced end-to-start; each run is inserted at the front of
/// the output so the final order is forward without a separate reversal
/// pass (append-then-reverse would be an equally valid strategy).
pub(crate) fn lcs(store: &CandidateStore, tail: u32) -> Vec<Match> {
    let mut out = Vec::new();
    let mut j = tail;
    loop {
        let node = store.get(j);
        let next_j = j - node.back;
        if node.z > 0 {
            out.insert(
                0,
                Match {
                    a_start: node.x - node.z,
                    b_start: node.y - node.z,
                    length: node.z,
                },
            );
        }
        j = next_j;
        if node.z == 0 {
            break;
        }
    }
    out
}

/// Walks the back-link chain from `tail` and emits insert/delete records in
/// forward order. `n`/`m` are the full input lengths (the tail coordinates
/// still to be accounted for). See [`lcs`] for the do-while shape rationale.
pub(crate) fn ses(store: &CandidateStore, tail: u32, mut n: u32, mut m: u32) -> Vec<Edit> {
    let mut out = Vec::new();
    let mut j = tail;
    loop {
        let node = store.get(j);
        let next_j = j - node.back;
        let (x, y, z) = (node.x, node.y, node.z);

        if y < m {
            out.insert(
                0,
                Edit::Insert {
                    a_pos: x,
                    b_pos: y,
                    range: m - y,
                },
            );
        }
        if x < n {
            out.insert(
                0,
                Edit::Delete {
                    a_pos: x,
                    b_pos: y,
                    range: n - x,
                },
            );
        }

        n = x - z;
        m = y - z;
        j = next_j;
        if z == 0 {
            break;
        }
    }
    out
}
