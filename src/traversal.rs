use crate::candidate::{CandidateStore, DiagVec, Node};
use crate::{Diagnostic, Error, Limits};

/// Result of the forward traversal: the candidate store built up during the
/// search plus the node index to start backtracking from.
pub(crate) struct Traversal {
    pub store: CandidateStore,
    pub tail: u32,
    pub diagnostic: Option<Diagnostic>,
}

/// Myers's O(ND) edit-graph search, banded per Ukkonen and chained per Hunt.
///
/// `eq(x, y)` reports whether `a[x] == b[y]`; it is treated as a black-box
/// oracle (see the crate's equality-oracle design note) so this function
/// stays agnostic to the item type entirely.
pub(crate) fn run(
    n: u32,
    m: u32,
    mut eq: impl FnMut(u32, u32) -> bool,
    limits: &Limits,
) -> Result<Traversal, Error> {
    let mut v = DiagVec::try_new(n, m)?;
    let mut w = DiagVec::try_new(n, m)?;
    let mut store = CandidateStore::try_new(limits.candidate_store_capacity(n, m))?;

    let n = i64::from(n);
    let m = i64::from(m);
    let mut j: u32 = 0;

    for d in 0..=(n + m) {
        let lo = -(d - 2 * (d - m).max(0));
        let hi = d - 2 * (d - n).max(0);
        let mut k = lo;
        while k <= hi {
            let i = if k == -d || (k != d && v.get(k - 1) < v.get(k + 1)) {
                k + 1
            } else {
                k - 1
            };
            let mut x = if i == k + 1 {
                i64::from(v.get(i))
            } else {
                i64::from(v.get(i)) + 1
            };
            let mut y = x - k;

            // inherit the source diagonal's tail; becomes the back-link for
            // any snake recorded on this diagonal.
            w.set(k, w.get(i));

            let mut z: i64 = 0;
            while x < n && y < m && eq(x as u32, y as u32) {
                if z == 0 {
                    if !store.has_room_for(j + 1) {
                        log::warn!(
                            "candidate store exhausted after {j} candidates at edit distance {d}; \
                             returning a best-effort prefix result"
                        );
                        return Ok(Traversal {
                            store,
                            tail: w.get(k),
                            diagnostic: Some(Diagnostic::CapacityExceeded { candidates_used: j }),
                        });
                    }
                    j += 1;
                }
                x += 1;
                y += 1;
                z += 1;
                store.set(
                    j,
                    Node {
                        x: x as u32,
                        y: y as u32,
                        z: z as u32,
                        back: j - w.get(i),
                    },
                );
                w.set(k, j);
            }

            if x >= n && y >= m {
                return Ok(Traversal {
                    store,
                    tail: w.get(k),
                    diagnostic: None,
                });
            }
            v.set(k, x as u32);
            k += 2;
        }
    }

    unreachable!("Myers's algorithm always terminates by d = n + m")
}
