/// Tunable ceilings for a single `lcs`/`ses` call.
///
/// The candidate store is preallocated before the traversal starts, sized
/// by a heuristic that works well for ordinary inputs but can be exceeded by
/// pathological ones (long alternating runs of matches, see
/// [`Diagnostic::CapacityExceeded`](crate::Diagnostic::CapacityExceeded)).
/// `Limits` lets a caller override that heuristic instead of only finding
/// out about it after the fact.
#[derive(Debug, Clone, Copy, Default)]
pub struct Limits {
    /// Overrides the candidate store's capacity. `None` uses the default
    /// heuristic: `l * l + (l == 1) + 1`, where `l = min(|a|, |b|)`.
    pub max_candidates: Option<u32>,
}

impl Limits {
    /// Resolves the capacity to preallocate for the candidate store.
    pub(crate) fn candidate_store_capacity(&self, n: u32, m: u32) -> u32 {
        if let Some(cap) = self.max_candidates {
            // index 0 is reserved, so at least 2 entries are needed to ever
            // record a single candidate.
            return cap.max(2);
        }
        let l = n.min(m) as u64;
        let bump = u64::from(l == 1);
        l.saturating_mul(l)
            .saturating_add(bump)
            .saturating_add(1)
            .min(u32::MAX as u64) as u32
    }
}
