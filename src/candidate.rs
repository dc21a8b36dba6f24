use crate::Error;

/// One recorded snake endpoint: Hunt's "k-candidate".
///
/// `x`/`y` are one past the end of a contiguous match run in `a`/`b`, `z` is
/// the run's length and `back` is the node-array offset to the previous
/// snake on the same optimal path (`0` terminates a backtrack).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Node {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub back: u32,
}

/// The densely packed candidate store ("Chain" stage). Index `0` is
/// reserved and always the zeroed sentinel node, so a `back` of `0`
/// unambiguously terminates a backtrack.
pub(crate) struct CandidateStore {
    nodes: Vec<Node>,
}

impl CandidateStore {
    pub fn try_new(capacity: u32) -> Result<Self, Error> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(capacity as usize)
            .map_err(|_| Error::AllocationFailed)?;
        nodes.resize(capacity as usize, Node::default());
        Ok(Self { nodes })
    }

    /// Number of node slots, including the reserved sentinel at index `0`.
    pub fn capacity(&self) -> u32 {
        self.nodes.len() as u32
    }

    /// Whether index `j` is still inside the preallocated store.
    pub fn has_room_for(&self, j: u32) -> bool {
        (j as usize) < self.nodes.len()
    }

    pub fn set(&mut self, j: u32, node: Node) {
        self.nodes[j as usize] = node;
    }

    pub fn get(&self, j: u32) -> Node {
        self.nodes[j as usize]
    }
}

/// A diagonal-indexed vector shifted so that negative diagonals are
/// addressable: index `k` is stored at `k + origin`. Used for both Myers's
/// furthest-reach vector `v` and Hunt's candidate-tail vector `w`.
pub(crate) struct DiagVec {
    data: Vec<u32>,
    origin: i64,
}

impl DiagVec {
    pub fn try_new(n: u32, m: u32) -> Result<Self, Error> {
        let len = u64::from(n) + u64::from(m) + 3;
        let mut data = Vec::new();
        data.try_reserve_exact(len as usize)
            .map_err(|_| Error::AllocationFailed)?;
        data.resize(len as usize, 0);
        Ok(Self {
            data,
            origin: i64::from(m) + 1,
        })
    }

    pub fn get(&self, k: i64) -> u32 {
        self.data[(k + self.origin) as usize]
    }

    pub fn set(&mut self, k: i64, value: u32) {
        let idx = (k + self.origin) as usize;
        self.data[idx] = value;
    }
}
