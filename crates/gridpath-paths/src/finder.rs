use gridpath_core::{CostGrid, Point};

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry: a reference into the node array with its priority.
///
/// Ordered so that `BinaryHeap` pops the smallest `f` first and, among equal
/// `f`, the entry pushed earliest.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable A* search over a `width × height` area anchored at the origin.
///
/// `PathFinder` owns the per-cell node array and a neighbor scratch buffer so
/// repeated searches do not reallocate. Nodes are stamped with a search
/// generation and lazily invalidated, so every search starts from a clean
/// state and its result never depends on earlier calls.
pub struct PathFinder {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) nbuf: Vec<Point>,
}

impl PathFinder {
    /// Create a finder for the given area. Non-positive sizes give an empty
    /// area in which every search is unreachable.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); w * h],
            generation: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Create a finder sized to `grid`.
    pub fn for_grid(grid: &CostGrid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    /// Size of the searchable area as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width as i32, self.height as i32)
    }

    /// Start a new search generation, invalidating every node.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped around: stamps from 2^32 searches ago would look current.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
