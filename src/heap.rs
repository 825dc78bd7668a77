use serde::Serialize;

use crate::cost::Cost;
use crate::graph::NodeId;

/// Heap instrumentation for one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeapStats {
    pub pushes: u64,
    pub pops: u64,
    pub max_size: u64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapItem<C> {
    pub node: NodeId,
    pub dist: C,
}

// Binary min-heap with explicit sift ops. Holds several entries per node
// (lazy deletion); the engine discards stale ones on pop. Ordering is exact
// `<` on the cost, ties fall wherever the sift leaves them.
pub(crate) struct MinHeap<C> {
    data: Vec<HeapItem<C>>,
    stats: HeapStats,
}

impl<C: Cost> MinHeap<C> {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self { data: Vec::with_capacity(cap), stats: HeapStats::default() }
    }

    #[inline]
    pub fn push(&mut self, item: HeapItem<C>) {
        self.data.push(item);
        self.stats.pushes += 1;
        self.stats.max_size = self.stats.max_size.max(self.data.len() as u64);
        self.sift_up(self.data.len() - 1);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<HeapItem<C>> {
        let len = self.data.len();
        if len == 0 {
            return None;
        }
        self.data.swap(0, len - 1);
        let out = self.data.pop();
        self.stats.pops += 1;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        out
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn stats(&self) -> HeapStats {
        self.stats
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx].dist < self.data[parent].dist {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let n = self.data.len();
        loop {
            let left = idx * 2 + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < n && self.data[right].dist < self.data[left].dist {
                best = right;
            }
            if self.data[best].dist < self.data[idx].dist {
                self.data.swap(idx, best);
                idx = best;
            } else {
                break;
            }
        }
    }
}
