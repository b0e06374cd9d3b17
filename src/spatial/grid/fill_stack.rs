//! Work-list for flood fill. Allocated once, reused across fills.

pub const MIN_FILL_STACK_CAPACITY: usize = 64;
pub const MAX_FILL_STACK_CAPACITY: usize = 65_536;

/// Pending flood-fill visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillTask {
    /// Caller-supplied start cell: must be a valid index
    Seed { x: i32, y: i32 },
    /// Cell reached from a filled neighbour: skipped when invalid
    Neighbor { x: i32, y: i32 },
}

impl FillTask {
    #[inline(always)]
    pub fn coords(self) -> (i32, i32) {
        match self {
            FillTask::Seed { x, y } | FillTask::Neighbor { x, y } => (x, y),
        }
    }
}

/// LIFO of pending visits - memory stays allocated between fills
#[derive(Debug, Default)]
pub struct FillStack {
    data: Vec<FillTask>,
}

impl FillStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Stack sized for a grid of `len` cells
    pub fn for_len(len: usize) -> Self {
        Self::new(len.clamp(MIN_FILL_STACK_CAPACITY, MAX_FILL_STACK_CAPACITY))
    }

    #[inline(always)]
    pub fn push(&mut self, task: FillTask) {
        self.data.push(task);
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<FillTask> {
        self.data.pop()
    }

    /// Reset for the next fill - memory stays allocated
    #[inline(always)]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}
