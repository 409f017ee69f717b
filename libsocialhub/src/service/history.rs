//! Post history
//!
//! Ordered, append-only record of scheduled posts for the current
//! session. Insertion order is newest-first; a fan-out batch is prepended
//! as a unit, preserving selection order within the batch.

use crate::types::ScheduledPost;

#[derive(Debug, Default)]
pub struct History {
    posts: Vec<ScheduledPost>,
}

impl History {
    pub fn new() -> Self {
        Self { posts: Vec::new() }
    }

    /// Prepend a batch atomically, keeping the batch's internal order
    pub fn prepend_batch(&mut self, batch: Vec<ScheduledPost>) {
        self.posts.splice(0..0, batch);
    }

    /// Newest-first view of all scheduled posts
    pub fn posts(&self) -> &[ScheduledPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
