use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// Unbounded FIFO of output lines shared between a reader thread and
/// the supervisor.
#[derive(Debug, Clone, Default)]
pub struct LineQueue {
    inner: Arc<Mutex<VecDeque<String>>>,
}

impl LineQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: String) {
        self.inner.lock().push_back(line);
    }

    /// Next queued line, without waiting.
    pub fn try_pop(&self) -> Option<String> {
        self.inner.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_push_order() {
        let queue = LineQueue::new();
        let writer = queue.clone();
        writer.push("one".into());
        writer.push("two".into());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.try_pop().as_deref(), Some("one"));
        assert_eq!(queue.try_pop().as_deref(), Some("two"));
        assert!(queue.try_pop().is_none());
        assert!(queue.is_empty());
    }
}
