use calctrace_compute::{monitor::EvaluationResult, numerical::ctxt::Bindings};
use std::{cmp::Ordering, collections::{BinaryHeap, HashMap}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An evaluation waiting in the [`DeferredQueue`].
#[derive(Debug, Clone)]
pub struct DeferredRequest {
    /// The identifier assigned by the queue.
    pub id: u64,
    pub expression: String,
    pub bindings: Bindings,

    /// Requests with a higher priority are evaluated first.
    pub priority: i32,
}

/// A request, ordered by priority and then by insertion order.
#[derive(Debug, Clone)]
struct Queued(DeferredRequest);

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // max-heap: highest priority first, then lowest id first
        self.0.priority.cmp(&other.0.priority)
            .then_with(|| other.0.id.cmp(&self.0.id))
    }
}

/// A snapshot of the state of a [`DeferredQueue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueueStatus {
    /// The number of requests waiting.
    pub queue_length: usize,

    /// The number of results recorded.
    pub partial_results_count: usize,

    /// The priority of the request that would be evaluated next.
    pub next_priority: Option<i32>,
}

/// Evaluations requested now and computed later, highest priority first.
///
/// Each request is assigned a sequential identifier when it is pushed, under which its result is
/// recorded once evaluated.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    heap: BinaryHeap<Queued>,
    next_id: u64,
    partial_results: HashMap<u64, EvaluationResult>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a request to the queue, returning its identifier.
    pub fn push(&mut self, expression: impl Into<String>, bindings: Bindings, priority: i32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.heap.push(Queued(DeferredRequest {
            id,
            expression: expression.into(),
            bindings,
            priority,
        }));
        id
    }

    /// Removes the request with the highest priority. Among requests of equal priority, the one
    /// pushed first is removed first.
    pub fn pop(&mut self) -> Option<DeferredRequest> {
        self.heap.pop().map(|queued| queued.0)
    }

    /// Records the result of the request with the given identifier.
    pub fn record(&mut self, id: u64, result: EvaluationResult) {
        self.partial_results.insert(id, result);
    }

    /// Returns the recorded result of the request with the given identifier.
    pub fn partial_result(&self, id: u64) -> Option<&EvaluationResult> {
        self.partial_results.get(&id)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn status(&self) -> QueueStatus {
        QueueStatus {
            queue_length: self.heap.len(),
            partial_results_count: self.partial_results.len(),
            next_priority: self.heap.peek().map(|queued| queued.0.priority),
        }
    }

    /// Removes every waiting request and every recorded result. Identifiers keep increasing.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.partial_results.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn priority_then_insertion_order() {
        let mut queue = DeferredQueue::new();
        let low = queue.push("1", Bindings::new(), 0);
        let first = queue.push("2", Bindings::new(), 5);
        let second = queue.push("3", Bindings::new(), 5);

        let order = std::iter::from_fn(|| queue.pop())
            .map(|request| request.id)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![first, second, low]);
    }

    #[test]
    fn sequential_ids() {
        let mut queue = DeferredQueue::new();
        assert_eq!(queue.push("a", Bindings::new(), 1), 0);
        assert_eq!(queue.push("b", Bindings::new(), 1), 1);
        queue.clear();
        assert_eq!(queue.push("c", Bindings::new(), 1), 2);
    }

    #[test]
    fn status() {
        let mut queue = DeferredQueue::new();
        assert_eq!(queue.status(), QueueStatus::default());

        queue.push("a", Bindings::new(), 3);
        let id = queue.push("b", Bindings::new(), 7);
        assert_eq!(queue.status().next_priority, Some(7));

        let request = queue.pop().unwrap();
        queue.record(request.id, EvaluationResult::error(request.expression, "test"));
        assert_eq!(queue.status(), QueueStatus {
            queue_length: 1,
            partial_results_count: 1,
            next_priority: Some(3),
        });
        assert!(queue.partial_result(id).is_some());

        queue.clear();
        assert_eq!(queue.status(), QueueStatus::default());
    }
}
