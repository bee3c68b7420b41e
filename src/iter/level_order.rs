use std::collections::VecDeque;

use crate::node::Node;

/// A breadth-first traversal of a subtree, visiting each depth left to right
/// before descending to the next.
#[derive(Debug)]
pub(crate) struct LevelOrderIter<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrderIter<'a, K> {
    pub(crate) fn new(root: &'a Node<K>) -> Self {
        Self {
            queue: VecDeque::from([root]),
        }
    }
}

impl<'a, K> Iterator for LevelOrderIter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;

        // Enqueue the next depth, left child first. Absent children are never
        // enqueued as placeholders.
        self.queue.extend(v.left());
        self.queue.extend(v.right());

        Some(v)
    }
}
