use crate::node::Node;

/// A post-order (left subtree, then right subtree, then node) traversal of a
/// subtree.
///
/// Each stack entry is either unexpanded (children not yet scheduled) or
/// expanded and ready to yield once both subtrees have been visited.
#[derive(Debug)]
pub(crate) struct PostOrderIter<'a, K> {
    stack: Vec<(Visit, &'a Node<K>)>,
}

#[derive(Debug, Clone, Copy)]
enum Visit {
    Expand,
    Yield,
}

impl<'a, K> PostOrderIter<'a, K> {
    pub(crate) fn new(root: &'a Node<K>) -> Self {
        Self {
            stack: vec![(Visit::Expand, root)],
        }
    }
}

impl<'a, K> Iterator for PostOrderIter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (visit, v) = self.stack.pop()?;

            match visit {
                Visit::Expand => {
                    // Re-push this node beneath its children so it is yielded
                    // after both subtrees, left-most first.
                    self.stack.push((Visit::Yield, v));
                    self.stack.extend(v.right().map(|n| (Visit::Expand, n)));
                    self.stack.extend(v.left().map(|n| (Visit::Expand, n)));
                }
                Visit::Yield => return Some(v),
            }
        }
    }
}
