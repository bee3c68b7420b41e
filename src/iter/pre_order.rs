use crate::node::Node;

/// A pre-order (node, then left subtree, then right subtree) traversal of a
/// subtree.
#[derive(Debug)]
pub(crate) struct PreOrderIter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrderIter<'a, K> {
    pub(crate) fn new(root: &'a Node<K>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, K> Iterator for PreOrderIter<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // The left child is visited before the right, so it is pushed last.
        self.stack.extend(v.right());
        self.stack.extend(v.left());

        Some(v)
    }
}
