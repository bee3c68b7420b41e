use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// Child node pointers.
    ///
    /// Each child is exclusively owned by this node; there are no parent
    /// pointers and no sharing.
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,

    key: K,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Insert `key` into the subtree rooted at `self`, returning false if it
    /// is already present (the tree is left untouched).
    ///
    /// The new key becomes a leaf at the first absent slot on the comparison
    /// path. No rebalancing is performed - restoring balance is the caller's
    /// explicit decision via [`Tree::rebalance()`].
    ///
    /// [`Tree::rebalance()`]: crate::Tree::rebalance
    pub(crate) fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(v) => v.insert(key),
            None => {
                *child = Some(Box::new(Self::new(key)));
                true
            }
        }
    }

    /// Locate the node holding `key` in the subtree rooted at `self` by
    /// comparison descent.
    pub(crate) fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        let node = match key.cmp(&self.key) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Some(self),
            Ordering::Greater => self.right(),
        }?;

        node.find(key)
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the key it holds.
    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

/// Build a height-balanced subtree spanning the next `len` keys yielded by
/// `keys`, consumed in ascending order.
///
/// The subtree root is the key at index `len / 2` of the span; the left half
/// (exclusive of the midpoint) becomes the left subtree and the remainder the
/// right subtree. A two-key span therefore roots at the larger key, with the
/// smaller as its left child.
///
/// `keys` must yield at least `len` further values.
pub(crate) fn build_span<K, I>(keys: &mut I, len: usize) -> Option<Box<Node<K>>>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    let mid = len / 2;

    // An in-order construction: the left half is consumed first, then the
    // midpoint key, then the right half.
    let left = build_span(keys, mid);
    let key = keys.next()?;
    let right = build_span(keys, len - mid - 1);

    Some(Box::new(Node { key, left, right }))
}

/// Remove `key` from the subtree rooted at the `link` pointer, returning true
/// if it was found.
///
/// A leaf is unlinked, a node with one child is replaced by that child, and a
/// node with two children has the in-order successor's key moved into it
/// before the successor's original node is removed from the right subtree.
/// The two-child case replaces the key in place rather than relinking nodes,
/// so node positions are not stable across removals - only key values are.
pub(crate) fn remove_recurse<K>(link: &mut Option<Box<Node<K>>>, key: &K) -> bool
where
    K: Ord,
{
    let node = match link {
        Some(v) => v,
        None => return false,
    };

    match key.cmp(&node.key) {
        Ordering::Less => remove_recurse(&mut node.left, key),
        Ordering::Greater => remove_recurse(&mut node.right, key),
        Ordering::Equal => {
            match (node.left.is_some(), node.right.is_some()) {
                (false, false) => *link = None,
                (true, false) => *link = node.left.take(),
                (false, true) => *link = node.right.take(),
                (true, true) => {
                    // Replace this node's key with its in-order successor (the
                    // minimum of the right subtree), unlinking the successor's
                    // original node. The successor has no left child, so the
                    // extraction bottoms out in the leaf / one-child cases.
                    if let Some(successor) = take_min(&mut node.right) {
                        node.key = successor;
                    }
                }
            }

            true
        }
    }
}

/// Extract the minimum key of the subtree rooted at the `link` pointer,
/// splicing the extracted node's right child (if any) into its place.
fn take_min<K>(link: &mut Option<Box<Node<K>>>) -> Option<K> {
    match link {
        None => None,
        Some(node) if node.left.is_some() => take_min(&mut node.left),
        Some(_) => {
            // The left edge ends here: this node holds the minimum.
            let node = link.take()?;
            *link = node.right;
            Some(node.key)
        }
    }
}

/// Compute the height of the subtree rooted at `n`: the number of edges on
/// the longest downward path to a leaf.
///
/// A leaf has height 0, and an absent child contributes 0 to its parent - the
/// same as a present leaf child. A node whose only child is a leaf therefore
/// has height 1, while a missing subtree is never counted as -1.
pub(crate) fn subtree_height<K>(n: &Node<K>) -> usize {
    if n.left.is_none() && n.right.is_none() {
        return 0;
    }

    link_height(n.left()).max(link_height(n.right())) + 1
}

/// The height contribution of an optional child: 0 when absent.
fn link_height<K>(link: Option<&Node<K>>) -> usize {
    link.map(subtree_height).unwrap_or_default()
}

/// Verify that every node in the subtree rooted at the `link` pointer has
/// left/right subtree heights differing by at most 1, using the same height
/// arithmetic as [`subtree_height`].
///
/// An empty subtree is balanced.
pub(crate) fn is_balanced<K>(link: Option<&Node<K>>) -> bool {
    let n = match link {
        Some(v) => v,
        None => return true,
    };

    link_height(n.left()).abs_diff(link_height(n.right())) <= 1
        && is_balanced(n.left())
        && is_balanced(n.right())
}
