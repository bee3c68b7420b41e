use std::{
    cmp::Ordering,
    fmt::{self, Display},
};

use crate::{
    iter::{InOrderIter, IntoIter, LevelOrderIter, PostOrderIter, PreOrderIter},
    node::{self, Node},
    render,
};

/// An ordered set of unique keys arranged as a binary search tree.
///
/// A [`Tree`] is built height-balanced from any input sequence (unordered,
/// duplicates discarded) and stays a valid search tree under [`insert()`] and
/// [`remove()`] - but those mutations never restructure it. Repeated
/// insertion can therefore skew the tree; [`is_balanced()`] reports when it
/// has, and [`rebalance()`] rebuilds the same key set into a balanced shape.
///
/// Every lookup misses, duplicate insert and absent-key removal is a silent
/// no-op observable only through the returned `Option` / `bool` - no
/// operation fails.
///
/// ```
/// use balsa::Tree;
///
/// let mut t = Tree::from_iter([5, 3, 8, 1, 4, 7, 9]);
///
/// assert!(t.is_balanced());
/// assert_eq!(t.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
///
/// // Mutations do not rebalance.
/// t.insert(100);
/// t.insert(101);
/// t.insert(102);
/// assert!(!t.is_balanced());
///
/// // Rebalancing is explicit, and preserves the key set.
/// t.rebalance();
/// assert!(t.is_balanced());
/// ```
///
/// [`insert()`]: Tree::insert
/// [`remove()`]: Tree::remove
/// [`is_balanced()`]: Tree::is_balanced
/// [`rebalance()`]: Tree::rebalance
#[derive(Debug, Clone)]
pub struct Tree<K>(Option<Box<Node<K>>>);

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Add `key` to the tree, returning false (and changing nothing) if it is
    /// already present.
    ///
    /// The key is placed as a new leaf at the end of its comparison path; the
    /// tree is not rebalanced.
    pub fn insert(&mut self, key: K) -> bool {
        match self.0 {
            Some(ref mut v) => v.insert(key),
            None => {
                self.0 = Some(Box::new(Node::new(key)));
                true
            }
        }
    }

    /// Remove `key` from the tree, returning false if it was not present.
    ///
    /// Removing an interior key with two children moves its in-order
    /// successor into its place. The tree is not rebalanced.
    pub fn remove(&mut self, key: &K) -> bool {
        node::remove_recurse(&mut self.0, key)
    }

    /// Return a reference to the stored key equal to `key`, if any.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find(key).map(Node::key)
    }

    /// Returns true if `key` is present in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// The height of the subtree rooted at `key`: the number of edges on the
    /// longest downward path to a leaf.
    ///
    /// A leaf has height 0, and an absent child counts as height 0 too - the
    /// same as a present leaf child. Returns [`None`] if `key` is not in the
    /// tree.
    pub fn height(&self, key: &K) -> Option<usize> {
        self.find(key).map(node::subtree_height)
    }

    /// The number of edges between the root and the node holding `key`, or
    /// [`None`] if `key` is not in the tree.
    pub fn depth(&self, key: &K) -> Option<usize> {
        let mut node = self.0.as_deref();
        let mut edges = 0;

        while let Some(n) = node {
            node = match key.cmp(n.key()) {
                Ordering::Equal => return Some(edges),
                Ordering::Less => n.left(),
                Ordering::Greater => n.right(),
            };
            edges += 1;
        }

        None
    }

    fn find(&self, key: &K) -> Option<&Node<K>> {
        self.0.as_deref().and_then(|v| v.find(key))
    }
}

impl<K> Tree<K> {
    /// Returns true if every node's left and right subtree heights differ by
    /// at most 1, under the same height arithmetic as [`Tree::height()`]
    /// (absent child counts 0).
    ///
    /// An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(self.0.as_deref())
    }

    /// Discard the tree's shape and rebuild the same key set into a
    /// height-balanced arrangement.
    pub fn rebalance(&mut self) {
        // An in-order drain of a valid tree yields the keys already sorted
        // and unique, so the balanced rebuild consumes them directly.
        let keys = IntoIter::new(self.0.take()).collect::<Vec<_>>();

        let len = keys.len();
        self.0 = node::build_span(&mut keys.into_iter(), len);
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.0
            .iter()
            .flat_map(|v| InOrderIter::new(v))
            .map(|v| v.key())
    }

    /// Iterate over the keys in pre-order: each node before its left subtree,
    /// and the left subtree before the right.
    pub fn iter_pre_order(&self) -> impl Iterator<Item = &K> {
        self.0
            .iter()
            .flat_map(|v| PreOrderIter::new(v))
            .map(|v| v.key())
    }

    /// Iterate over the keys in post-order: each node after both its
    /// subtrees, left subtree first.
    pub fn iter_post_order(&self) -> impl Iterator<Item = &K> {
        self.0
            .iter()
            .flat_map(|v| PostOrderIter::new(v))
            .map(|v| v.key())
    }

    /// Iterate over the keys breadth-first: each depth in full, left to
    /// right, before the depth below it.
    ///
    /// An empty tree yields nothing.
    pub fn iter_level_order(&self) -> impl Iterator<Item = &K> {
        self.0
            .iter()
            .flat_map(|v| LevelOrderIter::new(v))
            .map(|v| v.key())
    }

    /// Render the tree's shape as indented text, one key per line: the right
    /// subtree above its parent, the left subtree below, joined by connector
    /// glyphs.
    ///
    /// An empty tree renders as an empty string. This output is a debugging
    /// aid, not a stable format.
    pub fn render(&self) -> String
    where
        K: Display,
    {
        self.0.as_deref().map(render::render).unwrap_or_default()
    }
}

impl<K> Display for Tree<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build a height-balanced tree from any sequence of keys.
///
/// The input may be unordered and contain duplicates; each distinct key is
/// stored once. The resulting tree always satisfies [`Tree::is_balanced()`].
impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut values = iter.into_iter().collect::<Vec<_>>();
        values.sort_unstable();
        values.dedup();

        // Recursively root each span of the sorted keys at its midpoint,
        // halving the span per level.
        let len = values.len();
        Self(node::build_span(&mut values.into_iter(), len))
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    /// Consume the tree, yielding every key in ascending order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.0)
    }
}
