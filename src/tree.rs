//! An ordered set based on an AVL tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::iter;
use super::node::{self, Dir, Left, Link, LinkExt, Node, Right};

/// An ordered set based on a height-balanced binary search tree.
///
/// Every mutation restores both the search-tree ordering and the AVL balance condition
/// (the heights of any node's two subtrees differ by at most one) before it returns, so the
/// tree's height stays logarithmic in its length.
///
/// The behavior of this set is undefined if an item's ordering relative to any other item changes
/// while the item is in the set. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct AvlTree<T, C = Natural<T>> where C: Compare<T> {
    pub(crate) root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T> AvlTree<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { AvlTree::with_cmp(compare::natural()) }
}

impl<T, C> AvlTree<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = avl::AvlTree::with_cmp(natural().rev());
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        AvlTree { root: None, len: 0, cmp: cmp }
    }

    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of items in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2);
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns the height of the tree: zero when empty, one for a single item.
    ///
    /// This reads the height cached at the root and does not walk the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.extend(vec![1, 2, 3, 4, 5, 6, 7]);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize { self.root.height() }

    /// Checks that every node's balance factor lies within `-1..=1`.
    ///
    /// Insertion and removal maintain this on their own; the check walks every node and is
    /// meant for verification.
    pub fn is_balanced(&self) -> bool {
        self.root.as_node_ref().map_or(true, Node::is_balanced)
    }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all items from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts an item into the tree, returning `true` if the tree did not already contain
    /// an equal item.
    ///
    /// Inserting an item that is already present leaves the tree untouched; the stored item
    /// is not replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert!(tree.insert(10));
    /// assert!(tree.insert(20));
    /// assert!(tree.insert(30));
    /// assert!(!tree.insert(20));
    ///
    /// // the right-heavy chain was rotated left at 10
    /// assert_eq!(tree.root().map(|node| *node.key()), Some(20));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        let inserted = node::insert(&mut self.root, &self.cmp, item);
        if inserted { self.len += 1; }
        debug!("insert: inserted={} len={} height={}", inserted, self.len, self.height());
        inserted
    }

    /// Removes the given item from the tree, returning `true` if the tree contained it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree: avl::AvlTree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&1));
    /// assert_eq!(tree.len(), 2);
    /// assert!(!tree.remove(&1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        self.take(item).is_some()
    }

    /// Removes the given item from the tree and returns it, or `None` if the tree did not
    /// contain it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree: avl::AvlTree<_> = vec![50, 30, 70].into_iter().collect();
    /// assert_eq!(tree.take(&50), Some(50));
    /// assert_eq!(tree.take(&50), None);
    /// ```
    pub fn take<Q: ?Sized>(&mut self, item: &Q) -> Option<T> where C: Compare<Q, T> {
        let removed = node::remove(&mut self.root, &self.cmp, item);
        if removed.is_some() { self.len -= 1; }
        debug!("remove: found={} len={} height={}", removed.is_some(), self.len, self.height());
        removed
    }

    /// Checks if the tree contains the given item.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.get(item).is_some()
    }

    /// Returns a reference to the tree's item that compares equal to the given one.
    pub fn get<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        node::get(&self.root, &self.cmp, item)
    }

    /// Returns a reference to the tree's minimum item, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.extend(vec![2, 1, 3]);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> { Left::extremum(&self.root) }

    /// Returns a reference to the tree's maximum item, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> { Right::extremum(&self.root) }

    /// Removes and returns the tree's minimum item, or `None` if the tree is empty.
    pub fn remove_min(&mut self) -> Option<T> {
        let removed = Left::remove_extremum(&mut self.root);
        if removed.is_some() { self.len -= 1; }
        debug!("remove_min: found={} len={} height={}", removed.is_some(), self.len, self.height());
        removed
    }

    /// Removes and returns the tree's maximum item, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree: avl::AvlTree<_> = (1..8).collect();
    /// assert_eq!(tree.remove_max(), Some(7));
    /// assert_eq!(tree.remove_max(), Some(6));
    /// assert_eq!(tree.len(), 5);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn remove_max(&mut self) -> Option<T> {
        let removed = Right::remove_extremum(&mut self.root);
        if removed.is_some() { self.len -= 1; }
        debug!("remove_max: found={} len={} height={}", removed.is_some(), self.len, self.height());
        removed
    }

    /// Returns a read-only view of the tree's root node, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: avl::AvlTree<_> = vec![30, 10, 20].into_iter().collect();
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.key(), 20);
    /// assert_eq!(root.left().map(|node| *node.key()), Some(10));
    /// assert_eq!(root.right().map(|node| *node.key()), Some(30));
    /// assert_eq!(root.height(), 2);
    /// assert_eq!(root.balance_factor(), 0);
    /// ```
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_node_ref().map(NodeRef)
    }

    /// Returns an iterator over the tree's items in order.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: avl::AvlTree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: node::Iter::new(self.root.as_node_ref(), self.len) }
    }

    /// Returns an iterator over views of the tree's nodes in order.
    ///
    /// Each view carries the node's key, the cached height of its subtree and its balance
    /// factor. The iterator is lazy and calling this again starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: avl::AvlTree<_> = vec![20, 10, 30, 40].into_iter().collect();
    ///
    /// let nodes: Vec<_> = tree.nodes()
    ///     .map(|node| (*node.key(), node.height(), node.balance_factor()))
    ///     .collect();
    ///
    /// assert_eq!(nodes, [(10, 1, 0), (20, 3, -1), (30, 2, -1), (40, 1, 0)]);
    /// ```
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes { iter: node::Iter::new(self.root.as_node_ref(), self.len) }
    }
}

impl<T, C> Debug for AvlTree<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Default for AvlTree<T, C> where C: Compare<T> + Default {
    fn default() -> Self { AvlTree::with_cmp(Default::default()) }
}

impl<T, C> Extend<T> for AvlTree<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C> iter::FromIterator<T> for AvlTree<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut tree = AvlTree::default();
        tree.extend(it);
        tree
    }
}

impl<T, C> IntoIterator for AvlTree<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(node::IntoIter::new(self.root, self.len)) }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> PartialEq for AvlTree<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}

impl<T, C> Eq for AvlTree<T, C> where T: Eq, C: Compare<T> {}

/// A read-only view of one node of an `AvlTree`.
///
/// Acquire one through [`AvlTree::root`](struct.AvlTree.html#method.root) or
/// [`AvlTree::nodes`](struct.AvlTree.html#method.nodes).
pub struct NodeRef<'a, T: 'a>(&'a Node<T>);

impl<'a, T> NodeRef<'a, T> {
    /// Returns the key stored at this node.
    pub fn key(&self) -> &'a T { self.0.value() }

    /// Returns the height of the subtree rooted at this node; a leaf has height one.
    pub fn height(&self) -> usize { self.0.height() }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> isize { self.0.balance_factor() }

    /// Returns a view of this node's left child, if any.
    pub fn left(&self) -> Option<NodeRef<'a, T>> { self.0.left().map(NodeRef) }

    /// Returns a view of this node's right child, if any.
    pub fn right(&self) -> Option<NodeRef<'a, T>> { self.0.right().map(NodeRef) }

    /// Returns the smallest key in the subtree rooted at this node.
    pub fn min(&self) -> &'a T { self.0.min() }

    /// Returns the largest key in the subtree rooted at this node.
    pub fn max(&self) -> &'a T { self.0.max() }

    /// Counts the nodes in the subtree rooted at this node.
    pub fn count(&self) -> usize { self.0.count() }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> Debug for NodeRef<'a, T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("height", &self.height())
            .field("balance_factor", &self.balance_factor())
            .finish()
    }
}

/// An owning iterator over an `AvlTree`'s items in order.
pub struct IntoIter<T>(node::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator over an `AvlTree`'s items in order.
pub struct Iter<'a, T: 'a> {
    iter: node::Iter<&'a Node<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter { iter: self.iter.clone() } }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.iter.next().map(Node::value) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An iterator over views of an `AvlTree`'s nodes in order.
pub struct Nodes<'a, T: 'a> {
    iter: node::Iter<&'a Node<T>>,
}

impl<'a, T> Clone for Nodes<'a, T> {
    fn clone(&self) -> Self { Nodes { iter: self.iter.clone() } }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeRef<'a, T>;
    fn next(&mut self) -> Option<NodeRef<'a, T>> { self.iter.next().map(NodeRef) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl<'a, T> ExactSizeIterator for Nodes<'a, T> {}
