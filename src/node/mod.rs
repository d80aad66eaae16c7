mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::{replace, swap};

pub use self::iter::{IntoIter, Iter};

pub type Link<T> = Option<Box<Node<T>>>;

pub trait LinkExt: Sized {
    type Item;
    fn as_node_ref(&self) -> Option<&Node<Self::Item>>;
    fn height(&self) -> usize;
}

impl<T> LinkExt for Link<T> {
    type Item = T;

    fn as_node_ref(&self) -> Option<&Node<T>> {
        self.as_ref().map(|node| &**node)
    }

    fn height(&self) -> usize {
        self.as_ref().map_or(0, |node| node.height)
    }
}

#[derive(Clone)]
pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    height: usize,
    value: T,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node { left: None, right: None, height: 1, value: value }
    }

    pub fn value(&self) -> &T { &self.value }

    pub fn height(&self) -> usize { self.height }

    pub fn left(&self) -> Option<&Node<T>> { self.left.as_node_ref() }

    pub fn right(&self) -> Option<&Node<T>> { self.right.as_node_ref() }

    /// Positive when left-heavy, negative when right-heavy.
    pub fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + self.left.height().max(self.right.height());
    }

    // The left child becomes the subtree root; its right subtree moves under the
    // old root's left link.
    fn rotate_right(node: &mut Box<Self>) {
        debug_assert!(node.left.is_some(), "right rotation without a left child");
        let Some(mut save) = node.left.take() else { return };
        trace!("rotating right at height {}", node.height);
        swap(&mut node.left, &mut save.right); // save.right now None
        node.update_height();
        swap(node, &mut save);
        node.right = Some(save);
        node.update_height();
    }

    fn rotate_left(node: &mut Box<Self>) {
        debug_assert!(node.right.is_some(), "left rotation without a right child");
        let Some(mut save) = node.right.take() else { return };
        trace!("rotating left at height {}", node.height);
        swap(&mut node.right, &mut save.left); // save.left now None
        node.update_height();
        swap(node, &mut save);
        node.left = Some(save);
        node.update_height();
    }

    /// Returns the leftmost value of the subtree rooted at this node.
    pub fn min(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left() { node = left; }
        &node.value
    }

    pub fn max(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right() { node = right; }
        &node.value
    }

    pub fn count(&self) -> usize {
        1 + self.left().map_or(0, Node::count) + self.right().map_or(0, Node::count)
    }

    pub fn is_balanced(&self) -> bool {
        self.balance_factor().abs() <= 1 &&
        self.left().map_or(true, Node::is_balanced) &&
        self.right().map_or(true, Node::is_balanced)
    }
}

// Restores the cached height and the balance of a node whose subtrees are
// themselves balanced but may differ in height by two.
fn rebalance<T>(node: &mut Box<Node<T>>) {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if let Some(ref mut left) = node.left {
            if left.balance_factor() < 0 {
                trace!("left-right case");
                Node::rotate_left(left);
            }
        }
        Node::rotate_right(node);
    } else if balance < -1 {
        if let Some(ref mut right) = node.right {
            if right.balance_factor() > 0 {
                trace!("right-left case");
                Node::rotate_right(right);
            }
        }
        Node::rotate_left(node);
    }
}

/// Inserts `value` below `link`, returning `false` if an equal value is already present.
pub fn insert<T, C>(link: &mut Link<T>, cmp: &C, value: T) -> bool where C: Compare<T> {
    match *link {
        None => {
            *link = Some(Box::new(Node::new(value)));
            true
        }
        Some(ref mut node) => {
            let inserted = match cmp.compare(&value, &node.value) {
                Equal => return false,
                Less => insert(&mut node.left, cmp, value),
                Greater => insert(&mut node.right, cmp, value),
            };

            rebalance(node);
            inserted
        }
    }
}

/// Removes the value equal to `key` below `link` and returns it.
///
/// A node with two children keeps its place in the tree: it takes over its in-order
/// successor's value and the successor's node is removed from the right subtree instead.
pub fn remove<T, C, Q: ?Sized>(link: &mut Link<T>, cmp: &C, key: &Q) -> Option<T>
    where C: Compare<Q, T> {

    let (order, full) = match *link {
        None => return None,
        Some(ref node) =>
            (cmp.compare(key, &node.value), node.left.is_some() && node.right.is_some()),
    };

    if order == Equal && !full {
        let Node { left, right, value, .. } = *link.take()?;
        *link = left.or(right);
        return Some(value);
    }

    let node = link.as_mut()?;

    let removed = match order {
        Less => remove(&mut node.left, cmp, key),
        Greater => remove(&mut node.right, cmp, key),
        Equal => {
            let successor = Left::remove_extremum(&mut node.right)?;
            Some(replace(&mut node.value, successor))
        }
    };

    rebalance(node);
    removed
}

pub fn get<'a, T, C, Q: ?Sized>(mut link: &'a Link<T>, cmp: &C, key: &Q) -> Option<&'a T>
    where C: Compare<Q, T> {

    while let Some(ref node) = *link {
        link = match cmp.compare(key, &node.value) {
            Equal => return Some(&node.value),
            Less => &node.left,
            Greater => &node.right,
        };
    }

    None
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn forward<T>(node: &Node<T>) -> &Link<T>;
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T>;

    fn extremum<T>(link: &Link<T>) -> Option<&T> {
        let mut node = link.as_node_ref()?;
        while let Some(ref child) = *Self::forward(node) { node = &**child; }
        Some(&node.value)
    }

    fn remove_extremum<T>(link: &mut Link<T>) -> Option<T> {
        match *link {
            Some(ref mut node) if Self::forward(node).is_some() => {
                let value = Self::remove_extremum(Self::forward_mut(node));
                rebalance(node);
                return value;
            }
            _ => {}
        }

        let mut node = *link.take()?;
        *link = Self::Opposite::forward_mut(&mut node).take();
        Some(node.value)
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward<T>(node: &Node<T>) -> &Link<T> { &node.left }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward<T>(node: &Node<T>) -> &Link<T> { &node.right }
    fn forward_mut<T>(node: &mut Node<T>) -> &mut Link<T> { &mut node.right }
}
