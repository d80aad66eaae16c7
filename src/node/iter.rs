use super::{Link, LinkExt, Node};

/// A handle on a node that an in-order walk can descend through.
pub trait NodeRef: Sized {
    type Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
    fn item(self) -> Self::Item;
}

impl<'a, T> NodeRef for &'a Node<T> {
    type Item = &'a Node<T>;
    fn left(&mut self) -> Option<&'a Node<T>> { self.left.as_node_ref() }
    fn right(&mut self) -> Option<&'a Node<T>> { self.right.as_node_ref() }
    fn item(self) -> &'a Node<T> { self }
}

impl<T> NodeRef for Box<Node<T>> {
    type Item = T;
    fn left(&mut self) -> Link<T> { self.left.take() }
    fn right(&mut self) -> Link<T> { self.right.take() }
    fn item(self) -> T { self.value }
}

/// In-order traversal holding the unvisited left spine on an explicit stack, so its
/// memory is bounded by the tree's height.
#[derive(Clone)]
pub struct Iter<N> {
    stack: Vec<N>,
    size: usize,
}

impl<N> Iter<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Iter<N> {
        let mut it = Iter { stack: Vec::new(), size: size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: Option<N>) {
        while let Some(mut node) = link {
            link = node.left();
            self.stack.push(node);
        }
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right();
        self.descend(right);
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<N> ExactSizeIterator for Iter<N> where N: NodeRef {}

pub type IntoIter<T> = Iter<Box<Node<T>>>;
