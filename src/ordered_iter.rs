extern crate ordered_iter;

use self::ordered_iter::OrderedSetIterator;
use super::tree;

impl<T> OrderedSetIterator for tree::IntoIter<T> where T: Ord {}

impl<'a, T> OrderedSetIterator for tree::Iter<'a, T> where T: Ord {}
