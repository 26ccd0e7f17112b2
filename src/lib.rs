// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A singly-linked list of uniquely owned nodes, with the classic two-pointer queries
//! (middle element, n-th from the end) and Floyd cycle detection.
//!
//! ```
//! use singly_linked_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_front(5);
//! list.push_front(3);
//! list.push_front(1);
//! list.insert_ascending(4);
//!
//! assert_eq!(list.to_string(), "1 3 4 5");
//! assert_eq!(list.find_middle_value(), Some(&4));
//! assert_eq!(list.find_nth_from_end(0), Some(&5));
//!
//! list.reverse();
//! assert_eq!(format!("{:?}", list), "[5, 4, 3, 1]");
//!
//! let cyclic = list.create_cycle();
//! assert!(cyclic.has_cycle());
//! assert_eq!(cyclic.break_cycle().len(), 4);
//! ```
//!
//! A `LinkedList` can never contain a cycle: the only way to build one is
//! [`LinkedList::create_cycle`], which consumes the list and hands back a
//! [`CyclicList`] exposing read-only queries until the cycle is broken again.
//!
//! The list is not internally synchronized. Callers sharing one across threads must guard
//! the whole list with a single lock held for the duration of each call.

#![cfg_attr(all(test, feature = "nightly"), feature(test))]
#[cfg(all(test, feature = "nightly"))] extern crate test;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;

mod cycle;
#[cfg(feature = "borsh")]
mod impl_borsh;
#[cfg(feature = "serde")]
mod impl_serde;

pub use crate::cycle::CyclicList;
use crate::cycle::Chain;

/// A LinkedList node.
struct Node<T> {
    next: Link<T>,
    elem: T,
}

impl<T> Node<T> {
    /// Makes a node with the given element.
    #[inline]
    fn new(elem: T) -> Self {
        Node { next: None, elem }
    }

    /// Makes a node with the given element, taking ownership of the rest of the chain.
    #[inline]
    fn with_next(elem: T, next: Link<T>) -> Self {
        Node { next, elem }
    }
}

/// An owning link.
type Link<T> = Option<Box<Node<T>>>;

/// A singly-linked list.
pub struct LinkedList<T> {
    len: usize,
    head: Link<T>,
}

impl<T> LinkedList<T> {
    /// Returns an empty `LinkedList`.
    #[inline]
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Prepends the given element; it becomes the new head.
    pub fn push_front(&mut self, elem: T) {
        self.splice_at(0, elem);
    }

    /// Appends the given element to the back of the list.
    ///
    /// This walks the whole list.
    pub fn push_back(&mut self, elem: T) {
        let len = self.len;
        self.splice_at(len, elem);
    }

    /// Removes the element at the front of the list and returns it.
    ///
    /// Returns `None` if the list was empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|head| {
            self.len -= 1;
            let Node { next, elem } = *head;
            self.head = next;
            elem
        })
    }

    /// Returns a reference to the element at the front of the list.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.elem)
    }

    /// Returns a mutable reference to the element at the front of the list.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.elem)
    }

    /// Removes the element at the given index and returns it.
    ///
    /// Returns `None` if the index is greater than or equal to the length of the list.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let link = self.link_at(index);
        let Node { next, elem } = *link.take()?;
        *link = next;
        self.len -= 1;
        Some(elem)
    }

    /// Reverses the list in place by relinking every node; no element is moved or cloned.
    ///
    /// The former tail becomes the head.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Returns the number of elements in the list. An empty list has length zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements from the list.
    #[inline]
    pub fn clear(&mut self) {
        // one node at a time, so dropping a long chain can't overflow the stack
        while self.pop_front().is_some() {}
    }

    /// Returns the element `n` positions from the front, counting from zero.
    ///
    /// Returns `None` if `n` is out of bounds.
    pub fn find_nth_from_beginning(&self, n: usize) -> Option<&T> {
        self.iter().nth(n)
    }

    /// Returns the element `n` positions from the back, counting from zero, so `0` is the
    /// last element.
    ///
    /// A lead pointer is advanced `n` nodes, then lead and trail move together until the
    /// lead reaches the tail. Returns `None` if `n` is out of bounds.
    pub fn find_nth_from_end(&self, n: usize) -> Option<&T> {
        let mut lead = self.head.as_deref();
        for _ in 0..n {
            lead = lead?.next.as_deref();
        }
        let mut lead = lead?;
        let mut trail = self.head.as_deref()?;
        while let Some(next) = lead.next.as_deref() {
            lead = next;
            trail = trail.next.as_deref()?;
        }
        Some(&trail.elem)
    }

    /// Returns the middle element, found with a slow and a fast pointer.
    ///
    /// For an even length this is the upper middle: a list of length `L` yields the element
    /// at index `L / 2`. Returns `None` if the list is empty.
    pub fn find_middle_value(&self) -> Option<&T> {
        let mut slow = self.head.as_deref()?;
        let mut fast = self.head.as_deref();
        while let Some(ahead) = fast.and_then(|node| node.next.as_deref()) {
            slow = slow.next.as_deref()?;
            fast = ahead.next.as_deref();
        }
        Some(&slow.elem)
    }

    /// Runs Floyd's cycle detection over the list.
    ///
    /// A `LinkedList` is acyclic by construction, so this is always `false`; see
    /// [`CyclicList::has_cycle`] for the list produced by [`create_cycle`](#method.create_cycle).
    pub fn has_cycle(&self) -> bool {
        self.meeting_point().is_some()
    }

    /// Returns a forward iterator that yields references to the list's elements.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter { nelem: self.len, head: self.head.as_deref() }
    }

    /// Returns a forward iterator that yields mutable references to the list's elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        IterMut { nelem: self.len, head: self.head.as_deref_mut() }
    }

    /// Returns the link that owns the node at `index`, or the empty link past the tail
    /// when `index >= len`.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    /// Links a new node in front of whatever currently sits at `index`.
    fn splice_at(&mut self, index: usize, elem: T) {
        let link = self.link_at(index);
        let next = link.take();
        *link = Some(Box::new(Node::with_next(elem, next)));
        self.len += 1;
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns `true` if some element equals `elem`.
    pub fn contains(&self, elem: &T) -> bool {
        self.iter().any(|e| e == elem)
    }

    /// Removes the first element equal to `elem`, scanning from the head, and returns it.
    ///
    /// The list is left untouched and `None` is returned if no element matches.
    pub fn delete(&mut self, elem: &T) -> Option<T> {
        let index = self.iter().position(|e| e == elem)?;
        self.remove(index)
    }
}

impl<T: Ord> LinkedList<T> {
    /// Inserts `elem` before the first element strictly greater than it, or at the tail if
    /// there is none.
    ///
    /// On a list that is already non-decreasing the result stays non-decreasing, and equal
    /// elements keep their insertion order.
    pub fn insert_ascending(&mut self, elem: T) {
        let index = self.iter().take_while(|e| **e <= elem).count();
        self.splice_at(index, elem);
    }

    /// Returns the largest element, or `None` if the list is empty.
    pub fn find_max(&self) -> Option<&T> {
        self.iter().max()
    }

    /// Returns the smallest element, or `None` if the list is empty.
    pub fn find_min(&self) -> Option<&T> {
        self.iter().min()
    }

    /// Checks that every element is less than or equal to its successor.
    pub fn is_ascending(&self) -> bool {
        self.iter().zip(self.iter().skip(1)).all(|(a, b)| a <= b)
    }
}

impl<T> Chain<T> for LinkedList<T> {
    #[inline]
    fn first(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    #[inline]
    fn successor<'a>(&'a self, node: &'a Node<T>) -> Option<&'a Node<T>> {
        node.next.as_deref()
    }
}

/// An iterator over references to the items of a `LinkedList`.
pub struct Iter<'a, T: 'a> {
    head: Option<&'a Node<T>>,
    nelem: usize,
}

/// An iterator over mutable references to the items of a `LinkedList`.
pub struct IterMut<'a, T: 'a> {
    head: Option<&'a mut Node<T>>,
    nelem: usize,
}

/// An iterator over the items of a `LinkedList`.
#[derive(Clone)]
pub struct IntoIter<T> {
    list: LinkedList<T>
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.head.map(|head| {
            self.nelem -= 1;
            self.head = head.next.as_deref();
            &head.elem
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nelem, Some(self.nelem))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.head.take().map(|head| {
            self.nelem -= 1;
            self.head = head.next.as_deref_mut();
            &mut head.elem
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nelem, Some(self.nelem))
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> { self.list.pop_front() }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> iter::FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        let mut ret = LinkedList::new();
        ret.extend(iter);
        ret
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        let mut len = self.len;
        let mut tail = self.link_at(len);
        for elem in iter {
            tail = &mut tail.insert(Box::new(Node::new(elem))).next;
            len += 1;
        }
        self.len = len;
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Writes the elements front to back, separated by single spaces.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut elems = self.iter();
        if let Some(first) = elems.next() {
            write!(f, "{}", first)?;
            for elem in elems {
                write!(f, " {}", elem)?;
            }
        }
        Ok(())
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self.iter() {
            elt.hash(state);
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> IterMut<'a, T> { self.iter_mut() }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter { list: self } }
}

#[allow(dead_code)]
fn assert_properties() {
    fn is_send<T: Send>() {}
    fn is_sync<T: Sync>() {}

    is_send::<LinkedList<i32>>();
    is_sync::<LinkedList<i32>>();

    is_send::<IntoIter<i32>>();
    is_sync::<IntoIter<i32>>();

    is_send::<Iter<i32>>();
    is_sync::<Iter<i32>>();

    is_send::<IterMut<i32>>();
    is_sync::<IterMut<i32>>();

    is_send::<CyclicList<i32>>();
    is_sync::<CyclicList<i32>>();

    fn linked_list_covariant<'a, T>(x: LinkedList<&'static T>) -> LinkedList<&'a T> { x }
    fn iter_covariant<'i, 'a, T>(x: Iter<'i, &'static T>) -> Iter<'i, &'a T> { x }
    fn into_iter_covariant<'a, T>(x: IntoIter<&'static T>) -> IntoIter<&'a T> { x }
    fn cyclic_list_covariant<'a, T>(x: CyclicList<&'static T>) -> CyclicList<&'a T> { x }
}
