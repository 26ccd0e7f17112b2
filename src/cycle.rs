// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deliberately cyclic lists and Floyd's tortoise-and-hare walk.

use std::fmt;
use std::ptr;

use crate::{LinkedList, Node};

/// A chain of nodes that can be walked one successor at a time.
///
/// Both the plain list and the cyclic list are walked through this, so the same
/// tortoise-and-hare code answers `has_cycle` for each.
pub(crate) trait Chain<T> {
    /// The node the walk starts from.
    fn first(&self) -> Option<&Node<T>>;

    /// The node after `node`, following the back link if there is one.
    fn successor<'a>(&'a self, node: &'a Node<T>) -> Option<&'a Node<T>>;

    /// Moves a slow pointer one node and a fast pointer two nodes per step, returning the
    /// node they first meet on, or `None` once the fast pointer runs off the end.
    ///
    /// Inside a loop the fast pointer closes on the slow one by one node per step, so they
    /// meet before the slow pointer completes a lap.
    fn meeting_point(&self) -> Option<&Node<T>> {
        let mut slow = self.first()?;
        let mut fast = slow;
        loop {
            fast = self.successor(self.successor(fast)?)?;
            slow = self.successor(slow)?;
            if ptr::eq(slow, fast) {
                return Some(slow);
            }
        }
    }

    /// The first node of the loop: restart one pointer from the front and step both by one
    /// node until they coincide.
    fn loop_entry(&self) -> Option<&Node<T>> {
        let mut ahead = self.meeting_point()?;
        let mut behind = self.first()?;
        while !ptr::eq(ahead, behind) {
            ahead = self.successor(ahead)?;
            behind = self.successor(behind)?;
        }
        Some(behind)
    }
}

/// A non-owning link, based on a raw ptr.
struct Raw<T> {
    ptr: *const Node<T>,
}

impl<T> Raw<T> {
    /// Makes a null reference.
    #[inline]
    fn none() -> Self {
        Raw { ptr: ptr::null() }
    }

    /// Makes a reference to the given node.
    #[inline]
    fn some(node: &Node<T>) -> Self {
        Raw { ptr: node }
    }

    /// Converts the ref to an Option containing a reference.
    #[inline]
    fn as_ref(&self) -> Option<&Node<T>> {
        // Only ever points at a boxed node owned by the same `CyclicList`, which hands out
        // no mutable access to its nodes.
        unsafe { self.ptr.as_ref() }
    }
}

/// A list whose tail links back to one of its own nodes.
///
/// Produced by [`LinkedList::create_cycle`] and [`LinkedList::create_cycle_at`]. Nodes stay
/// owned by the underlying list; the back link from the tail does not own anything, so
/// dropping a `CyclicList` frees every node once. Only read operations are offered. Call
/// [`break_cycle`](#method.break_cycle) to get a mutable `LinkedList` back.
pub struct CyclicList<T> {
    list: LinkedList<T>,
    back: Raw<T>,
}

impl<T> LinkedList<T> {
    /// Links the tail back to the head, for exercising cycle detection.
    ///
    /// An empty list has no tail to link, so the result has no cycle.
    pub fn create_cycle(self) -> CyclicList<T> {
        self.create_cycle_at(0)
    }

    /// Links the tail back to the node at `index`.
    ///
    /// If the list is empty or `index` is out of bounds, no back link is made and the
    /// result has no cycle.
    pub fn create_cycle_at(self, index: usize) -> CyclicList<T> {
        let back = self.iter_nodes().nth(index).map_or_else(Raw::none, Raw::some);
        CyclicList { list: self, back }
    }

    fn iter_nodes(&self) -> impl Iterator<Item = &Node<T>> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }
}

impl<T> CyclicList<T> {
    /// Runs Floyd's cycle detection: `true` if the slow and fast pointers ever land on the
    /// same node.
    pub fn has_cycle(&self) -> bool {
        self.meeting_point().is_some()
    }

    /// Returns the element where the cycle begins, or `None` if there is no cycle.
    pub fn cycle_start(&self) -> Option<&T> {
        self.loop_entry().map(|node| &node.elem)
    }

    /// Returns the number of distinct nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Checks if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns a reference to the element at the front of the list.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Drops the back link and returns the list as it was before the cycle was made.
    pub fn break_cycle(self) -> LinkedList<T> {
        self.list
    }
}

impl<T> Chain<T> for CyclicList<T> {
    #[inline]
    fn first(&self) -> Option<&Node<T>> {
        self.list.head.as_deref()
    }

    #[inline]
    fn successor<'a>(&'a self, node: &'a Node<T>) -> Option<&'a Node<T>> {
        match node.next.as_deref() {
            Some(next) => Some(next),
            None => self.back.as_ref(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CyclicList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CyclicList")
            .field("nodes", &self.list)
            .field("back_to", &self.back.as_ref().map(|node| &node.elem))
            .finish()
    }
}

unsafe impl<T: Send> Send for CyclicList<T> {}
unsafe impl<T: Sync> Sync for CyclicList<T> {}

#[cfg(test)]
mod tests {
    use crate::LinkedList;

    fn list_from(v: &[i32]) -> LinkedList<i32> {
        v.iter().cloned().collect()
    }

    #[test]
    fn test_create_cycle_detected() {
        for len in 1..10 {
            let list: LinkedList<i32> = (0..len).collect();
            assert!(!list.has_cycle());
            let cyclic = list.create_cycle();
            assert!(cyclic.has_cycle(), "length {}", len);
            assert_eq!(cyclic.len(), len as usize);
        }
    }

    #[test]
    fn test_single_node_cycle() {
        let cyclic = list_from(&[7]).create_cycle();
        assert!(cyclic.has_cycle());
        assert_eq!(cyclic.cycle_start(), Some(&7));
        assert_eq!(cyclic.front(), Some(&7));
    }

    #[test]
    fn test_empty_list_never_cycles() {
        let cyclic = LinkedList::<i32>::new().create_cycle();
        assert!(!cyclic.has_cycle());
        assert_eq!(cyclic.cycle_start(), None);
        assert!(cyclic.is_empty());

        let list = cyclic.break_cycle();
        assert!(list.is_empty());
        assert!(!list.create_cycle().has_cycle());
    }

    #[test]
    fn test_cycle_start() {
        let values = [10, 20, 30, 40, 50];
        for (index, value) in values.iter().enumerate() {
            let cyclic = list_from(&values).create_cycle_at(index);
            assert!(cyclic.has_cycle());
            assert_eq!(cyclic.cycle_start(), Some(value));
        }
        assert_eq!(list_from(&values).create_cycle().cycle_start(), Some(&10));
    }

    #[test]
    fn test_out_of_bounds_entry_makes_no_cycle() {
        let cyclic = list_from(&[1, 2, 3]).create_cycle_at(3);
        assert!(!cyclic.has_cycle());
        assert_eq!(cyclic.cycle_start(), None);
    }

    #[test]
    fn test_break_cycle_restores_list() {
        let cyclic = list_from(&[6, 4, 3]).create_cycle_at(1);
        assert!(cyclic.has_cycle());
        let mut list = cyclic.break_cycle();
        assert!(!list.has_cycle());
        assert_eq!(list, list_from(&[6, 4, 3]));

        // the list is fully usable again
        list.push_front(1);
        list.reverse();
        assert_eq!(list.iter().cloned().collect::<Vec<_>>(), [3, 4, 6, 1]);
    }

    #[test]
    fn test_dropping_cyclic_list() {
        let cyclic: super::CyclicList<u32> = (0..100_000).collect::<LinkedList<_>>().create_cycle();
        assert!(cyclic.has_cycle());
        drop(cyclic);
    }

    #[test]
    fn test_debug() {
        let cyclic = list_from(&[1, 2, 3]).create_cycle_at(1);
        assert_eq!(format!("{:?}", cyclic), "CyclicList { nodes: [1, 2, 3], back_to: Some(2) }");
        let acyclic = LinkedList::<i32>::new().create_cycle();
        assert_eq!(format!("{:?}", acyclic), "CyclicList { nodes: [], back_to: None }");
    }
}
