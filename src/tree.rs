// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Height-balanced binary tree built from a sorted sequence, plus a
//! greedy local-minimum descent.
//!
//! # Construction
//!
//! ```text
//! [1, 2, 3, 4, 5, 6]          half-open range [0, 6), midpoint 3
//!
//!              4
//!            /   \
//!           2     6           left gets [0, 3), right gets [4, 6)
//!          / \   /
//!         1   3 5
//! ```
//!
//! Each node owns its children outright. The tree is never mutated after
//! construction, so there are no parent links and no shared nodes.
//!
//! # Descent
//!
//! Starting at the root, stop at a node whose value is below both children
//! (a missing child counts as +∞); otherwise step into the child holding the
//! smaller value. This finds *a* node that is minimal relative to its
//! children, not necessarily the global minimum of an arbitrary tree. For
//! trees built from sorted input the two coincide.

use serde::Serialize;

/// Tree node. Children are exclusively owned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<T> {
    pub value: T,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

/// Balanced tree over a sorted sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancedTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Copy + PartialOrd> BalancedTree<T> {
    /// Build by recursive midpoint splitting.
    ///
    /// The input should be sorted ascending; construction itself does not
    /// depend on order, but the descent only finds the true minimum when it is.
    pub fn from_sorted(values: &[T]) -> Self {
        let tree = Self {
            root: build(values, 0, values.len()),
            len: values.len(),
        };
        if cfg!(debug_assertions) {
            crate::verify::contracts::check_tree_balanced(tree.height(), tree.len);
        }
        tree
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; 0 for the empty tree.
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }

    /// Values in in-order (left, node, right) sequence.
    pub fn in_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        collect_in_order(self.root.as_deref(), &mut out);
        out
    }

    /// Greedy descent to a node that is smaller than both of its children.
    ///
    /// Returns `None` only for the empty tree. Every step moves one level
    /// down, so the loop ends after at most `height()` iterations.
    pub fn descend_min(&self) -> Option<T> {
        let mut node = self.root.as_deref()?;
        loop {
            let left = node.left.as_deref().map(|n| n.value);
            let right = node.right.as_deref().map(|n| n.value);

            if below(node.value, left) && below(node.value, right) {
                return Some(node.value);
            }

            let next = if less_than(left, right) {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
            node = next?;
        }
    }
}

/// Build `[l, r)`; the midpoint becomes the subtree root.
fn build<T: Copy>(values: &[T], l: usize, r: usize) -> Option<Box<Node<T>>> {
    if l >= r {
        return None;
    }
    let m = l + (r - l) / 2;
    Some(Box::new(Node {
        value: values[m],
        left: build(values, l, m),
        right: build(values, m + 1, r),
    }))
}

fn height<T>(node: Option<&Node<T>>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + height(n.left.as_deref()).max(height(n.right.as_deref())),
    }
}

fn collect_in_order<T: Copy>(node: Option<&Node<T>>, out: &mut Vec<T>) {
    if let Some(n) = node {
        collect_in_order(n.left.as_deref(), out);
        out.push(n.value);
        collect_in_order(n.right.as_deref(), out);
    }
}

/// `value < child`, where a missing child is +∞.
#[inline]
fn below<T: PartialOrd>(value: T, child: Option<T>) -> bool {
    child.map_or(true, |c| value < c)
}

/// `a < b` with missing values as +∞ (so +∞ < +∞ is false).
#[inline]
fn less_than<T: PartialOrd>(a: Option<T>, b: Option<T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Build the tree from `values` and run the descent.
///
/// # Example
///
/// ```
/// use dncore::tree_min;
///
/// assert_eq!(tree_min(&[1.5, 2.0, 8.25]), Some(1.5));
/// assert_eq!(tree_min::<f64>(&[]), None);
/// ```
pub fn tree_min<T: Copy + PartialOrd>(values: &[T]) -> Option<T> {
    BalancedTree::from_sorted(values).descend_min()
}
