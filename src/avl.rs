//! AVL tree of usernames.
//!
//! A height-balanced binary search tree that keeps a user's friends in
//! ascending lexicographic order. Each parent exclusively owns its children
//! (`Option<Box<Node>>`); rotations move boxes between slots and never alias.
//!
//! After every insert or remove, each node on the search path has its height
//! recomputed and, if its balance factor (left height minus right height)
//! leaves `[-1, 1]`, is restored by one of the four classic rotations.

use std::cmp::Ordering;
use std::fmt;

type Link = Option<Box<Node>>;

#[derive(Clone)]
struct Node {
    username: String,
    height: u32,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(username: String) -> Box<Node> {
        Box::new(Node {
            username,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_factor(link: &Link) -> i64 {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Recompute the height of `node` and apply whichever rotation its balance
/// factor calls for. The child's balance factor picks the single or double
/// rotation, which covers insertion and deletion alike.
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // Left-right: straighten the left child first.
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        // Right-left: straighten the right child first.
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

fn insert_at(link: Link, username: String, inserted: &mut bool) -> Box<Node> {
    let Some(mut node) = link else {
        *inserted = true;
        return Node::leaf(username);
    };

    match username.cmp(&node.username) {
        Ordering::Less => node.left = Some(insert_at(node.left.take(), username, inserted)),
        Ordering::Greater => node.right = Some(insert_at(node.right.take(), username, inserted)),
        // Duplicate: leave the shape alone.
        Ordering::Equal => return node,
    }

    rebalance(node)
}

/// Detach the smallest node of a non-empty subtree, returning the rebalanced
/// remainder and the detached node.
fn take_min(mut node: Box<Node>) -> (Link, Box<Node>) {
    match node.left.take() {
        None => (node.right.take(), node),
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

fn remove_at(link: Link, username: &str, removed: &mut bool) -> Link {
    let mut node = link?;

    match username.cmp(node.username.as_str()) {
        Ordering::Less => node.left = remove_at(node.left.take(), username, removed),
        Ordering::Greater => node.right = remove_at(node.right.take(), username, removed),
        Ordering::Equal => {
            *removed = true;
            return match (node.left.take(), node.right.take()) {
                (None, None) => None,
                (Some(child), None) | (None, Some(child)) => Some(child),
                (Some(left), Some(right)) => {
                    // Replace with the in-order successor.
                    let (rest, mut successor) = take_min(right);
                    successor.left = Some(left);
                    successor.right = rest;
                    Some(rebalance(successor))
                }
            };
        }
    }

    Some(rebalance(node))
}

/// Self-balancing ordered set of usernames.
#[derive(Clone, Default)]
pub struct AvlTree {
    root: Link,
    len: usize,
}

impl AvlTree {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert a username. Returns `false` and leaves the tree unchanged if it
    /// was already present.
    pub fn insert(&mut self, username: impl Into<String>) -> bool {
        let mut inserted = false;
        self.root = Some(insert_at(self.root.take(), username.into(), &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove a username. Returns `false` if it was not present.
    pub fn remove(&mut self, username: &str) -> bool {
        let mut removed = false;
        self.root = remove_at(self.root.take(), username, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, username: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match username.cmp(node.username.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; an empty tree has height 0.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Lazy in-order traversal (ascending). Call again to restart.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            stack: Vec::with_capacity(self.height() as usize),
        };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Check the AVL invariants: ordering, stored heights, and balance.
    pub fn is_balanced(&self) -> bool {
        fn check(link: &Link, lower: Option<&str>, upper: Option<&str>) -> Option<u32> {
            let Some(node) = link else {
                return Some(0);
            };
            let name = node.username.as_str();
            if lower.is_some_and(|l| name <= l) || upper.is_some_and(|u| name >= u) {
                return None;
            }
            let left = check(&node.left, lower, Some(name))?;
            let right = check(&node.right, Some(name), upper)?;
            let expected = 1 + left.max(right);
            (left.abs_diff(right) <= 1 && node.height == expected).then_some(expected)
        }
        check(&self.root, None, None).is_some()
    }
}

impl fmt::Debug for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for AvlTree {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for AvlTree {}

impl<S: Into<String>> FromIterator<S> for AvlTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        for username in iter {
            tree.insert(username);
        }
        tree
    }
}

impl<S: Into<String>> Extend<S> for AvlTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for username in iter {
            self.insert(username);
        }
    }
}

/// In-order iterator over an [`AvlTree`], yielding usernames in ascending order.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.username.as_str())
    }
}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(tree: &AvlTree) -> Vec<&str> {
        tree.iter().collect()
    }

    #[test]
    fn test_insert_and_contains() {
        let mut tree = AvlTree::new();
        assert!(tree.insert("bob"));
        assert!(tree.insert("alice"));
        assert!(tree.insert("carol"));

        assert!(tree.contains("alice"));
        assert!(tree.contains("carol"));
        assert!(!tree.contains("dave"));
        assert!(!tree.contains("Alice"));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree: AvlTree = ["m", "f", "t"].into_iter().collect();
        let before = tree.clone();
        assert!(!tree.insert("f"));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree, before);
        assert_eq!(tree.height(), before.height());
    }

    #[test]
    fn test_right_right_rotation() {
        // Ascending inserts would degenerate into a list without rotations.
        let tree: AvlTree = ["a", "b", "c"].into_iter().collect();
        assert_eq!(tree.height(), 2);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_left_left_rotation() {
        let tree: AvlTree = ["c", "b", "a"].into_iter().collect();
        assert_eq!(tree.height(), 2);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_double_rotations() {
        let left_right: AvlTree = ["c", "a", "b"].into_iter().collect();
        assert_eq!(left_right.height(), 2);
        assert!(left_right.is_balanced());

        let right_left: AvlTree = ["a", "c", "b"].into_iter().collect();
        assert_eq!(right_left.height(), 2);
        assert!(right_left.is_balanced());
    }

    #[test]
    fn test_in_order_is_sorted() {
        let tree: AvlTree = ["dave", "alice", "erin", "carol", "bob"].into_iter().collect();
        assert_eq!(names(&tree), vec!["alice", "bob", "carol", "dave", "erin"]);
        // Restartable: a second traversal yields the same sequence.
        assert_eq!(names(&tree), vec!["alice", "bob", "carol", "dave", "erin"]);
    }

    #[test]
    fn test_height_stays_logarithmic() {
        let tree: AvlTree = (0..1024).map(|i| format!("user{i:04}")).collect();
        assert_eq!(tree.len(), 1024);
        // AVL height bound: < 1.44 * log2(n + 2).
        assert!(tree.height() <= 14);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_remove_leaf_and_inner_nodes() {
        let mut tree: AvlTree = ["d", "b", "f", "a", "c", "e", "g"].into_iter().collect();

        assert!(tree.remove("a"));
        assert!(tree.remove("d"));
        assert!(!tree.remove("d"));
        assert!(!tree.remove("zzz"));

        assert_eq!(names(&tree), vec!["b", "c", "e", "f", "g"]);
        assert_eq!(tree.len(), 5);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_remove_everything() {
        let mut tree: AvlTree = (0..100).map(|i| format!("u{i:03}")).collect();
        for i in (0..100).rev() {
            assert!(tree.remove(&format!("u{i:03}")));
            assert!(tree.is_balanced());
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn test_empty_tree() {
        let tree = AvlTree::new();
        assert!(!tree.contains("anyone"));
        assert!(tree.is_balanced());
        assert_eq!(format!("{tree:?}"), "{}");
    }

    proptest! {
        #[test]
        fn prop_in_order_sorted_and_distinct(usernames in proptest::collection::vec("[a-z]{1,6}", 0..200)) {
            let tree: AvlTree = usernames.iter().cloned().collect();

            let mut expected = usernames.clone();
            expected.sort();
            expected.dedup();

            let actual: Vec<String> = tree.iter().map(str::to_string).collect();
            prop_assert_eq!(&actual, &expected);
            prop_assert_eq!(tree.len(), expected.len());
            prop_assert!(tree.is_balanced());
        }

        #[test]
        fn prop_remove_keeps_balance(
            usernames in proptest::collection::vec("[a-z]{1,4}", 1..120),
            removals in proptest::collection::vec(any::<prop::sample::Index>(), 0..60),
        ) {
            let mut tree: AvlTree = usernames.iter().cloned().collect();
            let mut model: std::collections::BTreeSet<String> = usernames.iter().cloned().collect();

            for idx in removals {
                let victim = idx.get(&usernames);
                prop_assert_eq!(tree.remove(victim), model.remove(victim));
                prop_assert!(tree.is_balanced());
            }

            let actual: Vec<&str> = tree.iter().collect();
            let expected: Vec<&str> = model.iter().map(String::as_str).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
