//! Friend set backends.
//!
//! A user's friends are stored behind the [`FriendSet`] trait so the network
//! can run on either the [`AvlTree`] or a plain hash set. Both backends
//! iterate in ascending username order, which keeps feeds and suggestions
//! reproducible whichever one is chosen.

use std::collections::HashSet;

use crate::avl::AvlTree;

pub trait FriendSet: Default {
    /// Add a username. Returns `false` if it was already present.
    fn insert(&mut self, username: &str) -> bool;

    /// Remove a username. Returns `false` if it was not present.
    fn remove(&mut self, username: &str) -> bool;

    fn contains(&self, username: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Usernames in ascending order.
    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

impl FriendSet for AvlTree {
    fn insert(&mut self, username: &str) -> bool {
        AvlTree::insert(self, username)
    }

    fn remove(&mut self, username: &str) -> bool {
        AvlTree::remove(self, username)
    }

    fn contains(&self, username: &str) -> bool {
        AvlTree::contains(self, username)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(AvlTree::iter(self))
    }
}

/// Hash-set backend. Membership is O(1); iteration sorts on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashFriendSet {
    usernames: HashSet<String>,
}

impl HashFriendSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FriendSet for HashFriendSet {
    fn insert(&mut self, username: &str) -> bool {
        if self.usernames.contains(username) {
            return false;
        }
        self.usernames.insert(username.to_string())
    }

    fn remove(&mut self, username: &str) -> bool {
        self.usernames.remove(username)
    }

    fn contains(&self, username: &str) -> bool {
        self.usernames.contains(username)
    }

    fn len(&self) -> usize {
        self.usernames.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        let mut sorted: Vec<&str> = self.usernames.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        Box::new(sorted.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<S: FriendSet>() {
        let mut set = S::default();
        assert!(set.is_empty());
        assert!(set.insert("carol"));
        assert!(set.insert("alice"));
        assert!(set.insert("bob"));
        assert!(!set.insert("alice"));

        assert_eq!(set.len(), 3);
        assert!(set.contains("bob"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["alice", "bob", "carol"]);

        assert!(set.remove("bob"));
        assert!(!set.remove("bob"));
        assert!(!set.contains("bob"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["alice", "carol"]);
    }

    #[test]
    fn test_avl_backend() {
        exercise::<AvlTree>();
    }

    #[test]
    fn test_hash_backend() {
        exercise::<HashFriendSet>();
    }
}
