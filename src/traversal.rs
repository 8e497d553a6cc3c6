//! Graph algorithms over the friendship graph.
//!
//! Friendships are undirected edges of weight 1. Shortest paths use
//! Dijkstra's algorithm with a binary-heap frontier; friend suggestions rank
//! friends-of-friends by how many of the user's friends they share.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{Result, SocialError};
use crate::friend_set::FriendSet;
use crate::network::SocialNetwork;

/// A shortest chain of friendships between two users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendshipPath {
    /// Number of friendship edges on the path.
    pub hops: u32,
    /// Usernames from source to target, both endpoints included.
    pub usernames: Vec<String>,
}

/// A friend-of-a-friend candidate and the number of friends they share with the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendSuggestion {
    pub username: String,
    pub mutual_friends: usize,
}

/// Shortest friendship path from `from` to `to`.
///
/// Every user starts at an unreachable distance except the source at 0.
/// The frontier pops the nearest unfinalized user and relaxes each of its
/// friendships with `dist + 1`; a popped user is final. The search stops as
/// soon as the target is popped. Ties in the frontier are broken by
/// username so the returned path is deterministic.
///
/// `max_hops` caps the search depth; a target further away is reported as
/// [`SocialError::NoPathFound`].
pub fn shortest_path<S: FriendSet>(
    network: &SocialNetwork<S>,
    from: &str,
    to: &str,
    max_hops: Option<u32>,
) -> Result<FriendshipPath> {
    for name in [from, to] {
        if !network.contains_user(name) {
            return Err(SocialError::UnknownUser(name.to_string()));
        }
    }

    if from == to {
        return Ok(FriendshipPath {
            hops: 0,
            usernames: vec![from.to_string()],
        });
    }

    // Absent from `dist` means unreachable so far.
    let mut dist: HashMap<&str, u32> = HashMap::new();
    let mut previous: HashMap<&str, &str> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut finalized = 0usize;

    dist.insert(from, 0);
    frontier.push(Reverse((0u32, from)));

    while let Some(Reverse((d, current))) = frontier.pop() {
        // Stale entry: a shorter distance was already settled.
        if dist.get(current).is_some_and(|&best| d > best) {
            continue;
        }
        finalized += 1;

        if current == to {
            tracing::debug!(from, to, hops = d, finalized, "shortest path found");
            return Ok(FriendshipPath {
                hops: d,
                usernames: reconstruct_path(&previous, from, to),
            });
        }

        if max_hops.is_some_and(|limit| d >= limit) {
            continue;
        }

        let Some(user) = network.user(current) else {
            continue;
        };
        let next = d + 1;
        for friend in user.friend_names() {
            if dist.get(friend).map_or(true, |&known| next < known) {
                dist.insert(friend, next);
                previous.insert(friend, current);
                frontier.push(Reverse((next, friend)));
            }
        }
    }

    tracing::debug!(from, to, finalized, "no path found");
    Err(SocialError::NoPathFound {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Walk predecessor links from `to` back to `from`.
fn reconstruct_path(previous: &HashMap<&str, &str>, from: &str, to: &str) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut current = to;
    while current != from {
        match previous.get(current) {
            Some(&parent) => {
                path.push(parent.to_string());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Rank friends-of-friends of `username` by mutual friend count.
///
/// Candidates exclude the user and anyone already a friend. The count for a
/// candidate is the number of the user's friends who are friends with it.
/// Results are sorted by descending count, then ascending username.
pub fn suggest_friends<S: FriendSet>(
    network: &SocialNetwork<S>,
    username: &str,
) -> Result<Vec<FriendSuggestion>> {
    let user = network
        .user(username)
        .ok_or_else(|| SocialError::UnknownUser(username.to_string()))?;

    let mut mutual: HashMap<&str, usize> = HashMap::new();
    for friend_name in user.friend_names() {
        let Some(friend) = network.user(friend_name) else {
            continue;
        };
        for candidate in friend.friend_names() {
            if candidate != username && !user.is_friend(candidate) {
                *mutual.entry(candidate).or_default() += 1;
            }
        }
    }

    let mut suggestions: Vec<FriendSuggestion> = mutual
        .into_iter()
        .map(|(candidate, count)| FriendSuggestion {
            username: candidate.to_string(),
            mutual_friends: count,
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.mutual_friends
            .cmp(&a.mutual_friends)
            .then_with(|| a.username.cmp(&b.username))
    });

    Ok(suggestions)
}
