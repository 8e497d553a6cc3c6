//! Feed module for aggregating friends' posts.
//!
//! A feed holds borrowed views of every post owned by a user's direct
//! friends, sorted chronologically with newest posts first. Posts with the
//! same timestamp keep collection order: friends in ascending username
//! order, then each friend's posts in posting order.

use chrono::{DateTime, FixedOffset};

use crate::error::{Result, SocialError};
use crate::friend_set::FriendSet;
use crate::network::SocialNetwork;
use crate::post::Post;

/// One post in a feed together with where it lives.
#[derive(Debug, Clone, Copy)]
pub struct FeedEntry<'a> {
    /// Username of the friend who owns the post.
    pub author: &'a str,
    /// Position of the post in its author's post list, usable with
    /// [`SocialNetwork::like_post`] and [`SocialNetwork::comment_on_post`].
    pub index: usize,
    pub post: &'a Post,
}

/// A chronologically sorted collection of friends' posts.
#[derive(Debug, Clone)]
pub struct Feed<'a> {
    pub entries: Vec<FeedEntry<'a>>,
}

impl<'a> Feed<'a> {
    /// Collect every post owned by a direct friend of `username`.
    ///
    /// The user's own posts and posts of friends-of-friends are never
    /// included. A user without friends gets an empty feed.
    pub fn create_friend_feed<S: FriendSet>(
        network: &'a SocialNetwork<S>,
        username: &str,
    ) -> Result<Feed<'a>> {
        let user = network
            .user(username)
            .ok_or_else(|| SocialError::UnknownUser(username.to_string()))?;

        let mut entries = Vec::new();
        for friend_name in user.friend_names() {
            let Some(friend) = network.user(friend_name) else {
                continue;
            };
            for (index, post) in friend.posts().iter().enumerate() {
                entries.push(FeedEntry {
                    author: friend.username(),
                    index,
                    post,
                });
            }
        }

        // Stable sort keeps collection order for equal timestamps.
        entries.sort_by(|a, b| b.post.created_at().cmp(&a.post.created_at()));

        Ok(Feed { entries })
    }

    /// Keep only the newest `limit` posts.
    pub fn truncate(&mut self, limit: usize) {
        self.entries.truncate(limit);
    }

    /// Filter posts by a specific time range.
    ///
    /// # Arguments
    ///
    /// * `start` - The start time of the range (inclusive)
    /// * `end` - The end time of the range (inclusive)
    pub fn posts_in_range(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Vec<&FeedEntry<'a>> {
        self.entries
            .iter()
            .filter(|entry| {
                let time = entry.post.created_at();
                time >= start && time <= end
            })
            .collect()
    }

    pub fn recent(&self, limit: usize) -> Vec<&FeedEntry<'a>> {
        self.entries.iter().take(limit).collect()
    }

    pub fn posts_from(&self, author: &str) -> Vec<&FeedEntry<'a>> {
        self.entries
            .iter()
            .filter(|entry| entry.author == author)
            .collect()
    }

    /// Distinct authors appearing in the feed, sorted.
    pub fn authors(&self) -> Vec<&'a str> {
        let mut authors: Vec<&'a str> = self.entries.iter().map(|entry| entry.author).collect();
        authors.sort_unstable();
        authors.dedup();
        authors
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedEntry<'a>> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for Feed<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No posts in the feed.");
        }
        for entry in &self.entries {
            writeln!(f, "{} (post #{}):", entry.author, entry.index)?;
            writeln!(f, "{}", entry.post)?;
            writeln!(f, "-----------------------------")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use chrono::Duration;

    use super::*;
    use crate::util::{parse_timestamp, ManualClock};

    fn network() -> (SocialNetwork, Rc<ManualClock>) {
        let clock = Rc::new(ManualClock::starting_at("2025-05-01T12:00:00+00:00").unwrap());
        let mut network = SocialNetwork::with_clock(clock.clone());
        for name in ["alice", "bob", "carol", "dave"] {
            network.register_user(name, "").unwrap();
        }
        (network, clock)
    }

    #[test]
    fn test_feed_only_contains_direct_friends_posts() {
        let (mut network, _clock) = network();
        network.add_friend("alice", "bob").unwrap();
        network.add_friend("bob", "carol").unwrap();

        network.create_post("alice", "own post").unwrap();
        network.create_post("bob", "from bob").unwrap();
        network.create_post("carol", "friend of friend").unwrap();

        let feed = Feed::create_friend_feed(&network, "alice").unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.entries[0].author, "bob");
        assert_eq!(feed.entries[0].post.content(), "from bob");
    }

    #[test]
    fn test_feed_newest_first() {
        let (mut network, _clock) = network();
        network.add_friend("alice", "bob").unwrap();
        network.add_friend("alice", "carol").unwrap();

        network.create_post("carol", "oldest").unwrap();
        network.create_post("bob", "middle").unwrap();
        network.create_post("carol", "newest").unwrap();

        let feed = Feed::create_friend_feed(&network, "alice").unwrap();
        let contents: Vec<&str> = feed.iter().map(|e| e.post.content()).collect();
        assert_eq!(contents, vec!["newest", "middle", "oldest"]);
        assert_eq!(feed.entries[0].index, 1);
        assert_eq!(feed.authors(), vec!["bob", "carol"]);
        assert_eq!(feed.posts_from("carol").len(), 2);
        assert_eq!(feed.recent(1)[0].post.content(), "newest");
    }

    #[test]
    fn test_equal_timestamps_keep_collection_order() {
        let at = parse_timestamp("2025-05-01T12:00:00+00:00").unwrap();
        let mut network = SocialNetwork::with_clock(ManualClock::frozen(at));
        for name in ["alice", "zed", "bob"] {
            network.register_user(name, "").unwrap();
        }
        network.add_friend("alice", "zed").unwrap();
        network.add_friend("alice", "bob").unwrap();
        network.create_post("zed", "z0").unwrap();
        network.create_post("bob", "b0").unwrap();
        network.create_post("bob", "b1").unwrap();

        let feed = Feed::create_friend_feed(&network, "alice").unwrap();
        let contents: Vec<&str> = feed.iter().map(|e| e.post.content()).collect();
        assert_eq!(contents, vec!["b0", "b1", "z0"]);
    }

    #[test]
    fn test_posts_in_range() {
        let (mut network, clock) = network();
        network.add_friend("alice", "bob").unwrap();
        network.create_post("bob", "early").unwrap();
        clock.advance(Duration::hours(2));
        network.create_post("bob", "late").unwrap();

        let feed = Feed::create_friend_feed(&network, "alice").unwrap();
        let start = parse_timestamp("2025-05-01T13:00:00+00:00").unwrap();
        let end = parse_timestamp("2025-05-01T15:00:00+00:00").unwrap();
        let in_range = feed.posts_in_range(start, end);
        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].post.content(), "late");
    }

    #[test]
    fn test_empty_feed_and_unknown_user() {
        let (network, _clock) = network();
        let feed = Feed::create_friend_feed(&network, "dave").unwrap();
        assert!(feed.is_empty());
        assert_eq!(feed.to_string(), "No posts in the feed.\n");

        assert_eq!(
            Feed::create_friend_feed(&network, "nobody").unwrap_err(),
            SocialError::UnknownUser("nobody".to_string())
        );
    }
}
