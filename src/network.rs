//! Network module: the social graph engine.
//!
//! [`SocialNetwork`] owns the directory of users and is the only way to
//! mutate it. Every operation validates its arguments before touching any
//! state, so a failed call leaves the network exactly as it was.
//!
//! The engine is single-threaded and not `Sync`; callers that need shared
//! access must wrap it in their own lock.

use std::collections::HashMap;

use crate::avl::AvlTree;
use crate::config::NetworkConfig;
use crate::error::{Result, SocialError};
use crate::feed::Feed;
use crate::friend_set::FriendSet;
use crate::post::Post;
use crate::traversal::{self, FriendSuggestion, FriendshipPath};
use crate::user::User;
use crate::util::{Clock, SystemClock};

/// In-memory social network, generic over the friend set backend.
pub struct SocialNetwork<S: FriendSet = AvlTree> {
    users: HashMap<String, User<S>>,
    clock: Box<dyn Clock>,
    config: NetworkConfig,
}

impl SocialNetwork<AvlTree> {
    /// Empty network on the AVL backend, timestamping posts with the wall clock.
    pub fn new() -> Self {
        Self::with_clock_and_config(SystemClock, NetworkConfig::default())
    }

    /// Empty network on the AVL backend with the given clock.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_clock_and_config(clock, NetworkConfig::default())
    }
}

impl<S: FriendSet> Default for SocialNetwork<S> {
    fn default() -> Self {
        Self::with_clock_and_config(SystemClock, NetworkConfig::default())
    }
}

impl<S: FriendSet> SocialNetwork<S> {
    pub fn with_clock_and_config(clock: impl Clock + 'static, config: NetworkConfig) -> Self {
        Self {
            users: HashMap::new(),
            clock: Box::new(clock),
            config,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: NetworkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Register a new user with no posts and no friends.
    ///
    /// Fails with [`SocialError::AlreadyExists`] if the username is taken;
    /// the existing user's bio and posts are left untouched.
    pub fn register_user(&mut self, username: &str, bio: &str) -> Result<()> {
        if self.users.contains_key(username) {
            tracing::debug!(username, "registration rejected: user exists");
            return Err(SocialError::AlreadyExists(username.to_string()));
        }

        self.users.insert(
            username.to_string(),
            User::new(username.to_string(), bio.to_string()),
        );
        tracing::debug!(username, "user registered");
        Ok(())
    }

    pub fn update_bio(&mut self, username: &str, bio: &str) -> Result<()> {
        let user = self.user_mut(username)?;
        user.set_bio(bio.to_string());
        Ok(())
    }

    /// Befriend two users. The edge is recorded on both sides.
    pub fn add_friend(&mut self, username: &str, friend: &str) -> Result<()> {
        let user = self.existing(username)?;
        self.existing(friend)?;

        if username == friend {
            tracing::debug!(username, "friend request rejected: self friendship");
            return Err(SocialError::SelfFriendship(username.to_string()));
        }
        if user.is_friend(friend) {
            tracing::debug!(username, friend, "friend request rejected: already friends");
            return Err(SocialError::AlreadyFriends {
                user: username.to_string(),
                friend: friend.to_string(),
            });
        }

        self.user_mut(username)?.add_friend(friend);
        self.user_mut(friend)?.add_friend(username);
        tracing::debug!(username, friend, "friendship added");
        Ok(())
    }

    /// Remove the friendship between two users, on both sides.
    pub fn remove_friend(&mut self, username: &str, friend: &str) -> Result<()> {
        let user = self.existing(username)?;
        self.existing(friend)?;

        if !user.is_friend(friend) {
            tracing::debug!(username, friend, "unfriend rejected: not friends");
            return Err(SocialError::NotFriends {
                user: username.to_string(),
                friend: friend.to_string(),
            });
        }

        self.user_mut(username)?.remove_friend(friend);
        self.user_mut(friend)?.remove_friend(username);
        tracing::debug!(username, friend, "friendship removed");
        Ok(())
    }

    /// Append a new post, timestamped by the network's clock. Returns the
    /// index of the new post in the user's post list.
    pub fn create_post(&mut self, username: &str, content: &str) -> Result<usize> {
        self.existing(username)?;
        let created_at = self.clock.now();
        let user = self.user_mut(username)?;
        user.add_post(Post::new(
            username.to_string(),
            content.to_string(),
            created_at,
        ));
        let index = user.post_count() - 1;
        tracing::debug!(username, index, "post created");
        Ok(index)
    }

    /// Add one like to the user's post at `index`. Returns the new like count.
    pub fn like_post(&mut self, username: &str, index: usize) -> Result<u64> {
        let post = self.post_mut(username, index)?;
        post.add_like();
        let likes = post.likes();
        tracing::debug!(username, index, likes, "post liked");
        Ok(likes)
    }

    /// Append a comment to the user's post at `index`.
    pub fn comment_on_post(&mut self, username: &str, index: usize, comment: &str) -> Result<()> {
        let post = self.post_mut(username, index)?;
        post.add_comment(comment.to_string());
        tracing::debug!(username, index, "comment added");
        Ok(())
    }

    /// Posts of the user's direct friends, newest first, truncated to the
    /// configured feed limit.
    pub fn build_feed(&self, username: &str) -> Result<Feed<'_>> {
        let mut feed = Feed::create_friend_feed(self, username)?;
        if let Some(limit) = self.config.feed_limit {
            feed.truncate(limit);
        }
        tracing::debug!(username, posts = feed.len(), "feed built");
        Ok(feed)
    }

    /// Friends-of-friends ranked by mutual friend count, truncated to the
    /// configured suggestion limit.
    pub fn suggest_friends(&self, username: &str) -> Result<Vec<FriendSuggestion>> {
        let mut suggestions = traversal::suggest_friends(self, username)?;
        if let Some(limit) = self.config.max_suggestions {
            suggestions.truncate(limit);
        }
        Ok(suggestions)
    }

    /// Shortest chain of friendships from `from` to `to`.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<FriendshipPath> {
        traversal::shortest_path(self, from, to, self.config.max_path_hops)
    }

    /// Hop count of the shortest friendship path.
    pub fn degrees_of_separation(&self, from: &str, to: &str) -> Result<u32> {
        self.shortest_path(from, to).map(|path| path.hops)
    }

    pub fn user(&self, username: &str) -> Option<&User<S>> {
        self.users.get(username)
    }

    pub fn post(&self, username: &str, index: usize) -> Option<&Post> {
        self.user(username)?.posts().get(index).ok()
    }

    pub fn contains_user(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn are_friends(&self, username: &str, friend: &str) -> bool {
        self.user(username).is_some_and(|user| user.is_friend(friend))
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// All registered usernames, sorted.
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn existing(&self, username: &str) -> Result<&User<S>> {
        self.users
            .get(username)
            .ok_or_else(|| SocialError::UnknownUser(username.to_string()))
    }

    fn user_mut(&mut self, username: &str) -> Result<&mut User<S>> {
        self.users
            .get_mut(username)
            .ok_or_else(|| SocialError::UnknownUser(username.to_string()))
    }

    fn post_mut(&mut self, username: &str, index: usize) -> Result<&mut Post> {
        let user = self.user_mut(username)?;
        let len = user.post_count();
        user.post_mut(index).ok_or_else(|| SocialError::InvalidIndex {
            username: username.to_string(),
            index,
            len,
        })
    }
}
