//! User module.
//!
//! This module contains the User struct: a registered identity with a bio,
//! the posts it owns and the set of its friends' usernames.

use crate::avl::AvlTree;
use crate::friend_set::FriendSet;
use crate::post::Post;
use crate::sequence::Sequence;

/// Represents a registered user of the network.
///
/// The username never changes after registration. Friendship is kept
/// symmetric by [`SocialNetwork`](crate::network::SocialNetwork); a lone
/// `User` only stores its side of each edge.
#[derive(Clone, Debug)]
pub struct User<S: FriendSet = AvlTree> {
    username: String,
    bio: String,
    posts: Sequence<Post>,
    friends: S,
}

impl<S: FriendSet> std::fmt::Display for User<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output = Vec::new();

        output.push(format!("Username: {}", self.username));

        if !self.bio.is_empty() {
            output.push(format!("Bio: {}", self.bio));
        }

        output.push(format!("Posts: {}", self.posts.len()));

        if !self.friends.is_empty() {
            output.push(format!(
                "Friends: {} {}",
                self.friends.len(),
                if self.friends.len() == 1 { "user" } else { "users" }
            ));
            for (i, friend) in self.friends.iter().enumerate() {
                output.push(format!("  {}. {}", i + 1, friend));
            }
        }

        write!(f, "{}", output.join("\n"))
    }
}

impl<S: FriendSet> User<S> {
    pub fn new(username: String, bio: String) -> Self {
        User {
            username,
            bio,
            posts: Sequence::new(),
            friends: S::default(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn set_bio(&mut self, bio: String) {
        self.bio = bio;
    }

    pub fn posts(&self) -> &Sequence<Post> {
        &self.posts
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn friends(&self) -> &S {
        &self.friends
    }

    /// Friend usernames in ascending order.
    pub fn friend_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.friends.iter()
    }

    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    pub fn is_friend(&self, username: &str) -> bool {
        self.friends.contains(username)
    }

    pub(crate) fn add_post(&mut self, post: Post) {
        self.posts.append(post);
    }

    pub(crate) fn post_mut(&mut self, index: usize) -> Option<&mut Post> {
        self.posts.get_mut(index).ok()
    }

    pub(crate) fn add_friend(&mut self, username: &str) -> bool {
        self.friends.insert(username)
    }

    pub(crate) fn remove_friend(&mut self, username: &str) -> bool {
        self.friends.remove(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friend_set::HashFriendSet;
    use crate::util::parse_timestamp;

    #[test]
    fn test_new_user_is_empty() {
        let user: User = User::new("alice".to_string(), "hello".to_string());
        assert_eq!(user.username(), "alice");
        assert_eq!(user.bio(), "hello");
        assert_eq!(user.post_count(), 0);
        assert_eq!(user.friend_count(), 0);
    }

    #[test]
    fn test_friend_bookkeeping() {
        let mut user: User<HashFriendSet> = User::new("alice".to_string(), String::new());
        assert!(user.add_friend("carol"));
        assert!(user.add_friend("bob"));
        assert!(!user.add_friend("bob"));
        assert!(user.is_friend("bob"));
        assert_eq!(user.friend_names().collect::<Vec<_>>(), vec!["bob", "carol"]);

        assert!(user.remove_friend("bob"));
        assert!(!user.is_friend("bob"));
    }

    #[test]
    fn test_display() {
        let mut user: User = User::new("alice".to_string(), "rustacean".to_string());
        user.add_friend("bob");
        let at = parse_timestamp("2025-05-01T12:00:00+01:00").unwrap();
        user.add_post(Post::new("alice".to_string(), "hi".to_string(), at));

        assert_eq!(
            user.to_string(),
            "Username: alice\nBio: rustacean\nPosts: 1\nFriends: 1 user\n  1. bob"
        );
    }
}
