//! Error types for social graph operations.
//!
//! Every engine operation validates before it mutates, so any of these
//! errors means the network was left untouched.

use thiserror::Error;

/// Errors reported by [`SocialNetwork`](crate::network::SocialNetwork) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialError {
    /// Referenced username is not registered.
    #[error("user {0} does not exist")]
    UnknownUser(String),

    /// Registration with a username that is already taken.
    #[error("user {0} already exists")]
    AlreadyExists(String),

    #[error("{user} and {friend} are already friends")]
    AlreadyFriends { user: String, friend: String },

    #[error("{user} and {friend} are not friends")]
    NotFriends { user: String, friend: String },

    /// A user tried to befriend themselves.
    #[error("user {0} cannot befriend themselves")]
    SelfFriendship(String),

    /// Post index outside `[0, len)` for the user's posts.
    #[error("invalid post index {index} for {username} ({len} posts)")]
    InvalidIndex {
        username: String,
        index: usize,
        len: usize,
    },

    /// The target is not reachable from the source over friendship edges.
    #[error("no path found between {from} and {to}")]
    NoPathFound { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, SocialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SocialError::UnknownUser("dave".to_string()).to_string(),
            "user dave does not exist"
        );
        assert_eq!(
            SocialError::InvalidIndex {
                username: "alice".to_string(),
                index: 3,
                len: 1
            }
            .to_string(),
            "invalid post index 3 for alice (1 posts)"
        );
        assert_eq!(
            SocialError::NoPathFound {
                from: "alice".to_string(),
                to: "erin".to_string()
            }
            .to_string(),
            "no path found between alice and erin"
        );
    }
}
