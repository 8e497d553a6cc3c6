//! # social-graph-lib-rs
//!
//! An in-memory social graph engine: users register, befriend each other,
//! post content, like and comment on posts, read a feed built from their
//! friends' posts, get mutual-friend suggestions and look up the shortest
//! chain of friendships between two people.
//!
//! ## Overview
//!
//! All state lives in a [`SocialNetwork`](network::SocialNetwork) value. There is no persistence,
//! no networking and no global state; construct as many independent networks as you need.
//! Each user's friends are kept in a [`FriendSet`](friend_set::FriendSet), backed by default
//! by a self-balancing [`AvlTree`](avl::AvlTree), or by a hash set when ordering lookups is not needed.
//!
//! ## Features
//!
//! - **Friendships**: symmetric friend edges, added and removed atomically on both sides
//! - **Posts**: per-user post lists with likes and comments
//! - **Feed Aggregation**: friends' posts merged into one chronologically sorted feed
//! - **Friend Suggestions**: friends-of-friends ranked by mutual friend count
//! - **Shortest Paths**: Dijkstra over the friendship graph, with the path itself
//! - **Injected Clock**: deterministic timestamps for tests via [`ManualClock`](util::ManualClock)
//!
//! ## Quick Start
//!
//! ```rust
//! use social_graph_lib_rs::network::SocialNetwork;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut network = SocialNetwork::new();
//!     network.register_user("alice", "likes graphs")?;
//!     network.register_user("bob", "likes trees")?;
//!     network.register_user("carol", "likes both")?;
//!
//!     network.add_friend("alice", "bob")?;
//!     network.add_friend("bob", "carol")?;
//!     network.create_post("bob", "hi")?;
//!
//!     let path = network.shortest_path("alice", "carol")?;
//!     assert_eq!(path.hops, 2);
//!
//!     for entry in network.build_feed("alice")?.iter() {
//!         println!("{}: {}", entry.author, entry.post.content());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod avl;
pub mod config;
pub mod error;
pub mod feed;
pub mod friend_set;
pub mod network;
pub mod post;
pub mod sequence;
pub mod traversal;
pub mod user;
pub mod util;

pub use error::{Result, SocialError};
