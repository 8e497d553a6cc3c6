//! Post module.
//!
//! This module contains the Post struct: a piece of content owned by one
//! user, with a like counter and an append-only list of comments.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset};

use crate::sequence::Sequence;

/// Represents a post created by a user.
///
/// Content, author and creation time are fixed when the post is made.
/// Likes only ever go up and comments are only ever appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    author: String,
    content: String,
    created_at: DateTime<FixedOffset>,
    likes: u64,
    comments: Sequence<String>,
}

impl Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_for_display())
    }
}

impl Post {
    pub fn new(author: String, content: String, created_at: DateTime<FixedOffset>) -> Self {
        Post {
            author,
            content,
            created_at,
            likes: 0,
            comments: Sequence::new(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn comments(&self) -> &Sequence<String> {
        &self.comments
    }

    pub fn add_like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }

    pub fn add_comment(&mut self, comment: String) {
        self.comments.append(comment);
    }

    pub fn summary(&self, len: usize) -> String {
        let mut summary = self.content.clone();
        if summary.chars().count() > len {
            summary = summary.chars().take(len).collect();
            summary.push_str("...");
        }
        summary
    }

    /// Render the post the way the console shows it: a header line with the
    /// content, timestamp and like count, followed by the comments.
    pub fn format_for_display(&self) -> String {
        let mut output = format!(
            "{} [Posted at: {}] Likes: {}\nComments:",
            self.content,
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
            self.likes
        );

        if self.comments.is_empty() {
            output.push_str("\nNo comments yet.");
        } else {
            for comment in &self.comments {
                output.push_str(&format!("\n- {comment}"));
            }
        }

        output
    }
}
