//! Sequence module: an index-addressable singly linked list.
//!
//! `Sequence` stores a user's posts and a post's comments. Order is
//! insertion order and duplicates are allowed. Access by index walks the
//! list, which is fine for the small per-user collections it holds.

use std::fmt;

use thiserror::Error;

/// Raised when an index falls outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range for sequence of length {len}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

pub struct Sequence<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Append an item at the end of the sequence.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.check(index)?;
        self.iter().nth(index).ok_or(IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        self.check(index)?;
        let len = self.len;
        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            cursor = cursor.and_then(|node| node.next.as_deref_mut());
        }
        cursor
            .map(|node| &mut node.value)
            .ok_or(IndexOutOfRange { index, len })
    }

    /// Remove the item at `index`, closing the gap. Later items shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        self.check(index)?;
        let len = self.len;
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return Err(IndexOutOfRange { index, len }),
            }
        }
        let removed = cursor.take().ok_or(IndexOutOfRange { index, len })?;
        let Node { value, next } = *removed;
        *cursor = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    fn check(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index >= self.len {
            return Err(IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Linear equality scan.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink nodes one at a time; the default recursive drop can overflow the
// stack on long lists.
impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Find the tail once instead of walking the list per item.
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            let node = cursor.insert(Box::new(Node { value, next: None }));
            cursor = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Sequence::new();
        sequence.extend(iter);
        sequence
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
