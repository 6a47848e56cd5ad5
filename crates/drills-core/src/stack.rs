//! Last-in-first-out stack

use crate::{Error, Result};

/// LIFO container with top-only access
///
/// `pop` and `peek` on an empty stack return [`Error::EmptyStack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Put an item on top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStack` if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStack)
    }

    /// Borrow the top item without removing it.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyStack` if there is nothing to peek at.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyStack)
    }

    /// Number of items
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every item
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Items are pushed in iteration order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
