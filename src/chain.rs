//! Ordered sequences grown one element at a time by grammar actions.
//!
//! A chain is never empty: the first element creates it and an absent list is
//! represented by `Option::None`. Appending keeps encounter order and never
//! moves the elements already in place relative to each other.

use std::ops::Deref;

#[derive(Debug, PartialEq, Clone)]
pub struct Chain<T> {
    items: Vec<T>,
}

impl<T> Chain<T> {
    pub fn new(first: T) -> Self {
        Self { items: vec![first] }
    }

    /// Adds `item` after the current tail and hands the chain back.
    pub fn append(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    pub fn head(&self) -> &T {
        &self.items[0]
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

/// Appends to a chain that may not exist yet; an absent chain starts a new one.
pub fn append_to<T>(chain: Option<Chain<T>>, item: T) -> Chain<T> {
    match chain {
        Some(chain) => chain.append(item),
        None => Chain::new(item),
    }
}

impl<T> Deref for Chain<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<T> for Chain<T> {
    fn from(first: T) -> Self {
        Chain::new(first)
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
