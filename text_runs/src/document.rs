// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::Block;

/// An ordered sequence of [`Block`]s.
///
/// The document only owns its blocks; each block keeps its own runs and listeners.
#[derive(Debug)]
pub struct Document<S> {
    blocks: Vec<Block<S>>,
}

impl<S> Default for Document<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Document<S> {
    /// Creates an empty document.
    #[inline]
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Appends a block to the document.
    #[inline]
    pub fn push(&mut self, block: Block<S>) {
        self.blocks.push(block);
    }

    /// Returns the block at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Block<S>> {
        self.blocks.get(index)
    }

    /// Returns the block at `index` for editing.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Block<S>> {
        self.blocks.get_mut(index)
    }

    /// Returns an iterator over blocks.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Block<S>> {
        self.blocks.iter()
    }

    /// Returns an iterator over blocks for editing.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Block<S>> {
        self.blocks.iter_mut()
    }

    /// Returns the number of blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if there are no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl<S> FromIterator<Block<S>> for Document<S> {
    fn from_iter<I: IntoIterator<Item = Block<S>>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a, S> IntoIterator for &'a Document<S> {
    type Item = &'a Block<S>;
    type IntoIter = core::slice::Iter<'a, Block<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
