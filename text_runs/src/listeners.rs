// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

use crate::Block;

type Callback<S> = Box<dyn FnMut(&Block<S>)>;

/// Handle for a change listener registered with [`Block::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Change listeners of one block, in registration order.
///
/// Most blocks have at most a couple of observers (a document and a view), so they are kept
/// inline.
pub(crate) struct Listeners<S> {
    entries: SmallVec<[(ListenerId, Callback<S>); 2]>,
    next_id: u64,
}

impl<S> Default for Listeners<S> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
            next_id: 0,
        }
    }
}

impl<S> Listeners<S> {
    pub(crate) fn add(&mut self, callback: Callback<S>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Invokes every listener with `block`.
    pub(crate) fn notify(&mut self, block: &Block<S>) {
        for (_, callback) in &mut self.entries {
            callback(block);
        }
    }
}

impl<S> fmt::Debug for Listeners<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
