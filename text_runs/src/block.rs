// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::char_index;
use crate::listeners::{ListenerId, Listeners};
use crate::splice::{Edit, splice_runs};
use crate::{Run, ValidationError, validate_runs};

/// A block of text partitioned into styled [`Run`]s.
///
/// All offsets are character offsets (Unicode scalar values), not byte offsets. The run list
/// always covers the text exactly: the first run starts at `0`, every run starts where the previous
/// one ended, and the last run ends at [`char_len`](Self::char_len).
///
/// Text and runs only change together, through [`splice`](Self::splice). Each successful change
/// (including [`set_style`](Self::set_style)) is reported to the block's listeners once the new
/// state is in place.
///
/// A block is single-threaded: listeners are plain `FnMut` closures, so `Block` is not `Send`.
/// Run snapshots returned by [`runs`](Self::runs) share no state with the block beyond an `Arc`,
/// and can be sent elsewhere when `S: Send + Sync`.
///
/// ```compile_fail
/// fn assert_send<T: Send>() {}
/// assert_send::<text_runs::Block<u8>>();
/// ```
///
/// ## Example
///
/// ```
/// use text_runs::{Block, Run};
///
/// let mut block = Block::new(
///     "Hello, BIG",
///     [Run::new(0, 7, "body"), Run::new(7, 10, "shout")],
/// )
/// .unwrap();
///
/// block.splice(5, 0, "!!!").unwrap();
/// assert_eq!(block.text(), "Hello!!!, BIG");
///
/// let runs: Vec<_> = block.runs().map(|run| run.range()).collect();
/// assert_eq!(runs, [0..10, 10..13]);
/// ```
pub struct Block<S> {
    text: String,
    char_len: usize,
    runs: Arc<[Run<S>]>,
    style: Option<S>,
    listeners: Listeners<S>,
}

impl<S> Block<S> {
    /// Borrow the text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text, in characters.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    /// Returns the number of runs.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// The whole-block style, if one has been set.
    ///
    /// This is independent of the per-character run styles. It is also used to style text inserted
    /// into a block that has no runs.
    #[inline]
    pub fn style(&self) -> Option<&S> {
        self.style.as_ref()
    }

    /// Sets the whole-block style without notifying anyone.
    #[must_use]
    pub fn with_style(mut self, style: S) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the whole-block style and notifies listeners.
    pub fn set_style(&mut self, style: S) {
        self.style = Some(style);
        self.notify_changed();
    }

    /// Returns the style of the run covering the character at `offset`.
    ///
    /// Returns `None` when `offset` is at or past the end of the text.
    pub fn style_at(&self, offset: usize) -> Option<&S> {
        let index = self.runs.partition_point(|run| run.end() <= offset);
        self.runs
            .get(index)
            .filter(|run| run.start() <= offset)
            .map(Run::style)
    }

    /// Re-checks the run invariant against the current text.
    ///
    /// This always succeeds for a block built through [`Block::new`] and edited through
    /// [`Block::splice`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_runs(&self.runs, self.char_len)
    }

    /// Registers `listener` to be called after every committed change.
    ///
    /// Listeners are called in registration order and receive the block in its new state.
    /// They are not required to be `Send`, which keeps the block on the thread that owns it.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Self) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Unregisters a listener, returning `true` if it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn notify_changed(&mut self) {
        let mut listeners = core::mem::take(&mut self.listeners);
        listeners.notify(self);
        self.listeners = listeners;
    }
}

impl<S: Clone> Block<S> {
    /// Creates a block from `text` and the runs that partition it.
    ///
    /// Fails if `runs` does not cover `text` exactly; see [`validate_runs`].
    pub fn new(
        text: impl Into<String>,
        runs: impl IntoIterator<Item = Run<S>>,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        let char_len = char_index::char_count(&text);
        let runs: Arc<[Run<S>]> = runs.into_iter().collect();
        validate_runs(&runs, char_len)?;
        Ok(Self {
            text,
            char_len,
            runs,
            style: None,
            listeners: Listeners::default(),
        })
    }

    /// Returns an iterator over a snapshot of the runs.
    ///
    /// The snapshot is taken when this is called; later edits to the block do not affect it.
    /// Calling `runs` again starts over from the current state.
    #[inline]
    pub fn runs(&self) -> Runs<S> {
        Runs::new(Arc::clone(&self.runs))
    }

    /// Removes `remove` characters at `offset`, then inserts `insert` there.
    ///
    /// A negative `offset` counts back from the end of the text, so `-1` addresses the position
    /// before the last character. Runs are rewritten to follow the edit:
    ///
    /// - inserted text joins the run covering `offset`; on a run boundary that is the run ending
    ///   there, so typed text continues the preceding style;
    /// - runs whose characters are all removed disappear;
    /// - runs after the edit move by the net length change.
    ///
    /// The new text and runs are validated before anything is committed, and listeners are
    /// notified once afterwards, even for an edit that changes nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] and leaves the block unchanged if the rewritten runs do not
    /// cover the new text. That only happens when text is inserted into a block that has neither
    /// runs nor a [whole-block style](Self::style) to give it.
    ///
    /// # Panics
    ///
    /// Panics if the normalized `offset` lies outside the text, or if fewer than `remove`
    /// characters follow it.
    pub fn splice(
        &mut self,
        offset: isize,
        remove: usize,
        insert: &str,
    ) -> Result<(), ValidationError> {
        let len = self.char_len;
        let offset = if offset < 0 {
            let back = offset.unsigned_abs();
            assert!(
                back <= len,
                "splice offset {offset} reaches before the start of {len} characters"
            );
            len - back
        } else {
            let offset = offset.unsigned_abs();
            assert!(
                offset <= len,
                "splice offset {offset} is past the end of {len} characters"
            );
            offset
        };
        assert!(
            remove <= len - offset,
            "splice removes {remove} characters at {offset} but only {} follow",
            len - offset
        );

        let edit = Edit {
            offset,
            remove,
            insert_len: char_index::char_count(insert),
        };
        let new_len = len - remove + edit.insert_len;
        let runs = splice_runs(&self.runs, edit, self.style.as_ref());
        if let Err(err) = validate_runs(&runs, new_len) {
            log::debug!("rejected splice {edit:?} on {len} characters: {err}");
            return Err(err);
        }

        self.text = char_index::splice(&self.text, offset, remove, insert);
        self.char_len = new_len;
        self.runs = Arc::from(runs);
        log::trace!(
            "spliced {edit:?}: {} characters in {} runs",
            self.char_len,
            self.runs.len()
        );

        self.notify_changed();
        Ok(())
    }

    /// Returns all runs as a vector.
    pub fn to_runs_vec(&self) -> Vec<Run<S>> {
        self.runs.to_vec()
    }
}

impl<S: fmt::Debug> fmt::Debug for Block<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("text", &self.text)
            .field("char_len", &self.char_len)
            .field("runs", &self.runs)
            .field("style", &self.style)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl<S> fmt::Display for Block<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<S: Clone> IntoIterator for &Block<S> {
    type Item = Run<S>;
    type IntoIter = Runs<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs()
    }
}

/// Iterator over a snapshot of a [`Block`]'s runs.
///
/// Obtain this by calling [`Block::runs`] or by iterating `&Block`. A clone continues from the
/// same position over the same snapshot.
#[derive(Clone, Debug)]
pub struct Runs<S> {
    runs: Arc<[Run<S>]>,
    front: usize,
    back: usize,
}

impl<S> Runs<S> {
    fn new(runs: Arc<[Run<S>]>) -> Self {
        let back = runs.len();
        Self {
            runs,
            front: 0,
            back,
        }
    }
}

impl<S: Clone> Iterator for Runs<S> {
    type Item = Run<S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let run = self.runs[self.front].clone();
        self.front += 1;
        Some(run)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: Clone> DoubleEndedIterator for Runs<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.runs[self.back].clone())
    }
}

impl<S: Clone> ExactSizeIterator for Runs<S> {}

impl<S: Clone> FusedIterator for Runs<S> {}
